//! Wire-level types shared by every endpoint wrapper

mod envelope;
mod pagination;

pub use envelope::{unwrap_envelope, ApiEnvelope, ErrorBody};
pub use pagination::{PaginationInfo, PaginationQuery};
