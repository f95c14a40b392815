//! Session state: the persisted credential store and its in-memory mirror
//!
//! The shipped applications kept a global auth subject synchronized with
//! browser storage. Here that becomes an owned [`SessionContext`] with a
//! single writer; consumers receive cheap read-only [`AuthState`]
//! snapshots instead of a live handle.

mod context;
mod store;

pub use context::{AuthState, SessionContext};
pub use store::{keys, CredentialStore, JsonFileStore, MemoryCredentialStore};
