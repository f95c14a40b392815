//! Presentational view state
//!
//! Pure functions of (auth snapshot, configuration) producing the state
//! the shells render. No I/O, no session writes; logout and navigation
//! surface as values the host dispatches.

mod footer;
mod header;
mod landing;
mod sidebar;

pub use footer::{FooterView, SocialLink};
pub use header::{HeaderView, MenuAction, MenuEntry, UserMenu};
pub use landing::LandingView;
pub use sidebar::{sidebar_menu, MenuItem, MenuSection};
