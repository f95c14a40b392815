//! The authenticated request pipeline

mod classify;
mod client;

pub use classify::{classify_response, classify_transport, is_auth_exempt};
pub use client::HttpApi;
