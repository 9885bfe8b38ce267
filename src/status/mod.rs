// src/status/mod.rs

//! Commit-status reporting.
//!
//! - [`model`] holds the `StatusState` / `StatusUpdate` payload types.
//! - [`auth`] builds the HTTP Basic `Authorization` header.
//! - [`transport`] abstracts the "send request, receive status + body"
//!   capability, with a `reqwest` implementation for production.
//! - [`reporter`] ties them together: one update in, one POST out, and a
//!   classified result.

pub mod auth;
pub mod model;
pub mod reporter;
pub mod transport;

pub use auth::Credentials;
pub use model::{StatusState, StatusUpdate};
pub use reporter::{StatusReporter, status_url};
pub use transport::{HttpTransport, SinkRequest, SinkResponse, StatusTransport};
