//! # API Module
//!
//! Endpoints of the local redirect server.
//!
//! - [`callback`] receives the implicit grant redirect from Spotify and hands
//!   the result to the [`AuthSession`](crate::spotify::auth::AuthSession)
//!   waiting for it.
//! - [`health`] reports that the server is up, with the crate version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use shufflerion::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::authorization_result;
pub use callback::callback;
pub use health::health;
