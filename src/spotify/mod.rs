//! # Spotify Integration Module
//!
//! Client side of the three Spotify interactions Shufflerion needs:
//!
//! - [`auth`] - implicit grant login. Holds the pending attempt and the
//!   resulting access token in an [`auth::AuthSession`].
//! - [`devices`] - `GET /v1/me/player/devices` and first device selection.
//! - [`player`] - `PUT /v1/me/player/play` for a single track on one device.
//!
//! ```text
//! Orchestration (management::PlaybackManager)
//!          ↓
//! Spotify Integration Layer
//!     ├── AuthSession      (token, login attempt)
//!     ├── DeviceResolver   (device listing)
//!     └── PlaybackIssuer   (play command)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! All network calls are `async` and resolve independently of each other.
//! None of them are retried, coalesced or cancelled here.

pub mod auth;
pub mod devices;
pub mod player;

use reqwest::{Client, Response, StatusCode};

use crate::{error::PlaybackError, types::ApiErrorResponse, utils};

/// Base URL plus a shared HTTP client.
///
/// Cheap to clone; the resolver and the issuer each hold one.
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    http: Client,
    base_url: String,
}

impl SpotifyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        SpotifyApi { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{base}{path}", base = self.base_url, path = path)
    }
}

/// Turns a connection level reqwest failure into a transport error.
pub(crate) fn transport_error(err: reqwest::Error) -> PlaybackError {
    PlaybackError::Transport(utils::describe_error(&err))
}

/// Message for a failed response: Spotify's own `error.message` when the body
/// has one, otherwise the status line.
pub(crate) async fn platform_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorResponse>().await {
        Ok(body) if !body.error.message.is_empty() => {
            format!("{} ({})", body.error.message, status.as_u16())
        }
        _ => status_line(status),
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
