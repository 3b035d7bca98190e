//! # CLI Module
//!
//! User facing commands of Shufflerion. Each command logs in first, since
//! tokens are never persisted between runs, and then drives the
//! [`PlaybackManager`](crate::management::PlaybackManager).
//!
//! - [`play`] - start a track on the first available device
//! - [`devices`] - list the devices Spotify can play on
//!
//! ```text
//! CLI Layer (login wait, spinners, tables)
//!     ↓
//! Management Layer (PlaybackManager)
//!     ↓
//! Spotify Layer (AuthSession, DeviceResolver, PlaybackIssuer)
//! ```
//!
//! Failures are reported with the message of the matching
//! [`PlaybackError`](crate::error::PlaybackError) and end the process.

mod auth;
mod devices;
mod play;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use auth::login;
pub use devices::devices;
pub use play::play;

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
