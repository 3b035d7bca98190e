//! Shufflerion Library
//!
//! Logs in to Spotify with the implicit OAuth grant, finds a device that can
//! play, and starts a track on it.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local redirect server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration from environment variables and `.env`
//! - `error` - Typed failures of login, device lookup and playback
//! - `management` - Orchestration of login state, device lookup and playback
//! - `server` - Local HTTP server receiving the OAuth redirect
//! - `spotify` - Spotify Web API client: session, devices, player
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use shufflerion::{management::PlaybackManager, spotify::{SpotifyApi, auth::AuthSession}};
//!
//! let session = AuthSession::new();
//! // ... session.begin_login(...) and wait for the redirect ...
//! let manager = PlaybackManager::new(session, SpotifyApi::new("https://api.spotify.com"));
//! let device = manager.play_on_first_device("spotify:track:2s99JIa7LENyy9vmtBCrwR").await?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for plumbing where the caller only reports the error: starting the
/// login, building URLs, loading configuration. Spotify calls return the
/// typed [`error::PlaybackError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Writes a line prefixed with a blue "o" to stdout. Used for neutral status
/// output of the command line layer, e.g. when Spotify reports no devices.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// info!("No devices available for playback.");
/// info!("Found {} devices", devices.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Writes a line prefixed with a green "✓" to stdout once login or playback
/// has gone through.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// success!("Logged in to Spotify.");
/// success!("Playing {} on {}", track_uri, device.name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Writes the message to stderr and terminates with exit code 1. The
/// expansion diverges, so it can stand in for a value in a `match` arm.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Behavior
///
/// Only the command line layer uses this. Everything below it returns a
/// [`error::PlaybackError`] or [`Res`] and lets the caller decide.
///
/// # Example
///
/// ```
/// let config = match Config::from_env() {
///     Ok(config) => config,
///     Err(e) => error!("Invalid configuration: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Writes a line prefixed with a yellow "!" to stdout for problems the user
/// can work around, such as a browser that could not be opened.
///
/// # Arguments
///
/// The macro accepts the same arguments as `println!`, supporting format
/// strings and interpolation.
///
/// # Example
///
/// ```
/// warning!(
///     "Failed to open browser. Please navigate to the following URL manually:\n{}",
///     url
/// );
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
