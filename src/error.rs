//! Error types for login, device discovery and playback.

use thiserror::Error;

/// Failures of the device and playback operations.
///
/// Every variant carries a message specific enough to show to the user as is.
/// Nothing in this crate retries on any of them; re-login, re-resolving the
/// device or repeating the request is up to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// No access token yet. Nothing was sent.
    #[error("No access token available. Log in to Spotify first.")]
    AuthMissing,

    /// The platform rejected the access token.
    #[error("Spotify rejected the access token: {0}")]
    Auth(String),

    /// The device list came back empty.
    #[error("No devices available for playback. Open Spotify on a device and try again.")]
    NoDevice,

    /// The first device has no id, so no command can address it.
    #[error("Device {name} is restricted and cannot be controlled remotely.")]
    RestrictedDevice { name: String },

    /// The platform refused to start playback on this device.
    #[error("Device {device_id} rejected playback: {message}")]
    Device { device_id: String, message: String },

    /// Connectivity failure or an unexpected response.
    #[error("Request to Spotify failed: {0}")]
    Transport(String),
}

/// Result type for device and playback operations
pub type PlaybackResult<T> = Result<T, PlaybackError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
