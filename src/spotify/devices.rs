use reqwest::StatusCode;
use tracing::debug;

use crate::{
    error::{PlaybackError, PlaybackResult},
    spotify::{SpotifyApi, platform_message, transport_error},
    types::{AccessToken, Device, DevicesResponse},
    utils,
};

const DEVICES_PATH: &str = "/v1/me/player/devices";

/// Looks up the devices Spotify can currently play on.
#[derive(Debug, Clone)]
pub struct DeviceResolver {
    api: SpotifyApi,
}

impl DeviceResolver {
    pub fn new(api: SpotifyApi) -> Self {
        DeviceResolver { api }
    }

    /// Returns the first device in the order Spotify lists them.
    ///
    /// No ranking is applied; in particular the `is_active` flag is ignored.
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::NoDevice`] if the list is empty, `null` or missing
    /// - [`PlaybackError::RestrictedDevice`] if the first device has a `null` id
    /// - [`PlaybackError::Auth`] if Spotify answers 401
    /// - [`PlaybackError::Transport`] for any other failure status, an
    ///   undecodable body, or a connection failure
    pub async fn resolve_first_device(&self, token: &AccessToken) -> PlaybackResult<Device> {
        let device = self
            .list_devices(token)
            .await?
            .into_iter()
            .next()
            .ok_or(PlaybackError::NoDevice)?;

        if device.is_restricted() {
            return Err(PlaybackError::RestrictedDevice { name: device.name });
        }

        debug!(device_id = %device.id, device_name = %device.name, "Resolved playback device");
        Ok(device)
    }

    /// Fetches the full device list. Nothing is cached.
    pub async fn list_devices(&self, token: &AccessToken) -> PlaybackResult<Vec<Device>> {
        let url = self.api.endpoint(DEVICES_PATH);
        debug!(url = %url, "Fetching available devices");

        let response = self
            .api
            .http()
            .get(&url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = platform_message(response).await;
            return Err(match status {
                StatusCode::UNAUTHORIZED => PlaybackError::Auth(message),
                _ => PlaybackError::Transport(message),
            });
        }

        let body = response.json::<DevicesResponse>().await.map_err(|e| {
            PlaybackError::Transport(format!(
                "failed to read device list: {}",
                utils::describe_error(&e)
            ))
        })?;

        Ok(body.devices.unwrap_or_default())
    }
}
