use reqwest::StatusCode;
use tracing::debug;

use crate::{
    error::{PlaybackError, PlaybackResult},
    spotify::{SpotifyApi, platform_message, transport_error},
    types::{AccessToken, PlaybackCommand, StartPlaybackRequest},
};

const PLAY_PATH: &str = "/v1/me/player/play";

/// Starts playback of a single track on a given device.
#[derive(Debug, Clone)]
pub struct PlaybackIssuer {
    api: SpotifyApi,
}

impl PlaybackIssuer {
    pub fn new(api: SpotifyApi) -> Self {
        PlaybackIssuer { api }
    }

    /// Sends exactly one play request and returns the command Spotify accepted.
    ///
    /// Any 2xx status counts as success; the response body is not read.
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::Auth`] on 401
    /// - [`PlaybackError::Device`] on 403 or 404, e.g. the device went
    ///   offline after it was resolved
    /// - [`PlaybackError::Transport`] for other statuses and connection failures
    pub async fn play(
        &self,
        token: &AccessToken,
        device_id: &str,
        track_uri: &str,
    ) -> PlaybackResult<PlaybackCommand> {
        let command = PlaybackCommand {
            track_uri: track_uri.to_string(),
            device_id: device_id.to_string(),
        };
        let body = StartPlaybackRequest {
            uris: vec![command.track_uri.clone()],
        };

        debug!(device_id = %device_id, track_uri = %track_uri, "Sending play command");
        let response = self
            .api
            .http()
            .put(self.api.endpoint(PLAY_PATH))
            .query(&[("device_id", device_id)])
            .bearer_auth(token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(command);
        }

        let message = platform_message(response).await;
        Err(match status {
            StatusCode::UNAUTHORIZED => PlaybackError::Auth(message),
            StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => PlaybackError::Device {
                device_id: command.device_id,
                message,
            },
            _ => PlaybackError::Transport(message),
        })
    }
}
