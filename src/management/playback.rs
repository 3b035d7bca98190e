use tokio::task::JoinHandle;
use tracing::debug;

use crate::{
    error::{PlaybackError, PlaybackResult},
    spotify::{SpotifyApi, auth::AuthSession, devices::DeviceResolver, player::PlaybackIssuer},
    types::{AccessToken, Device},
};

/// Ties the session to the device and playback calls.
///
/// Neither Spotify endpoint is touched unless the session holds a token.
#[derive(Debug, Clone)]
pub struct PlaybackManager {
    session: AuthSession,
    resolver: DeviceResolver,
    issuer: PlaybackIssuer,
}

impl PlaybackManager {
    pub fn new(session: AuthSession, api: SpotifyApi) -> Self {
        PlaybackManager {
            session,
            resolver: DeviceResolver::new(api.clone()),
            issuer: PlaybackIssuer::new(api),
        }
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Plays `track_uri` on the first device Spotify reports and returns that device.
    ///
    /// Play is only attempted after a successful resolution.
    pub async fn play_on_first_device(&self, track_uri: &str) -> PlaybackResult<Device> {
        let token = self.token().await?;
        let device = self.resolver.resolve_first_device(&token).await?;
        self.issuer.play(&token, &device.id, track_uri).await?;

        debug!(device_id = %device.id, "Playback started");
        Ok(device)
    }

    pub async fn available_devices(&self) -> PlaybackResult<Vec<Device>> {
        let token = self.token().await?;
        self.resolver.list_devices(&token).await
    }

    /// Runs [`PlaybackManager::play_on_first_device`] in the background.
    ///
    /// Every call is an independent request; two quick triggers play twice.
    pub fn spawn_play(&self, track_uri: impl Into<String>) -> JoinHandle<PlaybackResult<Device>> {
        let manager = self.clone();
        let track_uri = track_uri.into();
        tokio::spawn(async move { manager.play_on_first_device(&track_uri).await })
    }

    async fn token(&self) -> PlaybackResult<AccessToken> {
        self.session
            .current_token()
            .await
            .ok_or(PlaybackError::AuthMissing)
    }
}
