use crate::{
    cli, config::Config, error, management::PlaybackManager, spotify::SpotifyApi, success,
};

pub async fn play(config: &Config, track_uri: Option<String>) {
    let track_uri = track_uri.unwrap_or_else(|| config.track_uri.clone());

    let session = cli::login(config).await;
    let manager = PlaybackManager::new(session, SpotifyApi::new(config.api_url.as_str()));

    let pb = super::spinner("Starting playback...");
    let outcome = manager.spawn_play(track_uri.clone()).await;
    pb.finish_and_clear();

    match outcome {
        Ok(Ok(device)) => success!(
            "Playing {} on {} ({})",
            track_uri,
            device.name,
            device.id
        ),
        Ok(Err(e)) => error!("{}", e),
        Err(e) => error!("Playback task failed: {}", e),
    }
}
