use tabled::Table;

use crate::{
    cli, config::Config, error, info, management::PlaybackManager, spotify::SpotifyApi,
    types::DeviceTableRow,
};

pub async fn devices(config: &Config) {
    let session = cli::login(config).await;
    let manager = PlaybackManager::new(session, SpotifyApi::new(config.api_url.as_str()));

    let pb = super::spinner("Fetching available devices...");
    let devices = manager.available_devices().await;
    pb.finish_and_clear();

    match devices {
        Ok(devices) if devices.is_empty() => info!("No devices available for playback."),
        Ok(devices) => {
            let rows: Vec<DeviceTableRow> = devices.iter().map(DeviceTableRow::from).collect();
            println!("{}", Table::new(rows));
        }
        Err(e) => error!("Failed to fetch devices: {}", e),
    }
}
