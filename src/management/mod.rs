mod playback;

pub use playback::PlaybackManager;
