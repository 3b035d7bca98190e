//! Build script for Shufflerion.
//!
//! Places the `.env.example` template next to where `config::load_env` looks
//! for the real `.env`, and exports that location as
//! `SHUFFLERION_ENV_TEMPLATE` so a missing client id can point the user at it.

use std::{env, fs, path::PathBuf};

const TEMPLATE: &str = ".env.example";

/// Copies the configuration template into the local data directory.
///
/// The destination is `<data_local_dir>/shufflerion/.env.example`:
/// - Linux: `~/.local/share/shufflerion/.env.example`
/// - macOS: `~/Library/Application Support/shufflerion/.env.example`
/// - Windows: `%LOCALAPPDATA%/shufflerion/.env.example`
///
/// An unchanged template is not rewritten. A template missing from the crate
/// root only produces a cargo warning; the exported path is set either way.
///
/// # Errors
///
/// Fails the build if `CARGO_MANIFEST_DIR` is unset or the data directory
/// cannot be created or written.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed={}", TEMPLATE);

    let source = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(TEMPLATE);

    let mut data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.push("shufflerion");
    let target = data_dir.join(TEMPLATE);
    println!("cargo:rustc-env=SHUFFLERION_ENV_TEMPLATE={}", target.display());

    if !source.is_file() {
        println!("cargo:warning={} not found at {}", TEMPLATE, source.display());
        return Ok(());
    }

    let contents = fs::read_to_string(&source)?;
    if fs::read_to_string(&target).ok().as_deref() == Some(contents.as_str()) {
        return Ok(());
    }

    fs::create_dir_all(&data_dir)?;
    fs::write(&target, contents)?;
    Ok(())
}
