use clap::Parser;
use log::{error, info, warn};

mod audio;
mod cli;
mod config;
mod error;
mod library;

use cli::Args;
use config::Settings;
use error::Error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    let name = args.audio_name()?;

    // Config is optional; failures should not prevent playback.
    let settings = Settings::load().unwrap_or_else(|err| {
        warn!("failed to load config, using defaults: {err}");
        Settings::default()
    });

    let root = settings.library.audios_root()?;
    let path = library::resolve(name, &root, &settings.library)?;

    info!("playing {}", path.display());
    audio::play_file(&path)
}
