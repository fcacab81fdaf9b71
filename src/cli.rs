use clap::Parser;

use crate::error::Error;

/// Play a named audio clip from the soundboard directory.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The name of the audio to play, without extension.
    #[arg(short, long)]
    pub audio: Option<String>,
}

impl Args {
    /// The requested audio name.
    ///
    /// An omitted flag and an empty value are rejected alike, before any
    /// filesystem access happens.
    pub fn audio_name(&self) -> Result<&str, Error> {
        match self.audio.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(Error::MissingAudioName),
        }
    }
}
