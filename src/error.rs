//! Fatal error taxonomy for the player.
//!
//! Every variant terminates the process: errors propagate as typed results
//! up to `main`, which logs a single diagnostic line and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("specify an audio name")]
    MissingAudioName,

    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("failed to scan {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("no audio found named {0}")]
    NotFound(String),

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported audio file: {}", .0.display())]
    Unsupported(PathBuf),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("audio output unavailable: {0}")]
    Device(#[from] rodio::StreamError),

    #[error("playback ended before the stream finished")]
    Interrupted,
}
