//! Format detection and playback through the default output device.

mod format;
mod playback;

pub use format::{Codec, detect};
pub use playback::play_file;

#[cfg(test)]
mod tests;
