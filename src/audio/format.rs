use std::path::Path;

/// Audio container formats supported by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Codec {
    /// MPEG audio layer (`.mp3`).
    Mpeg,
    /// Waveform audio (`.wav`).
    Wave,
}

/// Map a file's extension to its codec kind.
///
/// Pure path inspection; files are never sniffed for magic bytes. The match
/// is exact, so an uppercase extension is unsupported.
pub fn detect(path: &Path) -> Option<Codec> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("mp3") => Some(Codec::Mpeg),
        Some("wav") => Some(Codec::Wave),
        _ => None,
    }
}
