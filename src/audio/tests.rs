use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use tempfile::tempdir;

use super::format::{Codec, detect};
use super::playback::play_file;
use crate::error::Error;

#[test]
fn detect_maps_known_extensions() {
    assert_eq!(detect(Path::new("song.mp3")), Some(Codec::Mpeg));
    assert_eq!(detect(Path::new("song.wav")), Some(Codec::Wave));
    assert_eq!(detect(Path::new("song.ogg")), None);
    assert_eq!(detect(Path::new("song")), None);
}

#[test]
fn detect_is_case_sensitive() {
    assert_eq!(detect(Path::new("song.MP3")), None);
    assert_eq!(detect(Path::new("song.Wav")), None);
}

#[test]
fn play_file_rejects_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clip.ogg");
    fs::write(&path, b"not audio").unwrap();

    assert!(matches!(play_file(&path), Err(Error::Unsupported(_))));
}

#[test]
fn play_file_reports_missing_file() {
    assert!(matches!(
        play_file(Path::new("/nonexistent/clip.wav")),
        Err(Error::Open { .. })
    ));
}

#[test]
fn play_file_reports_malformed_container() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    fs::write(&path, b"definitely not a wav").unwrap();

    assert!(matches!(play_file(&path), Err(Error::Decode { .. })));
}

#[test]
#[ignore = "requires an audio output device"]
fn plays_short_wav_to_completion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("beep.wav");
    write_sine_wav(&path, 44_100, 220.0, Duration::from_millis(200));

    let start = Instant::now();
    play_file(&path).unwrap();
    let elapsed = start.elapsed();

    // Blocking playback should take roughly the stream's duration.
    assert!(elapsed >= Duration::from_millis(150));
    assert!(elapsed < Duration::from_secs(5));
}

/// Minimal mono 16-bit PCM writer, enough for the playback test.
fn write_sine_wav(path: &Path, rate: u32, freq: f32, len: Duration) {
    let n_samples = (rate as f32 * len.as_secs_f32()) as u32;
    let mut data = Vec::with_capacity(n_samples as usize * 2);
    for i in 0..n_samples {
        let t = i as f32 / rate as f32;
        let sample = (t * freq * 2.0 * std::f32::consts::PI).sin();
        data.extend_from_slice(&((sample * i16::MAX as f32 * 0.5) as i16).to_le_bytes());
    }

    let mut wav = Vec::with_capacity(44 + data.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&1u16.to_le_bytes()); // mono
    wav.extend_from_slice(&rate.to_le_bytes());
    wav.extend_from_slice(&(rate * 2).to_le_bytes()); // byte rate
    wav.extend_from_slice(&2u16.to_le_bytes()); // block align
    wav.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data.len() as u32).to_le_bytes());
    wav.extend_from_slice(&data);

    fs::write(path, wav).unwrap();
}
