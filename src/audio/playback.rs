//! Playback of a resolved audio file.
//!
//! The output device is opened at twice the source sample rate and the
//! decoded stream is resampled up to match. The calling thread blocks on a
//! one-shot channel that an end-of-stream marker resolves once the device
//! has consumed the last sample.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::mpsc;

use log::debug;
use rodio::source::{EmptyCallback, UniformSourceIterator};
use rodio::{Decoder, OutputStreamBuilder, Sink, Source, cpal};

use crate::error::Error;

use super::format::{Codec, detect};

/// The output device runs at this multiple of the source sample rate.
const OUTPUT_RATE_FACTOR: u32 = 2;

fn open_decoder(path: &Path) -> Result<Decoder<BufReader<File>>, Error> {
    let codec = detect(path).ok_or_else(|| Error::Unsupported(path.to_path_buf()))?;

    let file = File::open(path).map_err(|e| Error::Open {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    match codec {
        Codec::Mpeg => Decoder::new_mp3(reader),
        Codec::Wave => Decoder::new_wav(reader),
    }
    .map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Decode `path` and play it to completion on the default output device.
///
/// Blocks until the device has consumed the whole stream.
pub fn play_file(path: &Path) -> Result<(), Error> {
    let source = open_decoder(path)?;
    let channels = source.channels();
    let source_rate = source.sample_rate();

    let out_rate = source_rate * OUTPUT_RATE_FACTOR;
    // A tenth of a second of buffered audio at the output rate.
    let buffer_frames = out_rate / 10;

    let mut stream = OutputStreamBuilder::from_default_device()?
        .with_sample_rate(out_rate)
        .with_buffer_size(cpal::BufferSize::Fixed(buffer_frames))
        .open_stream()?;
    // rodio logs to stderr when OutputStream is dropped. That's useful in
    // debugging, but noisy for a one-shot CLI.
    stream.log_on_drop(false);

    debug!("output stream at {out_rate} Hz for {channels} channel(s)");

    let resampled = UniformSourceIterator::new(source, channels, out_rate);

    let (done_tx, done_rx) = mpsc::channel::<()>();
    let sink = Sink::connect_new(stream.mixer());
    sink.append(resampled);
    // End-of-stream marker; fires exactly once, after the last sample.
    sink.append(EmptyCallback::new(Box::new(move || {
        let _ = done_tx.send(());
    })));

    done_rx.recv().map_err(|_| Error::Interrupted)
}
