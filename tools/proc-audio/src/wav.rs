//! PCM conversion and WAV container encoding
//!
//! Output is always mono, 16-bit signed, 44.1 kHz. Samples are clamped to
//! [-1, 1] and quantized as `floor(sample * 32767)`.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::{AudioBuffer, AudioError, Result, SAMPLE_RATE};

/// Full-scale value for 16-bit quantization
const PCM_SCALE: f64 = i16::MAX as f64;

/// Container format written by this pipeline
pub fn wav_spec() -> WavSpec {
    WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    }
}

/// Convert f64 samples (-1.0 to 1.0) to PCM i16
///
/// Out-of-range samples are clamped first, so -1.0 maps to -32767 and the
/// most negative i16 value is never produced.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * PCM_SCALE).floor() as i16)
        .collect()
}

/// Convert PCM i16 samples back to f64
pub fn from_pcm_i16(samples: &[i16]) -> Vec<f64> {
    samples.iter().map(|&s| s as f64 / PCM_SCALE).collect()
}

/// Encode samples as a complete in-memory WAV file
pub fn encode_wav(samples: &[f64]) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = WavWriter::new(&mut cursor, wav_spec())?;
        for pcm in to_pcm_i16(samples) {
            writer.write_sample(pcm)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Encode samples and write them to `path`, creating parent directories
///
/// The file is fully encoded in memory before anything touches the disk.
pub fn write_wav(path: &Path, samples: &[f64]) -> Result<()> {
    let bytes = encode_wav(samples)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| AudioError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, &bytes).map_err(|source| AudioError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        "Wrote {} ({} samples, {} bytes)",
        path.display(),
        samples.len(),
        bytes.len()
    );
    Ok(())
}

/// Decode a mono 16-bit WAV file from memory
pub fn decode_wav(bytes: &[u8]) -> Result<AudioBuffer> {
    let reader = WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();

    if spec.channels != 1 || spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int
    {
        return Err(AudioError::UnsupportedFormat(format!(
            "{} channel(s), {}-bit {:?}",
            spec.channels, spec.bits_per_sample, spec.sample_format
        )));
    }

    let pcm = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(AudioBuffer::from_samples(spec.sample_rate, from_pcm_i16(&pcm)))
}

/// Read and decode a WAV file from disk
pub fn read_wav(path: &Path) -> Result<AudioBuffer> {
    let bytes = fs::read(path).map_err(|source| AudioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_wav(&bytes)
}
