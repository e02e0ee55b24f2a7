//! Mono 16-bit PCM WAV encoding.
//!
//! Writes the minimal 44-byte RIFF/WAVE header followed by little-endian
//! signed 16-bit samples, with no timestamps or variable metadata, so clip
//! bytes are fully determined by the input samples.

use std::io::{self, Write};

/// An encoded WAV clip.
#[derive(Debug, Clone)]
pub struct WavClip {
    /// Complete WAV file bytes (header + PCM data).
    pub data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only; doubles as the clip's content
    /// address in the clip store.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavClip {
    /// Encodes mono samples into a WAV clip.
    ///
    /// Samples are clamped to [-1, 1] and quantized to signed 16-bit PCM.
    pub fn from_samples(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = quantize_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        let mut data = Vec::with_capacity(44 + pcm.len());
        write_header(&mut data, sample_rate, pcm.len() as u32)
            .expect("writing to Vec should not fail");
        data.extend_from_slice(&pcm);

        Self {
            data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the clip duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}

/// Converts f64 samples in [-1.0, 1.0] to little-endian 16-bit PCM bytes.
/// Values outside the range are clipped.
fn quantize_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }

    pcm
}

/// Writes the 44-byte header for a mono 16-bit PCM file with `data_size`
/// bytes of sample data.
fn write_header<W: Write>(writer: &mut W, sample_rate: u32, data_size: u32) -> io::Result<()> {
    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_size).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // format tag (1 = PCM)
    writer.write_all(&1u16.to_le_bytes())?; // channels (mono)
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&(sample_rate * 2).to_le_bytes())?; // byte rate
    writer.write_all(&2u16.to_le_bytes())?; // block align
    writer.write_all(&16u16.to_le_bytes())?; // bits per sample

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;

    Ok(())
}
