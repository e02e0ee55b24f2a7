//! Harmonic tone rendering.
//!
//! One voice: a sine fundamental plus second and third harmonics at 0.3 and
//! 0.1 amplitude, shaped by an exponential decay envelope and scaled to stay
//! clear of clipping.

use crate::error::{AudioError, AudioResult};

/// Hard cap on rendered clip length.
pub const MAX_CLIP_SECONDS: f64 = 30.0;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Second-harmonic amplitude relative to the fundamental.
const HARMONIC2_GAIN: f64 = 0.3;
/// Third-harmonic amplitude relative to the fundamental.
const HARMONIC3_GAIN: f64 = 0.1;
/// Envelope decay rate in 1/seconds.
const DECAY_RATE: f64 = 0.5;
/// Master gain keeping the summed voice inside [-1, 1].
const MASTER_GAIN: f64 = 0.3;

/// Renders a mono tone at `frequency` Hz for `duration_seconds`.
///
/// # Arguments
/// * `frequency` - Fundamental frequency in Hz; must be finite and positive
/// * `duration_seconds` - Clip length; must be finite, positive, and at most
///   [`MAX_CLIP_SECONDS`]
/// * `sample_rate` - One of 22050, 44100, or 48000
///
/// # Returns
/// `ceil(duration_seconds * sample_rate)` samples in [-1, 1]
pub fn render_tone(
    frequency: f64,
    duration_seconds: f64,
    sample_rate: u32,
) -> AudioResult<Vec<f64>> {
    match sample_rate {
        22050 | 44100 | 48000 => {}
        other => return Err(AudioError::InvalidSampleRate { rate: other }),
    }
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(AudioError::InvalidFrequency { freq: frequency });
    }
    if !duration_seconds.is_finite()
        || duration_seconds <= 0.0
        || duration_seconds > MAX_CLIP_SECONDS
    {
        return Err(AudioError::InvalidDuration {
            duration: duration_seconds,
        });
    }

    let sample_rate = sample_rate as f64;
    let num_samples = (duration_seconds * sample_rate).ceil() as usize;
    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / sample_rate;
        let fundamental = (TWO_PI * frequency * t).sin();
        let harmonic2 = (TWO_PI * frequency * 2.0 * t).sin() * HARMONIC2_GAIN;
        let harmonic3 = (TWO_PI * frequency * 3.0 * t).sin() * HARMONIC3_GAIN;
        let envelope = (-DECAY_RATE * t).exp();

        samples.push((fundamental + harmonic2 + harmonic3) * envelope * MASTER_GAIN);
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_tone_sample_count() {
        let samples = render_tone(440.0, 1.0, 44100).unwrap();
        assert_eq!(samples.len(), 44100);

        let samples = render_tone(440.0, 0.5, 22050).unwrap();
        assert_eq!(samples.len(), 11025);
    }

    #[test]
    fn test_render_tone_stays_in_range() {
        let samples = render_tone(784.0, 2.0, 44100).unwrap();
        for &s in &samples {
            assert!((-1.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_render_tone_starts_at_zero() {
        let samples = render_tone(440.0, 0.1, 44100).unwrap();
        assert_eq!(samples[0], 0.0);
    }

    #[test]
    fn test_envelope_decays_amplitude() {
        let samples = render_tone(220.0, 4.0, 22050).unwrap();
        let peak = |range: std::ops::Range<usize>| {
            samples[range].iter().fold(0.0f64, |m, s| m.max(s.abs()))
        };

        let early = peak(0..22050);
        let late = peak(3 * 22050..4 * 22050);
        assert!(late < early * 0.5, "late peak {} vs early {}", late, early);
    }

    #[test]
    fn test_render_tone_is_deterministic() {
        let a = render_tone(523.0, 1.0, 44100).unwrap();
        let b = render_tone(523.0, 1.0, 44100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(matches!(
            render_tone(440.0, 1.0, 8000),
            Err(AudioError::InvalidSampleRate { rate: 8000 })
        ));
        assert!(matches!(
            render_tone(0.0, 1.0, 44100),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            render_tone(-261.0, 1.0, 44100),
            Err(AudioError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            render_tone(440.0, 0.0, 44100),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            render_tone(440.0, f64::NAN, 44100),
            Err(AudioError::InvalidDuration { .. })
        ));
        assert!(matches!(
            render_tone(440.0, 31.0, 44100),
            Err(AudioError::InvalidDuration { .. })
        ));
    }
}
