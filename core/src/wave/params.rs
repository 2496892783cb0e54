//! Live waveform parameters.

use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;

/// Animation state read by the generator every frame.
///
/// Biases are changed only through [`crate::input::InputController`] and
/// saturate at the `i32` limits instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaveParameters {
    pub amplitude_bias: i32,
    pub frequency_bias: i32,
    pub phase: f32,
}

impl WaveParameters {
    pub fn new(amplitude_bias: i32, frequency_bias: i32) -> Self {
        Self {
            amplitude_bias,
            frequency_bias,
            phase: 0.0,
        }
    }

    /// Starting parameters for a viewer.
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.initial_amplitude_bias, config.initial_frequency_bias)
    }

    /// Amplitude in rows: base plus bias, no clamping.
    pub fn amplitude(&self, config: &ViewerConfig) -> f32 {
        config.base_amplitude + self.amplitude_bias as f32
    }

    /// Cycles across the buffer width: scale times bias, no clamping.
    pub fn frequency(&self, config: &ViewerConfig) -> f32 {
        config.frequency_scale * self.frequency_bias as f32
    }

    /// Advance the phase by one frame step.
    pub fn advance(&mut self, step: f32) {
        self.phase += step;
    }

    pub(crate) fn bump_amplitude(&mut self, delta: i32) -> i32 {
        self.amplitude_bias = self.amplitude_bias.saturating_add(delta);
        self.amplitude_bias
    }

    pub(crate) fn bump_frequency(&mut self, delta: i32) -> i32 {
        self.frequency_bias = self.frequency_bias.saturating_add(delta);
        self.frequency_bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_mapping_from_biases() {
        let config = ViewerConfig::default();
        let params = WaveParameters::from_config(&config);

        assert_eq!(params.amplitude(&config), 40.0);
        assert!((params.frequency(&config) - 3.0).abs() < 1e-6);

        let negative = WaveParameters::new(-25, -4);
        assert_eq!(negative.amplitude(&config), -15.0);
        assert!((negative.frequency(&config) + 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_phase_advances_monotonically() {
        let mut params = WaveParameters::default();
        let mut last = params.phase;
        for _ in 0..100 {
            params.advance(0.05);
            assert!(params.phase > last);
            last = params.phase;
        }
        assert!((params.phase - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_bias_saturates_at_limits() {
        let mut params = WaveParameters::new(i32::MAX, i32::MIN);
        assert_eq!(params.bump_amplitude(1), i32::MAX);
        assert_eq!(params.bump_frequency(-1), i32::MIN);
    }
}
