//! Keyboard to waveform parameter mapping.
//!
//! The window layer translates platform key codes into [`Key`]; the
//! [`InputController`] turns each press into one bias step on
//! [`WaveParameters`].

use crate::wave::WaveParameters;

/// Logical keys the viewer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Any key without a binding.
    Other,
}

/// A single step applied to one bias counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveAction {
    IncreaseAmplitude,
    DecreaseAmplitude,
    DecreaseFrequency,
    IncreaseFrequency,
}

impl WaveAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IncreaseAmplitude => "increase-amplitude",
            Self::DecreaseAmplitude => "decrease-amplitude",
            Self::DecreaseFrequency => "decrease-frequency",
            Self::IncreaseFrequency => "increase-frequency",
        }
    }
}

/// Maps key presses to bias steps.
///
/// Every press counts, including auto-repeats delivered by the platform.
/// Counters are never clamped.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputController;

impl InputController {
    pub fn new() -> Self {
        Self
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: Key) -> Option<WaveAction> {
        match key {
            Key::Up => Some(WaveAction::IncreaseAmplitude),
            Key::Down => Some(WaveAction::DecreaseAmplitude),
            Key::Left => Some(WaveAction::DecreaseFrequency),
            Key::Right => Some(WaveAction::IncreaseFrequency),
            Key::Other => None,
        }
    }

    /// Apply the action bound to `key` to `params`.
    ///
    /// Returns the action taken, or `None` when the key is ignored.
    pub fn handle_key(&self, key: Key, params: &mut WaveParameters) -> Option<WaveAction> {
        let action = self.action_for(key)?;
        match action {
            WaveAction::IncreaseAmplitude | WaveAction::DecreaseAmplitude => {
                let delta = if action == WaveAction::IncreaseAmplitude { 1 } else { -1 };
                let bias = params.bump_amplitude(delta);
                log::info!("{}: amplitude bias {}", action.name(), bias);
            }
            WaveAction::DecreaseFrequency | WaveAction::IncreaseFrequency => {
                let delta = if action == WaveAction::IncreaseFrequency { 1 } else { -1 };
                let bias = params.bump_frequency(delta);
                log::info!("{}: frequency bias {}", action.name(), bias);
            }
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_up_left_sequence() {
        let controller = InputController::new();
        let mut params = WaveParameters::default();

        for key in [Key::Up, Key::Up, Key::Left] {
            controller.handle_key(key, &mut params);
        }

        assert_eq!(params.amplitude_bias, 2);
        assert_eq!(params.frequency_bias, -1);
    }

    #[test]
    fn test_each_arrow_maps_to_one_action() {
        let controller = InputController::new();
        let cases = [
            (Key::Up, WaveAction::IncreaseAmplitude, (1, 0)),
            (Key::Down, WaveAction::DecreaseAmplitude, (-1, 0)),
            (Key::Left, WaveAction::DecreaseFrequency, (0, -1)),
            (Key::Right, WaveAction::IncreaseFrequency, (0, 1)),
        ];

        for (key, expected, (amp, freq)) in cases {
            let mut params = WaveParameters::default();
            assert_eq!(controller.handle_key(key, &mut params), Some(expected));
            assert_eq!((params.amplitude_bias, params.frequency_bias), (amp, freq));
        }
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let controller = InputController::new();
        let mut params = WaveParameters::new(30, 30);

        assert_eq!(controller.handle_key(Key::Other, &mut params), None);
        assert_eq!(params, WaveParameters::new(30, 30));
    }

    #[test]
    fn test_counters_are_unbounded() {
        let controller = InputController::new();
        let mut params = WaveParameters::default();

        for _ in 0..1000 {
            controller.handle_key(Key::Down, &mut params);
            controller.handle_key(Key::Right, &mut params);
        }

        assert_eq!(params.amplitude_bias, -1000);
        assert_eq!(params.frequency_bias, 1000);
    }
}
