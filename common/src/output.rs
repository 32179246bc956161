//! Digital output (LED / fan) driven from the latest sample.

use crate::sample::Sample;

/// A boolean-settable output pin or relay.
pub trait DigitalOutput {
    fn set(&mut self, on: bool);
}

/// When the output is switched on.
///
/// The output is on when the room is dark (light at or below `dark_at`) or
/// hot (temperature at or above `hot_at`).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OutputRule {
    pub dark_at: u16,
    pub hot_at: f32,
}

impl OutputRule {
    pub const DEFAULT: Self = Self { dark_at: 200, hot_at: 30.0 };

    pub fn evaluate(&self, sample: &Sample) -> bool {
        sample.illuminance <= self.dark_at || sample.temperature >= self.hot_at
    }
}

impl Default for OutputRule {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature: f32, illuminance: u16) -> Sample {
        Sample { temperature, humidity: 50.0, illuminance, timestamp: 0 }
    }

    #[test]
    fn test_output_on_when_dark() {
        assert!(OutputRule::DEFAULT.evaluate(&sample(22.0, 150)));
        assert!(OutputRule::DEFAULT.evaluate(&sample(22.0, 200)));
    }

    #[test]
    fn test_output_on_when_hot() {
        assert!(OutputRule::DEFAULT.evaluate(&sample(30.0, 900)));
    }

    #[test]
    fn test_output_off_in_comfortable_bright_room() {
        assert!(!OutputRule::DEFAULT.evaluate(&sample(24.0, 900)));
    }
}
