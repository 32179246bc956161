//! Sensor collaborator interface and last-good-value sampling.
//!
//! The core never talks to sensor registers. A [`Sensors`] implementation
//! hands over typed readings; [`Sampler`] turns them into [`Sample`]s,
//! substituting the previous good value for any field whose read fails.
//! A sensor that is unreachable at startup puts the sampler offline: the
//! rest of the dashboard keeps running and shows placeholders.

use log::{error, warn};

use crate::error::SensorError;
use crate::sample::{Millis, Sample};

/// Typed access to the environmental sensors.
pub trait Sensors {
    /// Probe the sensors once at startup.
    fn init(&mut self) -> Result<(), SensorError> { Ok(()) }

    /// Temperature in °C.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;

    /// Relative humidity in %.
    fn read_humidity(&mut self) -> Result<f32, SensorError>;

    /// Light level in raw counts. Analog reads cannot fail.
    fn read_illuminance(&mut self) -> u16;
}

/// Builds samples from sensor reads with last-good-value fallback.
pub struct Sampler {
    last_temperature: Option<f32>,
    last_humidity: Option<f32>,
    offline: bool,
    fallbacks: u32,
}

impl Sampler {
    pub const fn new() -> Self {
        Self {
            last_temperature: None,
            last_humidity: None,
            offline: false,
            fallbacks: 0,
        }
    }

    /// Probe the sensors. On failure the sampler goes offline for good.
    pub fn start<S: Sensors>(
        &mut self,
        sensors: &mut S,
    ) -> Result<(), SensorError> {
        match sensors.init() {
            Ok(()) => {
                self.offline = false;
                Ok(())
            }
            Err(e) => {
                error!("sensor init failed: {e}; sampling disabled");
                self.offline = true;
                Err(e)
            }
        }
    }

    /// Read every field once.
    ///
    /// Returns `None` while offline, or until temperature and humidity have
    /// each produced at least one good value.
    pub fn sample<S: Sensors>(
        &mut self,
        sensors: &mut S,
        now: Millis,
    ) -> Option<Sample> {
        if self.offline {
            return None;
        }

        let temperature = Self::settle("temperature", sensors.read_temperature(), &mut self.last_temperature, &mut self.fallbacks);
        let humidity = Self::settle("humidity", sensors.read_humidity(), &mut self.last_humidity, &mut self.fallbacks);
        let illuminance = sensors.read_illuminance();

        Some(Sample {
            temperature: temperature?,
            humidity: humidity?,
            illuminance,
            timestamp: now,
        })
    }

    fn settle(
        name: &str,
        read: Result<f32, SensorError>,
        last: &mut Option<f32>,
        fallbacks: &mut u32,
    ) -> Option<f32> {
        let read = read.and_then(|v| if v.is_finite() { Ok(v) } else { Err(SensorError::InvalidReading) });
        match read {
            Ok(value) => {
                *last = Some(value);
                Some(value)
            }
            Err(e) => {
                *fallbacks = fallbacks.wrapping_add(1);
                warn!("{name} read failed: {e}; keeping last value {last:?}");
                *last
            }
        }
    }

    #[inline]
    pub const fn is_offline(&self) -> bool { self.offline }

    /// Number of reads replaced by a previous value.
    #[inline]
    pub const fn fallback_count(&self) -> u32 { self.fallbacks }
}

impl Default for Sampler {
    fn default() -> Self { Self::new() }
}
