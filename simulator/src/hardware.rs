//! Synthetic sensors and output for the simulator.
//!
//! Readings follow slow sine waves so every color band is visited within a
//! few minutes. Every 23rd temperature read and every 31st humidity read
//! fail, exercising the last-good-value path.

use envdash_common::{DigitalOutput, SensorError, Sensors};
use log::info;

/// Sine-driven sensors.
pub struct SimSensors {
    t: f32,
    reads: u32,
    /// Fail `init`, as if the sensor were not wired.
    unplugged: bool,
}

impl SimSensors {
    pub const fn new(unplugged: bool) -> Self {
        Self {
            t: 0.0,
            reads: 0,
            unplugged,
        }
    }
}

impl Sensors for SimSensors {
    fn init(&mut self) -> Result<(), SensorError> {
        if self.unplugged { Err(SensorError::Unreachable) } else { Ok(()) }
    }

    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        // One read of each field per tick; temperature comes first.
        self.t += 1.0;
        self.reads = self.reads.wrapping_add(1);
        if self.reads % 23 == 0 {
            return Ok(f32::NAN);
        }
        Ok(fake_signal(self.t, 14.0, 32.0, 0.02))
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        if self.reads % 31 == 0 {
            return Err(SensorError::Bus);
        }
        Ok(fake_signal(self.t, 20.0, 85.0, 0.013))
    }

    fn read_illuminance(&mut self) -> u16 { fake_signal(self.t, 50.0, 1900.0, 0.031) as u16 }
}

/// LED stand-in that logs its state changes.
#[derive(Default)]
pub struct SimLed {
    on: bool,
}

impl DigitalOutput for SimLed {
    fn set(&mut self, on: bool) {
        if on != self.on {
            info!("LED {}", if on { "ON" } else { "OFF" });
        }
        self.on = on;
    }
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
