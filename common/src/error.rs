//! Error taxonomy for the dashboard core.
//!
//! All variants carry only fixed-size data so errors can be copied into
//! notices and fetch outcomes without an allocator. None of these ever
//! escape a [`Dashboard`](crate::dashboard::Dashboard) entry point: sensor
//! errors fall back to the last good value, fetch errors leave the cache
//! untouched and raise a notice.

use thiserror_no_std::Error;

/// Failure reported by the sensor collaborator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// The sensor did not answer at startup. Fatal to the sensor subsystem only.
    #[error("sensor not responding")]
    Unreachable,

    /// The sensor answered with a value that is not a number.
    #[error("sensor returned an invalid reading")]
    InvalidReading,

    /// The bus transaction failed.
    #[error("sensor bus error")]
    Bus,
}

/// Failure reported by the weather collaborator, or raised by the fetch queue.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    /// Connection or transport failure.
    #[error("network request failed")]
    Network,

    /// The provider answered with a payload that could not be parsed.
    #[error("malformed weather payload")]
    Parse,

    /// No outcome arrived within the configured fetch timeout.
    #[error("weather request timed out")]
    TimedOut,
}

/// Rejected [`Config`](crate::config::Config) values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A band's low threshold is not below its high threshold.
    #[error("band thresholds out of order for {field}")]
    BandOrder { field: &'static str },

    /// A graph domain is empty or inverted.
    #[error("graph domain is empty for {field}")]
    GraphDomain { field: &'static str },

    /// A duration that must be positive is zero.
    #[error("{name} must be greater than zero")]
    ZeroDuration { name: &'static str },

    /// The blink window does not fit inside the blink interval.
    #[error("blink duration must be shorter than the blink interval")]
    BlinkWindow,

    /// More locations than the weather cache can hold.
    #[error("too many locations (max: {max})")]
    TooManyLocations { max: usize },
}
