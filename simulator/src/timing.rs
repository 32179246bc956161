//! Timing constants for the simulator.
//!
//! These use `std::time` which the no_std core never touches; the core only
//! sees [`Millis`] derived from a monotonic start instant.

use std::time::{Duration, Instant};

use envdash_common::Millis;
use envdash_common::config::TICK_MS;

/// Target frame time (~50 FPS). The main loop sleeps if the frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Period of the 1 Hz data tick.
pub const TICK_INTERVAL: Millis = TICK_MS;

/// Milliseconds elapsed since `start`.
pub fn millis_since(start: Instant) -> Millis { Millis::try_from(start.elapsed().as_millis()).unwrap_or(Millis::MAX) }
