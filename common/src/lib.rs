//! Presentation and state core for a small environment dashboard.
//!
//! A microcontroller with a 320x240 display, temperature/humidity/light
//! sensors, three buttons and an optional network link. This crate holds
//! everything that is not hardware: sampling policy, the weather cache and
//! fetch contract, screen renderers with differential redraw, idle
//! detection and navigation.
//!
//! - [`dashboard`]: the owned context the host drives
//! - [`sample`], [`sampler`]: ring buffer of readings and sensor fallback
//! - [`weather`]: per-location cache, condition classification, fetch queue
//! - [`screens`], [`widgets`], [`surface`]: rendering
//! - [`idle`], [`navigation`], [`button`]: interaction state machines
//! - [`notice`], [`render`]: footer advisories and redraw bookkeeping
//! - [`config`], [`thresholds`], [`colors`], [`styles`]: constants and tunables
//! - [`error`]: error taxonomy
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` and allocation-free outside tests. Time is passed
//! in as [`Millis`](sample::Millis); nothing here reads a clock.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod button;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod idle;
pub mod navigation;
pub mod notice;
pub mod output;
pub mod render;
pub mod sample;
pub mod sampler;
pub mod screens;
pub mod styles;
pub mod surface;
pub mod thresholds;
pub mod weather;
pub mod widgets;

// Re-export commonly used items
pub use button::{ButtonLevels, ButtonPanel};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{ConfigError, FetchError, SensorError};
pub use navigation::Button;
pub use output::DigitalOutput;
pub use sample::{Millis, Sample};
pub use sampler::Sensors;
pub use screens::ScreenMode;
pub use surface::Surface;
pub use weather::{FetchOutcome, FetchRequest, Location, WeatherReport};
