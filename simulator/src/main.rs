//! Environment Dashboard Simulator for desktop.
//!
//! Drives the no_std dashboard core with synthetic sensors, a threaded fake
//! weather provider and the embedded-graphics-simulator SDL window.
//!
//! Keys: Left = previous, H = home, Right = next, R = reset samples.
//!
//! Environment:
//! - `ENVDASH_IDLE_TIMEOUT_MS`: default idle timeout override
//! - `ENVDASH_SENSORS_UNPLUGGED`: start with the sensor probe failing

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

mod hardware;
mod timing;
mod weather_worker;

use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use envdash_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use envdash_common::{ButtonLevels, ButtonPanel, Config, Dashboard, Location};
use log::{error, warn};

use crate::hardware::{SimLed, SimSensors};
use crate::timing::{FRAME_TIME, TICK_INTERVAL, millis_since};
use crate::weather_worker::WeatherWorker;

const LOCATIONS: [Location; 6] = [
    Location::new("Lisbon", "lisbon,pt"),
    Location::new("Oslo", "oslo,no"),
    Location::new("Tokyo", "tokyo,jp"),
    Location::new("Nairobi", "nairobi,ke"),
    Location::new("Denver", "denver,us"),
    Location::new("Hobart", "hobart,au"),
];

fn config_from_env() -> Config {
    let config = Config::DEFAULT;
    match std::env::var("ENVDASH_IDLE_TIMEOUT_MS") {
        Ok(raw) => match raw.parse() {
            Ok(timeout_ms) => config.with_idle_timeout(timeout_ms),
            Err(e) => {
                warn!("ignoring ENVDASH_IDLE_TIMEOUT_MS={raw:?}: {e}");
                config
            }
        },
        Err(_) => config,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut dashboard = match Dashboard::new(config_from_env(), &LOCATIONS) {
        Ok(dashboard) => dashboard,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Environment Dashboard Sim", &output_settings);
    window.update(&display);

    let mut sensors = SimSensors::new(std::env::var_os("ENVDASH_SENSORS_UNPLUGGED").is_some());
    let mut led = SimLed::default();
    let worker = WeatherWorker::spawn();

    let start = Instant::now();
    let mut buttons = ButtonPanel::new();
    let mut levels = ButtonLevels::default();

    dashboard.start(&mut sensors, 0);
    dashboard.tick(&mut sensors, &mut led, &mut display, 0);
    let mut next_tick = TICK_INTERVAL;

    loop {
        let frame_start = Instant::now();
        let now = millis_since(start);

        // =====================================================================
        // Input
        // =====================================================================
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => match keycode {
                    Keycode::Left => levels.previous = true,
                    Keycode::H => levels.home = true,
                    Keycode::Right => levels.next = true,
                    Keycode::R if !repeat => dashboard.reset_samples(now),
                    _ => {}
                },
                SimulatorEvent::KeyUp { keycode, .. } => match keycode {
                    Keycode::Left => levels.previous = false,
                    Keycode::H => levels.home = false,
                    Keycode::Right => levels.next = false,
                    _ => {}
                },
                _ => {}
            }
        }

        if let Some(button) = buttons.poll(levels, now) {
            dashboard.on_button(button, &mut display, now);
        }

        // =====================================================================
        // Weather transport
        // =====================================================================
        for outcome in worker.completed() {
            dashboard.apply_fetch(outcome, now);
        }

        // =====================================================================
        // Data tick and idle animation
        // =====================================================================
        if now >= next_tick {
            dashboard.tick(&mut sensors, &mut led, &mut display, now);
            next_tick += TICK_INTERVAL;
        }
        while let Some(request) = dashboard.next_fetch_request() {
            worker.submit(request);
        }
        dashboard.on_animation_tick(&mut display, now);

        window.update(&display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
