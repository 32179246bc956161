//! The dashboard context: owns every piece of state and wires the
//! collaborators together.
//!
//! # Time bases
//!
//! The host drives three entry points from one cooperative loop:
//!
//! - [`Dashboard::tick`] once per second: sample, output, weather
//!   bookkeeping, idle check, then redraw of the active screen.
//! - [`Dashboard::on_animation_tick`] every loop iteration: redraws the idle
//!   face when its frame cadence is due. No-op while active.
//! - [`Dashboard::on_button`] on each debounced press.
//!
//! Weather fetches never block: the host drains
//! [`Dashboard::next_fetch_request`], runs the requests however it likes,
//! and posts results back through [`Dashboard::apply_fetch`].
//!
//! All entry points are total. Collaborator failures become fallback
//! values, placeholders or footer notices.

use heapless::Vec;
use log::{debug, info, warn};

use crate::config::{Config, MAX_LOCATIONS};
use crate::error::{ConfigError, FetchError};
use crate::idle::IdleController;
use crate::navigation::{Button, NavigationController, NavigationState, Transition};
use crate::notice::{Notice, NoticeKind};
use crate::output::DigitalOutput;
use crate::render::RenderState;
use crate::sample::{Millis, SampleBuffer};
use crate::sampler::{Sampler, Sensors};
use crate::screens::{ScreenData, ScreenMode, Screens};
use crate::surface::Surface;
use crate::weather::{FetchOutcome, FetchRequest, FetchQueue, Location, WeatherCache};
use crate::widgets::{clear_footer, draw_notice};

/// Data side of the dashboard, kept apart from the renderers so screens can
/// borrow it immutably while drawing.
struct Model {
    config: Config,
    locations: Vec<Location, MAX_LOCATIONS>,
    samples: SampleBuffer,
    sampler: Sampler,
    weather: WeatherCache,
    fetches: FetchQueue,
    idle: IdleController,
    nav: NavigationController,
    notice: Option<Notice>,
    output_on: bool,
    last_reset: Millis,
}

impl Model {
    fn view(
        &self,
        now: Millis,
    ) -> ScreenData<'_> {
        let location = self.nav.location();
        ScreenData {
            samples: &self.samples,
            weather: &self.weather,
            locations: &self.locations,
            location,
            fetching: self.fetches.is_fetching(location),
            output_on: self.output_on,
            sensors_offline: self.sampler.is_offline(),
            blink_closed: self.idle.eyes_closed(now, &self.config.idle),
            now,
            config: &self.config,
        }
    }

    fn raise(
        &mut self,
        kind: NoticeKind,
        now: Millis,
    ) {
        self.notice = Some(Notice::new(kind, now));
    }

    /// Request weather for the selected location when it was never tried or
    /// the last attempt is older than the refresh interval.
    fn refresh_weather(
        &mut self,
        now: Millis,
    ) {
        let location = self.nav.location();
        let Some(target) = self.locations.get(location) else {
            return;
        };
        if self.fetches.is_fetching(location) {
            return;
        }
        let due = self
            .fetches
            .last_attempt(location)
            .is_none_or(|last| now.saturating_sub(last) >= self.config.weather.refresh_interval_ms);
        if due && self.fetches.request(location, target.provider_id, now).is_some() {
            debug!("weather requested for {}", target.name);
        }
    }
}

/// Environment dashboard.
pub struct Dashboard {
    model: Model,
    screens: Screens,
    render: RenderState,
}

impl Dashboard {
    /// Build a dashboard for `locations`. Rejects inconsistent configuration.
    pub fn new(
        config: Config,
        locations: &[Location],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut owned = Vec::new();
        owned
            .extend_from_slice(locations)
            .map_err(|_| ConfigError::TooManyLocations { max: MAX_LOCATIONS })?;

        Ok(Self {
            model: Model {
                weather: WeatherCache::new(owned.len())?,
                locations: owned,
                samples: SampleBuffer::new(),
                sampler: Sampler::new(),
                fetches: FetchQueue::new(),
                idle: IdleController::new(0),
                nav: NavigationController::new(config.home_mode),
                notice: None,
                output_on: false,
                last_reset: 0,
                config,
            },
            screens: Screens::new(),
            render: RenderState::new(),
        })
    }

    /// Probe the sensors and queue the first weather request.
    ///
    /// An unreachable sensor puts sampling offline and raises a notice; the
    /// dashboard keeps running with placeholders.
    pub fn start<S: Sensors>(
        &mut self,
        sensors: &mut S,
        now: Millis,
    ) {
        let model = &mut self.model;
        model.idle = IdleController::new(now);
        model.last_reset = now;
        if model.sampler.start(sensors).is_err() {
            model.raise(NoticeKind::SensorOffline, now);
        }
        model.refresh_weather(now);
        info!("dashboard started: {} location(s), home {:?}", model.locations.len(), model.nav.mode());
    }

    /// One data tick.
    pub fn tick<S, O, D>(
        &mut self,
        sensors: &mut S,
        output: &mut O,
        surface: &mut D,
        now: Millis,
    ) where
        S: Sensors,
        O: DigitalOutput,
        D: Surface,
    {
        if now.saturating_sub(self.model.last_reset) >= self.model.config.sample_reset_ms {
            info!("periodic sample reset");
            self.reset_samples(now);
        }

        let model = &mut self.model;
        if let Some(sample) = model.sampler.sample(sensors, now) {
            model.samples.record(sample);
            let on = model.config.output.evaluate(&sample);
            if on != model.output_on {
                info!("output {}", if on { "on" } else { "off" });
            }
            model.output_on = on;
            output.set(on);
        }

        for ticket in model.fetches.expire(now, model.config.weather.fetch_timeout_ms) {
            warn!("weather fetch for location {} cancelled: {}", ticket.location, FetchError::TimedOut);
            model.raise(NoticeKind::FetchTimedOut, now);
        }
        model.refresh_weather(now);

        if model.notice.is_some_and(|n| n.is_expired(now, model.config.notice_ms)) {
            model.notice = None;
        }

        if model.idle.is_idle() {
            return;
        }
        let timeout = model.config.idle.timeout_for(model.nav.mode());
        if model.idle.update(now, timeout) {
            info!("entering idle");
            self.screens.draw_face(true, surface, &self.model.view(now));
            return;
        }

        self.draw(surface, now);
    }

    /// Handle a debounced button press and redraw right away.
    ///
    /// A press that wakes the dashboard only wakes it: the resumed mode is
    /// redrawn in full and no navigation happens.
    pub fn on_button<D: Surface>(
        &mut self,
        button: Button,
        surface: &mut D,
        now: Millis,
    ) {
        let model = &mut self.model;
        if model.idle.wake(now) {
            info!("waking to {:?}", model.nav.mode());
            self.render.request_full();
            self.draw(surface, now);
            return;
        }

        match model.nav.handle(button, model.locations.len()) {
            Transition::Mode(mode) => {
                info!("mode {mode:?}");
                self.render.request_full();
            }
            Transition::Location(location) => {
                info!("location {}", model.locations.get(location).map_or("-", |l| l.name));
                model.refresh_weather(now);
            }
        }
        self.draw(surface, now);
    }

    /// Advance the idle face animation when a frame is due.
    pub fn on_animation_tick<D: Surface>(
        &mut self,
        surface: &mut D,
        now: Millis,
    ) {
        if self.model.idle.animation_due(now, self.model.config.idle.frame_ms) {
            self.screens.draw_face(false, surface, &self.model.view(now));
        }
    }

    /// Accept a completed fetch. Outcomes for cancelled or timed-out
    /// requests are dropped and `false` is returned.
    ///
    /// Success replaces the cache entry; failure leaves it untouched and
    /// raises a notice.
    pub fn apply_fetch(
        &mut self,
        outcome: FetchOutcome,
        now: Millis,
    ) -> bool {
        let model = &mut self.model;
        if !model.fetches.complete(&outcome) {
            debug!("dropping outcome for cancelled ticket {:?}", outcome.ticket);
            return false;
        }

        let location = outcome.ticket.location;
        match outcome.result {
            Ok(report) => {
                model.weather.store(location, &report, now);
                info!("weather for location {location}: {} {:.1}C", report.description, report.temperature);
            }
            Err(e) => {
                warn!("weather fetch for location {location} failed: {e}");
                let kind = if e == FetchError::TimedOut { NoticeKind::FetchTimedOut } else { NoticeKind::FetchFailed };
                model.raise(kind, now);
            }
        }
        true
    }

    /// Next weather request for the host's transport.
    pub fn next_fetch_request(&mut self) -> Option<FetchRequest> { self.model.fetches.next_request() }

    /// Clear the sample buffer and announce it.
    pub fn reset_samples(
        &mut self,
        now: Millis,
    ) {
        self.model.samples.reset();
        self.model.last_reset = now;
        self.model.raise(NoticeKind::StatsReset, now);
        self.screens.graph.invalidate();
        self.render.request_full();
    }

    fn draw<D: Surface>(
        &mut self,
        surface: &mut D,
        now: Millis,
    ) {
        let data = self.model.view(now);
        self.render.update_notice(self.model.notice);
        self.screens.draw(self.model.nav.mode(), self.render.needs_full(), surface, &data);

        if self.render.notice_dirty() {
            match self.model.notice {
                Some(notice) => draw_notice(surface, notice.kind.text()),
                None => clear_footer(surface),
            }
        }
        self.render.end_frame();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn mode(&self) -> ScreenMode { self.model.nav.mode() }

    #[inline]
    pub fn navigation(&self) -> NavigationState { self.model.nav.state() }

    #[inline]
    pub fn is_idle(&self) -> bool { self.model.idle.is_idle() }

    #[inline]
    pub fn samples(&self) -> &SampleBuffer { &self.model.samples }

    #[inline]
    pub fn weather(&self) -> &WeatherCache { &self.model.weather }

    #[inline]
    pub fn locations(&self) -> &[Location] { &self.model.locations }

    #[inline]
    pub fn notice(&self) -> Option<Notice> { self.model.notice }

    #[inline]
    pub fn output_on(&self) -> bool { self.model.output_on }

    #[inline]
    pub fn sensors_offline(&self) -> bool { self.model.sampler.is_offline() }

    #[inline]
    pub fn is_fetching(&self, location: usize) -> bool { self.model.fetches.is_fetching(location) }

    #[inline]
    pub fn config(&self) -> &Config { &self.model.config }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FOOTER, SCREEN};
    use crate::error::SensorError;
    use crate::sampler::tests::ScriptedSensors;
    use crate::surface::recording::RecordingSurface;
    use crate::weather::WeatherReport;

    const LOCATIONS: [Location; 6] = [
        Location::new("Lisbon", "lisbon"),
        Location::new("Oslo", "oslo"),
        Location::new("Tokyo", "tokyo"),
        Location::new("Lima", "lima"),
        Location::new("Cairo", "cairo"),
        Location::new("Perth", "perth"),
    ];

    #[derive(Default)]
    struct Relay {
        states: std::vec::Vec<bool>,
    }

    impl DigitalOutput for Relay {
        fn set(&mut self, on: bool) { self.states.push(on); }
    }

    struct Rig {
        dash: Dashboard,
        sensors: ScriptedSensors,
        relay: Relay,
        surface: RecordingSurface,
        now: Millis,
    }

    impl Rig {
        fn new() -> Self { Self::with(ScriptedSensors::steady(22.0, 50.0, 800)) }

        fn with(sensors: ScriptedSensors) -> Self { Self::configured(Config::DEFAULT, sensors) }

        fn configured(config: Config, mut sensors: ScriptedSensors) -> Self {
            let mut dash = Dashboard::new(config, &LOCATIONS).unwrap();
            dash.start(&mut sensors, 0);
            Self {
                dash,
                sensors,
                relay: Relay::default(),
                surface: RecordingSurface::new(),
                now: 0,
            }
        }

        fn tick(&mut self) {
            self.now += 1_000;
            self.surface.reset();
            self.dash.tick(&mut self.sensors, &mut self.relay, &mut self.surface, self.now);
        }

        fn press(&mut self, button: Button) {
            self.now += 100;
            self.surface.reset();
            self.dash.on_button(button, &mut self.surface, self.now);
        }

        fn goto(&mut self, mode: ScreenMode) {
            while self.dash.mode() != mode {
                self.press(Button::Next);
            }
        }

        /// Answer every queued fetch with `result`.
        fn answer(&mut self, result: Result<WeatherReport, FetchError>) {
            while let Some(req) = self.dash.next_fetch_request() {
                let outcome = FetchOutcome {
                    ticket: req.ticket,
                    result: result.clone(),
                };
                self.dash.apply_fetch(outcome, self.now);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = Config::DEFAULT.with_idle_timeout(0);
        assert!(Dashboard::new(config, &LOCATIONS).is_err());
    }

    #[test]
    fn test_rejects_too_many_locations() {
        let many = [Location::new("x", "x"); MAX_LOCATIONS + 1];
        assert!(matches!(
            Dashboard::new(Config::DEFAULT, &many),
            Err(ConfigError::TooManyLocations { .. })
        ));
    }

    #[test]
    fn test_first_tick_records_and_draws_full() {
        let mut rig = Rig::new();
        rig.tick();
        assert_eq!(rig.dash.samples().len(), 1);
        assert!(rig.surface.has_text("Live"));
        assert!(rig.surface.has_text("22.0C"));
        assert_eq!(rig.relay.states, vec![false]);
    }

    #[test]
    fn test_output_follows_rule() {
        let mut rig = Rig::with(ScriptedSensors::steady(22.0, 50.0, 100));
        rig.tick();
        assert!(rig.dash.output_on());
        assert_eq!(rig.relay.states, vec![true]);
    }

    #[test]
    fn test_idle_after_timeout_and_wake_redraws_full() {
        let mut rig = Rig::new();
        rig.goto(ScreenMode::Stats);
        let pressed_at = rig.now;

        while rig.now + 1_000 <= pressed_at + 60_000 {
            rig.tick();
            assert!(!rig.dash.is_idle(), "idle too early at {}", rig.now);
        }
        rig.now = pressed_at + 60_000;
        rig.surface.reset();
        rig.dash.tick(&mut rig.sensors, &mut rig.relay, &mut rig.surface, pressed_at + 60_001);
        assert!(rig.dash.is_idle());
        assert!(rig.surface.filled(SCREEN));

        rig.press(Button::Next);
        assert!(!rig.dash.is_idle());
        assert_eq!(rig.dash.mode(), ScreenMode::Stats, "wake press must not navigate");
        assert!(rig.surface.has_text("Stats"));
    }

    #[test]
    fn test_mode_timeout_override_idles_sooner() {
        let config = Config::DEFAULT.with_mode_timeout(ScreenMode::Graph, 5_000);
        let mut rig = Rig::configured(config, ScriptedSensors::steady(22.0, 50.0, 800));
        rig.goto(ScreenMode::Graph);

        for _ in 0..5 {
            rig.tick();
            assert!(!rig.dash.is_idle(), "idle too early at {}", rig.now);
        }
        rig.tick();
        assert!(rig.dash.is_idle());
    }

    #[test]
    fn test_default_timeout_applies_without_override() {
        let config = Config::DEFAULT.with_mode_timeout(ScreenMode::Graph, 5_000);
        let mut rig = Rig::configured(config, ScriptedSensors::steady(22.0, 50.0, 800));
        rig.press(Button::Home);

        for _ in 0..10 {
            rig.tick();
        }
        assert_eq!(rig.dash.mode(), ScreenMode::Normal);
        assert!(!rig.dash.is_idle());
    }

    #[test]
    fn test_idle_screen_ignores_data_ticks() {
        let mut rig = Rig::new();
        let timeout = rig.dash.config().idle.timeout_ms;
        rig.dash.tick(&mut rig.sensors, &mut rig.relay, &mut rig.surface, timeout + 1);
        assert!(rig.dash.is_idle());

        rig.surface.reset();
        rig.dash.tick(&mut rig.sensors, &mut rig.relay, &mut rig.surface, timeout + 1_001);
        assert!(rig.surface.is_empty());
        assert_eq!(rig.dash.samples().len(), 2);
    }

    #[test]
    fn test_animation_ticks_only_while_idle() {
        let mut rig = Rig::new();
        rig.dash.on_animation_tick(&mut rig.surface, 500);
        assert!(rig.surface.is_empty());

        rig.tick();
        let timeout = rig.dash.config().idle.timeout_ms;
        rig.dash.tick(&mut rig.sensors, &mut rig.relay, &mut rig.surface, timeout + 1);
        rig.surface.reset();

        // Eyes close near the end of the first blink interval.
        let blink_at = timeout + 1 + 3_900;
        rig.dash.on_animation_tick(&mut rig.surface, blink_at);
        assert!(!rig.surface.is_empty());
        rig.surface.reset();
        rig.dash.on_animation_tick(&mut rig.surface, blink_at + 50);
        assert!(rig.surface.is_empty());
    }

    #[test]
    fn test_weather_paging_and_fetch() {
        let mut rig = Rig::new();
        rig.answer(Ok(WeatherReport::new("clear sky", 21.0)));
        assert!(rig.dash.weather().get(0).valid);

        rig.goto(ScreenMode::Weather);
        assert!(rig.surface.has_text("Lisbon"));
        assert!(rig.surface.has_text("21.0C"));

        rig.press(Button::Next);
        assert_eq!(rig.dash.mode(), ScreenMode::Weather);
        assert_eq!(rig.dash.navigation().location, 1);
        assert!(rig.dash.is_fetching(1));
        assert!(rig.surface.has_text("Oslo"));
        assert!(rig.surface.has_text("fetching..."));

        rig.answer(Ok(WeatherReport::new("light rain and thunderstorms", 4.5)));
        rig.tick();
        assert!(rig.surface.has_text("4.5C"));
        assert!(rig.surface.has_text("light rain and thunderstorms"));
    }

    #[test]
    fn test_fetch_failure_keeps_entry_and_raises_notice() {
        let mut rig = Rig::new();
        rig.answer(Ok(WeatherReport::new("clear sky", 21.0)));
        let before = rig.dash.weather().get(0).clone();

        rig.now += rig.dash.config().weather.refresh_interval_ms;
        rig.tick();
        assert!(rig.dash.is_fetching(0));
        rig.answer(Err(FetchError::Network));

        assert_eq!(*rig.dash.weather().get(0), before);
        assert_eq!(rig.dash.notice().map(|n| n.kind), Some(NoticeKind::FetchFailed));
        rig.press(Button::Home);
        assert!(rig.surface.has_text("WEATHER FETCH FAILED"));
    }

    #[test]
    fn test_fetch_timeout_drops_late_outcome() {
        let mut rig = Rig::new();
        let req = rig.dash.next_fetch_request().unwrap();

        rig.now += rig.dash.config().weather.fetch_timeout_ms;
        rig.tick();
        assert_eq!(rig.dash.notice().map(|n| n.kind), Some(NoticeKind::FetchTimedOut));
        assert!(!rig.dash.is_fetching(0));

        let late = FetchOutcome {
            ticket: req.ticket,
            result: Ok(WeatherReport::new("clear sky", 20.0)),
        };
        assert!(!rig.dash.apply_fetch(late, rig.now));
        assert!(!rig.dash.weather().get(0).valid);
    }

    #[test]
    fn test_unreachable_sensor_keeps_ui_running() {
        let mut sensors = ScriptedSensors::steady(22.0, 50.0, 800);
        sensors.init = Err(SensorError::Unreachable);
        let mut rig = Rig::with(sensors);
        assert!(rig.dash.sensors_offline());

        rig.tick();
        assert!(rig.dash.samples().is_empty());
        assert!(rig.surface.has_text("--"));
        assert!(rig.surface.has_text("SENSOR OFFLINE"));
        assert!(rig.relay.states.is_empty());
    }

    #[test]
    fn test_notice_close_redraws_screen() {
        let mut rig = Rig::new();
        rig.tick();
        rig.dash.reset_samples(rig.now);
        rig.tick();
        assert!(rig.surface.has_text("STATS RESET"));

        rig.tick();
        rig.tick();
        assert!(rig.dash.notice().is_none());
        assert!(rig.surface.has_text("Live"));
        assert!(rig.surface.filled(FOOTER));
    }

    #[test]
    fn test_periodic_reset() {
        let mut rig = Rig::new();
        rig.answer(Ok(WeatherReport::new("clear sky", 18.0)));
        rig.tick();
        rig.tick();
        assert_eq!(rig.dash.samples().len(), 2);

        rig.now = rig.dash.config().sample_reset_ms - 1_000;
        rig.tick();
        assert_eq!(rig.dash.samples().len(), 1);
        assert_eq!(rig.dash.notice().map(|n| n.kind), Some(NoticeKind::StatsReset));
    }

    #[test]
    fn test_home_from_anywhere() {
        let mut rig = Rig::new();
        rig.goto(ScreenMode::Weather);
        rig.press(Button::Home);
        assert_eq!(rig.dash.mode(), ScreenMode::Normal);
        assert!(rig.surface.has_text("Live"));
    }
}
