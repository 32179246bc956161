//! Screen modes and their renderers.
//!
//! Every renderer implements [`Screen`]: `draw_full` repaints everything the
//! mode owns and snapshots what it painted, `draw_incremental` repaints only
//! what changed since that snapshot. Renderers get read-only access to the
//! dashboard's data through [`ScreenData`] and write access to nothing but
//! their own displayed-state snapshot.
//!
//! # Layout
//!
//! ```text
//! +--------------------------------------+
//! | HEADER  title                  page  |  26px
//! +--------------------------------------+
//! |                                      |
//! | BODY    owned by the active screen   |  194px
//! |                                      |
//! +--------------------------------------+
//! | FOOTER  notices                      |  20px
//! +--------------------------------------+
//! ```
//!
//! The idle face is the exception: it owns the whole screen.

mod device;
mod face;
mod graph;
mod normal;
mod stats;
mod weather;

pub use device::DeviceScreen;
pub use face::{Brows, FaceScreen, Mouth};
pub use graph::GraphScreen;
pub use normal::NormalScreen;
pub use stats::StatsScreen;
pub use weather::WeatherScreen;

use crate::config::Config;
use crate::sample::{Millis, Sample, SampleBuffer};
use crate::surface::Surface;
use crate::weather::{CacheEntry, Location, WeatherCache};

// =============================================================================
// Modes
// =============================================================================

/// Navigable data screens, in button order.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ScreenMode {
    #[default]
    Normal,
    Graph,
    Stats,
    Weather,
    Device,
}

impl ScreenMode {
    pub const COUNT: usize = 5;

    pub const ALL: [Self; Self::COUNT] = [Self::Normal, Self::Graph, Self::Stats, Self::Weather, Self::Device];

    pub const fn index(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Graph => 1,
            Self::Stats => 2,
            Self::Weather => 3,
            Self::Device => 4,
        }
    }

    /// Next mode, wrapping from the last back to the first.
    pub const fn next(self) -> Self { Self::ALL[(self.index() + 1) % Self::COUNT] }

    /// Previous mode, wrapping from the first to the last.
    pub const fn prev(self) -> Self { Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT] }

    /// Header title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Normal => "Live",
            Self::Graph => "Graph",
            Self::Stats => "Stats",
            Self::Weather => "Weather",
            Self::Device => "Device",
        }
    }
}

// =============================================================================
// Renderer Contract
// =============================================================================

/// Read-only view of everything a renderer may show.
pub struct ScreenData<'a> {
    pub samples: &'a SampleBuffer,
    pub weather: &'a WeatherCache,
    pub locations: &'a [Location],
    /// Selected location index.
    pub location: usize,
    /// A fetch for the selected location is outstanding.
    pub fetching: bool,
    pub output_on: bool,
    pub sensors_offline: bool,
    /// Idle face eyelids are inside a blink window.
    pub blink_closed: bool,
    pub now: Millis,
    pub config: &'a Config,
}

impl ScreenData<'_> {
    #[inline]
    pub fn latest(&self) -> Option<&Sample> { self.samples.latest() }

    /// Cache entry for the selected location.
    #[inline]
    pub fn entry(&self) -> &CacheEntry { self.weather.get(self.location) }

    #[inline]
    pub fn location_name(&self) -> &'static str { self.locations.get(self.location).map_or("-", |l| l.name) }
}

/// A renderer with full and differential redraw.
pub trait Screen {
    /// Repaint the whole region this screen owns and snapshot what was drawn.
    fn draw_full<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    );

    /// Repaint only regions whose backing value changed since the last snapshot.
    ///
    /// Issues no drawing at all when nothing changed.
    fn draw_incremental<S: Surface>(
        &mut self,
        surface: &mut S,
        data: &ScreenData<'_>,
    );
}

/// One renderer per mode plus the idle face.
#[derive(Default)]
pub struct Screens {
    pub normal: NormalScreen,
    pub graph: GraphScreen,
    pub stats: StatsScreen,
    pub weather: WeatherScreen,
    pub device: DeviceScreen,
    pub face: FaceScreen,
}

impl Screens {
    pub fn new() -> Self { Self::default() }

    /// Draw `mode`, fully or incrementally.
    pub fn draw<S: Surface>(
        &mut self,
        mode: ScreenMode,
        full: bool,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        match mode {
            ScreenMode::Normal => render(&mut self.normal, full, surface, data),
            ScreenMode::Graph => render(&mut self.graph, full, surface, data),
            ScreenMode::Stats => render(&mut self.stats, full, surface, data),
            ScreenMode::Weather => render(&mut self.weather, full, surface, data),
            ScreenMode::Device => render(&mut self.device, full, surface, data),
        }
    }

    pub fn draw_face<S: Surface>(
        &mut self,
        full: bool,
        surface: &mut S,
        data: &ScreenData<'_>,
    ) {
        render(&mut self.face, full, surface, data);
    }
}

fn render<R: Screen, S: Surface>(
    screen: &mut R,
    full: bool,
    surface: &mut S,
    data: &ScreenData<'_>,
) {
    if full {
        screen.draw_full(surface, data);
    } else {
        screen.draw_incremental(surface, data);
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod fixture {
    use super::*;

    /// Owned backing data for a [`ScreenData`] in renderer tests.
    pub(crate) struct Fixture {
        pub samples: SampleBuffer,
        pub weather: WeatherCache,
        pub locations: [Location; 3],
        pub location: usize,
        pub fetching: bool,
        pub output_on: bool,
        pub blink_closed: bool,
        pub now: Millis,
        pub config: Config,
    }

    impl Fixture {
        pub(crate) fn new() -> Self {
            Self {
                samples: SampleBuffer::new(),
                weather: WeatherCache::new(3).unwrap(),
                locations: [
                    Location::new("Lisbon", "lisbon"),
                    Location::new("Oslo", "oslo"),
                    Location::new("Tokyo", "tokyo"),
                ],
                location: 0,
                fetching: false,
                output_on: false,
                blink_closed: false,
                now: 0,
                config: Config::DEFAULT,
            }
        }

        pub(crate) fn record(&mut self, temperature: f32, humidity: f32, illuminance: u16) {
            self.now += 1_000;
            self.samples.record(Sample {
                temperature,
                humidity,
                illuminance,
                timestamp: self.now,
            });
        }

        pub(crate) fn data(&self) -> ScreenData<'_> {
            ScreenData {
                samples: &self.samples,
                weather: &self.weather,
                locations: &self.locations,
                location: self.location,
                fetching: self.fetching,
                output_on: self.output_on,
                sensors_offline: false,
                blink_closed: self.blink_closed,
                now: self.now,
                config: &self.config,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_wraps() {
        assert_eq!(ScreenMode::Device.next(), ScreenMode::Normal);
        assert_eq!(ScreenMode::Normal.prev(), ScreenMode::Device);
        assert_eq!(ScreenMode::Graph.next(), ScreenMode::Stats);
        for mode in ScreenMode::ALL {
            assert_eq!(mode.next().prev(), mode);
            assert_eq!(ScreenMode::ALL[mode.index()], mode);
        }
    }
}
