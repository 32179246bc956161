//! Per-location weather cache and the fetch request/response contract.
//!
//! # Cache
//!
//! One [`CacheEntry`] per configured [`Location`]. Entries start invalid,
//! become valid on the first successful fetch, and are only ever replaced
//! wholesale by a later successful fetch for the same location. A failed
//! fetch never touches the entry.
//!
//! # Fetch pipeline
//!
//! The dashboard never blocks on the network. [`FetchQueue`] hands out
//! [`FetchRequest`]s tagged with a [`FetchTicket`]; whatever transport runs
//! them (a thread, an async task, a blocking call in a test) posts back a
//! [`FetchOutcome`] with the same ticket. Outcomes whose ticket was
//! cancelled or timed out are dropped.
//!
//! ```text
//! request(loc) -> outbox -> next_request() -> transport
//!                                                 |
//! cache.store() <- complete(outcome) <------------+
//! ```

use heapless::{Deque, String, Vec};

use crate::config::MAX_LOCATIONS;
use crate::error::{ConfigError, FetchError};
use crate::sample::Millis;

/// Longest description kept in the cache (characters beyond are dropped).
pub const DESCRIPTION_LEN: usize = 32;

/// Cached free-text condition description.
pub type Description = String<DESCRIPTION_LEN>;

// =============================================================================
// Locations and Symbols
// =============================================================================

/// A configured weather location.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Location {
    /// Name shown on screen.
    pub name: &'static str,
    /// Identifier the weather provider understands.
    pub provider_id: &'static str,
}

impl Location {
    pub const fn new(name: &'static str, provider_id: &'static str) -> Self { Self { name, provider_id } }
}

/// Coarse condition category used for icons and the idle face.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ConditionSymbol {
    Clear,
    Cloudy,
    Rain,
    Snow,
    Thunder,
    #[default]
    Unknown,
}

impl ConditionSymbol {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunder => "Storm",
            Self::Unknown => "?",
        }
    }
}

/// Keyword table for [`classify`], evaluated top to bottom, first match wins.
///
/// Order is load-bearing: "light rain and thunderstorms" is Rain because the
/// rain keywords come before the thunder keywords.
pub const CONDITION_KEYWORDS: [(&str, ConditionSymbol); 7] = [
    ("clear", ConditionSymbol::Clear),
    ("cloud", ConditionSymbol::Cloudy),
    ("rain", ConditionSymbol::Rain),
    ("drizzle", ConditionSymbol::Rain),
    ("snow", ConditionSymbol::Snow),
    ("thunder", ConditionSymbol::Thunder),
    ("storm", ConditionSymbol::Thunder),
];

/// Derive a symbol from a free-text description (case-insensitive substring match).
pub fn classify(description: &str) -> ConditionSymbol {
    CONDITION_KEYWORDS
        .iter()
        .find(|(keyword, _)| contains_ignore_ascii_case(description, keyword))
        .map_or(ConditionSymbol::Unknown, |&(_, symbol)| symbol)
}

fn contains_ignore_ascii_case(
    haystack: &str,
    needle: &str,
) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Copy `text` into a fixed-capacity string, dropping characters that don't fit.
pub fn truncate<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Cache
// =============================================================================

/// A successful response from the weather collaborator.
///
/// The symbol is classified from the provider's full text; only the
/// description kept for display is truncated.
#[derive(Clone, PartialEq, Debug)]
pub struct WeatherReport {
    pub description: Description,
    pub symbol: ConditionSymbol,
    pub temperature: f32,
}

impl WeatherReport {
    pub fn new(
        description: &str,
        temperature: f32,
    ) -> Self {
        Self {
            description: truncate(description),
            symbol: classify(description),
            temperature,
        }
    }
}

/// Most recent weather for one location.
///
/// When `valid` is false the other fields carry no meaning and must not be rendered.
#[derive(Clone, PartialEq, Debug)]
pub struct CacheEntry {
    pub valid: bool,
    pub description: Description,
    pub symbol: ConditionSymbol,
    pub temperature: f32,
    pub fetched_at: Millis,
}

impl CacheEntry {
    pub const INVALID: Self = Self {
        valid: false,
        description: String::new(),
        symbol: ConditionSymbol::Unknown,
        temperature: 0.0,
        fetched_at: 0,
    };

    /// Time since the fetch that produced this entry. `None` when invalid.
    pub fn age(
        &self,
        now: Millis,
    ) -> Option<Millis> {
        self.valid.then(|| now.saturating_sub(self.fetched_at))
    }

    /// Whether a valid entry is older than `stale_after`.
    pub fn is_stale(
        &self,
        now: Millis,
        stale_after: Millis,
    ) -> bool {
        self.age(now).is_some_and(|age| age > stale_after)
    }
}

impl Default for CacheEntry {
    fn default() -> Self { Self::INVALID }
}

static INVALID_ENTRY: CacheEntry = CacheEntry::INVALID;

/// One cache entry per location, for the lifetime of the process.
pub struct WeatherCache {
    entries: Vec<CacheEntry, MAX_LOCATIONS>,
}

impl WeatherCache {
    /// Create `locations` invalid entries.
    pub fn new(locations: usize) -> Result<Self, ConfigError> {
        if locations > MAX_LOCATIONS {
            return Err(ConfigError::TooManyLocations { max: MAX_LOCATIONS });
        }
        let mut entries = Vec::new();
        for _ in 0..locations {
            entries.push(CacheEntry::INVALID).ok();
        }
        Ok(Self { entries })
    }

    /// Stored entry for `location`; out-of-range indices read as invalid.
    pub fn get(
        &self,
        location: usize,
    ) -> &CacheEntry {
        self.entries.get(location).unwrap_or(&INVALID_ENTRY)
    }

    /// Replace the entry for `location` with a valid one.
    ///
    /// The new entry is built completely before it is moved into place, so
    /// no reader can observe a mix of old and new fields.
    pub fn update(
        &mut self,
        location: usize,
        description: &str,
        symbol: ConditionSymbol,
        temperature: f32,
        fetched_at: Millis,
    ) -> bool {
        let Some(slot) = self.entries.get_mut(location) else {
            return false;
        };
        let entry = CacheEntry {
            valid: true,
            description: truncate(description),
            symbol,
            temperature,
            fetched_at,
        };
        *slot = entry;
        true
    }

    /// Store a fetched report.
    pub fn store(
        &mut self,
        location: usize,
        report: &WeatherReport,
        fetched_at: Millis,
    ) -> bool {
        self.update(location, &report.description, report.symbol, report.temperature, fetched_at)
    }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

// =============================================================================
// Fetch Pipeline
// =============================================================================

/// Identifies one fetch attempt for one location.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FetchTicket {
    pub location: usize,
    pub seq: u32,
}

/// Work item for the weather transport.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub provider_id: &'static str,
}

/// Completion event posted back by the transport.
#[derive(Clone, PartialEq, Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<WeatherReport, FetchError>,
}

#[derive(Clone, Copy, Debug)]
struct InFlight {
    seq: u32,
    started: Millis,
}

/// Tracks outstanding weather requests, at most one per location.
pub struct FetchQueue {
    in_flight: [Option<InFlight>; MAX_LOCATIONS],
    last_attempt: [Option<Millis>; MAX_LOCATIONS],
    outbox: Deque<FetchRequest, MAX_LOCATIONS>,
    next_seq: u32,
}

impl FetchQueue {
    pub const fn new() -> Self {
        Self {
            in_flight: [None; MAX_LOCATIONS],
            last_attempt: [None; MAX_LOCATIONS],
            outbox: Deque::new(),
            next_seq: 1,
        }
    }

    /// Queue a fetch for `location` unless one is already outstanding.
    pub fn request(
        &mut self,
        location: usize,
        provider_id: &'static str,
        now: Millis,
    ) -> Option<FetchTicket> {
        if location >= MAX_LOCATIONS || self.in_flight[location].is_some() {
            return None;
        }

        let ticket = FetchTicket {
            location,
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1).max(1);
        self.in_flight[location] = Some(InFlight {
            seq: ticket.seq,
            started: now,
        });
        self.last_attempt[location] = Some(now);
        // One outstanding request per location keeps the outbox within capacity.
        self.outbox.push_back(FetchRequest { ticket, provider_id }).ok();
        Some(ticket)
    }

    /// Next request for the transport to run.
    pub fn next_request(&mut self) -> Option<FetchRequest> { self.outbox.pop_front() }

    /// Drop the outstanding request for `location`. Its outcome will be ignored.
    pub fn cancel(
        &mut self,
        location: usize,
    ) -> Option<FetchTicket> {
        let in_flight = self.in_flight.get_mut(location)?.take()?;
        let pending = self.outbox.len();
        for _ in 0..pending {
            if let Some(req) = self.outbox.pop_front()
                && req.ticket.location != location
            {
                self.outbox.push_back(req).ok();
            }
        }
        Some(FetchTicket {
            location,
            seq: in_flight.seq,
        })
    }

    /// Cancel every request outstanding for longer than `timeout`.
    pub fn expire(
        &mut self,
        now: Millis,
        timeout: Millis,
    ) -> Vec<FetchTicket, MAX_LOCATIONS> {
        let mut expired = Vec::new();
        for location in 0..MAX_LOCATIONS {
            let overdue = self.in_flight[location].is_some_and(|f| now.saturating_sub(f.started) > timeout);
            if overdue && let Some(ticket) = self.cancel(location) {
                expired.push(ticket).ok();
            }
        }
        expired
    }

    /// Accept an outcome if its ticket is still live.
    pub fn complete(
        &mut self,
        outcome: &FetchOutcome,
    ) -> bool {
        let ticket = outcome.ticket;
        match self.in_flight.get(ticket.location).copied().flatten() {
            Some(f) if f.seq == ticket.seq => {
                self.in_flight[ticket.location] = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_fetching(
        &self,
        location: usize,
    ) -> bool {
        self.in_flight.get(location).is_some_and(Option::is_some)
    }

    /// When a fetch for `location` was last requested.
    pub fn last_attempt(
        &self,
        location: usize,
    ) -> Option<Millis> {
        self.last_attempt.get(location).copied().flatten()
    }
}

impl Default for FetchQueue {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
