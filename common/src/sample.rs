//! Fixed-capacity ring buffer of recent sensor samples.
//!
//! Slots are explicitly [`Slot::Empty`] until written, so a legitimate
//! reading of exactly zero is never mistaken for "no data". The graph and
//! statistics screens both consume the buffer through
//! [`SampleBuffer::iter_chronological`], which always yields exactly `N`
//! slots, oldest first.
//!
//! ```text
//!  write_index = 2, N = 5
//!  slots:  [s5] [s6] [  ] [  ] [s4]      (empty slots never written yet)
//!  order:        2    3    4    0    1   -> [ ], [ ], s4, s5, s6
//! ```

use crate::config::SAMPLE_CAPACITY;

/// Milliseconds since boot. Every time value in the core uses this unit.
pub type Millis = u64;

/// One timestamped reading of all three fields.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sample {
    /// Temperature in °C.
    pub temperature: f32,
    /// Relative humidity in %.
    pub humidity: f32,
    /// Light level in raw sensor counts.
    pub illuminance: u16,
    pub timestamp: Millis,
}

impl Sample {
    /// Value of one field as `f32`.
    #[inline]
    pub fn value(&self, field: Field) -> f32 {
        match field {
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
            Field::Illuminance => f32::from(self.illuminance),
        }
    }
}

/// Selects one of the three sample fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Temperature,
    Humidity,
    Illuminance,
}

impl Field {
    /// All fields in display order (rows of the stats table, graph series).
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Humidity, Self::Illuminance];

    /// Short row label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temp",
            Self::Humidity => "Humid",
            Self::Illuminance => "Light",
        }
    }
}

/// A ring buffer slot.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Slot {
    /// Nothing written here since startup or the last reset.
    #[default]
    Empty,
    Recorded(Sample),
}

impl Slot {
    #[inline]
    pub const fn sample(&self) -> Option<&Sample> {
        match self {
            Self::Empty => None,
            Self::Recorded(sample) => Some(sample),
        }
    }
}

/// Count/sum/average/extremes of one field over the recorded slots.
///
/// When nothing is recorded, `avg`, `min` and `max` are all `0.0`.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Aggregate {
    pub count: usize,
    pub sum: f32,
    pub avg: f32,
    pub min: f32,
    pub max: f32,
}

/// Fixed-capacity circular buffer of samples.
pub struct SampleBuffer<const N: usize = SAMPLE_CAPACITY> {
    slots: [Slot; N],
    write_index: usize,
    /// Total samples recorded since the last reset. Never wraps back to a
    /// previous value while the buffer is in use, unlike `write_index`.
    recorded: u32,
}

impl<const N: usize> SampleBuffer<N> {
    const CAPACITY_OK: () = assert!(N > 0, "SampleBuffer capacity must be non-zero");

    /// Create an empty buffer.
    pub const fn new() -> Self {
        let () = Self::CAPACITY_OK;
        Self {
            slots: [Slot::Empty; N],
            write_index: 0,
            recorded: 0,
        }
    }

    /// Overwrite the slot at the write index and advance it modulo `N`.
    pub fn record(
        &mut self,
        sample: Sample,
    ) {
        self.slots[self.write_index] = Slot::Recorded(sample);
        self.write_index = (self.write_index + 1) % N;
        self.recorded = self.recorded.wrapping_add(1);
    }

    /// Mark every slot empty and rewind the write index. Capacity is unchanged.
    pub fn reset(&mut self) {
        self.slots = [Slot::Empty; N];
        self.write_index = 0;
        self.recorded = 0;
    }

    /// Exactly `N` slots, oldest to newest.
    ///
    /// The iterator borrows the buffer, so it cannot outlive a `record`;
    /// calling this again before the next `record` yields the same order.
    pub fn iter_chronological(&self) -> Chronological<'_, N> {
        Chronological {
            buffer: self,
            offset: 0,
        }
    }

    /// Aggregate `field` over every recorded slot.
    pub fn aggregate(
        &self,
        field: Field,
    ) -> Aggregate {
        let mut count = 0usize;
        let mut sum = 0.0f32;
        let mut min = f32::MAX;
        let mut max = f32::MIN;

        for sample in self.slots.iter().filter_map(Slot::sample) {
            let value = sample.value(field);
            count += 1;
            sum += value;
            min = min.min(value);
            max = max.max(value);
        }

        if count == 0 {
            return Aggregate::default();
        }

        // Clamp guards against rounding pushing the mean outside [min, max].
        let avg = (sum / count as f32).clamp(min, max);
        Aggregate { count, sum, avg, min, max }
    }

    /// Most recently recorded sample, if any.
    pub fn latest(&self) -> Option<&Sample> {
        let idx = (self.write_index + N - 1) % N;
        self.slots[idx].sample()
    }

    /// Number of recorded (non-empty) slots.
    pub fn len(&self) -> usize { self.slots.iter().filter(|s| s.sample().is_some()).count() }

    pub fn is_empty(&self) -> bool { self.recorded == 0 }

    /// Position of the next write.
    #[inline]
    pub const fn write_index(&self) -> usize { self.write_index }

    /// Generation counter: total records since the last reset.
    #[inline]
    pub const fn recorded_count(&self) -> u32 { self.recorded }

    #[inline]
    pub const fn capacity(&self) -> usize { N }
}

impl<const N: usize> Default for SampleBuffer<N> {
    fn default() -> Self { Self::new() }
}

/// Oldest-to-newest iterator over all `N` slots of a [`SampleBuffer`].
#[derive(Clone)]
pub struct Chronological<'a, const N: usize> {
    buffer: &'a SampleBuffer<N>,
    offset: usize,
}

impl<'a, const N: usize> Iterator for Chronological<'a, N> {
    type Item = &'a Slot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= N {
            return None;
        }
        let idx = (self.buffer.write_index + self.offset) % N;
        self.offset += 1;
        Some(&self.buffer.slots[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = N - self.offset;
        (left, Some(left))
    }
}

impl<const N: usize> ExactSizeIterator for Chronological<'_, N> {}

// =============================================================================
// Unit Tests
// =============================================================================
