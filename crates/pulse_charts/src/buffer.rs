use std::collections::vec_deque;
use std::collections::VecDeque;
use std::time::SystemTime;

/// One recorded observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub timestamp: SystemTime,
}

impl Sample {
    pub fn new(value: f64, timestamp: SystemTime) -> Self {
        Self { value, timestamp }
    }

    pub fn now(value: f64) -> Self {
        Self::new(value, SystemTime::now())
    }
}

/// A buffer slot: either a recorded sample or a gap.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Slot {
    Present(Sample),
    #[default]
    Empty,
}

impl Slot {
    pub fn sample(&self) -> Option<&Sample> {
        match self {
            Slot::Present(s) => Some(s),
            Slot::Empty => None,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.sample().map(|s| s.value)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }
}

impl From<Option<Sample>> for Slot {
    fn from(sample: Option<Sample>) -> Self {
        sample.map_or(Slot::Empty, Slot::Present)
    }
}

impl From<Sample> for Slot {
    fn from(sample: Sample) -> Self {
        Slot::Present(sample)
    }
}

/// Per-tick pair of network channel readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DualSample {
    pub outbound: f64,
    pub inbound: f64,
}

impl DualSample {
    pub fn new(outbound: f64, inbound: f64) -> Self {
        Self { outbound, inbound }
    }
}

/// Fixed-length ordered store that evicts its oldest element on every push.
///
/// Invariant: `len() == capacity()` at all times; index 0 is the oldest slot.
/// Fresh slots (initial contents, or padding added by a grow) hold
/// `T::default()`.
#[derive(Clone, Debug, PartialEq)]
pub struct RollingBuffer<T> {
    slots: VecDeque<T>,
    capacity: usize,
}

/// Line chart storage: optional samples, `Slot::Empty` marks a gap.
pub type SampleBuffer = RollingBuffer<Slot>;

/// Network chart storage: both channels per tick, zero by default.
pub type DualBuffer = RollingBuffer<DualSample>;

impl<T: Clone + Default> RollingBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(T::default).take(capacity).collect(),
            capacity,
        }
    }

    /// Buffer whose capacity equals `items.len()`, oldest first.
    pub fn from_vec(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self {
            slots: items.into(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Evict index 0 and append `item` at the end.
    pub fn push(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        self.slots.pop_front();
        self.slots.push_back(item);
    }

    /// Change capacity, keeping the most recent data right-aligned.
    ///
    /// Shrinking drops the oldest entries; growing pads on the left with
    /// default slots.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity {
            return;
        }
        tracing::debug!(
            from = self.capacity,
            to = new_capacity,
            "RollingBuffer::resize"
        );
        if new_capacity < self.capacity {
            self.slots.drain(..self.capacity - new_capacity);
        } else {
            for _ in self.capacity..new_capacity {
                self.slots.push_front(T::default());
            }
        }
        self.capacity = new_capacity;
    }

    /// Reset every slot to its default.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = T::default());
    }

    pub fn get(&self, idx: usize) -> Option<&T> {
        self.slots.get(idx)
    }

    pub fn last(&self) -> Option<&T> {
        self.slots.back()
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.slots.iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.slots.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a RollingBuffer<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl RollingBuffer<Slot> {
    /// Largest present value, `None` when every slot is a gap.
    pub fn max_value(&self) -> Option<f64> {
        self.slots
            .iter()
            .filter_map(Slot::value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    pub fn present_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_present()).count()
    }
}

impl RollingBuffer<DualSample> {
    pub fn max_outbound(&self) -> f64 {
        self.slots.iter().map(|s| s.outbound).fold(0.0, f64::max)
    }

    pub fn max_inbound(&self) -> f64 {
        self.slots.iter().map(|s| s.inbound).fold(0.0, f64::max)
    }
}
