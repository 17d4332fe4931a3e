use std::time::Duration;

use crate::error::{Error, Result};

/// Moving average over the most recent `capacity` samples, backed by a
/// circular buffer, plus the minimum and maximum of every sample added since
/// construction or the last [`reset`](Self::reset).
///
/// Until the window fills, the average is taken over the samples seen so far.
#[derive(Clone, Debug)]
pub struct MovingAverage {
    capacity: usize,
    /// Retained samples; grows to `capacity`, then slots are overwritten in place
    samples: Vec<f64>,
    /// Slot the next sample goes into once the window is full
    cursor: usize,
    /// Always equal to the sum of `samples`
    sum: f64,
    min: f64,
    max: f64,
}

/// Snapshot of a tracker's aggregates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub samples: usize,
}

impl MovingAverage {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        log::debug!("Created moving average with window {}", capacity);
        Ok(Self {
            capacity,
            samples: Vec::with_capacity(capacity),
            cursor: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        })
    }

    /// Record a sample and return the average of the retained window
    pub fn add(&mut self, value: f64) -> f64 {
        if self.samples.len() < self.capacity {
            self.samples.push(value);
        } else {
            // out with the oldest, in with the new
            self.sum -= self.samples[self.cursor];
            self.samples[self.cursor] = value;
        }
        self.sum += value;
        self.cursor = (self.cursor + 1) % self.capacity;

        self.min = self.min.min(value);
        self.max = self.max.max(value);

        self.sum / self.samples.len() as f64
    }

    /// Record an elapsed time in milliseconds
    pub fn add_duration(&mut self, elapsed: Duration) -> f64 {
        self.add(elapsed.as_nanos() as f64 / 1_000_000.0)
    }

    /// Smallest sample since the last reset; `f64::INFINITY` when empty
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest sample since the last reset; `f64::NEG_INFINITY` when empty
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.sum / self.samples.len() as f64)
        }
    }

    /// Most recently added sample
    pub fn last(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let slot = (self.cursor + self.capacity - 1) % self.capacity;
        Some(self.samples[slot])
    }

    /// Number of samples currently in the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn summary(&self) -> Option<Summary> {
        self.average().map(|average| Summary {
            average,
            min: self.min,
            max: self.max,
            samples: self.samples.len(),
        })
    }

    /// Drop all samples and extremes; keeps the capacity and the allocation
    pub fn reset(&mut self) {
        self.samples.clear();
        self.cursor = 0;
        self.sum = 0.0;
        self.min = f64::INFINITY;
        self.max = f64::NEG_INFINITY;
    }
}
