//! Deduplicating sliding window of recently seen numbers
//!
//! Keeps the most recent `capacity` distinct integers in arrival order.
//! A value already in the window is skipped without moving it; when an
//! append overflows the window the oldest value is evicted.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use types::numeric::average_of_ints;

/// Default window capacity
pub const DEFAULT_WINDOW_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct SlidingWindow {
    values: VecDeque<i64>,
    capacity: usize,
}

impl SlidingWindow {
    /// Create an empty window. A zero capacity is raised to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Fold a batch of values into the window, in order.
    ///
    /// Eviction happens after each append, so a value pushed out earlier in
    /// the batch can be appended again by a later occurrence.
    pub fn merge(&mut self, new_values: &[i64]) {
        for &value in new_values {
            if self.values.contains(&value) {
                continue;
            }
            self.values.push_back(value);
            while self.values.len() > self.capacity {
                self.values.pop_front();
            }
        }
    }

    /// Current contents, oldest first
    pub fn snapshot(&self) -> Vec<i64> {
        self.values.iter().copied().collect()
    }

    /// Rounded mean of the current contents; 0.0 when empty
    pub fn average(&self) -> f64 {
        average_of_ints(&self.snapshot())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Before/after views of one merge, captured in the same critical section
#[derive(Debug, Clone, PartialEq)]
pub struct WindowTransition {
    pub before: Vec<i64>,
    pub after: Vec<i64>,
    pub average: f64,
}

/// Process-wide window shared by all numbers requests
#[derive(Debug, Clone)]
pub struct WindowStore {
    inner: Arc<Mutex<SlidingWindow>>,
}

impl WindowStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlidingWindow::new(capacity))),
        }
    }

    /// Snapshot, merge, snapshot and average as one atomic unit.
    pub fn apply(&self, new_values: &[i64]) -> WindowTransition {
        let mut window = self.inner.lock();
        let before = window.snapshot();
        window.merge(new_values);
        let after = window.snapshot();
        let average = average_of_ints(&after);
        WindowTransition {
            before,
            after,
            average,
        }
    }

    pub fn snapshot(&self) -> Vec<i64> {
        self.inner.lock().snapshot()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}
