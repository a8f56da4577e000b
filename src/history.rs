//! Session-scoped history of tool invocations.
//!
//! Each tool keeps its own capped list of `{input, output, timestamp}`
//! records, newest first. Nothing is persisted; history lives and dies with
//! the session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

pub const MIN_CAPACITY: usize = 8;
pub const MAX_CAPACITY: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub input: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Create a history; `capacity` is clamped into 8..=20.
    pub fn new(capacity: usize) -> History {
        History {
            capacity: capacity.clamp(MIN_CAPACITY, MAX_CAPACITY),
            entries: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record one action at the given instant. The oldest entry is dropped
    /// once the cap is reached.
    pub fn record_at(
        &mut self,
        input: impl Into<String>,
        output: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) {
        self.entries.push_front(HistoryEntry {
            input: input.into(),
            output: output.into(),
            timestamp,
        });
        self.entries.truncate(self.capacity);
    }

    pub fn record(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.record_at(input, output, Utc::now());
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        History::new(MAX_CAPACITY)
    }
}
