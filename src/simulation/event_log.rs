//! Bounded history of notable world events for the viewer.
//!
//! This is display data only. Structured diagnostics go through `tracing`.

use std::collections::VecDeque;

/// Capacity used when no explicit size is configured.
pub const DEFAULT_CAPACITY: usize = 20;

/// One line of the history.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
    /// World tick the event belongs to.
    pub tick: u64,
    /// Text shown to the viewer.
    pub description: String,
    /// Category, used for coloring.
    pub color: EventColor,
}

/// Event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    /// A creature was born.
    Birth,
    /// A creature died, whatever the cause.
    Death,
    /// Food was added on request.
    Food,
    /// A predator was released.
    Predator,
    /// A new generation started or the world was reset.
    Generation,
}

/// Ring of the most recent events, newest at the front.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<LoggedEvent>,
    capacity: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventLog {
    /// Creates an empty log holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an event, evicting the oldest entry once the log is full.
    pub fn log(&mut self, tick: u64, description: String, color: EventColor) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(LoggedEvent {
            tick,
            description,
            color,
        });
    }

    /// Entries, newest first.
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.entries
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
