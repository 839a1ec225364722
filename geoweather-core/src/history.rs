use std::collections::VecDeque;

use chrono::{Local, NaiveTime, Timelike};

use crate::{format::{clock, format_coordinate}, validate::parse_float};

/// Maximum number of retained lookups.
pub const HISTORY_CAP: usize = 3;

/// Rendered height of one history row, in pixels.
pub const ENTRY_HEIGHT_PX: u32 = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// `HH:MM` at request time.
    pub timestamp: String,
    pub latitude: String,
    pub longitude: String,
}

/// Past lookups, newest first, never more than [`HISTORY_CAP`].
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup stamped with the current local time.
    pub fn add(&mut self, latitude: &str, longitude: &str) -> &HistoryEntry {
        let now = Local::now().time();
        self.add_at(latitude, longitude, now)
    }

    pub fn add_at(&mut self, latitude: &str, longitude: &str, at: NaiveTime) -> &HistoryEntry {
        while self.entries.len() >= HISTORY_CAP {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::debug!(timestamp = %evicted.timestamp, "evicted oldest history entry");
            }
        }

        self.entries.push_front(HistoryEntry {
            timestamp: clock(at.hour(), at.minute()),
            latitude: format_coordinate(parse_float(latitude)),
            longitude: format_coordinate(parse_float(longitude)),
        });

        &self.entries[0]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Height the list needs to show every entry.
    pub fn content_height(&self) -> u32 {
        self.entries.len() as u32 * ENTRY_HEIGHT_PX
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

/// Collapsible container around the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryPanel {
    pub display: Display,
    pub max_height: u32,
}

impl HistoryPanel {
    /// Follows the list after an insert so an open panel grows with it.
    pub fn fit(&mut self, history: &History) {
        self.max_height = history.content_height();
    }

    /// Flips visibility from the panel's current state rather than a
    /// separate flag: a hidden or zero-height panel opens, anything else closes.
    pub fn toggle(&mut self, history: &History) {
        if self.display == Display::None || self.max_height == 0 {
            self.display = Display::Block;
            self.max_height = history.content_height();
        } else {
            self.display = Display::None;
            self.max_height = 0;
        }
    }

    pub fn is_open(&self) -> bool {
        self.display == Display::Block && self.max_height > 0
    }
}
