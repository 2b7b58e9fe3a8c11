// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::VecDeque;

/// Log of rendered route descriptions, most recent first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteHistory(VecDeque<String>);

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new route description in front of all older entries.
    pub fn append<S: Into<String>>(&mut self, description: S) {
        self.0.push_front(description.into());
    }

    /// Returns an iterator over all entries, most recent first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + Clone + '_ {
        self.0.iter().map(String::as_str)
    }

    /// Returns the most recently recorded entry.
    pub fn latest(&self) -> Option<&str> {
        self.0.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Discards all entries.
    pub fn clear(&mut self) {
        self.0 = VecDeque::new();
    }
}
