//! Wrap-around pagination for the testimonial viewer.
//!
//! The site shows one review card at a time with previous/next controls that
//! wrap at both ends. The arithmetic lives here as a pure value type so the
//! viewer itself stays presentation-only.

/// Position within a fixed-size collection, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    total: usize,
}

impl Pager {
    /// Creates a pager over `total` items, positioned at the first one.
    /// Returns `None` when the collection is empty.
    pub fn new(total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        Some(Self { index: 0, total })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Advances to the next item, wrapping from the last back to the first.
    pub fn next(&mut self) -> usize {
        self.index = if self.index == self.total - 1 {
            0
        } else {
            self.index + 1
        };
        self.index
    }

    /// Steps to the previous item, wrapping from the first to the last.
    pub fn prev(&mut self) -> usize {
        self.index = if self.index == 0 {
            self.total - 1
        } else {
            self.index - 1
        };
        self.index
    }

    /// The `"current / total"` counter label, one-based.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}
