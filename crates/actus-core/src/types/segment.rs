//! Segment type: a bounding interval for schedule generation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Timestamp;

/// A closed interval `[start, end]` bounding schedule generation.
///
/// Both bounds are inclusive. Degenerate or inverted segments are
/// tolerated everywhere: they simply contain nothing (or a single
/// point), and schedule generation over them yields an empty sequence
/// rather than an error.
///
/// # Example
///
/// ```rust
/// use actus_core::types::{Segment, Timestamp};
///
/// let seg = Segment::new(Timestamp::new(100), Timestamp::new(200));
/// assert!(seg.contains(Timestamp::new(100)));
/// assert!(seg.contains(Timestamp::new(200)));
/// assert!(!seg.contains(Timestamp::new(201)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// Inclusive lower bound.
    pub start: Timestamp,
    /// Inclusive upper bound.
    pub end: Timestamp,
}

impl Segment {
    /// Creates a segment from its bounds. No validation: inverted
    /// segments are legal and empty.
    #[must_use]
    pub const fn new(start: Timestamp, end: Timestamp) -> Self {
        Segment { start, end }
    }

    /// Returns true iff `start <= t <= end` (both bounds inclusive).
    #[must_use]
    pub fn contains(&self, t: Timestamp) -> bool {
        self.start <= t && t <= self.end
    }

    /// Returns true if the segment contains no timestamps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
