//! Scroll-position-to-offset mapping
//!
//! The parallax illusion comes from translating an element by a fraction of
//! the scroll position, so it appears to move slower than the page. The
//! classic effect halves the scroll position; [`ScrollMapping::default`]
//! keeps that behavior.

use serde::{Deserialize, Serialize};

/// Maps a scroll position to a vertical translation offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollMapping {
    /// Fraction of the scroll position applied as translation
    pub factor: f32,
}

impl Default for ScrollMapping {
    fn default() -> Self {
        Self { factor: 0.5 }
    }
}

impl ScrollMapping {
    /// Create a mapping with a custom factor
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Offset to apply for the given scroll position
    pub fn offset_for(&self, scroll_top: f32) -> f32 {
        scroll_top * self.factor
    }
}
