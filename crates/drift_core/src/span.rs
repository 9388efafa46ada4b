//! Vertical spans and visibility checks
//!
//! A [`Span`] is a closed vertical interval described by its top edge and
//! height. Two spans are compared with a [`Containment`] policy: `Loose`
//! counts any overlap (boundary touching included), `Strict` requires the
//! candidate to be fully inside the receiver.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for geometry rejected at the construction boundary
///
/// The interval math itself is infallible; only construction from untrusted
/// host values can fail.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A span component was NaN or infinite
    #[error("non-finite span component: top={top}, height={height}")]
    NonFinite {
        /// Offending top value
        top: f32,
        /// Offending height value
        height: f32,
    },
}

/// Overlap policy for visibility checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Containment {
    /// Any overlap counts, including exact boundary touching
    #[default]
    Loose,
    /// The candidate must be fully contained in the viewport span
    Strict,
}

/// A closed vertical interval `[top, top + height]`
///
/// Used both for the viewport (top = scroll offset, height = visible height)
/// and for element boxes (top = document-relative offset). A zero-height span
/// is a point interval and follows the same inequalities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Top edge (document-relative)
    pub top: f32,
    /// Extent below the top edge
    pub height: f32,
}

impl Span {
    /// Create a span without validation
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Create a span, rejecting non-finite components
    ///
    /// Host layout engines occasionally report NaN for detached elements;
    /// reject that here rather than let it poison every later comparison.
    pub fn try_new(top: f32, height: f32) -> Result<Self, GeometryError> {
        if !top.is_finite() || !height.is_finite() {
            return Err(GeometryError::NonFinite { top, height });
        }
        Ok(Self { top, height })
    }

    /// Bottom edge (`top + height`)
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Whether `other` is fully contained in this span (boundary inclusive)
    pub fn contains(&self, other: &Span) -> bool {
        self.top <= other.top && self.bottom() >= other.bottom()
    }

    /// Whether `other` overlaps this span at all
    ///
    /// Boundary touching counts: a span starting exactly at this span's
    /// bottom edge still overlaps. The negated-disjoint form keeps the
    /// equality cases inclusive.
    pub fn overlaps(&self, other: &Span) -> bool {
        !(self.top > other.bottom() || self.bottom() < other.top)
    }

    /// Visibility check of `other` against this span as the viewport
    pub fn intersects(&self, other: &Span, containment: Containment) -> bool {
        match containment {
            Containment::Loose => self.overlaps(other),
            Containment::Strict => self.contains(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contained_span_intersects_under_both_policies() {
        let viewport = Span::new(0.0, 100.0);
        let inner = Span::new(20.0, 30.0);

        assert!(viewport.intersects(&inner, Containment::Strict));
        assert!(viewport.intersects(&inner, Containment::Loose));
    }

    #[test]
    fn test_disjoint_spans_never_intersect() {
        let viewport = Span::new(0.0, 100.0);
        let below = Span::new(500.0, 100.0);
        let above = Span::new(-300.0, 100.0);

        assert!(!viewport.intersects(&below, Containment::Loose));
        assert!(!viewport.intersects(&below, Containment::Strict));
        assert!(!viewport.intersects(&above, Containment::Loose));
        assert!(!viewport.intersects(&above, Containment::Strict));
    }

    #[test]
    fn test_boundary_touch_is_loose_only() {
        // Element starts exactly where the viewport ends.
        let viewport = Span::new(0.0, 100.0);
        let touching = Span::new(100.0, 50.0);

        assert!(viewport.intersects(&touching, Containment::Loose));
        assert!(!viewport.intersects(&touching, Containment::Strict));

        // And the mirror case: element ends exactly where the viewport starts.
        let touching_above = Span::new(-50.0, 50.0);
        assert!(viewport.intersects(&touching_above, Containment::Loose));
        assert!(!viewport.intersects(&touching_above, Containment::Strict));
    }

    #[test]
    fn test_partial_overlap_is_loose_only() {
        let viewport = Span::new(0.0, 100.0);
        let halfway = Span::new(50.0, 100.0);

        assert!(viewport.intersects(&halfway, Containment::Loose));
        assert!(!viewport.intersects(&halfway, Containment::Strict));
    }

    #[test]
    fn test_zero_height_span_is_a_point_interval() {
        let viewport = Span::new(0.0, 100.0);

        let point_inside = Span::new(40.0, 0.0);
        assert!(viewport.intersects(&point_inside, Containment::Loose));
        assert!(viewport.intersects(&point_inside, Containment::Strict));

        let point_on_edge = Span::new(100.0, 0.0);
        assert!(viewport.intersects(&point_on_edge, Containment::Loose));
        assert!(viewport.intersects(&point_on_edge, Containment::Strict));

        let point_outside = Span::new(100.5, 0.0);
        assert!(!viewport.intersects(&point_outside, Containment::Loose));
    }

    #[test]
    fn test_try_new_rejects_non_finite_components() {
        assert!(Span::try_new(0.0, 100.0).is_ok());
        assert!(Span::try_new(f32::NAN, 100.0).is_err());
        assert!(Span::try_new(0.0, f32::INFINITY).is_err());
        assert!(Span::try_new(f32::NEG_INFINITY, f32::NAN).is_err());
    }
}
