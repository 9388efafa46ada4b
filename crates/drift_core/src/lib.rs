//! Drift Core Geometry
//!
//! Pure arithmetic for scroll-driven effects: vertical spans, viewport
//! visibility checks, and scroll-position-to-offset mapping.
//!
//! # Features
//!
//! - **Spans**: Closed vertical intervals `[top, top + height]`
//! - **Visibility**: Loose (any overlap) and strict (fully contained) checks
//! - **Offset Mapping**: Scroll position to translation offset (parallax)
//! - **Validated Construction**: Non-finite geometry rejected at the boundary
//!
//! Everything here is a pure function over a handful of numbers. Nothing is
//! cached: callers read geometry fresh from their host environment on every
//! check.

pub mod mapping;
pub mod span;

pub use mapping::ScrollMapping;
pub use span::{Containment, GeometryError, Span};
