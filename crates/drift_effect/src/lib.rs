//! Drift Effect Runtime
//!
//! Binds the pure geometry from `drift_core` to a host environment: an
//! attachable parallax effect that listens for scroll (or other) events,
//! checks whether its element is on screen, and hands the mapped translation
//! offset to a caller-supplied apply callback.
//!
//! # Features
//!
//! - **Explicit Lifecycle**: `init()` attaches the listener, `destroy()`
//!   detaches it; dropping an attached effect also detaches
//! - **Host-Agnostic**: Viewport and element geometry come from small traits,
//!   read fresh on every trigger
//! - **Callback Output**: The tracker computes offsets; applying them to a
//!   visual transform is the host's job
//! - **Event Hub**: A ready-made synchronous [`TriggerSource`] for embeddings
//!   and tests that pump events manually
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use drift_core::Span;
//! use drift_effect::{ElementGeometry, EffectConfig, EventHub, ParallaxEffect};
//!
//! struct Banner;
//! impl ElementGeometry for Banner {
//!     fn bounds(&self) -> Span {
//!         Span::new(120.0, 300.0)
//!     }
//! }
//!
//! let hub = EventHub::new(Span::new(0.0, 600.0));
//! let translation = Rc::new(Cell::new(0.0_f32));
//! let applied = Rc::clone(&translation);
//!
//! let mut effect = ParallaxEffect::new(Rc::new(Banner), EffectConfig::default())
//!     .on_apply(move |offset| applied.set(offset));
//! effect.init(&hub).unwrap();
//!
//! hub.scroll_to(200.0);
//! assert_eq!(translation.get(), 100.0);
//! ```

pub mod config;
pub mod effect;
pub mod source;

pub use config::{ConfigOverrides, EffectConfig};
pub use effect::{in_screen, EffectError, ElementGeometry, ParallaxEffect};
pub use source::{EventHub, SubscriptionId, TriggerCallback, TriggerContext, TriggerSource};
