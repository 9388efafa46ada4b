//! Attachable parallax effect
//!
//! [`ParallaxEffect`] ties one element to one trigger source. On every
//! trigger it re-reads the viewport and the element bounds, checks loose
//! visibility, and forwards the mapped offset to the apply callback. Elements
//! that are off screen get no update at all.
//!
//! Effects are plain values made by an explicit factory: attaching two
//! effects to the same element simply yields two independent effects.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::{Containment, GeometryError, Span};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::EffectConfig;
use crate::source::{SubscriptionId, TriggerCallback, TriggerContext, TriggerSource};

/// Errors from effect lifecycle operations
#[derive(Debug, Error)]
pub enum EffectError {
    /// `init` called while the effect is already attached
    #[error("effect is already attached to a trigger source")]
    AlreadyAttached,
    /// An operation needed a trigger source but the effect is detached
    #[error("effect is not attached to a trigger source")]
    NotAttached,
    /// The element reported unusable geometry at attach time
    #[error("element geometry rejected: {0}")]
    BadGeometry(#[from] GeometryError),
}

/// Host layout geometry for a tracked element
///
/// `bounds` is called fresh on every check; implementations should report the
/// element's current document-relative span, not a cached one.
pub trait ElementGeometry {
    /// Current vertical bounds of the element
    fn bounds(&self) -> Span;
}

/// Visibility check of an explicit target against a viewport
pub fn in_screen(viewport: Span, target: &dyn ElementGeometry, containment: Containment) -> bool {
    viewport.intersects(&target.bounds(), containment)
}

/// Callback that applies a computed offset to the host's visual transform
pub type ApplyFn = Box<dyn FnMut(f32)>;

struct EffectInner {
    element: Rc<dyn ElementGeometry>,
    config: EffectConfig,
    apply: Option<ApplyFn>,
    last_applied: Option<f32>,
}

impl EffectInner {
    fn offset_if_visible(&self, viewport: Span) -> Option<f32> {
        if viewport.intersects(&self.element.bounds(), Containment::Loose) {
            Some(self.config.mapping.offset_for(viewport.top))
        } else {
            None
        }
    }
}

struct Binding {
    source: Box<dyn TriggerSource>,
    subscription: SubscriptionId,
}

/// A scroll-driven parallax translation bound to one element
///
/// Created detached; [`ParallaxEffect::init`] subscribes to the trigger
/// source named by the config and [`ParallaxEffect::destroy`] unsubscribes.
/// Dropping an attached effect detaches it.
pub struct ParallaxEffect {
    inner: Rc<RefCell<EffectInner>>,
    binding: Option<Binding>,
}

impl ParallaxEffect {
    /// Create a detached effect for the given element
    pub fn new(element: Rc<dyn ElementGeometry>, config: EffectConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EffectInner {
                element,
                config,
                apply: None,
                last_applied: None,
            })),
            binding: None,
        }
    }

    /// Set the callback that applies offsets to the host transform
    ///
    /// Without one the effect still tracks visibility but updates nothing.
    pub fn on_apply(self, apply: impl FnMut(f32) + 'static) -> Self {
        self.inner.borrow_mut().apply = Some(Box::new(apply));
        self
    }

    /// Whether the effect currently holds a live subscription
    pub fn is_attached(&self) -> bool {
        self.binding.is_some()
    }

    /// Attach to a trigger source, subscribing to the configured event
    ///
    /// The source handle is kept for teardown, so it must be cheap to clone
    /// (the built-in [`crate::EventHub`] is a shared handle).
    pub fn init<S>(&mut self, source: &S) -> Result<(), EffectError>
    where
        S: TriggerSource + Clone + 'static,
    {
        if self.binding.is_some() {
            return Err(EffectError::AlreadyAttached);
        }

        let (event, label) = {
            let inner = self.inner.borrow();
            // Surface detached-element geometry (NaN bounds) now instead of
            // silently never matching a viewport later.
            let bounds = inner.element.bounds();
            Span::try_new(bounds.top, bounds.height)?;
            (
                inner.config.on.clone(),
                inner.config.label.clone().unwrap_or_default(),
            )
        };

        let shared = Rc::clone(&self.inner);
        let callback: TriggerCallback = Rc::new(move |ctx| handle_trigger(&shared, ctx));
        let subscription = source.subscribe(&event, callback);
        self.binding = Some(Binding {
            source: Box::new(source.clone()),
            subscription,
        });

        debug!(event = %event, label = %label, "parallax effect attached");
        Ok(())
    }

    /// Detach from the trigger source and forget the last applied offset
    ///
    /// Detaching twice is a no-op.
    pub fn destroy(&mut self) {
        if let Some(binding) = self.binding.take() {
            binding.source.unsubscribe(binding.subscription);
            let mut inner = self.inner.borrow_mut();
            inner.last_applied = None;
            let label = inner.config.label.clone().unwrap_or_default();
            debug!(label = %label, "parallax effect detached");
        }
    }

    /// Compute the offset for a viewport, without applying anything
    ///
    /// Returns `Some(offset)` when the element loosely intersects the
    /// viewport, `None` when it is off screen.
    pub fn on_trigger(&self, viewport: Span) -> Option<f32> {
        self.inner.borrow().offset_if_visible(viewport)
    }

    /// Visibility of the bound element against the attached source's viewport
    pub fn in_screen(&self, containment: Containment) -> Result<bool, EffectError> {
        let binding = self.binding.as_ref().ok_or(EffectError::NotAttached)?;
        let viewport = binding.source.viewport();
        let inner = self.inner.borrow();
        Ok(viewport.intersects(&inner.element.bounds(), containment))
    }

    /// Last offset handed to the apply callback, if any
    pub fn last_applied(&self) -> Option<f32> {
        self.inner.borrow().last_applied
    }
}

impl Drop for ParallaxEffect {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn handle_trigger(inner: &Rc<RefCell<EffectInner>>, ctx: &TriggerContext) {
    let offset = {
        let mut inner = inner.borrow_mut();
        let Some(offset) = inner.offset_if_visible(ctx.viewport) else {
            trace!(event = %ctx.event, "element off screen, no update");
            return;
        };
        if inner.last_applied == Some(offset) {
            // Coalesce repeated triggers at the same scroll position.
            trace!(offset = offset, "offset unchanged, skipping apply");
            return;
        }
        inner.last_applied = Some(offset);
        offset
    };

    // The apply callback runs outside the borrow so it may query the effect.
    let apply = inner.borrow_mut().apply.take();
    if let Some(mut apply) = apply {
        apply(offset);
        inner.borrow_mut().apply = Some(apply);
    }
}
