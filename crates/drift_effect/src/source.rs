//! Trigger sources and event plumbing
//!
//! A [`TriggerSource`] is whatever the host uses to deliver the events an
//! effect reacts to (usually scrolling) together with the current viewport
//! geometry. Effects subscribe by event name and get a [`TriggerContext`]
//! back on every dispatch.
//!
//! [`EventHub`] is the built-in source: a synchronous, single-threaded
//! dispatcher for embeddings that pump events themselves, and for tests.

use std::cell::RefCell;
use std::rc::Rc;

use drift_core::Span;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::trace;

new_key_type! {
    /// Handle to a registered trigger subscription
    pub struct SubscriptionId;
}

/// Context passed to trigger callbacks
#[derive(Debug, Clone)]
pub struct TriggerContext {
    /// Name of the event that fired
    pub event: String,
    /// Viewport geometry at dispatch time
    pub viewport: Span,
}

/// Callback invoked when a subscribed event fires
///
/// Uses `Rc` since effect dispatch is single-threaded.
pub type TriggerCallback = Rc<dyn Fn(&TriggerContext)>;

/// Source of trigger events and viewport geometry
///
/// The viewport is read fresh on every call; sources must not cache stale
/// geometry across dispatches.
pub trait TriggerSource {
    /// Current viewport span (top = scroll offset, height = visible height)
    fn viewport(&self) -> Span;

    /// Register a callback for the named event
    fn subscribe(&self, event: &str, callback: TriggerCallback) -> SubscriptionId;

    /// Remove a subscription; returns false if the id was already gone
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

struct Subscriber {
    event: String,
    callback: TriggerCallback,
}

struct HubInner {
    viewport: Span,
    subs: SlotMap<SubscriptionId, Subscriber>,
    by_event: FxHashMap<String, SmallVec<[SubscriptionId; 4]>>,
}

/// Synchronous trigger source for manual event pumping
///
/// Clones share the same dispatcher. Callbacks run on the calling thread, in
/// subscription order, and may subscribe or unsubscribe reentrantly.
#[derive(Clone)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl EventHub {
    /// Create a hub with the given initial viewport
    pub fn new(viewport: Span) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                viewport,
                subs: SlotMap::with_key(),
                by_event: FxHashMap::default(),
            })),
        }
    }

    /// Replace the viewport geometry without emitting anything
    pub fn set_viewport(&self, viewport: Span) {
        self.inner.borrow_mut().viewport = viewport;
    }

    /// Move the viewport top to `top` and emit a `"scroll"` event
    pub fn scroll_to(&self, top: f32) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.viewport.top = top;
        }
        self.emit("scroll");
    }

    /// Dispatch the named event to all matching subscribers
    pub fn emit(&self, event: &str) {
        // Snapshot outside the borrow so callbacks can re-enter the hub.
        let (ctx, callbacks) = {
            let inner = self.inner.borrow();
            let ctx = TriggerContext {
                event: event.to_string(),
                viewport: inner.viewport,
            };
            let callbacks: Vec<TriggerCallback> = inner
                .by_event
                .get(event)
                .map(|ids| {
                    ids.iter()
                        .filter_map(|id| inner.subs.get(*id))
                        .map(|sub| Rc::clone(&sub.callback))
                        .collect()
                })
                .unwrap_or_default();
            (ctx, callbacks)
        };

        trace!(event = event, subscribers = callbacks.len(), "dispatching");
        for callback in callbacks {
            callback(&ctx);
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subs.len()
    }
}

impl TriggerSource for EventHub {
    fn viewport(&self) -> Span {
        self.inner.borrow().viewport
    }

    fn subscribe(&self, event: &str, callback: TriggerCallback) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.subs.insert(Subscriber {
            event: event.to_string(),
            callback,
        });
        inner.by_event.entry(event.to_string()).or_default().push(id);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let Some(sub) = inner.subs.remove(id) else {
            return false;
        };
        if let Some(ids) = inner.by_event.get_mut(&sub.event) {
            ids.retain(|existing| *existing != id);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_emit_reaches_matching_subscribers_only() {
        let hub = EventHub::new(Span::new(0.0, 600.0));
        let scrolls = Rc::new(Cell::new(0));
        let wheels = Rc::new(Cell::new(0));

        let seen = Rc::clone(&scrolls);
        hub.subscribe("scroll", Rc::new(move |_| seen.set(seen.get() + 1)));
        let seen = Rc::clone(&wheels);
        hub.subscribe("wheel", Rc::new(move |_| seen.set(seen.get() + 1)));

        hub.emit("scroll");
        hub.emit("scroll");
        hub.emit("wheel");

        assert_eq!(scrolls.get(), 2);
        assert_eq!(wheels.get(), 1);
    }

    #[test]
    fn test_scroll_to_updates_viewport_before_dispatch() {
        let hub = EventHub::new(Span::new(0.0, 600.0));
        let seen_top = Rc::new(Cell::new(f32::NAN));

        let seen = Rc::clone(&seen_top);
        hub.subscribe("scroll", Rc::new(move |ctx| seen.set(ctx.viewport.top)));

        hub.scroll_to(250.0);
        assert_eq!(seen_top.get(), 250.0);
        assert_eq!(hub.viewport(), Span::new(250.0, 600.0));
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let hub = EventHub::new(Span::new(0.0, 600.0));
        let count = Rc::new(Cell::new(0));

        let seen = Rc::clone(&count);
        let id = hub.subscribe("scroll", Rc::new(move |_| seen.set(seen.get() + 1)));

        hub.emit("scroll");
        assert!(hub.unsubscribe(id));
        hub.emit("scroll");

        assert_eq!(count.get(), 1);
        assert!(!hub.unsubscribe(id));
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn test_callbacks_may_unsubscribe_reentrantly() {
        let hub = EventHub::new(Span::new(0.0, 600.0));
        let count = Rc::new(Cell::new(0));

        let hub_handle = hub.clone();
        let seen = Rc::clone(&count);
        let id = Rc::new(Cell::new(None));
        let id_handle = Rc::clone(&id);
        let sub = hub.subscribe(
            "scroll",
            Rc::new(move |_| {
                seen.set(seen.get() + 1);
                if let Some(own_id) = id_handle.get() {
                    hub_handle.unsubscribe(own_id);
                }
            }),
        );
        id.set(Some(sub));

        hub.emit("scroll");
        hub.emit("scroll");
        assert_eq!(count.get(), 1);
    }
}
