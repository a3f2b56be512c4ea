// Copyright 2026 the Playhead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped DOM event listeners.
//!
//! [`EventSubscriptions`] keeps each registered JS closure alive for as long
//! as the listener is installed, and removes every listener when cleared or
//! dropped. Closures are never `forget()`-ed, so tearing down a player frees
//! them.

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

type ListenerClosure = Closure<dyn FnMut(Event)>;

struct Subscription {
    target: EventTarget,
    kind: &'static str,
    closure: ListenerClosure,
}

/// A set of installed event listeners, removed on drop.
#[derive(Default)]
pub struct EventSubscriptions {
    entries: Vec<Subscription>,
}

impl EventSubscriptions {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler` for `kind` events on `target`.
    ///
    /// The listener stays installed until [`clear`](Self::clear) is called or
    /// the set is dropped.
    pub fn listen(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.entries.push(Subscription {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    /// Returns the number of installed listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no listeners are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every listener and drops its closure.
    pub fn clear(&mut self) {
        for sub in self.entries.drain(..) {
            if let Err(err) = sub
                .target
                .remove_event_listener_with_callback(sub.kind, sub.closure.as_ref().unchecked_ref())
            {
                tracing::debug!(kind = sub.kind, ?err, "failed to remove listener");
            }
        }
    }
}

impl Drop for EventSubscriptions {
    fn drop(&mut self) {
        self.clear();
    }
}

impl core::fmt::Debug for EventSubscriptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kinds: Vec<&str> = self.entries.iter().map(|sub| sub.kind).collect();
        f.debug_struct("EventSubscriptions")
            .field("kinds", &kinds)
            .finish()
    }
}
