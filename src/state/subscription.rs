//! Listener Registry
//!
//! Single-threaded subscription primitive shared by the app store and the
//! route feed. `subscribe` hands back a [`Subscription`] guard; dropping the
//! guard (or calling `unsubscribe`) detaches the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Slots<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Ordered set of listeners notified on every [`emit`](Listeners::emit).
pub struct Listeners<T> {
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Listeners<T> {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a listener. It stays attached until the returned guard is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.borrow_mut();
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<Slots<T>>> = Rc::downgrade(&self.slots);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    slots.borrow_mut().entries.retain(|(slot, _)| *slot != id);
                }
            })),
        }
    }

    /// Notify all listeners in subscription order. The callback list is
    /// snapshotted first, so a listener may subscribe or unsubscribe during
    /// notification without poisoning the registry.
    pub fn emit(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .slots
            .borrow()
            .entries
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(value);
        }
    }

    pub fn count(&self) -> usize {
        self.slots.borrow().entries.len()
    }
}

/// RAII guard for an attached listener. Detaches on drop.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Explicitly detach the listener.
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}
