//! App Store
//!
//! Observable application state. The store owns its own transitions
//! (`sign_in` / `sign_out`); components read snapshots and subscribe, they
//! never mutate fields directly. The auth slice is persisted to local
//! storage so a reload keeps the session.

use std::cell::RefCell;
use std::rc::Rc;

use super::subscription::{Listeners, Subscription};

/// Local storage key for the persisted state slice.
const STORAGE_KEY: &str = "haven_app_state";

/// Full application state delivered to listeners on every change.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppState {
    pub is_authenticated: bool,
}

/// Cheaply cloneable handle to the shared store.
#[derive(Clone)]
pub struct Store {
    state: Rc<RefCell<AppState>>,
    listeners: Listeners<AppState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Fresh store with default state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Store restored from local storage, falling back to defaults when
    /// storage is absent or the stored blob fails to parse.
    pub fn load() -> Self {
        Self::with_state(restore().unwrap_or_default())
    }

    fn with_state(state: AppState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            listeners: Listeners::new(),
        }
    }

    /// Full copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Register a listener invoked with a full snapshot on every state
    /// change. Detach by dropping the returned guard.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    pub fn sign_in(&self) {
        self.update(|state| state.is_authenticated = true);
    }

    pub fn sign_out(&self) {
        self.update(|state| state.is_authenticated = false);
    }

    /// Apply a transition. Listeners are notified only when the state
    /// actually changed; a no-op transition stays silent.
    fn update(&self, transition: impl FnOnce(&mut AppState)) {
        let before = self.state.borrow().clone();
        transition(&mut self.state.borrow_mut());
        let after = self.state.borrow().clone();
        if after == before {
            return;
        }
        persist(&after);
        self.listeners.emit(&after);
    }
}

#[cfg(target_arch = "wasm32")]
fn persist(state: &AppState) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(json) = serde_json::to_string(state) {
                let _ = storage.set_item(STORAGE_KEY, &json);
            }
        }
    }
    web_sys::console::log_1(
        &format!("store: is_authenticated={}", state.is_authenticated).into(),
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_state: &AppState) {}

#[cfg(target_arch = "wasm32")]
fn restore() -> Option<AppState> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn restore() -> Option<AppState> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_snapshot_starts_signed_out() {
        let store = Store::new();
        assert!(!store.snapshot().is_authenticated);
    }

    #[test]
    fn test_transitions_flip_auth_state() {
        let store = Store::new();
        store.sign_in();
        assert!(store.snapshot().is_authenticated);
        store.sign_out();
        assert!(!store.snapshot().is_authenticated);
    }

    #[test]
    fn test_listener_receives_snapshot_on_every_change() {
        let store = Store::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        let _sub = store.subscribe(move |state| seen_clone.borrow_mut().push(state.clone()));

        store.sign_in();
        store.sign_out();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_authenticated);
        assert!(!seen[1].is_authenticated);
    }

    #[test]
    fn test_noop_transition_stays_silent() {
        let store = Store::new();
        let fired = Rc::new(Cell::new(0));

        let fired_clone = Rc::clone(&fired);
        let _sub = store.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        store.sign_out(); // already signed out
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_dropped_subscription_sees_nothing() {
        let store = Store::new();
        let fired = Rc::new(Cell::new(0));

        let fired_clone = Rc::clone(&fired);
        let sub = store.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));
        drop(sub);

        store.sign_in();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_clones_share_state_and_listeners() {
        let store = Store::new();
        let handle = store.clone();
        let fired = Rc::new(Cell::new(0));

        let fired_clone = Rc::clone(&fired);
        let _sub = handle.subscribe(move |_| fired_clone.set(fired_clone.get() + 1));

        store.sign_in();
        assert!(handle.snapshot().is_authenticated);
        assert_eq!(fired.get(), 1);
    }
}
