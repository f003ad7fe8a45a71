//! Route Feed
//!
//! Explicit route-change subscription handed to components instead of an
//! ambient global event. Notifications carry no payload; consumers re-read
//! the current path themselves through the injected path source.

use std::rc::Rc;

use leptos::*;
use leptos_router::use_location;

use crate::state::subscription::{Listeners, Subscription};

/// Cheaply cloneable handle to the route-change feed.
#[derive(Clone)]
pub struct RouteFeed {
    path_source: Rc<dyn Fn() -> String>,
    listeners: Listeners<()>,
}

impl RouteFeed {
    /// Feed with an injected path source (a test may hand in a fake).
    pub fn new(path_source: impl Fn() -> String + 'static) -> Self {
        Self {
            path_source: Rc::new(path_source),
            listeners: Listeners::new(),
        }
    }

    /// Current URL path, re-read from the source on every call.
    pub fn current_path(&self) -> String {
        (self.path_source)()
    }

    /// Register a route-change handler. Detach by dropping the guard.
    pub fn on_route_changed(&self, handler: impl Fn() + 'static) -> Subscription {
        self.listeners.subscribe(move |_: &()| handler())
    }

    /// Broadcast a route change to all handlers.
    pub fn notify(&self) {
        self.listeners.emit(&());
    }
}

/// Browser-backed feed: path from `window.location`, notifications wired to
/// the router's reactive location. Must run inside a `<Router>`.
pub fn provide_route_feed() -> RouteFeed {
    let feed = RouteFeed::new(|| {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    });

    let location = use_location();
    let feed_clone = feed.clone();
    create_effect(move |prev: Option<String>| {
        let path = location.pathname.get();
        // The first effect run is the initial render, not a change.
        if let Some(prev) = prev {
            if prev != path {
                web_sys::console::log_1(&format!("route changed: {}", path).into());
                feed_clone.notify();
            }
        }
        path
    });

    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn fake_feed() -> (Rc<RefCell<String>>, RouteFeed) {
        let path = Rc::new(RefCell::new("/".to_string()));
        let source = Rc::clone(&path);
        let feed = RouteFeed::new(move || source.borrow().clone());
        (path, feed)
    }

    #[test]
    fn test_handlers_reread_the_path() {
        let (path, feed) = fake_feed();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = Rc::clone(&seen);
        let feed_clone = feed.clone();
        let _sub = feed.on_route_changed(move || {
            seen_clone.borrow_mut().push(feed_clone.current_path());
        });

        *path.borrow_mut() = "/events".to_string();
        feed.notify();
        *path.borrow_mut() = "/ministry".to_string();
        feed.notify();

        assert_eq!(*seen.borrow(), vec!["/events", "/ministry"]);
    }

    #[test]
    fn test_dropped_handler_is_detached() {
        let (_path, feed) = fake_feed();
        let fired = Rc::new(Cell::new(0));

        let fired_clone = Rc::clone(&fired);
        let sub = feed.on_route_changed(move || fired_clone.set(fired_clone.get() + 1));

        feed.notify();
        drop(sub);
        feed.notify();

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_current_path_without_handlers() {
        let (path, feed) = fake_feed();
        *path.borrow_mut() = "/lifegroups".to_string();
        assert_eq!(feed.current_path(), "/lifegroups");
    }
}
