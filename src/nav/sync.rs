//! Nav Synchronization
//!
//! Keeps the header navigation consistent with the current URL: at most one
//! nav item is highlighted at a time, and its underline indicator is sized
//! to the rendered label. The controller is UI-agnostic; anything exposing
//! the [`NavTarget`] capability can be driven by it (the DOM adapter lives
//! in `nav::dom`).

/// Capability an item must expose to participate in nav sync.
pub trait NavTarget {
    /// Destination path, or `None` for a non-navigating action.
    fn href(&self) -> Option<String>;
    /// Rendered width of the label text. Only meaningful after layout.
    fn label_width(&self) -> f64;
    /// Toggle the highlight styling.
    fn set_highlighted(&self, on: bool);
    /// Reveal the indicator at the given width.
    fn show_indicator(&self, width: f64);
    /// Hide the indicator.
    fn hide_indicator(&self);
}

/// Resolution state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveState {
    /// No resolution has happened yet.
    Unresolved,
    /// Resolved to an item index, or to no item at all.
    Resolved(Option<usize>),
}

/// Controller owning an ordered set of nav items and the single active slot.
pub struct NavSync<T: NavTarget> {
    items: Vec<T>,
    state: ActiveState,
}

impl<T: NavTarget> NavSync<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            state: ActiveState::Unresolved,
        }
    }

    pub fn state(&self) -> ActiveState {
        self.state
    }

    /// First item whose href exactly equals `path`. No normalization: no
    /// trailing-slash handling, no query stripping. When nothing matches and
    /// the path is the root, the first item is treated as the home entry.
    pub fn resolve_active_from_path(&self, path: &str) -> Option<usize> {
        let matched = self
            .items
            .iter()
            .position(|item| item.href().as_deref() == Some(path));
        match matched {
            Some(idx) => Some(idx),
            None if path == "/" && !self.items.is_empty() => Some(0),
            None => None,
        }
    }

    /// Deactivate everything, then activate `idx` if it names a real item.
    /// Idempotent; an out-of-range or absent index just clears.
    pub fn activate(&mut self, idx: Option<usize>) {
        for item in &self.items {
            item.set_highlighted(false);
            item.hide_indicator();
        }

        let idx = idx.filter(|i| *i < self.items.len());
        if let Some(i) = idx {
            let item = &self.items[i];
            item.set_highlighted(true);
            item.show_indicator(item.label_width());
        }
        self.state = ActiveState::Resolved(idx);
    }

    /// Recompute the active item from the current path and apply it.
    pub fn sync_to_path(&mut self, path: &str) {
        let idx = self.resolve_active_from_path(path);
        self.activate(idx);
    }

    /// Click on item `idx`. Items without an href activate immediately
    /// (nothing else will re-sync them). Items with an href are left alone:
    /// the route change they trigger drives the re-sync, so a cancelled or
    /// redirected navigation never flashes a wrong highlight. Navigating to
    /// the path already shown emits no route change, so such a click leaves
    /// the indicator untouched.
    pub fn handle_click(&mut self, idx: usize) {
        let navigable = match self.items.get(idx) {
            Some(item) => item.href().is_some(),
            None => return,
        };
        if !navigable {
            self.activate(Some(idx));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Test double tracking the mutations the controller performs.
    struct FakeItem {
        href: Option<&'static str>,
        width: f64,
        highlighted: Cell<bool>,
        indicator: Cell<Option<f64>>,
    }

    impl FakeItem {
        fn link(href: &'static str, width: f64) -> Self {
            Self {
                href: Some(href),
                width,
                highlighted: Cell::new(false),
                indicator: Cell::new(None),
            }
        }

        fn action(width: f64) -> Self {
            Self {
                href: None,
                width,
                highlighted: Cell::new(false),
                indicator: Cell::new(None),
            }
        }
    }

    impl NavTarget for FakeItem {
        fn href(&self) -> Option<String> {
            self.href.map(str::to_string)
        }

        fn label_width(&self) -> f64 {
            self.width
        }

        fn set_highlighted(&self, on: bool) {
            self.highlighted.set(on);
        }

        fn show_indicator(&self, width: f64) {
            self.indicator.set(Some(width));
        }

        fn hide_indicator(&self) {
            self.indicator.set(None);
        }
    }

    fn site_nav() -> NavSync<FakeItem> {
        NavSync::new(vec![
            FakeItem::link("/", 40.0),
            FakeItem::link("/events", 120.0),
            FakeItem::link("/ministry", 80.0),
            FakeItem::action(35.0), // "Give"
        ])
    }

    fn active_indices(sync: &NavSync<FakeItem>) -> Vec<usize> {
        sync.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.highlighted.get())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_exact_match_wins() {
        let sync = site_nav();
        assert_eq!(sync.resolve_active_from_path("/events"), Some(1));
        assert_eq!(sync.resolve_active_from_path("/ministry"), Some(2));
    }

    #[test]
    fn test_no_match_off_root_resolves_none() {
        let sync = site_nav();
        assert_eq!(sync.resolve_active_from_path("/unknown"), None);
    }

    #[test]
    fn test_root_falls_back_to_first_item() {
        // "/" matches Home's href here, but the fallback must also hold when
        // no item carries the root href.
        let sync = NavSync::new(vec![
            FakeItem::link("/events", 120.0),
            FakeItem::link("/ministry", 80.0),
        ]);
        assert_eq!(sync.resolve_active_from_path("/"), Some(0));
    }

    #[test]
    fn test_root_fallback_needs_items() {
        let sync: NavSync<FakeItem> = NavSync::new(Vec::new());
        assert_eq!(sync.resolve_active_from_path("/"), None);
    }

    #[test]
    fn test_no_path_normalization() {
        let sync = site_nav();
        assert_eq!(sync.resolve_active_from_path("/events/"), None);
        assert_eq!(sync.resolve_active_from_path("/events?tab=1"), None);
    }

    #[test]
    fn test_sync_highlights_exactly_one_item() {
        let mut sync = site_nav();
        sync.sync_to_path("/events");

        assert_eq!(active_indices(&sync), vec![1]);
        assert_eq!(sync.items[1].indicator.get(), Some(120.0));
        assert_eq!(sync.state(), ActiveState::Resolved(Some(1)));
    }

    #[test]
    fn test_sync_to_unknown_clears_everything() {
        let mut sync = site_nav();
        sync.sync_to_path("/events");
        sync.sync_to_path("/unknown");

        assert!(active_indices(&sync).is_empty());
        assert!(sync.items.iter().all(|i| i.indicator.get().is_none()));
        assert_eq!(sync.state(), ActiveState::Resolved(None));
    }

    #[test]
    fn test_root_sync_activates_home() {
        let mut sync = site_nav();
        sync.sync_to_path("/");
        assert_eq!(active_indices(&sync), vec![0]);
        assert_eq!(sync.items[0].indicator.get(), Some(40.0));
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut sync = site_nav();
        sync.activate(Some(2));
        sync.activate(Some(2));

        assert_eq!(active_indices(&sync), vec![2]);
        assert_eq!(sync.items[2].indicator.get(), Some(80.0));
    }

    #[test]
    fn test_activate_moves_the_single_slot() {
        let mut sync = site_nav();
        sync.activate(Some(0));
        sync.activate(Some(1));

        assert_eq!(active_indices(&sync), vec![1]);
        assert!(sync.items[0].indicator.get().is_none());
    }

    #[test]
    fn test_activate_out_of_range_clears() {
        let mut sync = site_nav();
        sync.activate(Some(1));
        sync.activate(Some(99));

        assert!(active_indices(&sync).is_empty());
        assert_eq!(sync.state(), ActiveState::Resolved(None));
    }

    #[test]
    fn test_click_on_action_activates_immediately() {
        let mut sync = site_nav();
        sync.sync_to_path("/events");
        sync.handle_click(3); // "Give" has no href

        assert_eq!(active_indices(&sync), vec![3]);
        assert_eq!(sync.items[3].indicator.get(), Some(35.0));
        assert_eq!(sync.state(), ActiveState::Resolved(Some(3)));
    }

    #[test]
    fn test_click_on_link_waits_for_route_change() {
        let mut sync = site_nav();
        sync.sync_to_path("/events");
        sync.handle_click(2); // real link: no local activation

        assert_eq!(active_indices(&sync), vec![1]);
        assert_eq!(sync.state(), ActiveState::Resolved(Some(1)));
    }

    #[test]
    fn test_click_out_of_range_is_a_noop() {
        let mut sync = site_nav();
        sync.sync_to_path("/events");
        sync.handle_click(42);
        assert_eq!(active_indices(&sync), vec![1]);
    }

    #[test]
    fn test_starts_unresolved() {
        let sync = site_nav();
        assert_eq!(sync.state(), ActiveState::Unresolved);
    }
}
