//! DOM Nav Adapter
//!
//! Binds the nav-sync controller to rendered header markup. Items are
//! elements carrying the `nav-item` class; each holds a `span` label
//! (wrapping an anchor when navigable) and a `.nav-indicator` element
//! toggled through the `hidden` class plus an inline width. Missing pieces
//! are tolerated as silent no-ops.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::sync::NavTarget;

/// Class marking an element as a nav item.
pub const NAV_ITEM_CLASS: &str = "nav-item";
/// Class selecting the underline indicator inside an item.
pub const INDICATOR_SELECTOR: &str = ".nav-indicator";
/// Highlight class applied to the active item.
pub const HIGHLIGHT_CLASS: &str = "text-amber-400";

/// One rendered nav item.
pub struct DomNavItem {
    root: Element,
}

impl DomNavItem {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    fn anchor(&self) -> Option<Element> {
        self.root.query_selector("a").ok().flatten()
    }

    fn label(&self) -> Option<HtmlElement> {
        self.root
            .query_selector("span")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn indicator(&self) -> Option<HtmlElement> {
        self.root
            .query_selector(INDICATOR_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }
}

impl NavTarget for DomNavItem {
    fn href(&self) -> Option<String> {
        self.anchor()?.get_attribute("href")
    }

    fn label_width(&self) -> f64 {
        self.label()
            .map(|label| label.offset_width() as f64)
            .unwrap_or(0.0)
    }

    fn set_highlighted(&self, on: bool) {
        let classes = self.root.class_list();
        let _ = if on {
            classes.add_1(HIGHLIGHT_CLASS)
        } else {
            classes.remove_1(HIGHLIGHT_CLASS)
        };
    }

    fn show_indicator(&self, width: f64) {
        if let Some(indicator) = self.indicator() {
            let _ = indicator
                .style()
                .set_property("width", &format!("{}px", width));
            let _ = indicator.class_list().remove_1("hidden");
        }
    }

    fn hide_indicator(&self) {
        if let Some(indicator) = self.indicator() {
            let _ = indicator.class_list().add_1("hidden");
        }
    }
}

/// Gather every nav item under `root` in document order.
pub fn collect_nav_items(root: &Element) -> Vec<DomNavItem> {
    let mut items = Vec::new();
    if let Ok(nodes) = root.query_selector_all(&format!(".{}", NAV_ITEM_CLASS)) {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                items.push(DomNavItem::new(el));
            }
        }
    }
    items
}
