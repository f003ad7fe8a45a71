//! Header Navigation
//!
//! Entry table, the sync controller, and its DOM binding.

pub mod dom;
pub mod sync;

pub use dom::{collect_nav_items, DomNavItem};
pub use sync::{ActiveState, NavSync, NavTarget};

/// One entry in the header navigation list. `href: None` marks a
/// non-navigating action.
#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

/// Site navigation, in display order. Shared by the desktop and mobile
/// lists.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        href: Some("/"),
    },
    NavEntry {
        label: "Services & Events",
        href: Some("/events"),
    },
    NavEntry {
        label: "Ministries",
        href: Some("/ministry"),
    },
    NavEntry {
        label: "Life Groups",
        href: Some("/lifegroups"),
    },
    NavEntry {
        label: "Give",
        href: None,
    },
];
