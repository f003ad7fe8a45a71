//! App Root Component
//!
//! Router, shell layout, and the route table. The store and the route feed
//! are built here and handed to the header explicitly.

use leptos::*;
use leptos_router::*;

use crate::components::Header;
use crate::pages::{Contact, Events, Home, LifeGroups, Ministries};
use crate::routing::provide_route_feed;
use crate::state::Store;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Auth state survives reloads via local storage.
    let store = Store::load();

    view! {
        <Router>
            <Shell store=store />
        </Router>
    }
}

/// Page shell. Separate from [`App`] because the route feed needs the
/// router context to exist.
#[component]
fn Shell(store: Store) -> impl IntoView {
    let routes = provide_route_feed();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header store=store routes=routes />

            // Offset for the fixed header
            <main class="flex-1 container mx-auto px-4 pt-32 pb-12">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/events" view=Events />
                    <Route path="/ministry" view=Ministries />
                    <Route path="/lifegroups" view=LifeGroups />
                    <Route path="/contact" view=Contact />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-amber-500 hover:bg-amber-600 rounded-lg font-medium transition-colors"
            >
                "Back Home"
            </A>
        </div>
    }
}
