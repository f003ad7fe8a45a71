//! Home Page

use leptos::*;
use leptos_router::A;

/// Landing page with the welcome hero.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center space-y-8 py-16">
            <h1 class="text-5xl font-bold">"Welcome to Haven"</h1>
            <p class="text-xl text-gray-300 max-w-2xl">
                "A community for everyone. Join us on Sundays, or find a group
                 that meets during the week."
            </p>
            <div class="flex gap-4">
                <A
                    href="/events"
                    class="px-6 py-3 bg-amber-500 hover:bg-amber-600 rounded-lg font-medium transition-colors"
                >
                    "Plan a Visit"
                </A>
                <A
                    href="/lifegroups"
                    class="px-6 py-3 border border-gray-500 hover:border-white rounded-lg font-medium transition-colors"
                >
                    "Find a Group"
                </A>
            </div>
        </div>
    }
}
