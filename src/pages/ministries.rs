//! Ministries Page

use leptos::*;

/// Overview of the serving teams.
#[component]
pub fn Ministries() -> impl IntoView {
    let teams = [
        ("Kids", "Sunday mornings for ages 0-12"),
        ("Worship", "Musicians and production"),
        ("Care", "Meals, visits, and practical help"),
        ("Outreach", "Serving the wider neighborhood"),
    ];

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Ministries"</h1>
                <p class="text-gray-400 mt-1">"Places to serve and be served"</p>
            </div>

            <div class="grid gap-4 md:grid-cols-2">
                {teams
                    .into_iter()
                    .map(|(name, blurb)| view! {
                        <div class="bg-gray-800 rounded-lg p-6">
                            <h2 class="text-xl font-semibold">{name}</h2>
                            <p class="text-gray-400 mt-2">{blurb}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
