//! Services & Events Page

use leptos::*;

/// Weekly service times and upcoming events.
#[component]
pub fn Events() -> impl IntoView {
    let services = [
        ("Sunday Gathering", "Sundays, 9:00 & 11:00"),
        ("Midweek Prayer", "Wednesdays, 19:00"),
        ("Youth Night", "Fridays, 18:30"),
    ];

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Services & Events"</h1>
                <p class="text-gray-400 mt-1">"When and where we gather"</p>
            </div>

            <div class="grid gap-4 md:grid-cols-3">
                {services
                    .into_iter()
                    .map(|(name, time)| view! {
                        <div class="bg-gray-800 rounded-lg p-6">
                            <h2 class="text-xl font-semibold">{name}</h2>
                            <p class="text-gray-400 mt-2">{time}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
