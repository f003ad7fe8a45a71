//! Life Groups Page

use leptos::*;

/// Small groups meeting through the week.
#[component]
pub fn LifeGroups() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Life Groups"</h1>
                <p class="text-gray-400 mt-1">
                    "Small groups that meet in homes across the city"
                </p>
            </div>

            <div class="bg-gray-800 rounded-lg p-6 max-w-2xl">
                <p class="text-gray-300">
                    "Groups gather on different evenings for food, conversation,
                     and prayer. Sign in and reach out through the contact page
                     to get connected with one near you."
                </p>
            </div>
        </div>
    }
}
