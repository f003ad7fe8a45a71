//! Contact Page

use leptos::*;

/// How to reach the team.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Contact Us"</h1>
                <p class="text-gray-400 mt-1">"We would love to hear from you"</p>
            </div>

            <div class="bg-gray-800 rounded-lg p-6 max-w-xl space-y-3">
                <p class="text-gray-300">"hello@haven.community"</p>
                <p class="text-gray-300">"+1 (555) 010-4477"</p>
                <p class="text-gray-400">
                    "Office hours: Tuesday to Friday, 9:00-16:00"
                </p>
            </div>
        </div>
    }
}
