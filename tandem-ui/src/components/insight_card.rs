//! Insight Card Component
//!
//! One retrospective peak or friction entry.

use leptos::*;

use tandem::content::InsightEntry;

#[component]
pub fn InsightCard(entry: &'static InsightEntry) -> impl IntoView {
    let category = entry.category;

    view! {
        <div
            class="bg-white rounded-xl shadow-sm p-6 border-l-4 fade-in"
            style=format!("border-left-color: {}", category.accent())
        >
            <span
                class="text-xs font-bold uppercase tracking-widest"
                style=format!("color: {}", category.accent())
            >
                {category.badge()}
            </span>
            <h4 class="text-lg font-bold mt-1 mb-2">{entry.title}</h4>
            <p class="text-sm text-gray-500 italic mb-4">{entry.context}</p>
            <div class="space-y-2 text-sm text-gray-700">
                <p>
                    <span class="font-bold">"行動："</span>
                    {entry.action}
                </p>
                <p>
                    <span class="font-bold">"轉念："</span>
                    {entry.mindset}
                </p>
            </div>
        </div>
    }
}
