//! Stat Card Component
//!
//! Headline figures on the retro hero.

use leptos::*;

use tandem::content::KeyStat;

#[component]
pub fn StatCard(stat: KeyStat) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-4 shadow-sm text-center">
            <div class="text-3xl font-bold" style=format!("color: {}", stat.color)>
                {stat.value}
            </div>
            <div class="text-xs text-gray-500 mt-1">{stat.label}</div>
        </div>
    }
}
