//! Sandbox Card Component
//!
//! A future-sandbox target. Cards bound to a prompt open it and scroll the
//! prompt display into view; the rest only react to hover.

use leptos::*;

use tandem::content::SandboxCard as Card;

use crate::state::{use_site, EffectRunner};

#[component]
pub fn SandboxCard(card: Card, runner: EffectRunner) -> impl IntoView {
    let ctx = use_site();

    let on_click = move |_| {
        let Some(topic) = card.topic else {
            return;
        };
        if let Some(effects) = ctx.site.try_update(|s| s.home.prompt.show_topic(topic)) {
            runner.run(effects);
        }
    };

    view! {
        <div
            class="bg-white rounded-2xl p-6 shadow-sm border border-transparent hover:border-[#E1B382] hover:-translate-y-1 transition-all"
            class:cursor-pointer=card.topic.is_some()
            on:click=on_click
        >
            <div class="flex items-center justify-between mb-4">
                <span class="text-3xl">{card.icon}</span>
                <span class="text-xs font-mono text-gray-400">{card.badge()}</span>
            </div>
            <h3 class="text-lg font-bold mb-2">{card.title}</h3>
            <p class="text-sm text-gray-600 leading-relaxed mb-4">{card.summary}</p>
            <div class="flex flex-wrap gap-2">
                {card
                    .tags
                    .into_iter()
                    .map(|tag| view! { <span class="text-xs bg-gray-100 text-gray-500 px-2 py-1 rounded">{tag}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}
