//! Prompt Panel Component
//!
//! The seed prompt display and its three topic buttons. Each click starts a
//! highlight pulse; the runner clears it once the pulse has played.

use leptos::*;

use tandem::content::PromptTopic;
use tandem::state::PROMPT_DISPLAY_ANCHOR;

use crate::state::{use_site, EffectRunner};

#[component]
pub fn PromptPanel(runner: EffectRunner) -> impl IntoView {
    let ctx = use_site();
    let display = create_memo(move |_| ctx.site.with(|s| s.home.prompt.display()));
    let pulse = create_memo(move |_| ctx.site.with(|s| s.home.prompt.pulse()));

    view! {
        <div class="max-w-3xl mx-auto text-center">
            <div
                id=PROMPT_DISPLAY_ANCHOR
                class="bg-white rounded-2xl p-8 shadow-sm min-h-[140px] flex items-center justify-center transition-all duration-300"
                class:ring-4=move || pulse.get()
                class:ring-amber-300=move || pulse.get()
            >
                <p class="text-lg leading-relaxed text-[#1A2B34]">{move || display.get()}</p>
            </div>

            <div class="flex flex-wrap justify-center gap-3 mt-6">
                {PromptTopic::ALL
                    .into_iter()
                    .map(|topic| view! { <TopicButton topic=topic runner=runner /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TopicButton(topic: PromptTopic, runner: EffectRunner) -> impl IntoView {
    let ctx = use_site();
    let active = create_memo(move |_| ctx.site.with(|s| s.home.prompt.is_active(topic)));

    let on_click = move |_| {
        if let Some(effects) = ctx.site.try_update(|s| s.home.prompt.select_topic(topic)) {
            runner.run(effects);
        }
    };

    view! {
        <button
            class="px-5 py-2 rounded-full border text-sm font-medium transition-colors"
            class=("bg-[#1A2B34]", move || active.get())
            class=("text-white", move || active.get())
            class=("border-gray-300", move || !active.get())
            class=("text-gray-600", move || !active.get())
            on:click=on_click
        >
            {topic.button_label()}
        </button>
    }
}
