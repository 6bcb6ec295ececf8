//! Topic Explorer Component
//!
//! Doughnut chart, legend and detail box over one selected topic. Legend
//! buttons and chart segments both write the same selection.

use leptos::*;

use tandem::charts::ChartId;
use tandem::content::topics::total_sessions;
use tandem::content::TopicKey;
use tandem::state::{TopicExplorer as Explorer, TopicSegment};

use super::chart::ChartCanvas;
use crate::state::use_site;

#[component]
pub fn TopicExplorer() -> impl IntoView {
    let ctx = use_site();
    let selected = create_memo(move |_| ctx.site.with(|s| s.retro.explorer.selected()));

    let on_segment = Callback::new(move |index: usize| {
        ctx.site.update(|s| {
            s.retro.explorer.select_segment(index);
        });
    });

    view! {
        <section id="overview" class="max-w-6xl mx-auto px-4 py-16">
            <div class="text-center mb-10">
                <h2 class="text-3xl font-bold mb-2">"對話主題脈絡"</h2>
                <p class="text-gray-500">
                    {format!("{} 次深度對話，點擊圖表或標籤探索每個主題。", total_sessions())}
                </p>
            </div>

            <div class="grid md:grid-cols-2 gap-10 items-start">
                <div class="flex flex-col items-center">
                    <ChartCanvas
                        id=ChartId::Topics
                        on_select=on_segment
                        width=320
                        height=320
                        class="max-w-full"
                    />
                    <div class="flex flex-wrap justify-center gap-2 mt-6">
                        {Explorer::segments()
                            .into_iter()
                            .map(|segment| view! { <LegendButton segment=segment /> })
                            .collect_view()}
                    </div>
                </div>

                {move || view! { <TopicDetailBox key=selected.get() /> }}
            </div>
        </section>
    }
}

#[component]
fn LegendButton(segment: TopicSegment) -> impl IntoView {
    let ctx = use_site();
    let active = create_memo(move |_| ctx.site.with(|s| s.retro.explorer.is_selected(segment.key)));

    view! {
        <button
            class="flex items-center gap-2 px-3 py-1 rounded-full border text-xs transition-colors"
            class=("bg-white", move || active.get())
            class=("shadow", move || active.get())
            class=("border-transparent", move || !active.get())
            on:click=move |_| ctx.site.update(|s| s.retro.explorer.select(segment.key))
        >
            <span class="w-3 h-3 rounded-full" style=format!("background-color: {}", segment.color) />
            {format!("{} ({})", segment.label, segment.count)}
        </button>
    }
}

#[component]
fn TopicDetailBox(key: TopicKey) -> impl IntoView {
    let detail = key.detail();

    view! {
        <div
            class="bg-white rounded-2xl p-8 shadow-sm border-t-4 fade-in"
            style=format!("border-top-color: {}", detail.color)
        >
            <h3 class="text-xl font-bold mb-4" style=format!("color: {}", detail.color)>
                {key.label()}
            </h3>
            <p class="text-sm text-gray-700 leading-relaxed mb-6">{detail.description}</p>
            <h4 class="text-xs font-bold uppercase tracking-widest text-gray-400 mb-3">
                {detail.sessions_heading()}
            </h4>
            <ul class="space-y-2 text-sm">
                {detail
                    .display_items()
                    .into_iter()
                    .map(|line| view! { <li class="font-mono text-gray-600">{line}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
