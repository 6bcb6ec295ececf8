//! Retro Page
//!
//! The 2025 retrospective: hero, topic explorer, impact metrics, role
//! positioning and the filterable peak/friction insights.

use leptos::*;

use tandem::charts::ChartId;
use tandem::content::pages::{
    IMPACT_HIGHLIGHTS, KEY_STATS, RETRO_BADGE, RETRO_HEADLINE, RETRO_INTRO, RETRO_TESTIMONIAL,
    ROLE_HEADLINE, ROLE_QUOTE,
};
use tandem::content::ImpactHighlight;
use tandem::state::InsightFilter;

use crate::components::{ChartCanvas, InsightCard, StatCard, TopicExplorer};
use crate::state::use_site;

#[component]
pub fn Retro() -> impl IntoView {
    view! {
        <div class="fade-in">
            <Hero />
            <TopicExplorer />
            <ImpactSection />
            <RolesSection />
            <InsightsSection />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let ctx = use_site();

    view! {
        <section class="max-w-6xl mx-auto px-4 py-16 grid md:grid-cols-2 gap-10 items-center">
            <div>
                <span class="inline-block text-xs font-bold uppercase tracking-widest bg-[#E0E7E9] text-[#1A2B34] px-3 py-1 rounded-full mb-4">
                    {RETRO_BADGE}
                </span>
                <h1 class="text-4xl font-bold leading-tight mb-4">{RETRO_HEADLINE}</h1>
                {move || {
                    ctx.audience.with(|a| a.hero_image.clone()).map(|src| view! {
                        <img src=src alt="Design Tandem 2025" class="rounded-2xl shadow mb-4 w-full" />
                    })
                }}
                <p class="text-gray-600 leading-relaxed mb-4">{RETRO_INTRO}</p>
                <blockquote class="italic text-[#6B8E99] border-l-4 border-[#6B8E99] pl-4">
                    {RETRO_TESTIMONIAL}
                </blockquote>
            </div>
            <div class="grid grid-cols-2 gap-4">
                {KEY_STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ImpactSection() -> impl IntoView {
    view! {
        <section id="value" class="bg-white py-16">
            <div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-10 items-center">
                <div>
                    <h2 class="text-3xl font-bold mb-6">"回顧核心指標"</h2>
                    <ul class="space-y-4">
                        {IMPACT_HIGHLIGHTS
                            .iter()
                            .map(|h| view! { <Highlight highlight=*h /> })
                            .collect_view()}
                    </ul>
                </div>
                <div class="flex justify-center">
                    <ChartCanvas id=ChartId::Impact width=400 height=340 class="max-w-full" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Highlight(highlight: ImpactHighlight) -> impl IntoView {
    let dot = highlight.color.unwrap_or("#9CA3AF");

    view! {
        <li class="flex gap-3">
            <span class="mt-2 w-2 h-2 rounded-full shrink-0" style=format!("background-color: {}", dot) />
            <p class="text-sm text-gray-700">
                <span class="font-bold">{highlight.heading}</span>
                " "
                {highlight.detail}
            </p>
        </li>
    }
}

#[component]
fn RolesSection() -> impl IntoView {
    let ctx = use_site();

    view! {
        <section id="roles" class="max-w-6xl mx-auto px-4 py-16 grid md:grid-cols-2 gap-10 items-center">
            <div class="bg-[#1A2B34] rounded-2xl p-6">
                <ChartCanvas id=ChartId::Roles width=400 height=280 class="max-w-full" />
            </div>
            <div>
                <h2 class="text-3xl font-bold mb-4">{ROLE_HEADLINE}</h2>
                <p class="text-gray-600 leading-relaxed mb-4">
                    {move || ctx.audience.with(|a| a.role_paragraph())}
                </p>
                <blockquote class="italic text-gray-500 border-l-4 border-[#D4A373] pl-4">
                    {ROLE_QUOTE}
                </blockquote>
            </div>
        </section>
    }
}

#[component]
fn InsightsSection() -> impl IntoView {
    let ctx = use_site();
    let filter = create_memo(move |_| ctx.site.with(|s| s.retro.insights.filter()));

    view! {
        <section id="insights" class="max-w-6xl mx-auto px-4 py-16">
            <h2 class="text-3xl font-bold text-center mb-6">"體驗復盤：高峰與阻力"</h2>

            <div class="flex justify-center gap-3 mb-10">
                {InsightFilter::ALL
                    .into_iter()
                    .map(|f| {
                        let active = move || filter.get() == f;
                        view! {
                            <button
                                class="px-4 py-2 rounded-full text-sm font-medium transition-colors"
                                class=("bg-[#1A2B34]", active)
                                class=("text-white", active)
                                class=("bg-white", move || !active())
                                class=("text-gray-600", move || !active())
                                on:click=move |_| ctx.site.update(|s| s.retro.insights.set_filter(f))
                            >
                                {f.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {move || {
                    ctx.site
                        .with(|s| s.retro.insights.visible().collect::<Vec<_>>())
                        .into_iter()
                        .map(|entry| view! { <InsightCard entry=entry /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
