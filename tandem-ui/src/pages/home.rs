//! Home Page
//!
//! The future narrative lab: manifesto, sandbox targets, the dialogue engine
//! and the seed prompt generator.

use leptos::*;

use tandem::charts::ChartId;
use tandem::content::{ENGINE_STEPS, SANDBOX_CARDS};

use crate::components::{ChartCanvas, PromptPanel, SandboxCard};
use crate::state::{use_site, EffectRunner};

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_site();
    // Timers started on this page die with it
    let runner = EffectRunner::new(ctx.site);

    view! {
        <div class="fade-in">
            // Manifesto
            <section id="manifesto" class="max-w-4xl mx-auto px-4 py-20 text-center">
                <p class="text-sm uppercase tracking-[0.3em] text-[#E1B382] mb-4">
                    "The Storytelling Experiment"
                </p>
                <h1 class="text-4xl md:text-5xl font-bold leading-tight mb-6">
                    "意義，是在對話中創造的。"
                </h1>
                <p class="text-gray-600 leading-relaxed max-w-2xl mx-auto">
                    "我們不預設答案。每一次對話都是一場實驗：提出命題、交換視角、收斂出新的詞彙。"
                </p>
            </section>

            // Future sandbox
            <section id="sandbox" class="max-w-6xl mx-auto px-4 py-16">
                <h2 class="text-3xl font-bold text-center mb-10">"未來沙盒"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {SANDBOX_CARDS
                        .iter()
                        .map(|card| view! { <SandboxCard card=*card runner=runner /> })
                        .collect_view()}
                </div>
            </section>

            // Dialogue engine
            <section id="engine" class="bg-[#1A2B34] text-white py-20">
                <div class="max-w-6xl mx-auto px-4 grid md:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl font-bold mb-8">"對話引擎"</h2>
                        <ol class="space-y-6 border-l border-[#E1B382]/40 pl-6">
                            {ENGINE_STEPS
                                .iter()
                                .map(|step| view! {
                                    <li>
                                        <h3 class="font-bold text-[#E1B382]">{step.title}</h3>
                                        <p class="text-sm text-gray-300 mt-1">{step.detail}</p>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </div>
                    <div class="bg-white/5 rounded-2xl p-6 flex flex-col items-center">
                        <h3 class="text-sm uppercase tracking-widest text-gray-400 mb-4">"實驗深度觀測"</h3>
                        <ChartCanvas id=ChartId::Vision width=360 height=320 class="max-w-full" />
                    </div>
                </div>
            </section>

            // Seed prompts
            <section class="max-w-6xl mx-auto px-4 py-20">
                <h2 class="text-3xl font-bold text-center mb-8">"啟動下次對話的「種子」"</h2>
                <PromptPanel runner=runner />
            </section>
        </div>
    }
}
