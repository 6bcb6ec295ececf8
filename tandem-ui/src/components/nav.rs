//! Navigation Component
//!
//! One sticky header for both pages; its content follows the current page.

use leptos::*;

use tandem::content::pages::header;
use tandem::content::NavSection;

use crate::state::use_site;

/// Sticky site header
#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_site();
    let page = create_memo(move |_| ctx.page());

    view! {
        <nav class="sticky top-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200 shadow-sm">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                {move || {
                    let content = header(page.get());
                    let subtitle_style = content
                        .subtitle_color
                        .map(|c| format!("color: {}", c))
                        .unwrap_or_default();

                    let brand = view! {
                        <span class="text-xl font-bold tracking-wider">{content.brand}</span>
                        <span class="ml-2 text-xs uppercase tracking-widest text-gray-500" style=subtitle_style>
                            {content.subtitle}
                        </span>
                    };

                    view! {
                        <div class="flex justify-between items-center h-16">
                            // Brand returns to the other page where it is a button
                            {match content.brand_target {
                                Some(target) => view! {
                                    <button class="flex items-center" on:click=move |_| ctx.navigate(target)>
                                        {brand}
                                    </button>
                                }.into_view(),
                                None => view! { <div class="flex items-center">{brand}</div> }.into_view(),
                            }}

                            <div class="hidden md:flex items-center space-x-8 text-sm font-medium text-gray-600">
                                {content.sections.iter().map(|s| view! { <SectionLink section=*s /> }).collect_view()}
                                <button
                                    class="px-4 py-2 rounded-full text-[#1A2B34] font-bold hover:opacity-80 transition-opacity"
                                    style=format!("background-color: {}", content.cta_color)
                                    on:click=move |_| ctx.navigate(content.cta_target)
                                >
                                    {content.cta_label}
                                </button>
                            </div>
                        </div>
                    }
                }}
            </div>
        </nav>
    }
}

/// In-page anchor link
#[component]
fn SectionLink(section: NavSection) -> impl IntoView {
    view! {
        <a href=format!("#{}", section.anchor) class="hover:text-[#1A2B34] transition-colors">
            {section.label}
        </a>
    }
}
