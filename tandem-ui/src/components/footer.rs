//! Footer Component

use leptos::*;

use tandem::content::pages::footer;

use crate::state::use_site;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ctx = use_site();
    let page = create_memo(move |_| ctx.page());

    view! {
        <footer class="bg-[#1A2B34] text-gray-400 py-10 mt-16">
            {move || {
                let content = footer(page.get());
                view! {
                    <div class="max-w-4xl mx-auto px-4 text-center space-y-2 text-sm">
                        <p class="text-white font-medium">{content.headline}</p>
                        {content.tagline.map(|t| view! { <p class="italic">{t}</p> })}
                        <p>
                            "Made with ❤️ by "
                            <a href=content.credit_url target="_blank" rel="noopener" class="underline hover:text-white">
                                {content.credit_label}
                            </a>
                        </p>
                    </div>
                }
            }}
        </footer>
    }
}
