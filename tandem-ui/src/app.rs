//! App Root Component
//!
//! The router supplies the URL for audience detection; pages themselves are
//! switched in place from site state, not by route.

use leptos::*;
use leptos_router::*;

use tandem::state::Page;

use crate::components::{SiteFooter, SiteHeader};
use crate::pages::{Home, Retro};
use crate::state::{provide_site_context, use_site};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Site />
        </Router>
    }
}

#[component]
fn Site() -> impl IntoView {
    provide_site_context();
    let ctx = use_site();
    let page = create_memo(move |_| ctx.page());

    view! {
        <div class="min-h-screen bg-[#F9F7F2] text-[#1A2B34] flex flex-col">
            <SiteHeader />

            <main class="flex-1">
                {move || match page.get() {
                    Page::Home => view! { <Home /> }.into_view(),
                    Page::Retro => view! { <Retro /> }.into_view(),
                }}
            </main>

            <SiteFooter />
        </div>
    }
}
