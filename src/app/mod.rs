use crate::config::EnvConfig;
use crate::models::Page;
use crate::pages::{AuthPage, DashboardPage, HomePage, NoticeToast, PreferencesPage, Sidebar};
use crate::state::AppContext;
use crate::view;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App(config: EnvConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Session probe runs once; it picks the first page.
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.restore().await;
        });
    });

    let model = ctx.model;
    let visibility = Memo::new(move |_| model.with(|m| view::page_visibility(m.page())));
    let hidden = move |page: Page| {
        !visibility
            .get()
            .iter()
            .any(|(p, shown)| *p == page && *shown)
    };
    let with_sidebar = Memo::new(move |_| model.with(|m| view::sidebar(m).visible));

    view! {
        <NoticeToast />
        <Sidebar />
        <main
            id="main-content"
            class="min-h-screen bg-background"
            class:pl-64=move || with_sidebar.get()
        >
            <section id=Page::Homepage.container_id() class:hidden=move || hidden(Page::Homepage)>
                <HomePage />
            </section>
            <section id=Page::Auth.container_id() class:hidden=move || hidden(Page::Auth)>
                <AuthPage />
            </section>
            <section id=Page::Preferences.container_id() class:hidden=move || hidden(Page::Preferences)>
                <PreferencesPage />
            </section>
            <section id=Page::Dashboard.container_id() class:hidden=move || hidden(Page::Dashboard)>
                <DashboardPage />
            </section>
        </main>
    }
}
