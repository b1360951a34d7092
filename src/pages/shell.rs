use super::navigate;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Tag, Toast, ToastText};
use crate::config::NOTICE_DISMISS_MS;
use crate::models::Page;
use crate::state::{AppContext, NoticeKind};
use crate::view;
use icons::{LayoutDashboard, LogOut, Settings};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::set_timeout;
use std::time::Duration;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let side = Memo::new(move |_| ctx.model.with(view::sidebar));

    let current = move |page: Page| (side.get().active_nav == Some(page)).then_some("page");

    let on_logout = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.logout().await;
        });
    };

    view! {
        <aside
            id="sidebar"
            class="fixed inset-y-0 left-0 z-40 flex w-64 flex-col gap-6 border-r bg-card px-4 py-6"
            class:hidden=move || !side.get().visible
        >
            <div class="flex flex-col gap-1 px-2">
                <span class="text-sm font-semibold">"StreamLance"</span>
                <span id="sidebar-user-email" class="truncate text-xs text-muted-foreground">
                    {move || side.get().email}
                </span>
            </div>

            <div
                id="sidebar-preferences"
                class="flex flex-col gap-2 px-2"
                class:hidden=move || side.get().preference_tags.is_empty()
            >
                <span class="text-xs font-medium text-muted-foreground">"Your categories"</span>
                <div class="flex flex-wrap gap-1.5">
                    {move || {
                        side.get()
                            .preference_tags
                            .into_iter()
                            .map(|t| view! { <Tag>{t}</Tag> })
                            .collect_view()
                    }}
                </div>
            </div>

            <nav class="flex flex-col gap-1">
                <Button
                    variant=ButtonVariant::Nav
                    size=ButtonSize::Sm
                    attr:id="nav-dashboard"
                    attr:aria-current=move || current(Page::Dashboard)
                    on:click=move |_| navigate(ctx, Page::Dashboard)
                >
                    <LayoutDashboard />
                    "Dashboard"
                </Button>
                <Button
                    variant=ButtonVariant::Nav
                    size=ButtonSize::Sm
                    attr:id="nav-preferences"
                    attr:aria-current=move || current(Page::Preferences)
                    on:click=move |_| navigate(ctx, Page::Preferences)
                >
                    <Settings />
                    "Preferences"
                </Button>
            </nav>

            <div class="mt-auto">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    class="w-full justify-start"
                    attr:id="logout-btn"
                    on:click=on_logout
                >
                    <LogOut />
                    "Log out"
                </Button>
            </div>
        </aside>
    }
}

/// Corner toast for the current notice. Each notice dismisses itself after a
/// fixed delay unless a newer one replaced it first.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let notice = Memo::new(move |_| ctx.model.with(|m| m.notice().cloned()));

    Effect::new(move |_| {
        let Some(id) = notice.get().map(|n| n.id) else {
            return;
        };
        set_timeout(
            move || ctx.controller().dismiss_notice(id),
            Duration::from_millis(NOTICE_DISMISS_MS),
        );
    });

    view! {
        {move || {
            notice.get().map(|n| {
                let kind = match n.kind {
                    NoticeKind::Success => "success",
                    NoticeKind::Error => "error",
                    NoticeKind::Info => "info",
                };
                view! {
                    <Toast class=format!("message-toast {kind}") attr:id="message-toast" attr:role="status">
                        <ToastText>{n.text}</ToastText>
                    </Toast>
                }
            })
        }}
    }
}
