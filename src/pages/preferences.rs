use super::navigate;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Tag,
};
use crate::models::Page;
use crate::state::AppContext;
use crate::view::{self, CategoryOption, CounterState, OptionState};
use icons::Check;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn CategoryToggle(option: CategoryOption) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let category = option.category;
    let (state_class, pressed) = match option.state {
        OptionState::Selected => ("selected border-primary bg-primary/10 text-foreground", true),
        OptionState::Disabled => ("disabled cursor-not-allowed opacity-50", false),
        OptionState::Available => ("hover:bg-accent", false),
    };
    let class = format!(
        "category-option flex items-center justify-between gap-2 rounded-lg border px-3 py-2 text-left text-sm transition-colors {state_class}"
    );

    view! {
        <button
            type="button"
            class=class
            data-category=category.to_string()
            aria-pressed=pressed.to_string()
            disabled=option.state == OptionState::Disabled
            on:click=move |_| ctx.controller().toggle_category(category)
        >
            <span>{category.to_string()}</span>
            {pressed.then(|| view! { <Check class="size-4 text-primary" /> })}
        </button>
    }
}

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let prefs = Memo::new(move |_| ctx.model.with(view::preferences));

    let on_save = move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            let _ = controller.commit_preferences().await;
        });
    };

    view! {
        <div class="mx-auto flex w-full max-w-[880px] flex-col gap-6 px-4 py-10">
            <Card>
                <CardHeader>
                    <CardTitle class="text-lg">"Choose your categories"</CardTitle>
                    <CardDescription class="text-xs">
                        "Pick up to three. Recommendations follow what you choose."
                    </CardDescription>
                </CardHeader>
                <CardContent class="flex flex-col gap-4">
                    <div class="flex flex-wrap items-center gap-2 text-sm">
                        <span class="text-muted-foreground">"Selected:"</span>
                        <span id="selected-categories" class="inline-flex flex-wrap gap-1.5">
                            {move || {
                                let tags = prefs.get().tags;
                                if tags.is_empty() {
                                    view! { <span class="text-xs text-muted-foreground">"None selected"</span> }
                                        .into_any()
                                } else {
                                    tags.into_iter()
                                        .map(|t| view! { <Tag>{t}</Tag> })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </span>
                    </div>

                    <p
                        id="selection-counter"
                        class="text-xs"
                        class:text-muted-foreground=move || prefs.get().counter_state == CounterState::Empty
                        class:text-emerald-600=move || prefs.get().counter_state == CounterState::Valid
                    >
                        {move || prefs.get().counter_text}
                    </p>

                    <div id="category-options" class="grid grid-cols-1 gap-2 sm:grid-cols-2 md:grid-cols-3">
                        {move || {
                            prefs
                                .get()
                                .options
                                .into_iter()
                                .map(|option| view! { <CategoryToggle option=option /> })
                                .collect_view()
                        }}
                    </div>

                    <div class="flex items-center gap-2 pt-2">
                        <Button
                            size=ButtonSize::Sm
                            attr:id="save-preferences"
                            attr:disabled=move || !prefs.get().save_enabled
                            on:click=on_save
                        >
                            "Save Preferences"
                        </Button>
                        <Show when=move || prefs.get().show_skip fallback=|| ().into_view()>
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Sm
                                attr:id="skip-preferences"
                                on:click=move |_| navigate(ctx, Page::Dashboard)
                            >
                                "Skip to Dashboard"
                            </Button>
                        </Show>
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
