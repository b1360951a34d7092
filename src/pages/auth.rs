use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Label, Spinner,
};
use crate::state::AppContext;
use crate::view;
use icons::Check;
use leptos::prelude::*;
use leptos::task::spawn_local;

const BENEFITS: [&str; 3] = [
    "Gigs from every major board in one feed",
    "Recommendations tuned to your categories",
    "Free while in beta",
];

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());

    let auth = Memo::new(move |_| ctx.model.with(view::auth));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().pending {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        let controller = ctx.controller();

        spawn_local(async move {
            // Failures are already surfaced as a notice.
            let _ = controller.submit_auth(&email_val, &password_val).await;
        });
    };

    let on_toggle = move |_| ctx.controller().toggle_auth_mode();

    view! {
        <div class="mx-auto flex w-full max-w-sm flex-col justify-center px-4 py-10">
            <Card>
                <CardHeader>
                    <CardTitle class="text-lg" attr:id="auth-title">{move || auth.get().title}</CardTitle>
                    <CardDescription class="text-xs" attr:id="auth-subtitle">
                        {move || auth.get().subtitle}
                    </CardDescription>
                </CardHeader>

                <CardContent>
                    <form id="auth-form" class="flex flex-col gap-3" on:submit=on_submit>
                        <div class="flex flex-col gap-1.5">
                            <Label html_for="email" class="text-xs">"Email"</Label>
                            <Input
                                id="email"
                                r#type="email"
                                placeholder="you@example.com"
                                autocomplete="email"
                                bind_value=email
                                required=true
                                class="h-8 text-sm"
                            />
                        </div>

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="password" class="text-xs">"Password"</Label>
                            <Input
                                id="password"
                                r#type="password"
                                placeholder="••••••••"
                                autocomplete="current-password"
                                bind_value=password
                                required=true
                                class="h-8 text-sm"
                            />
                            <p
                                id="password-help"
                                class="text-xs text-muted-foreground"
                                class:hidden=move || !auth.get().show_password_help
                            >
                                "At least 6 characters."
                            </p>
                        </div>

                        <Button
                            class="w-full"
                            size=ButtonSize::Sm
                            attr:id="auth-submit"
                            attr:disabled=move || auth.get().pending
                        >
                            <span class="inline-flex items-center gap-2">
                                <Show when=move || auth.get().pending fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || auth.get().submit_label}
                            </span>
                        </Button>
                    </form>

                    <Button
                        variant=ButtonVariant::Link
                        size=ButtonSize::Sm
                        class="mt-2 w-full"
                        attr:id="auth-toggle"
                        attr:r#type="button"
                        on:click=on_toggle
                    >
                        {move || auth.get().toggle_label}
                    </Button>

                    <ul
                        id="auth-benefits"
                        class="mt-4 flex flex-col gap-2 border-t pt-4 text-xs text-muted-foreground"
                        class:hidden=move || !auth.get().show_benefits
                    >
                        {BENEFITS
                            .iter()
                            .map(|b| {
                                view! {
                                    <li class="inline-flex items-center gap-2">
                                        <Check class="size-3.5 text-emerald-600" />
                                        {*b}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </CardContent>
            </Card>
        </div>
    }
}
