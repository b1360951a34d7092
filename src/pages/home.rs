use super::navigate;
use crate::components::ui::{
    Button, ButtonSize, Card, CardContent, CardDescription, CardHeader, CardTitle, CategoryList,
    ProgressBar, StatGrid, StatLabel, StatValue,
};
use crate::models::Page;
use crate::state::AppContext;
use crate::view;
use icons::TrendingUp;
use leptos::prelude::*;

fn bar_fill(color: &str) -> &'static str {
    match color {
        "blue" => "bg-blue-500",
        "purple" => "bg-purple-500",
        "pink" => "bg-pink-500",
        "cyan" => "bg-cyan-500",
        "orange" => "bg-orange-500",
        _ => "bg-primary",
    }
}

#[component]
fn StatCard(label: &'static str, stat: &'static str, value: String) -> impl IntoView {
    view! {
        <Card class="items-center gap-1 py-4">
            <StatValue attr:data-stat=stat>{value}</StatValue>
            <StatLabel>{label}</StatLabel>
        </Card>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let model = ctx.model;

    let stats = Memo::new(move |_| model.with(|m| view::stats(m.stats())));
    let trending = Memo::new(move |_| model.with(|m| view::trending(m.trending())));

    view! {
        <div class="mx-auto flex w-full max-w-[1080px] flex-col gap-8 px-4 py-10">
            <div class="flex flex-col items-center gap-3 text-center">
                <h1 class="text-3xl font-semibold tracking-tight">"StreamLance"</h1>
                <p class="max-w-md text-sm text-muted-foreground">
                    "Freelance gigs from across the web, matched to what you do."
                </p>
                <Button
                    size=ButtonSize::Lg
                    attr:id="get-started-btn"
                    on:click=move |_| navigate(ctx, Page::Auth)
                >
                    "Get Started"
                </Button>
            </div>

            <StatGrid>
                {move || {
                    let s = stats.get();
                    view! {
                        <StatCard label="Active gigs" stat="active_gigs" value=s.active_gigs />
                        <StatCard label="Average budget" stat="avg_budget" value=s.avg_budget />
                        <StatCard label="Freelancers" stat="freelancers" value=s.freelancers />
                        <StatCard label="Gigs delivered" stat="delivered_gigs" value=s.delivered_gigs />
                    }
                }}
            </StatGrid>

            <Card>
                <CardHeader>
                    <CardTitle class="inline-flex items-center gap-2 text-base">
                        <TrendingUp class="size-4" />
                        "Trending categories"
                    </CardTitle>
                    <CardDescription class="text-xs">"Week-over-week demand"</CardDescription>
                </CardHeader>
                <CardContent>
                    <CategoryList attr:id="trending-categories">
                        {move || {
                            let t = trending.get();
                            match t.placeholder {
                                Some(text) => {
                                    view! { <p class="text-xs text-muted-foreground">{text}</p> }
                                        .into_any()
                                }
                                None => {
                                    t.rows
                                        .into_iter()
                                        .map(|row| {
                                            let fill = format!(
                                                "progress-fill h-full rounded-full {} {}",
                                                row.color,
                                                bar_fill(row.color),
                                            );
                                            let width = format!("width: {}%", row.width);
                                            view! {
                                                <div class="category-item flex flex-col gap-1.5">
                                                    <div class="flex items-center justify-between text-sm">
                                                        <span class="category-name">{row.name}</span>
                                                        <span class="category-change text-xs text-emerald-600">
                                                            {row.change}
                                                        </span>
                                                    </div>
                                                    <ProgressBar>
                                                        <div class=fill style=width></div>
                                                    </ProgressBar>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </CategoryList>
                </CardContent>
            </Card>
        </div>
    }
}
