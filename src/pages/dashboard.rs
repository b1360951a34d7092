use super::navigate;
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle, GigList, GigMeta,
    Spinner, Tag,
};
use crate::models::Page;
use crate::state::AppContext;
use crate::view::{self, FocusView, GigCard, GigsView};
use icons::{Calendar, DollarSign, ExternalLink};
use leptos::prelude::*;

#[component]
fn GigItem(card: GigCard) -> impl IntoView {
    let GigCard {
        title,
        link,
        category,
        published,
        budget,
        description,
    } = card;
    let title_link = link.clone();

    view! {
        <Card class="gig-card gap-3 py-4">
            <CardHeader class="gap-2">
                <CardTitle class="text-base">
                    <a href=title_link target="_blank" rel="noopener noreferrer" class="hover:underline">
                        {title}
                    </a>
                </CardTitle>
                <GigMeta>
                    <Tag>{category}</Tag>
                    {(!published.is_empty()).then(|| view! {
                        <span class="inline-flex items-center gap-1">
                            <Calendar class="size-3.5" />
                            {published}
                        </span>
                    })}
                    {budget.map(|b| view! {
                        <span class="inline-flex items-center gap-1">
                            <DollarSign class="size-3.5" />
                            {b}
                        </span>
                    })}
                </GigMeta>
            </CardHeader>
            <CardContent class="flex flex-col gap-3">
                <p class="text-sm text-muted-foreground">{description}</p>
                <a
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-1 text-sm text-primary underline-offset-4 hover:underline"
                >
                    <ExternalLink class="size-4" />
                    "View Opportunity"
                </a>
            </CardContent>
        </Card>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let dash = Memo::new(move |_| ctx.model.with(view::dashboard));

    let focus = move || match dash.get().focus {
        FocusView::Tags(tags) => view! {
            <div class="flex flex-wrap items-center gap-2 text-sm">
                <span class="text-muted-foreground">"Your focus areas:"</span>
                {tags.into_iter().map(|t| view! { <Tag>{t}</Tag> }).collect_view()}
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    attr:id="update-preferences"
                    on:click=move |_| navigate(ctx, Page::Preferences)
                >
                    "Update"
                </Button>
            </div>
        }
        .into_any(),
        FocusView::Onboarding => view! {
            <div id="onboarding" class="flex flex-col items-start gap-3 rounded-lg border border-dashed p-4">
                <p class="text-sm text-muted-foreground">
                    "You haven't set any preferences yet. Let's personalize your experience!"
                </p>
                <Button size=ButtonSize::Sm on:click=move |_| navigate(ctx, Page::Preferences)>
                    "Set Your Preferences"
                </Button>
            </div>
        }
        .into_any(),
    };

    let gigs = move || match dash.get().gigs {
        GigsView::Hidden => ().into_any(),
        GigsView::Loading => view! {
            <div class="flex items-center gap-2 py-6 text-xs text-muted-foreground">
                <Spinner />
                "Loading recommendations..."
            </div>
        }
        .into_any(),
        GigsView::List(cards) => view! {
            <GigList attr:id="recommended-gigs">
                {cards.into_iter().map(|card| view! { <GigItem card=card /> }).collect_view()}
            </GigList>
        }
        .into_any(),
        GigsView::Placeholder(text) => view! {
            <div id="no-gigs-message" class="rounded-lg border border-dashed p-6 text-center text-sm text-muted-foreground">
                {text}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="mx-auto flex w-full max-w-[880px] flex-col gap-6 px-4 py-10">
            <Card>
                <CardHeader>
                    <CardTitle class="text-lg" attr:id="welcome-message">{move || dash.get().welcome}</CardTitle>
                </CardHeader>
                <CardContent>{focus}</CardContent>
            </Card>

            <section class="flex flex-col gap-3">
                <h2 class="text-sm font-semibold">"Recommended for you"</h2>
                {gigs}
            </section>
        </div>
    }
}
