use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex flex-col items-start gap-1.5 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardDescription, p, "text-muted-foreground text-sm"}

    // Homepage numbers.
    clx! {StatGrid, div, "grid grid-cols-2 gap-4 md:grid-cols-4"}
    clx! {StatValue, span, "text-2xl font-semibold tabular-nums"}
    clx! {StatLabel, span, "text-xs text-muted-foreground"}

    // Trending bars.
    clx! {CategoryList, div, "flex flex-col gap-3"}
    clx! {ProgressBar, div, "h-2 w-full overflow-hidden rounded-full bg-muted"}

    // Recommended gigs.
    clx! {GigList, div, "flex flex-col gap-4"}
    clx! {GigMeta, div, "flex flex-wrap items-center gap-3 text-xs text-muted-foreground"}

    clx! {Tag, span, "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-medium"}
}

#[allow(unused_imports)]
pub use components::*;
