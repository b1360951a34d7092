use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    // Transient notice in the corner; colour comes from the `success`, `error` or `info` class added by the caller.
    clx! {Toast, div, "fixed right-4 top-4 z-50 flex max-w-sm items-center gap-2 rounded-lg border bg-card px-4 py-3 text-sm shadow-lg [&.success]:border-emerald-300 [&.error]:border-destructive/40 [&.error]:text-destructive [&.info]:border-sky-300"}
    clx! {ToastText, span, "leading-snug"}
}

#[allow(unused_imports)]
pub use components::*;
