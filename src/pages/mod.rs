mod auth;
mod dashboard;
mod home;
mod preferences;
mod shell;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use preferences::PreferencesPage;
pub use shell::{NoticeToast, Sidebar};

use crate::models::Page;
use crate::state::AppContext;
use leptos::task::spawn_local;

/// Switches the active page and kicks off its entry fetches.
pub(crate) fn navigate(ctx: AppContext, page: Page) {
    let controller = ctx.controller();
    spawn_local(async move {
        controller.go_to(page).await;
    });
}
