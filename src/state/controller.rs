use super::{GigsState, ModelStore, NoticeKind};
use crate::api::{ApiClient, CsrfProvider, Transport};
use crate::error::{ApiResult, AppError, ValidationError};
use crate::models::{AuthMode, Category, Page, Session};
use std::rc::Rc;

const AUTH_FAILED: &str = "Authentication failed. Please try again.";

/// Drives every state transition of the client.
///
/// Each operation updates the model in its store and, where needed, talks to
/// the backend through the gateway. The store is never borrowed across an
/// `.await`, so the views can repaint while a request is in flight.
pub struct Controller<S, T, C> {
    store: S,
    api: Rc<ApiClient<T, C>>,
}

impl<S: Clone, T, C> Clone for Controller<S, T, C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            api: Rc::clone(&self.api),
        }
    }
}

impl<S, T, C> Controller<S, T, C>
where
    S: ModelStore,
    T: Transport + 'static,
    C: CsrfProvider + 'static,
{
    pub fn new(store: S, api: ApiClient<T, C>) -> Self {
        Self {
            store,
            api: Rc::new(api),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn notify(&self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let text = text.into();
        self.store.mutate(|m| m.notify(kind, text))
    }

    /// Applies `f` only if no navigation happened since `generation` was issued.
    ///
    /// Only page regions go through here; notices are global and always shown.
    fn if_current(&self, generation: u64, f: impl FnOnce(&mut super::AppModel)) {
        let applied = self.store.mutate(|m| {
            if m.is_current(generation) {
                f(m);
                true
            } else {
                false
            }
        });
        if !applied {
            log::debug!("dropping stale response for generation {generation}");
        }
    }

    // ----- navigation -----

    /// Shows `page` and runs its entry routine. Any page is reachable from any page.
    pub async fn go_to(&self, page: Page) {
        let generation = self.store.mutate(|m| m.enter_page(page));
        log::debug!("navigate to {page:?} (generation {generation})");

        match page {
            Page::Homepage => self.refresh_homepage(generation).await,
            Page::Auth => {}
            Page::Preferences => self.store.mutate(|m| m.reset_selection_from_session()),
            Page::Dashboard => self.refresh_dashboard(generation).await,
        }
    }

    async fn refresh_homepage(&self, generation: u64) {
        futures::join!(
            self.refresh_stats(generation),
            self.refresh_trending(generation)
        );
    }

    async fn refresh_stats(&self, generation: u64) {
        match self.api.stats().await {
            Ok(stats) => self.if_current(generation, |m| m.set_stats(stats)),
            Err(e) => {
                log::error!("error updating stats: {e:?}");
                self.notify(NoticeKind::Error, "Failed to load stats data");
            }
        }
    }

    async fn refresh_trending(&self, generation: u64) {
        match self.api.trending_categories().await {
            Ok(trending) => self.if_current(generation, |m| m.set_trending(trending)),
            Err(e) => {
                log::error!("error fetching trending categories: {e:?}");
                self.notify(NoticeKind::Error, "Failed to load trending categories");
            }
        }
    }

    async fn refresh_dashboard(&self, generation: u64) {
        let user_id = self.store.mutate(|m| {
            let target = m
                .session()
                .filter(|s| !s.preferences.is_empty())
                .map(|s| s.user_id.clone());
            match target {
                Some(Some(id)) => {
                    m.set_gigs(GigsState::Loading);
                    Some(id)
                }
                Some(None) => {
                    log::warn!("session has preferences but no user id; skipping gigs");
                    m.set_gigs(GigsState::Failed);
                    None
                }
                None => {
                    m.set_gigs(GigsState::Idle);
                    None
                }
            }
        });
        let Some(user_id) = user_id else {
            return;
        };

        match self.api.recommended_gigs(&user_id).await {
            Ok(res) if !res.gigs.is_empty() => {
                log::info!("loaded {} recommended gigs", res.gigs.len());
                self.if_current(generation, |m| m.set_gigs(GigsState::Loaded(res.gigs)));
            }
            Ok(res) => {
                if let Some(msg) = &res.message {
                    self.notify(NoticeKind::Info, msg.clone());
                }
                self.if_current(generation, |m| {
                    m.set_gigs(GigsState::Empty {
                        message: res.message,
                    })
                });
            }
            Err(AppError::Rejected { message, .. }) => {
                self.notify(
                    NoticeKind::Info,
                    message
                        .clone()
                        .unwrap_or_else(|| "Error fetching recommended gigs".to_string()),
                );
                self.if_current(generation, |m| m.set_gigs(GigsState::Empty { message }));
            }
            Err(e) => {
                log::error!("error fetching gigs: {e:?}");
                self.notify(NoticeKind::Error, "Error fetching recommended gigs");
                self.if_current(generation, |m| m.set_gigs(GigsState::Failed));
            }
        }
    }

    // ----- session -----

    /// Asks the backend whether a session cookie is still valid.
    ///
    /// Signed in: loads preferences and moves from the homepage to the dashboard.
    /// Otherwise: clears the session and lands on the homepage.
    pub async fn restore(&self) {
        match self.api.current_user().await {
            Ok(user) => {
                log::info!("restored session for user {}", user.user_id);
                self.store
                    .mutate(|m| m.install_session(Session::new(Some(user.user_id), user.email)));
                self.fetch_preferences().await;
                if self.store.peek(|m| m.page()) == Page::Homepage {
                    self.go_to(Page::Dashboard).await;
                }
            }
            Err(e) => {
                log::debug!("no active session: {e:?}");
                self.store.mutate(|m| m.clear_session());
                self.go_to(Page::Homepage).await;
            }
        }
    }

    /// Reloads saved preferences for the signed-in user; no-op without a session.
    pub async fn fetch_preferences(&self) {
        let Some(user_id) = self
            .store
            .peek(|m| m.session().and_then(|s| s.user_id.clone()))
        else {
            return;
        };

        match self.api.get_preferences(&user_id).await {
            Ok(prefs) => self.store.mutate(|m| m.set_preferences(prefs)),
            Err(e) => log::error!("error fetching preferences: {e:?}"),
        }
    }

    /// Signs in or registers depending on the auth page mode.
    pub async fn submit_auth(&self, email: &str, password: &str) -> ApiResult<()> {
        let mode = self.store.peek(|m| m.auth_mode());
        self.authenticate(mode, email, password).await
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        self.authenticate(AuthMode::Login, email, password).await
    }

    pub async fn register(&self, email: &str, password: &str) -> ApiResult<()> {
        self.authenticate(AuthMode::Register, email, password).await
    }

    async fn authenticate(&self, mode: AuthMode, email: &str, password: &str) -> ApiResult<()> {
        if password.chars().count() < 6 {
            let e = AppError::from(ValidationError::PasswordTooShort);
            self.notify(NoticeKind::Error, e.to_string());
            return Err(e);
        }

        self.store.mutate(|m| m.set_auth_pending(true));
        let res = match mode {
            AuthMode::Login => self.api.login(email, password).await,
            AuthMode::Register => self.api.register(email, password).await,
        };
        self.store.mutate(|m| m.set_auth_pending(false));

        match res {
            Ok(res) => {
                self.store
                    .mutate(|m| m.install_session(Session::new(res.user_id, email)));
                self.notify(
                    NoticeKind::Success,
                    match mode {
                        AuthMode::Login => "Login successful!",
                        AuthMode::Register => "Registration successful!",
                    },
                );
                self.fetch_preferences().await;
                self.go_to(match mode {
                    AuthMode::Login => Page::Dashboard,
                    AuthMode::Register => Page::Preferences,
                })
                .await;
                Ok(())
            }
            Err(e) => {
                log::error!("auth error: {e:?}");
                self.notify(NoticeKind::Error, e.user_message(AUTH_FAILED));
                Err(e)
            }
        }
    }

    /// Ends the session. On failure the local session is kept.
    pub async fn logout(&self) -> ApiResult<()> {
        match self.api.logout().await {
            Ok(res) => {
                self.store.mutate(|m| m.clear_session());
                if let Some(message) = res.message {
                    self.notify(NoticeKind::Success, message);
                }
                self.go_to(Page::Homepage).await;
                Ok(())
            }
            Err(e) => {
                log::error!("logout error: {e:?}");
                self.notify(
                    NoticeKind::Error,
                    failure_text(&e, "An error occurred during logout"),
                );
                Err(e)
            }
        }
    }

    // ----- selection -----

    pub fn toggle_category(&self, category: Category) {
        self.store.mutate(|m| m.toggle_category(category));
    }

    /// Saves the selection as the user's preferences, then opens the dashboard.
    ///
    /// Fails locally, without a request, unless 1 to 3 categories are picked.
    pub async fn commit_preferences(&self) -> ApiResult<()> {
        let picked = self.store.peek(|m| {
            let categories = m.selection().validate_for_commit()?;
            let user_id = m
                .session()
                .and_then(|s| s.user_id.clone())
                .ok_or(ValidationError::NotSignedIn)?;
            Ok::<_, ValidationError>((user_id, categories))
        });
        let (user_id, categories) = match picked {
            Ok(p) => p,
            Err(v) => {
                self.notify(NoticeKind::Error, v.to_string());
                return Err(v.into());
            }
        };

        match self.api.put_preferences(&user_id, &categories).await {
            Ok(_) => {
                self.store.mutate(|m| m.set_preferences(categories));
                self.notify(NoticeKind::Success, "Preferences saved successfully!");
                self.go_to(Page::Dashboard).await;
                Ok(())
            }
            Err(e) => {
                log::error!("error saving preferences: {e:?}");
                self.notify(
                    NoticeKind::Error,
                    failure_text(&e, "An error occurred while saving preferences"),
                );
                Err(e)
            }
        }
    }

    // ----- auth page / notices -----

    pub fn toggle_auth_mode(&self) {
        self.store
            .mutate(|m| m.set_auth_mode(m.auth_mode().toggled()));
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.store.mutate(|m| m.dismiss_notice(id));
    }
}

/// Server rejections show the server's words; everything else gets `generic`
/// unless it is a local validation message.
fn failure_text(e: &AppError, generic: &str) -> String {
    match e {
        AppError::Validation(v) => v.to_string(),
        AppError::Rejected { .. } => e.user_message(generic),
        AppError::Transport { .. } => generic.to_string(),
    }
}
