mod controller;

pub use controller::Controller;

use crate::api::{ApiClient, HttpTransport, MetaCsrfProvider};
use crate::config::EnvConfig;
use crate::models::{AuthMode, Category, Gig, Page, Session, Stats, TrendingCategory};
use crate::selection::SelectionBuffer;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// The one message currently shown in the toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Recommended-gigs region of the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GigsState {
    /// Nothing requested (no session or no preferences yet).
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Gig>),
    /// Backend answered without gigs; `message` explains why.
    Empty { message: Option<String> },
    Failed,
}

/// Client state: current page, signed-in user, unsaved selection and the
/// data fetched for each page.
///
/// Fields are private; changes go through the named operations below so the
/// invariants (single active page, selection cap, session/selection coupling)
/// hold no matter who calls them.
#[derive(Clone, Debug, PartialEq)]
pub struct AppModel {
    page: Page,
    /// Bumped on every navigation; page-entry fetches compare against it.
    generation: u64,
    session: Option<Session>,
    selection: SelectionBuffer,
    auth_mode: AuthMode,
    auth_pending: bool,
    stats: Option<Stats>,
    trending: Vec<TrendingCategory>,
    gigs: GigsState,
    notice: Option<Notice>,
    last_notice_id: u64,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            page: Page::Homepage,
            generation: 0,
            session: None,
            selection: SelectionBuffer::new(),
            auth_mode: AuthMode::default(),
            auth_pending: false,
            stats: None,
            trending: Vec::new(),
            gigs: GigsState::Idle,
            notice: None,
            last_notice_id: 0,
        }
    }
}

impl AppModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn selection(&self) -> &SelectionBuffer {
        &self.selection
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn auth_pending(&self) -> bool {
        self.auth_pending
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.stats.as_ref()
    }

    pub fn trending(&self) -> &[TrendingCategory] {
        &self.trending
    }

    pub fn gigs(&self) -> &GigsState {
        &self.gigs
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub(crate) fn enter_page(&mut self, page: Page) -> u64 {
        self.page = page;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub(crate) fn install_session(&mut self, session: Session) {
        self.selection.reset(&session.preferences);
        self.session = Some(session);
    }

    /// Drops the session together with everything derived from it.
    pub(crate) fn clear_session(&mut self) {
        self.session = None;
        self.selection.clear();
        self.gigs = GigsState::Idle;
    }

    /// Replaces the saved preferences and reloads the selection from them.
    /// Ignored when nobody is signed in.
    pub(crate) fn set_preferences(&mut self, preferences: Vec<Category>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.preferences = preferences;
        self.selection.reset(&session.preferences);
    }

    pub(crate) fn reset_selection_from_session(&mut self) {
        match &self.session {
            Some(s) => self.selection.reset(&s.preferences),
            None => self.selection.clear(),
        }
    }

    pub(crate) fn toggle_category(&mut self, category: Category) {
        self.selection.toggle(category);
    }

    pub(crate) fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }

    pub(crate) fn set_auth_pending(&mut self, pending: bool) {
        self.auth_pending = pending;
    }

    pub(crate) fn set_stats(&mut self, stats: Stats) {
        self.stats = Some(stats);
    }

    pub(crate) fn set_trending(&mut self, trending: Vec<TrendingCategory>) {
        self.trending = trending;
    }

    pub(crate) fn set_gigs(&mut self, gigs: GigsState) {
        self.gigs = gigs;
    }

    /// Shows `text`, replacing whatever notice was up. Returns the new notice id.
    pub(crate) fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.last_notice_id += 1;
        self.notice = Some(Notice {
            id: self.last_notice_id,
            kind,
            text: text.into(),
        });
        self.last_notice_id
    }

    /// Hides notice `id` if it is still the one on screen.
    pub(crate) fn dismiss_notice(&mut self, id: u64) {
        if self.notice.as_ref().is_some_and(|n| n.id == id) {
            self.notice = None;
        }
    }
}

/// Where the [`AppModel`] lives.
///
/// The browser keeps it in a reactive signal so the views repaint on change;
/// tests keep it in a plain `RefCell`.
pub trait ModelStore: Clone + 'static {
    fn peek<R>(&self, f: impl FnOnce(&AppModel) -> R) -> R;
    fn mutate<R>(&self, f: impl FnOnce(&mut AppModel) -> R) -> R;
}

impl ModelStore for Rc<RefCell<AppModel>> {
    fn peek<R>(&self, f: impl FnOnce(&AppModel) -> R) -> R {
        f(&*self.borrow())
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut AppModel) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

impl ModelStore for RwSignal<AppModel> {
    fn peek<R>(&self, f: impl FnOnce(&AppModel) -> R) -> R {
        self.with_untracked(f)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut AppModel) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }
}

pub(crate) type AppController = Controller<RwSignal<AppModel>, HttpTransport, MetaCsrfProvider>;

/// Handles shared with every component through Leptos context.
#[derive(Clone, Copy)]
pub(crate) struct AppContext {
    pub model: RwSignal<AppModel>,
    pub config: StoredValue<EnvConfig>,
}

impl AppContext {
    pub fn new(config: EnvConfig) -> Self {
        Self {
            model: RwSignal::new(AppModel::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn controller(&self) -> AppController {
        let api_url = self.config.with_value(|c| c.api_url.clone());
        Controller::new(
            self.model,
            ApiClient::new(HttpTransport::new(api_url), MetaCsrfProvider::default()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn session(prefs: Vec<Category>) -> Session {
        Session {
            user_id: Some(UserId("1".to_string())),
            email: "a@b.c".to_string(),
            preferences: prefs,
        }
    }

    #[test]
    fn test_enter_page_bumps_generation() {
        let mut m = AppModel::new();
        let g1 = m.enter_page(Page::Dashboard);
        let g2 = m.enter_page(Page::Homepage);
        assert_ne!(g1, g2);
        assert!(!m.is_current(g1));
        assert!(m.is_current(g2));
        assert_eq!(m.page(), Page::Homepage);
    }

    #[test]
    fn test_set_preferences_without_session_is_noop() {
        let mut m = AppModel::new();
        m.set_preferences(vec![Category::WebDevelopment]);
        assert!(m.session().is_none());
        assert!(m.selection().is_empty());
    }

    #[test]
    fn test_set_preferences_reloads_selection() {
        let mut m = AppModel::new();
        m.install_session(session(vec![]));
        m.toggle_category(Category::ItSupport);
        m.set_preferences(vec![Category::WebDevelopment, Category::GameDevelopment]);
        assert_eq!(
            m.selection().selected(),
            &[Category::WebDevelopment, Category::GameDevelopment]
        );
    }

    #[test]
    fn test_clear_session_drops_selection() {
        let mut m = AppModel::new();
        m.install_session(session(vec![Category::WebDevelopment]));
        m.set_gigs(GigsState::Loading);
        m.clear_session();
        assert!(!m.is_authenticated());
        assert!(m.selection().is_empty());
        assert_eq!(m.gigs(), &GigsState::Idle);
    }

    #[test]
    fn test_newer_notice_wins_and_old_timer_does_not_dismiss_it() {
        let mut m = AppModel::new();
        let first = m.notify(NoticeKind::Error, "first");
        let second = m.notify(NoticeKind::Success, "second");
        m.dismiss_notice(first);
        assert_eq!(m.notice().map(|n| n.text.as_str()), Some("second"));
        m.dismiss_notice(second);
        assert!(m.notice().is_none());
    }

    #[test]
    fn test_signal_store_mutates_and_reads() {
        let store = RwSignal::new(AppModel::new());
        store.mutate(|m| m.set_auth_mode(AuthMode::Login));
        assert_eq!(store.peek(|m| m.auth_mode()), AuthMode::Login);
    }
}
