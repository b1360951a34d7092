//! Pure projections of [`AppModel`] into what each page region shows.
//!
//! Components in `pages` only paint these; nothing here touches the DOM.

mod format;

pub(crate) use format::{format_count, format_plain, format_published, truncate_description};

use crate::models::{AuthMode, Category, Gig, Page, Stats, TrendingCategory};
use crate::selection::MAX_SELECTED;
use crate::state::{AppModel, GigsState};

const TRENDING_ROWS: usize = 5;
const BAR_COLORS: [&str; 5] = ["blue", "purple", "pink", "cyan", "orange"];
const NO_GIGS_FALLBACK: &str = "No gigs to show right now.";

/// `(page, visible)` for every page; exactly one entry is visible.
pub fn page_visibility(active: Page) -> Vec<(Page, bool)> {
    Page::all().map(|p| (p, p == active)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarView {
    pub visible: bool,
    pub email: String,
    pub preference_tags: Vec<String>,
    /// Nav entry to highlight.
    pub active_nav: Option<Page>,
}

pub fn sidebar(model: &AppModel) -> SidebarView {
    let page = model.page();
    let visible = model.is_authenticated() && !page.is_public();
    if !visible {
        return SidebarView {
            visible,
            email: String::new(),
            preference_tags: Vec::new(),
            active_nav: None,
        };
    }

    let (email, tags) = model
        .session()
        .map(|s| (s.email.clone(), category_names(&s.preferences)))
        .unwrap_or_default();

    SidebarView {
        visible,
        email,
        preference_tags: tags,
        active_nav: matches!(page, Page::Dashboard | Page::Preferences).then_some(page),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub submit_label: &'static str,
    pub toggle_label: &'static str,
    pub show_password_help: bool,
    pub show_benefits: bool,
    pub pending: bool,
}

pub fn auth(model: &AppModel) -> AuthView {
    let pending = model.auth_pending();
    match model.auth_mode() {
        AuthMode::Login => AuthView {
            title: "Welcome Back",
            subtitle: "Sign in to access your personalized dashboard",
            submit_label: "Sign In",
            toggle_label: "Don't have an account? Sign up instead",
            show_password_help: false,
            show_benefits: false,
            pending,
        },
        AuthMode::Register => AuthView {
            title: "Join StreamLance",
            subtitle: "Start discovering your perfect freelance opportunities",
            submit_label: "Create Account",
            toggle_label: "Already have an account? Sign in instead",
            show_password_help: true,
            show_benefits: true,
            pending,
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsView {
    pub active_gigs: String,
    pub avg_budget: String,
    pub freelancers: String,
    pub delivered_gigs: String,
}

const NA: &str = "N/A";

pub fn stats(stats: Option<&Stats>) -> StatsView {
    let s = stats.cloned().unwrap_or_default();
    StatsView {
        active_gigs: s.active_gigs.map(format_count).unwrap_or_else(|| NA.to_string()),
        avg_budget: s
            .avg_budget
            .filter(|v| *v != 0.0)
            .map(|v| format!("${}", format_count(v)))
            .unwrap_or_else(|| NA.to_string()),
        freelancers: s.freelancers.map(format_count).unwrap_or_else(|| NA.to_string()),
        delivered_gigs: s
            .delivered_gigs
            .filter(|v| *v != 0.0)
            .map(format_plain)
            .unwrap_or_else(|| NA.to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendingRow {
    pub name: String,
    pub change: String,
    /// Percent of the bar to fill, 0..=100.
    pub width: f64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendingView {
    pub rows: Vec<TrendingRow>,
    pub placeholder: Option<&'static str>,
}

pub fn trending(categories: &[TrendingCategory]) -> TrendingView {
    let rows: Vec<TrendingRow> = categories
        .iter()
        .take(TRENDING_ROWS)
        .enumerate()
        .map(|(i, c)| TrendingRow {
            name: c.name.clone(),
            change: c.change.clone(),
            width: c.normalized_width(),
            color: BAR_COLORS[i % BAR_COLORS.len()],
        })
        .collect();

    TrendingView {
        placeholder: rows.is_empty().then_some("No trending categories yet."),
        rows,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterState {
    Empty,
    Valid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Selected,
    Disabled,
    Available,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOption {
    pub category: Category,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferencesView {
    /// Empty means "None selected".
    pub tags: Vec<String>,
    pub counter_text: String,
    pub counter_state: CounterState,
    pub save_enabled: bool,
    pub show_skip: bool,
    pub options: Vec<CategoryOption>,
}

pub fn preferences(model: &AppModel) -> PreferencesView {
    let sel = model.selection();
    let has_saved = model
        .session()
        .is_some_and(|s| !s.preferences.is_empty());

    PreferencesView {
        tags: category_names(sel.selected()),
        counter_text: format!("{}/{} categories selected", sel.len(), MAX_SELECTED),
        counter_state: if sel.is_empty() {
            CounterState::Empty
        } else {
            CounterState::Valid
        },
        save_enabled: !sel.is_empty(),
        show_skip: has_saved,
        options: Category::all()
            .map(|category| CategoryOption {
                category,
                state: if sel.contains(category) {
                    OptionState::Selected
                } else if sel.is_full() {
                    OptionState::Disabled
                } else {
                    OptionState::Available
                },
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GigCard {
    pub title: String,
    pub link: String,
    pub category: String,
    pub published: String,
    pub budget: Option<String>,
    pub description: String,
}

impl From<&Gig> for GigCard {
    fn from(g: &Gig) -> Self {
        let budget = g
            .budget_amount
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(|amount| match g.budget_currency.as_deref() {
                Some(cur) if !cur.trim().is_empty() => format!("{amount} {cur}"),
                _ => amount.to_string(),
            });

        Self {
            title: g.title.clone(),
            link: g.link.clone(),
            category: g.category.clone(),
            published: g
                .published_at
                .as_deref()
                .map(format_published)
                .unwrap_or_default(),
            budget,
            description: truncate_description(g.description.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusView {
    Tags(Vec<String>),
    Onboarding,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GigsView {
    Hidden,
    Loading,
    List(Vec<GigCard>),
    Placeholder(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub welcome: String,
    pub focus: FocusView,
    pub gigs: GigsView,
}

pub fn dashboard(model: &AppModel) -> DashboardView {
    let session = model.session();
    let welcome = match session {
        Some(s) => format!("Welcome back, {}!", s.email),
        None => "Welcome back!".to_string(),
    };

    let prefs = session.map(|s| s.preferences.as_slice()).unwrap_or_default();
    if prefs.is_empty() {
        return DashboardView {
            welcome,
            focus: FocusView::Onboarding,
            gigs: GigsView::Hidden,
        };
    }

    let gigs = match model.gigs() {
        GigsState::Idle => GigsView::Hidden,
        GigsState::Loading => GigsView::Loading,
        GigsState::Loaded(list) if !list.is_empty() => {
            GigsView::List(list.iter().map(GigCard::from).collect())
        }
        GigsState::Loaded(_) | GigsState::Failed => {
            GigsView::Placeholder(NO_GIGS_FALLBACK.to_string())
        }
        GigsState::Empty { message } => GigsView::Placeholder(
            message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| NO_GIGS_FALLBACK.to_string()),
        ),
    };

    DashboardView {
        welcome,
        focus: FocusView::Tags(category_names(prefs)),
        gigs,
    }
}

fn category_names(categories: &[Category]) -> Vec<String> {
    categories.iter().map(|c| c.to_string()).collect()
}
