use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// Gig categories known to the backend.
///
/// Declaration order is the display order of the preferences grid.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[strum(serialize = "AI/ML & Data Science")]
    #[serde(rename = "AI/ML & Data Science")]
    AiMlDataScience,
    #[strum(serialize = "Web Development")]
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[strum(serialize = "Mobile Development")]
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[strum(serialize = "Software Engineering")]
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    #[strum(serialize = "Game Development")]
    #[serde(rename = "Game Development")]
    GameDevelopment,
    #[strum(serialize = "Design & Creative")]
    #[serde(rename = "Design & Creative")]
    DesignCreative,
    #[strum(serialize = "Digital Marketing")]
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[strum(serialize = "Content & Writing")]
    #[serde(rename = "Content & Writing")]
    ContentWriting,
    #[strum(serialize = "System Admin & DevOps")]
    #[serde(rename = "System Admin & DevOps")]
    SystemAdminDevOps,
    #[strum(serialize = "IT & Support")]
    #[serde(rename = "IT & Support")]
    ItSupport,
    #[strum(serialize = "Business & Consulting")]
    #[serde(rename = "Business & Consulting")]
    BusinessConsulting,
    #[strum(serialize = "Engineering & Architecture")]
    #[serde(rename = "Engineering & Architecture")]
    EngineeringArchitecture,
    #[strum(serialize = "Admin & Data Entry")]
    #[serde(rename = "Admin & Data Entry")]
    AdminDataEntry,
}

impl Category {
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }

    /// Parses a backend category name, dropping anything outside the closed set.
    pub(crate) fn parse_known(names: &[String]) -> Vec<Category> {
        names
            .iter()
            .filter_map(|n| match n.parse::<Category>() {
                Ok(c) => Some(c),
                Err(_) => {
                    log::warn!("ignoring unknown category from backend: {n}");
                    None
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    Homepage,
    Auth,
    Preferences,
    Dashboard,
}

impl Page {
    pub fn all() -> impl Iterator<Item = Page> {
        Page::iter()
    }

    /// DOM id of the page container.
    pub fn container_id(self) -> &'static str {
        match self {
            Page::Homepage => "homepage",
            Page::Auth => "auth-page",
            Page::Preferences => "preferences-page",
            Page::Dashboard => "dashboard-page",
        }
    }

    /// Pages that never show the signed-in sidebar.
    pub fn is_public(self) -> bool {
        matches!(self, Page::Homepage | Page::Auth)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    Login,
    #[default]
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Backend user id. The backend emits integers; strings are accepted too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Ok(UserId(s)),
            serde_json::Value::Number(n) => Ok(UserId(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "user id must be a string or number, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<UserId>,
    pub email: String,
    pub preferences: Vec<Category>,
}

impl Session {
    pub(crate) fn new(user_id: Option<UserId>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            preferences: Vec::new(),
        }
    }
}

/// Aggregate numbers for the homepage. Any field may be missing.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Stats {
    #[serde(default)]
    pub active_gigs: Option<f64>,
    #[serde(default)]
    pub avg_budget: Option<f64>,
    #[serde(default)]
    pub freelancers: Option<f64>,
    #[serde(default)]
    pub delivered_gigs: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendingCategory {
    pub name: String,
    /// Formatted as `+N%`.
    pub change: String,
}

impl TrendingCategory {
    /// Bar width in percent, assuming 400% is the largest change worth showing.
    pub fn normalized_width(&self) -> f64 {
        let raw = self.change.trim().replace(['+', '%'], "");
        match raw.trim().parse::<f64>() {
            Ok(pct) if pct.is_finite() => (pct / 400.0 * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Gig {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    /// Sent as a decimal string by the backend; plain numbers are accepted.
    #[serde(default, deserialize_with = "string_or_number")]
    pub budget_amount: Option<String>,
    #[serde(default)]
    pub budget_currency: Option<String>,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[derive(Deserialize, Clone, Debug)]
pub(crate) struct CurrentUserResponse {
    pub user_id: UserId,
    pub email: String,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Clone, Debug)]
pub(crate) struct AuthResponse {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub(crate) struct PreferencesResponse {
    #[serde(default)]
    pub preferences: Option<Vec<String>>,
}

#[derive(Serialize, Clone, Debug)]
pub(crate) struct UpdatePreferencesRequest {
    pub categories: Vec<Category>,
}

#[derive(Deserialize, Clone, Debug)]
pub(crate) struct RecommendedGigsResponse {
    #[serde(default)]
    pub gigs: Vec<Gig>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_names() {
        let names: Vec<String> = Category::all().map(|c| c.to_string()).collect();
        assert_eq!(names.len(), 13);
        assert_eq!(names[0], "AI/ML & Data Science");
        assert_eq!(names[5], "Design & Creative");
        assert_eq!(names[12], "Admin & Data Entry");
    }

    #[test]
    fn test_category_serializes_as_display_name() {
        let v = serde_json::to_value(Category::SystemAdminDevOps).expect("should serialize");
        assert_eq!(v, "System Admin & DevOps");
        let parsed: Category =
            serde_json::from_str("\"IT & Support\"").expect("should deserialize");
        assert_eq!(parsed, Category::ItSupport);
    }

    #[test]
    fn test_parse_known_drops_unknown_names() {
        let names = vec![
            "Web Development".to_string(),
            "Other".to_string(),
            "Game Development".to_string(),
        ];
        assert_eq!(
            Category::parse_known(&names),
            vec![Category::WebDevelopment, Category::GameDevelopment]
        );
    }

    #[test]
    fn test_trending_width_clamps_at_full_bar() {
        let t = TrendingCategory {
            name: "Web Development".to_string(),
            change: "+800%".to_string(),
        };
        assert_eq!(t.normalized_width(), 100.0);
    }

    #[test]
    fn test_trending_width_scales_against_400_percent() {
        let t = TrendingCategory {
            name: "x".to_string(),
            change: "+100%".to_string(),
        };
        assert_eq!(t.normalized_width(), 25.0);
    }

    #[test]
    fn test_trending_width_garbage_is_zero() {
        let t = TrendingCategory {
            name: "x".to_string(),
            change: "n/a".to_string(),
        };
        assert_eq!(t.normalized_width(), 0.0);
    }

    #[test]
    fn test_user_id_accepts_number_or_string() {
        let a: CurrentUserResponse =
            serde_json::from_str(r#"{"user_id": 42, "email": "a@b.c"}"#).expect("numeric id");
        assert_eq!(a.user_id.as_str(), "42");
        let b: CurrentUserResponse =
            serde_json::from_str(r#"{"user_id": "u-1", "email": "a@b.c"}"#).expect("string id");
        assert_eq!(b.user_id.as_str(), "u-1");
    }

    #[test]
    fn test_gig_contract_deserialize() {
        // Shape emitted by /api/gigs/recommended/{id}
        let json = r#"{
            "id": 7,
            "title": "Build a landing page",
            "link": "https://example.com/gig/7",
            "description": "Need a React dev",
            "category": "Web Development",
            "budget_amount": "250.00",
            "budget_currency": "USD",
            "skills": "react",
            "source_platform": "freelancer",
            "published_at": "2024-03-05T14:30:00"
        }"#;
        let gig: Gig = serde_json::from_str(json).expect("gig should parse");
        assert_eq!(gig.budget_amount.as_deref(), Some("250.00"));
        assert_eq!(gig.published_at.as_deref(), Some("2024-03-05T14:30:00"));
    }

    #[test]
    fn test_gig_budget_number_and_null() {
        let gig: Gig = serde_json::from_str(
            r#"{"title":"t","link":"l","category":"c","description":null,"budget_amount":120,"budget_currency":null,"published_at":null}"#,
        )
        .expect("gig should parse");
        assert_eq!(gig.budget_amount.as_deref(), Some("120"));
        assert!(gig.description.is_none());

        let gig: Gig = serde_json::from_str(r#"{"title":"t","budget_amount":null}"#)
            .expect("gig should parse");
        assert!(gig.budget_amount.is_none());
    }

    #[test]
    fn test_stats_missing_fields_are_none() {
        let stats: Stats = serde_json::from_str(r#"{"active_gigs": 12}"#).expect("stats");
        assert_eq!(stats.active_gigs, Some(12.0));
        assert!(stats.avg_budget.is_none());
        assert!(stats.delivered_gigs.is_none());
    }

    #[test]
    fn test_page_public_pages() {
        assert!(Page::Homepage.is_public());
        assert!(Page::Auth.is_public());
        assert!(!Page::Preferences.is_public());
        assert!(!Page::Dashboard.is_public());
    }
}
