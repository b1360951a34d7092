use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:5000";
pub(crate) const CSRF_META_NAME: &str = "csrf-token";
pub(crate) const CSRF_HEADER: &str = "X-CSRF-Token";

/// How long a notice stays on screen.
pub(crate) const NOTICE_DISMISS_MS: u64 = 5_000;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnvConfig {
    pub api_url: String,
    pub log_level: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl EnvConfig {
    /// Reads `window.ENV` injected by the hosting page.
    ///
    /// Both `API_URL` and the lowercase `api_url` are accepted.
    pub fn from_window() -> Self {
        let mut cfg = Self::default();

        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return cfg;
        };
        if env.is_undefined() || !env.is_object() {
            return cfg;
        }

        let read = |key: &str| {
            js_sys::Reflect::get(&env, &key.into())
                .ok()
                .and_then(|v| v.as_string())
                .filter(|s| !s.trim().is_empty())
        };

        if let Some(url) = read("API_URL").or_else(|| read("api_url")) {
            cfg.api_url = url;
        }
        if let Some(level) = read("LOG_LEVEL").or_else(|| read("log_level")) {
            cfg.log_level = level;
        }

        cfg.api_url = normalize_base_url(&cfg.api_url);
        cfg
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(log::LevelFilter::Info)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
