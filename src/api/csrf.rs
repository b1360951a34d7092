use crate::config::CSRF_META_NAME;

/// Source of the CSRF token attached to state-changing requests.
pub trait CsrfProvider {
    /// Current token, or `None` when it can't be read or is empty.
    fn token(&self) -> Option<String>;
}

/// Reads `<meta name="csrf-token" content="...">` from the current document.
///
/// The tag is looked up on every call so a server-rotated token is picked up.
#[derive(Clone, Debug)]
pub struct MetaCsrfProvider {
    meta_name: String,
}

impl MetaCsrfProvider {
    pub fn new(meta_name: impl Into<String>) -> Self {
        Self {
            meta_name: meta_name.into(),
        }
    }

    fn selector(&self) -> String {
        format!("meta[name=\"{}\"]", self.meta_name)
    }
}

impl Default for MetaCsrfProvider {
    fn default() -> Self {
        Self::new(CSRF_META_NAME)
    }
}

impl CsrfProvider for MetaCsrfProvider {
    fn token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let meta = document.query_selector(&self.selector()).ok().flatten()?;
        meta.get_attribute("content")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Fixed token, for embedding pages that hand the token over directly.
#[derive(Clone, Debug, Default)]
pub struct StaticCsrfProvider(pub Option<String>);

impl CsrfProvider for StaticCsrfProvider {
    fn token(&self) -> Option<String> {
        self.0.clone().filter(|s| !s.trim().is_empty())
    }
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_meta(name: &str, content: Option<&str>) {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        if let Ok(Some(old)) = document.query_selector(&format!("meta[name=\"{name}\"]")) {
            old.remove();
        }
        if let Some(content) = content {
            let meta = document.create_element("meta").expect("create meta");
            meta.set_attribute("name", name).expect("name attr");
            meta.set_attribute("content", content).expect("content attr");
            document
                .head()
                .expect("head")
                .append_child(&meta)
                .expect("append meta");
        }
    }

    #[wasm_bindgen_test]
    fn test_meta_provider_reads_token_fresh() {
        let p = MetaCsrfProvider::new("csrf-token-test");

        set_meta("csrf-token-test", None);
        assert!(p.token().is_none());

        set_meta("csrf-token-test", Some("t1"));
        assert_eq!(p.token().as_deref(), Some("t1"));

        set_meta("csrf-token-test", Some("t2"));
        assert_eq!(p.token().as_deref(), Some("t2"));

        set_meta("csrf-token-test", Some(""));
        assert!(p.token().is_none());
    }
}
