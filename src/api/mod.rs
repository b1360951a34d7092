mod csrf;
mod transport;

pub use csrf::{CsrfProvider, MetaCsrfProvider, StaticCsrfProvider};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, Transport};

use crate::error::{ApiResult, AppError, ValidationError};
use crate::models::{
    AuthRequest, AuthResponse, Category, CurrentUserResponse, MessageResponse,
    PreferencesResponse, RecommendedGigsResponse, Stats, TrendingCategory,
    UpdatePreferencesRequest, UserId,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Typed access to the StreamLance REST backend.
///
/// Every call resolves to the same three outcomes: the parsed body (2xx),
/// [`AppError::Rejected`] carrying the body's `message` (non-2xx JSON), or
/// [`AppError::Transport`] (network failure or a body that isn't JSON).
/// State-changing calls fail with [`ValidationError::MissingCsrfToken`] before
/// any I/O when no token is available.
pub struct ApiClient<T, C> {
    transport: T,
    csrf: C,
}

impl<T: Transport, C: CsrfProvider> ApiClient<T, C> {
    pub fn new(transport: T, csrf: C) -> Self {
        Self { transport, csrf }
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::Get, path, None::<&()>, false).await
    }

    async fn mutate<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<R> {
        self.request(method, path, body, true).await
    }

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
        needs_csrf: bool,
    ) -> ApiResult<R> {
        let csrf_token = if needs_csrf {
            match self.csrf.token() {
                Some(t) => Some(t),
                None => {
                    log::error!("CSRF token not found or empty; not sending {method:?} {path}");
                    return Err(ValidationError::MissingCsrfToken.into());
                }
            }
        } else {
            None
        };

        let body = match body {
            Some(b) => Some(serde_json::to_value(b).map_err(AppError::transport)?),
            None => None,
        };

        let res = self
            .transport
            .send(HttpRequest {
                method,
                path: path.to_string(),
                csrf_token,
                body,
            })
            .await
            .inspect_err(|e| {
                if let AppError::Transport { cause } = e {
                    log::error!("{method:?} {path} failed: {cause}");
                }
            })?;

        let data: serde_json::Value = serde_json::from_str(&res.body).map_err(|e| {
            log::error!("{method:?} {path} returned a non-JSON body ({}): {e}", res.status);
            AppError::transport(e)
        })?;

        if res.is_success() {
            serde_json::from_value(data).map_err(|e| {
                log::error!("{method:?} {path} returned an unexpected shape: {e}");
                AppError::transport(e)
            })
        } else {
            let message = data
                .get("message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string());
            log::warn!(
                "{method:?} {path} rejected ({}): {}",
                res.status,
                message.as_deref().unwrap_or("<no message>")
            );
            Err(AppError::Rejected {
                status: res.status,
                message,
            })
        }
    }

    pub async fn current_user(&self) -> ApiResult<CurrentUserResponse> {
        self.get("/api/current_user").await
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.mutate(
            Method::Post,
            "/api/login",
            Some(&AuthRequest {
                email: email.to_string(),
                password: password.to_string(),
            }),
        )
        .await
    }

    pub async fn register(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        self.mutate(
            Method::Post,
            "/api/register",
            Some(&AuthRequest {
                email: email.to_string(),
                password: password.to_string(),
            }),
        )
        .await
    }

    pub async fn logout(&self) -> ApiResult<MessageResponse> {
        self.mutate(Method::Post, "/api/logout", None::<&()>).await
    }

    pub async fn get_preferences(&self, user_id: &UserId) -> ApiResult<Vec<Category>> {
        let data: PreferencesResponse = self.get(&preferences_path(user_id)).await?;
        Ok(Category::parse_known(&data.preferences.unwrap_or_default()))
    }

    pub async fn put_preferences(
        &self,
        user_id: &UserId,
        categories: &[Category],
    ) -> ApiResult<MessageResponse> {
        self.mutate(
            Method::Put,
            &preferences_path(user_id),
            Some(&UpdatePreferencesRequest {
                categories: categories.to_vec(),
            }),
        )
        .await
    }

    pub async fn stats(&self) -> ApiResult<Stats> {
        self.get("/api/stats").await
    }

    pub async fn trending_categories(&self) -> ApiResult<Vec<TrendingCategory>> {
        self.get("/api/trending_categories").await
    }

    pub async fn recommended_gigs(&self, user_id: &UserId) -> ApiResult<RecommendedGigsResponse> {
        self.get(&format!(
            "/api/gigs/recommended/{}",
            urlencoding::encode(user_id.as_str())
        ))
        .await
    }
}

fn preferences_path(user_id: &UserId) -> String {
    format!(
        "/api/users/{}/preferences",
        urlencoding::encode(user_id.as_str())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{block_on, MockTransport};
    use serde_json::json;

    fn client(mock: &MockTransport, token: Option<&str>) -> ApiClient<MockTransport, StaticCsrfProvider> {
        ApiClient::new(mock.clone(), StaticCsrfProvider(token.map(|t| t.to_string())))
    }

    #[test]
    fn test_login_sends_csrf_header_and_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/login", 200, json!({"user_id": 3, "message": "Login successful"}));
        let api = client(&mock, Some("tok"));

        let res = block_on(api.login("a@b.c", "secret1")).expect("login should succeed");
        assert_eq!(res.user_id.map(|u| u.0), Some("3".to_string()));

        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].csrf_token.as_deref(), Some("tok"));
        assert_eq!(
            sent[0].body,
            Some(json!({"email": "a@b.c", "password": "secret1"}))
        );
    }

    #[test]
    fn test_mutation_without_token_never_hits_network() {
        let mock = MockTransport::new();
        let api = client(&mock, None);

        let err = block_on(api.logout()).expect_err("should fail locally");
        assert_eq!(err, AppError::Validation(ValidationError::MissingCsrfToken));
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn test_reads_do_not_need_a_token() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/stats", 200, json!({"active_gigs": 5}));
        let api = client(&mock, None);

        let stats = block_on(api.stats()).expect("stats");
        assert_eq!(stats.active_gigs, Some(5.0));
        assert!(mock.requests()[0].csrf_token.is_none());
    }

    #[test]
    fn test_rejection_surfaces_server_message() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/register", 409, json!({"message": "User with this email already exists"}));
        let api = client(&mock, Some("tok"));

        let err = block_on(api.register("a@b.c", "secret1")).expect_err("should be rejected");
        assert_eq!(
            err,
            AppError::Rejected {
                status: 409,
                message: Some("User with this email already exists".to_string())
            }
        );
    }

    #[test]
    fn test_non_json_body_is_a_transport_error() {
        let mock = MockTransport::new();
        mock.respond_raw(Method::Get, "/api/stats", 502, "<html>Bad Gateway</html>");
        let api = client(&mock, None);

        let err = block_on(api.stats()).expect_err("should fail");
        assert!(matches!(err, AppError::Transport { .. }));
    }

    #[test]
    fn test_network_failure_is_a_transport_error() {
        let mock = MockTransport::new();
        mock.fail(Method::Get, "/api/trending_categories");
        let api = client(&mock, None);

        let err = block_on(api.trending_categories()).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            "Network error. Please check your connection and try again."
        );
    }

    #[test]
    fn test_put_preferences_path_and_body() {
        let mock = MockTransport::new();
        mock.respond(Method::Put, "/api/users/9/preferences", 200, json!({"message": "ok"}));
        let api = client(&mock, Some("tok"));

        block_on(api.put_preferences(
            &UserId("9".to_string()),
            &[Category::WebDevelopment, Category::DesignCreative],
        ))
        .expect("put preferences");

        let sent = mock.requests();
        assert_eq!(sent[0].method, Method::Put);
        assert_eq!(
            sent[0].body,
            Some(json!({"categories": ["Web Development", "Design & Creative"]}))
        );
    }

    #[test]
    fn test_get_preferences_null_list_is_empty() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/users/9/preferences", 200, json!({"user_id": 9, "preferences": null}));
        let api = client(&mock, None);

        let prefs = block_on(api.get_preferences(&UserId("9".to_string()))).expect("prefs");
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_user_id_is_path_encoded() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/gigs/recommended/a%2Fb", 200, json!({"gigs": [], "message": "none"}));
        let api = client(&mock, None);

        let res = block_on(api.recommended_gigs(&UserId("a/b".to_string()))).expect("gigs");
        assert!(res.gigs.is_empty());
        assert_eq!(res.message.as_deref(), Some("none"));
    }
}
