//! The HTTP client wrapper every domain service goes through.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use bondi_core::session::SessionContext;
use bondi_shared::config::{ApiConfig, ConfigError};
use bondi_shared::types::unwrap_envelope;

use super::classify::{classify_response, classify_transport, is_auth_exempt};
use crate::error::ApiError;

/// Authenticated HTTP pipeline over the BondiHub REST API
///
/// Wraps a [`reqwest::Client`] with the configured base URL, JSON default
/// headers and the fixed per-request timeout. Outgoing requests to
/// non-auth endpoints carry the session's bearer token; failing responses
/// come back classified as [`ApiError`], and a 401 clears the session as
/// a side effect before the error reaches the caller.
pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionContext>,
}

impl HttpApi {
    /// Build the pipeline from configuration and a shared session
    pub fn new(config: &ApiConfig, session: Arc<SessionContext>) -> Result<Self, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                name: "http_client",
                reason: e.to_string(),
            })?;

        debug!(base_url = %config.base_url_trimmed(), "HTTP pipeline initialized");

        Ok(Self {
            http,
            base_url: config.base_url_trimmed().to_string(),
            session,
        })
    }

    /// The session this pipeline reads tokens from and clears on 401
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Configured base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, path);
        self.dispatch(builder, Method::GET, path).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let builder = self.request(Method::GET, path).query(query);
        self.dispatch(builder, Method::GET, path).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::POST, path).json(body);
        self.dispatch(builder, Method::POST, path).await
    }

    /// POST without a body (acknowledge-style endpoints)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path);
        self.dispatch(builder, Method::POST, path).await
    }

    /// POST a multipart form (image uploads)
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::POST, path).multipart(form);
        self.dispatch(builder, Method::POST, path).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let builder = self.request(Method::PUT, path).json(body);
        self.dispatch(builder, Method::PUT, path).await
    }

    /// PUT without a body (state-transition endpoints)
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::PUT, path);
        self.dispatch(builder, Method::PUT, path).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let builder = self.request(Method::DELETE, path);
        self.dispatch(builder, Method::DELETE, path).await
    }

    /// Build a request with the bearer token attached unless the path is
    /// an auth endpoint
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url);

        if !is_auth_exempt(path) {
            if let Some(token) = self.session.token() {
                builder = builder.bearer_auth(token);
            }
        }

        builder
    }

    /// Send the request and resolve the response to the caller's type
    ///
    /// Success bodies go through envelope unwrapping; failures are
    /// classified exactly once and never retried.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: Method,
        path: &str,
    ) -> Result<T, ApiError> {
        debug!(%method, path, "Sending request");

        let response = builder.send().await.map_err(|e| {
            warn!(%method, path, "Transport failure: {}", e);
            classify_transport(&e, &self.base_url)
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| classify_transport(&e, &self.base_url))?;
        let body = parse_body(&text);

        if status.is_success() {
            debug!(%method, path, status = status.as_u16(), "Request succeeded");
            unwrap_envelope(body).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let error = classify_response(status, &body);
            warn!(%method, path, status = status.as_u16(), "Request failed: {}", error);

            // 401 is terminal for the session, not retried
            if matches!(error, ApiError::Unauthorized) {
                self.session.clear();
            }

            Err(error)
        }
    }
}

/// Parse a body as JSON, carrying non-JSON payloads through as a string
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bondi_core::domain::user::{Role, SubscriptionPlan, User};
    use bondi_core::session::MemoryCredentialStore;
    use chrono::Utc;
    use reqwest::header::AUTHORIZATION;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            full_name: "Mutale Banda".to_string(),
            email: "mutale@example.com".to_string(),
            phone: "+260977555444".to_string(),
            role: Role::Tenant,
            roles: Vec::new(),
            is_active: true,
            is_verified: true,
            profile_image: None,
            subscription_plan: SubscriptionPlan::Basic,
            plan_expiry_date: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn api_with_session(authenticated: bool) -> HttpApi {
        let session = Arc::new(SessionContext::new(Arc::new(MemoryCredentialStore::new())));
        if authenticated {
            session.set_authenticated(sample_user(), "tok-abc".to_string());
        }
        let config = ApiConfig::new("http://localhost:8080/api/v1");
        HttpApi::new(&config, session).unwrap()
    }

    #[test]
    fn test_bearer_attached_to_regular_endpoints() {
        let api = api_with_session(true);
        let request = api.request(Method::GET, "/houses").build().unwrap();

        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-abc");
    }

    #[test]
    fn test_no_bearer_on_auth_endpoints() {
        let api = api_with_session(true);

        for path in ["/auth/login", "/auth/register"] {
            let request = api.request(Method::POST, path).build().unwrap();
            assert!(
                request.headers().get(AUTHORIZATION).is_none(),
                "{path} must not carry a bearer token"
            );
        }
    }

    #[test]
    fn test_no_bearer_without_session() {
        let api = api_with_session(false);
        let request = api.request(Method::GET, "/houses").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_url_joins_base() {
        let api = api_with_session(false);
        let request = api.request(Method::GET, "/houses").build().unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:8080/api/v1/houses"
        );
    }

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(
            parse_body("{\"a\":1}"),
            serde_json::json!({"a": 1})
        );
        assert_eq!(
            parse_body("<html>oops</html>"),
            Value::String("<html>oops</html>".to_string())
        );
    }
}
