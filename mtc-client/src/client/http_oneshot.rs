// mtc-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory transport
//
// Requires the "in-process" feature

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::HttpClient;
use super::{decode_body, normalize_path};
use crate::session::SessionProvider;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives an axum `Router` through tower's `oneshot`, so a backend (or a
/// mock of one) can be exercised without opening sockets.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use mtc_client::OneshotHttpClient;
///
/// let router: Router = mock_backend().with_state(state);
/// let client = OneshotHttpClient::new(router);
/// let centers: Vec<Center> = client.get("/api/centers").await?;
/// ```
#[derive(Clone)]
pub struct OneshotHttpClient {
    router: Router,
    session: Option<Arc<dyn SessionProvider>>,
}

impl OneshotHttpClient {
    /// # Arguments
    /// * `router` - router with state already applied
    pub fn new(router: Router) -> Self {
        Self {
            router,
            session: None,
        }
    }

    pub fn with_session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = Some(session);
        self
    }

    fn build_request(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(normalize_path(path));

        if let Some(session) = &self.session {
            if let Ok(token) = session.token() {
                builder = builder.header("Authorization", format!("Bearer {}", token));
            }
        }

        let body = match body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };
        builder
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        decode_body(status, &body)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(http::Method::GET, path, None)?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(http::Method::POST, path, Some(bytes))?;
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySession;
    use axum::http::HeaderMap;
    use axum::routing::get;

    #[tokio::test]
    async fn test_oneshot_forwards_bearer_token() {
        let router = Router::new().route(
            "/api/whoami",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                axum::Json(serde_json::json!({ "auth": auth }))
            }),
        );
        let session = Arc::new(MemorySession::new(Some("abc".into())));
        let client = OneshotHttpClient::new(router).with_session(session);

        let body: serde_json::Value = client.get("api/whoami").await.unwrap();
        assert_eq!(body["auth"], "Bearer abc");
    }

    #[tokio::test]
    async fn test_oneshot_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());
        let err = client
            .get::<serde_json::Value>("/api/missing")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }
}
