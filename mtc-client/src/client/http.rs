// mtc-client/src/client/http.rs
// HTTP client - network transport

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{decode_body, normalize_path};
use crate::session::SessionProvider;
use crate::{ClientConfig, ClientResult};

/// HTTP transport trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
}

/// Network HTTP client
#[derive(Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: Option<Arc<dyn SessionProvider>>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: config.session.clone(),
        })
    }

    /// Attach a session provider
    pub fn with_session(mut self, session: Arc<dyn SessionProvider>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, normalize_path(path))
    }

    fn auth_header(&self) -> Option<String> {
        let session = self.session.as_ref()?;
        match session.token() {
            Ok(token) => Some(format!("Bearer {}", token)),
            Err(e) => {
                tracing::debug!(error = %e, "Sending request without bearer token");
                None
            }
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let req = match self.auth_header() {
            Some(auth) => req.header(reqwest::header::AUTHORIZATION, auth),
            None => req,
        };
        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        decode_body(status, &body)
    }
}

impl std::fmt::Debug for NetworkHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkHttpClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session.is_some())
            .finish()
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        self.send(self.client.get(&url)).await
    }

    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        self.send(self.client.post(&url).json(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySession;

    #[test]
    fn test_url_join() {
        let client = NetworkHttpClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("api/centers"), "http://localhost:5000/api/centers");
        assert_eq!(client.url("/api/centers"), "http://localhost:5000/api/centers");
    }

    #[test]
    fn test_auth_header_follows_session() {
        let session = Arc::new(MemorySession::new(None));
        let client = NetworkHttpClient::new("http://localhost:5000")
            .unwrap()
            .with_session(session.clone());
        assert!(client.auth_header().is_none());

        session.set_token("t0k");
        assert_eq!(client.auth_header().as_deref(), Some("Bearer t0k"));
    }
}
