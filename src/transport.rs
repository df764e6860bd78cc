use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[error("request to {path} failed: {source}")]
pub struct TransportError {
    pub path: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(path: &str, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            path: path.to_string(),
            source: source.into(),
        }
    }
}

/// A backend answer. `body` is `None` when the payload was not JSON.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: Option<Value>,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, path: &str, body: Value) -> Result<Reply, TransportError>;

    async fn get_json(&self, path: &str) -> Result<Reply, TransportError>;
}

pub struct HttpTransport {
    client: Client,
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base.into(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn read(path: &str, response: reqwest::Response) -> Reply {
        let status = response.status().as_u16();
        let body = match response.json::<Value>().await {
            Ok(body) => Some(body),
            Err(err) => {
                debug!("non-JSON reply from {path} ({status}): {err}");
                None
            }
        };
        Reply { status, body }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, path: &str, body: Value) -> Result<Reply, TransportError> {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .map_err(|err| TransportError::new(path, err))?;
        Ok(Self::read(path, response).await)
    }

    async fn get_json(&self, path: &str) -> Result<Reply, TransportError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| TransportError::new(path, err))?;
        Ok(Self::read(path, response).await)
    }
}
