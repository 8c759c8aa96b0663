//! Client-side building blocks: a JSON wrapper over the REST API and the
//! state machines driving the form and list pages.

pub mod form;
pub mod list;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin JSON client over the REST API, one instance per base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status { status, body })
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ClientError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// The notification banner shown at the top of every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub show: bool,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn hidden() -> Self {
        Self {
            show: false,
            severity: Severity::Success,
            message: String::new(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            show: true,
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            show: true,
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
