//! The remote preference service client.
//!
//! Every transport failure, non-success status, or malformed payload
//! collapses into the single [`RemoteUnavailable`] outcome: callers recover
//! the same way (keep local state, fall back to cache/defaults) regardless
//! of why the remote was unreachable.

use std::time::Duration;

use async_trait::async_trait;
use hirely_locale::CultureDescriptor;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// The one failure mode remote calls can have.
#[derive(Debug, Error)]
#[error("remote preference service unavailable: {reason}")]
pub struct RemoteUnavailable {
    reason: String,
}

impl RemoteUnavailable {
    /// Wrap any transport/status/payload failure. The reason is for logs
    /// only; callers never branch on it.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Culture metadata as the remote service reports it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RemoteCulture {
    pub code: String,
    pub name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl From<&RemoteCulture> for CultureDescriptor {
    fn from(culture: &RemoteCulture) -> Self {
        CultureDescriptor {
            code: culture.code.clone(),
            name: culture.name.clone(),
            display_name: culture.display_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocalizedString {
    value: String,
}

/// The remote operations the preference core consumes.
///
/// Implemented by [`RemoteClient`] for production and by scripted stubs in
/// tests.
#[async_trait]
pub trait CultureTransport: Send + Sync {
    /// `POST /culture` — record the active culture server-side.
    async fn set_culture(&self, code: &str) -> Result<(), RemoteUnavailable>;

    /// `GET /string/{key}?culture={code}` — fetch one localized string.
    async fn localized_string(&self, key: &str, culture: &str)
        -> Result<String, RemoteUnavailable>;

    /// `GET /cultures` — list the cultures the remote knows about.
    async fn cultures(&self) -> Result<Vec<RemoteCulture>, RemoteUnavailable>;
}

/// reqwest-backed transport against the preference service.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(err) => {
                warn!(%err, "failed to configure http client, using defaults");
                reqwest::Client::new()
            }
        };
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn unavailable(err: reqwest::Error) -> RemoteUnavailable {
        RemoteUnavailable::new(err.to_string())
    }

    fn status_check(resp: reqwest::Response) -> Result<reqwest::Response, RemoteUnavailable> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(RemoteUnavailable::new(format!(
                "status {}",
                resp.status()
            )))
        }
    }
}

#[async_trait]
impl CultureTransport for RemoteClient {
    async fn set_culture(&self, code: &str) -> Result<(), RemoteUnavailable> {
        let url = format!("{}/culture", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "culture": code }))
            .send()
            .await
            .map_err(Self::unavailable)?;
        Self::status_check(resp)?;
        Ok(())
    }

    async fn localized_string(
        &self,
        key: &str,
        culture: &str,
    ) -> Result<String, RemoteUnavailable> {
        let url = format!("{}/string/{}", self.base_url, key);
        let resp = self
            .http
            .get(&url)
            .query(&[("culture", culture)])
            .send()
            .await
            .map_err(Self::unavailable)?;
        let payload: LocalizedString = Self::status_check(resp)?
            .json()
            .await
            .map_err(Self::unavailable)?;
        Ok(payload.value)
    }

    async fn cultures(&self) -> Result<Vec<RemoteCulture>, RemoteUnavailable> {
        let url = format!("{}/cultures", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(Self::unavailable)?;
        let cultures: Vec<RemoteCulture> = Self::status_check(resp)?
            .json()
            .await
            .map_err(Self::unavailable)?;
        Ok(cultures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = RemoteClient::new("https://api.hirely.app/prefs/", Duration::from_secs(2));
        assert_eq!(client.base_url, "https://api.hirely.app/prefs");
    }

    #[test]
    fn remote_culture_deserializes_the_wire_shape() {
        let json = r#"{"code":"de-DE","name":"German","displayName":"Deutsch"}"#;
        let culture: RemoteCulture = serde_json::from_str(json).unwrap();
        assert_eq!(culture.display_name, "Deutsch");

        let descriptor = CultureDescriptor::from(&culture);
        assert_eq!(descriptor.code, "de-DE");
    }
}
