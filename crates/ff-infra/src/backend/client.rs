use std::time::Duration;

use ff_core::errors::BackendError;
use ff_core::AuthSession;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Thin client over the backend's REST and storage endpoints.
///
/// Every request carries the project `apikey`. The `Authorization` bearer is
/// the session's access token when one is given, otherwise the anon key.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    request_timeout: Option<Duration>,
}

/// Error body shape shared by the table and storage endpoints.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl RestClient {
    /// Client without a request timeout: a slow backend call waits as long as it takes.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_request_timeout(base_url, anon_key, None)
    }

    pub fn with_request_timeout(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        request_timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            request_timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    fn request(&self, method: Method, path: &str, session: Option<&AuthSession>) -> RequestBuilder {
        let bearer = session
            .map(|s| s.access_token.as_str())
            .unwrap_or(self.anon_key.as_str());
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    /// `GET /rest/v1/<table>` with PostgREST query parameters.
    pub async fn select<R: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
        session: Option<&AuthSession>,
    ) -> Result<Vec<R>, BackendError> {
        let path = format!("/rest/v1/{}", table);
        debug!(table, "select");
        let response = self
            .request(Method::GET, &path, session)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        response
            .json::<Vec<R>>()
            .await
            .map_err(|e| BackendError::new(format!("malformed {} rows: {}", table, e)))
    }

    /// Inserts one row and returns what the backend stored.
    pub async fn insert_returning<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        table: &str,
        row: &T,
        session: Option<&AuthSession>,
    ) -> Result<R, BackendError> {
        let path = format!("/rest/v1/{}", table);
        debug!(table, "insert");
        let response = self
            .request(Method::POST, &path, session)
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;
        let response = check_status(response).await?;
        let mut rows = response
            .json::<Vec<R>>()
            .await
            .map_err(|e| BackendError::new(format!("malformed {} insert result: {}", table, e)))?;
        if rows.is_empty() {
            return Err(BackendError::new(format!("{} insert returned no row", table)));
        }
        Ok(rows.swap_remove(0))
    }

    /// Inserts one row without reading it back.
    pub async fn insert<T: Serialize + ?Sized>(
        &self,
        table: &str,
        row: &T,
        session: Option<&AuthSession>,
    ) -> Result<(), BackendError> {
        let path = format!("/rest/v1/{}", table);
        debug!(table, "insert");
        let response = self
            .request(Method::POST, &path, session)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// `POST /storage/v1/object/<bucket>/<path>`. Never overwrites.
    pub async fn upload_object(
        &self,
        bucket: &str,
        object_path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        session: &AuthSession,
    ) -> Result<(), BackendError> {
        let path = format!("/storage/v1/object/{}/{}", bucket, object_path);
        debug!(bucket, object_path, len = bytes.len(), "upload object");
        let response = self
            .request(Method::POST, &path, Some(session))
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await?;
        Ok(())
    }

    pub fn public_object_url(&self, bucket: &str, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, object_path
        )
    }
}

fn transport_error(e: reqwest::Error) -> BackendError {
    warn!(error = %e, "backend request failed");
    BackendError::new(e.to_string())
}

async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    warn!(status = status.as_u16(), %message, "backend rejected request");
    Err(BackendError::new(message))
}
