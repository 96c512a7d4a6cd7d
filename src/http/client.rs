//! Low-level HTTP transport — `TradehubHttp`.
//!
//! One method per HTTP verb, one round trip per call, no knowledge of
//! individual endpoints. The endpoint client in [`crate::api`] wraps this.

use std::time::Duration;

use serde_json::Value;

use crate::error::{ApiError, Error, TransportError};
use crate::http::params::Params;

/// Low-level transport for the TradeScan REST API.
///
/// GET and POST fail differently on purpose: the server returns a
/// structured error payload only on POST, so a failed GET surfaces as a raw
/// [`TransportError`] while a failed POST is decomposed into an
/// [`ApiError`].
#[derive(Debug, Clone)]
pub struct TradehubHttp {
    base_url: String,
    client: reqwest::Client,
}

impl TradehubHttp {
    /// Create a transport against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Request)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET to `base_url + path` and parse the JSON body.
    ///
    /// Any non-2xx response maps to [`TransportError::Status`] carrying the
    /// status and raw body.
    pub async fn get(&self, path: &str, params: &Params) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, params = params.len(), "GET");

        let resp = self
            .client
            .get(&url)
            .query(params.as_slice())
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "GET failed");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed = resp
            .json::<Value>()
            .await
            .map_err(TransportError::from_reqwest)?;
        Ok(parsed)
    }

    /// Issue a POST with optional form body, optional JSON body and optional
    /// query parameters, and parse the JSON body.
    ///
    /// A non-2xx response is decomposed into an [`ApiError`] from the
    /// `error_code`/`error_message`/`error` keys of the response body; a
    /// body that cannot be parsed degrades to an [`ApiError`] carrying the
    /// raw text as its detail.
    pub async fn post(
        &self,
        path: &str,
        form: Option<&Value>,
        json: Option<&Value>,
        params: &Params,
    ) -> Result<Value, Error> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "POST");

        let mut req = self.client.post(&url).query(params.as_slice());
        if let Some(form) = form {
            req = req.form(form);
        }
        if let Some(json) = json {
            req = req.json(json);
        }

        let resp = req.send().await.map_err(TransportError::from_reqwest)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "POST failed");
            return Err(ApiError::from_body(&body).into());
        }

        let parsed = resp
            .json::<Value>()
            .await
            .map_err(TransportError::from_reqwest)?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let http = TradehubHttp::new("http://localhost:5001/", Duration::from_secs(1)).unwrap();
        assert_eq!(http.base_url(), "http://localhost:5001");
    }
}
