//! HTTP collaborator: POSTs the link as JSON to a format-lookup endpoint.
//!
//! Uses the curl crate (libcurl). The transfer is blocking, so it runs on
//! tokio's blocking pool. The progress callback polls the cancel token so a
//! superseded submission releases its blocking thread within about a second.

use super::{FetchCollaborator, FetchError, FetchPayload, FetchRequest};
use crate::config::SvdConfig;
use crate::control::CancelToken;
use async_trait::async_trait;
use std::time::Duration;

/// Collaborator backed by a JSON HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    endpoint: String,
    connect_timeout: Duration,
    /// Total transfer timeout; `None` lets the request run indefinitely.
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HttpFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(15),
            timeout: None,
            user_agent: None,
        }
    }

    pub fn from_config(cfg: &SvdConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.request_timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Performs the POST and returns (status, body). Blocks the current thread.
    ///
    /// Aborts with a callback error once `cancel` fires.
    fn post_json(&self, body: &[u8], cancel: &CancelToken) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut response = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(&self.endpoint)?;
        easy.post(true)?;
        easy.post_fields_copy(body)?;
        easy.follow_location(true)?;
        easy.connect_timeout(self.connect_timeout)?;
        if let Some(timeout) = self.timeout {
            easy.timeout(timeout)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")?;
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;
        easy.progress(true)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                response.extend_from_slice(data);
                Ok(data.len())
            })?;
            // Returning false aborts the transfer.
            transfer.progress_function(|_, _, _, _| !cancel.is_cancelled())?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, response))
    }
}

#[async_trait]
impl FetchCollaborator for HttpFetcher {
    async fn fetch(
        &self,
        request: &FetchRequest,
        cancel: &CancelToken,
    ) -> Result<FetchPayload, FetchError> {
        let body = serde_json::to_vec(request)?;
        let this = self.clone();
        let token = cancel.clone();
        let outcome = tokio::task::spawn_blocking(move || this.post_json(&body, &token)).await?;
        let (code, bytes) = match outcome {
            Ok(pair) => pair,
            Err(e) if e.is_aborted_by_callback() => {
                tracing::debug!(endpoint = %self.endpoint, "transfer aborted by cancel");
                return Err(FetchError::Cancelled);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(endpoint = %self.endpoint, code, len = bytes.len(), "fetch response");
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }
        decode_payload(&bytes)
    }
}

/// Decode a 2xx response body into a payload.
fn decode_payload(bytes: &[u8]) -> Result<FetchPayload, FetchError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FormatOption;

    #[test]
    fn decode_formats_in_order() {
        let body = br#"{
            "formats": [
                {"resolution": "480p", "size": "12MB", "url": "a"},
                {"resolution": "MP3", "size": "3MB", "url": "b"}
            ]
        }"#;
        let payload = decode_payload(body).unwrap();
        assert_eq!(
            payload.formats,
            vec![
                FormatOption::new("480p", "12MB", "a"),
                FormatOption::new("MP3", "3MB", "b"),
            ]
        );
    }

    #[test]
    fn decode_ignores_unknown_fields() {
        let body = br#"{"platform": "YouTube", "formats": [], "title": "x"}"#;
        assert!(decode_payload(body).unwrap().formats.is_empty());
    }

    #[test]
    fn decode_rejects_non_json() {
        assert!(matches!(
            decode_payload(b"<html>oops</html>"),
            Err(FetchError::Json(_))
        ));
    }

    #[test]
    fn from_config_copies_endpoint_and_timeouts() {
        let cfg = SvdConfig {
            endpoint: "http://127.0.0.1:9/fetch".to_string(),
            request_timeout_secs: Some(5),
            ..SvdConfig::default()
        };
        let f = HttpFetcher::from_config(&cfg);
        assert_eq!(f.endpoint(), "http://127.0.0.1:9/fetch");
        assert_eq!(f.timeout, Some(Duration::from_secs(5)));
        assert_eq!(f.connect_timeout, Duration::from_secs(15));
    }
}
