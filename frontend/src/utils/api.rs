use gloo_net::http::{Request, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Thin client for the site's few outbound calls.
pub struct Api;

/// Request builder that turns non-success statuses into errors on `send`.
pub struct RequestWrapper {
    request: Request,
    url: String,
}

impl RequestWrapper {
    fn post(url: &str) -> Self {
        Self {
            request: Request::post(url),
            url: url.to_string(),
        }
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(data)?;
        self.request = self
            .request
            .header("Content-Type", "application/json")
            .body(body);
        Ok(self)
    }

    pub async fn send(self) -> Result<Response, SubmitError> {
        gloo_console::log!(format!("POST {}", self.url));
        let response = self.request.send().await?;
        if let Err(err) = check_status(response.status(), response.ok()) {
            log::warn!("POST {} failed: {}", self.url, err);
            return Err(err);
        }
        Ok(response)
    }
}

/// Anything the browser doesn't report as `ok` (2xx) is a failed submit.
fn check_status(status: u16, ok: bool) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

impl Api {
    pub fn post(url: &str) -> RequestWrapper {
        RequestWrapper::post(url)
    }
}
