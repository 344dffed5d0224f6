//! HTTP adapters for the site's REST backend.
//!
//! Every call is a single blocking request on a shared `ureq::Agent`. There
//! are no retries and no client-side timeouts beyond the transport defaults.

mod remote_admin;
mod remote_site;

pub use remote_admin::RemoteAdminGateway;
pub use remote_site::RemoteSiteApi;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::DomainError;

/// Build the URL of an endpoint under `{base}/api`.
pub fn api_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/api/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Agent shared by the remote adapters.
pub fn build_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .user_agent(concat!("hdmonks/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Convert HTTP errors to domain errors.
pub fn handle_http_error(error: ureq::Error) -> DomainError {
    match error {
        ureq::Error::Status(code, response) => {
            let message = response
                .into_json::<ErrorResponse>()
                .ok()
                .and_then(|body| body.message.or(body.detail))
                .unwrap_or_else(|| "request failed".to_string());
            DomainError::status(code, message)
        }
        ureq::Error::Transport(transport) => DomainError::transport(transport.to_string()),
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(
    response: ureq::Response,
    what: &str,
) -> Result<T, DomainError> {
    response
        .into_json()
        .map_err(|err| DomainError::decode(format!("failed to parse {what} response: {err}")))
}
