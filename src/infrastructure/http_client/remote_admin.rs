//! Bearer-authorized admin settings resource.

use std::sync::Arc;

use tracing::debug;

use crate::application::dtos::ApiEnvelope;
use crate::application::services::{AdminGateway, CredentialProvider};
use crate::domain::{DomainError, Settings, SettingsPatch};

use super::{api_url, build_agent, handle_http_error, read_json};

/// `AdminGateway` over HTTP. The token is looked up on every call, so a
/// token stored after construction is picked up.
pub struct RemoteAdminGateway {
    base_url: String,
    agent: ureq::Agent,
    credentials: Arc<dyn CredentialProvider>,
}

impl RemoteAdminGateway {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_agent(base_url, build_agent(), credentials)
    }

    pub fn with_agent(
        base_url: impl Into<String>,
        agent: ureq::Agent,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            agent,
            credentials,
        }
    }

    fn api_url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }

    fn authorization(&self) -> Result<String, DomainError> {
        self.credentials
            .bearer_token()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {token}"))
            .ok_or_else(|| DomainError::unauthorized("no admin token available"))
    }
}

impl AdminGateway for RemoteAdminGateway {
    fn load_settings(&self) -> Result<SettingsPatch, DomainError> {
        let authorization = self.authorization()?;
        let url = self.api_url("admin/settings");
        debug!(target: "hdmonks::http", %url, "GET");

        let response = self
            .agent
            .get(&url)
            .set("Authorization", &authorization)
            .call()
            .map_err(handle_http_error)?;
        let envelope: ApiEnvelope<SettingsPatch> = read_json(response, "admin settings")?;
        envelope.into_payload("admin settings")
    }

    fn save_settings(&self, settings: &Settings) -> Result<(), DomainError> {
        let authorization = self.authorization()?;
        let url = self.api_url("admin/settings");
        debug!(target: "hdmonks::http", %url, "PUT");

        self.agent
            .put(&url)
            .set("Authorization", &authorization)
            .send_json(settings)
            .map_err(handle_http_error)?;

        Ok(())
    }
}
