//! Public endpoints: settings, stages, contact.

use tracing::debug;

use crate::application::dtos::{AckResponse, ApiEnvelope};
use crate::application::services::SiteApi;
use crate::domain::{ContactInquiry, DomainError, SiteSettingsPatch, Stage};

use super::{api_url, build_agent, handle_http_error, read_json};

/// `SiteApi` implementation talking to the backend over HTTP.
pub struct RemoteSiteApi {
    base_url: String,
    agent: ureq::Agent,
}

impl RemoteSiteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_agent(base_url, build_agent())
    }

    pub fn with_agent(base_url: impl Into<String>, agent: ureq::Agent) -> Self {
        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    fn api_url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

impl SiteApi for RemoteSiteApi {
    fn public_settings(&self) -> Result<SiteSettingsPatch, DomainError> {
        let url = self.api_url("settings");
        debug!(target: "hdmonks::http", %url, "GET");

        let response = self.agent.get(&url).call().map_err(handle_http_error)?;
        let envelope: ApiEnvelope<SiteSettingsPatch> = read_json(response, "settings")?;
        envelope.into_data("settings")
    }

    fn stages(&self) -> Result<Vec<Stage>, DomainError> {
        let url = self.api_url("stages");
        debug!(target: "hdmonks::http", %url, "GET");

        let response = self.agent.get(&url).call().map_err(handle_http_error)?;
        let envelope: ApiEnvelope<Vec<Stage>> = read_json(response, "stages")?;
        envelope.into_data("stages")
    }

    fn submit_contact(&self, inquiry: &ContactInquiry) -> Result<(), DomainError> {
        let url = self.api_url("contact");
        debug!(target: "hdmonks::http", %url, "POST");

        let response = self
            .agent
            .post(&url)
            .send_json(inquiry)
            .map_err(handle_http_error)?;
        let ack: AckResponse = read_json(response, "contact")?;
        ack.into_result("contact")
    }
}
