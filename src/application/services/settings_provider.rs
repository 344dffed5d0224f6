use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::{SiteSettings, SiteSettingsPatch};

use super::gateways::{DocumentSink, SiteApi};

/// Title used when the backend sends no `site_title`, or an empty one.
pub const FALLBACK_TITLE: &str = "HD MONKS";
/// Meta description used when the backend sends no `site_description`, or an empty one.
pub const FALLBACK_DESCRIPTION: &str = "Business Solutions";

struct ProviderState {
    settings: SiteSettings,
    loading: bool,
}

/// Holds the public site settings: hard-coded defaults until the backend
/// answers, the backend's values merged over them afterwards.
pub struct SettingsProvider {
    api: Arc<dyn SiteApi>,
    state: RwLock<ProviderState>,
}

impl SettingsProvider {
    pub fn new(api: Arc<dyn SiteApi>) -> Self {
        Self::with_defaults(api, SiteSettings::default())
    }

    pub fn with_defaults(api: Arc<dyn SiteApi>, defaults: SiteSettings) -> Self {
        Self {
            api,
            state: RwLock::new(ProviderState {
                settings: defaults,
                loading: true,
            }),
        }
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> SiteSettings {
        self.state.read().settings.clone()
    }

    /// True until the first [`SettingsProvider::load`] finishes, whatever its outcome.
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// Fetch the public settings and merge them over the current state.
    ///
    /// Failures are logged and otherwise ignored: the previous settings stay
    /// in place and `document` is left untouched.
    pub fn load(&self, document: &mut dyn DocumentSink) -> SiteSettings {
        let fetched = self.api.public_settings();

        let mut state = self.state.write();
        state.loading = false;

        match fetched {
            Ok(patch) => {
                debug!(target: "hdmonks::settings", ?patch, "public settings received");
                apply_document_metadata(&patch, document);
                state.settings.apply(patch);
                state.settings.clone()
            }
            Err(err) => {
                warn!(
                    target: "hdmonks::settings",
                    error = %err,
                    "public settings not available, keeping defaults"
                );
                state.settings.clone()
            }
        }
    }
}

/// Push title, meta description, and favicon from the received payload into
/// `document`.
///
/// Works on what the backend sent, not on the merged settings: a payload
/// without `site_title` gets [`FALLBACK_TITLE`], not the local default.
pub fn apply_document_metadata(received: &SiteSettingsPatch, document: &mut dyn DocumentSink) {
    document.set_title(non_empty_or(received.site_title.as_deref(), FALLBACK_TITLE));
    document.set_meta_description(non_empty_or(
        received.site_description.as_deref(),
        FALLBACK_DESCRIPTION,
    ));

    if let Some(favicon) = received.favicon_url.as_deref().filter(|url| !url.is_empty()) {
        document.set_favicon(favicon);
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}
