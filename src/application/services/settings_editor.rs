use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{DomainError, Notification, Settings, SocialPlatform};

use super::gateways::{AdminGateway, Notifier};

pub const LOAD_FAILED: &str = "Failed to load settings";
pub const SAVE_SUCCEEDED: &str = "Settings saved successfully";
pub const SAVE_FAILED: &str = "Failed to save settings";

/// Tabs of the settings screen. Purely presentational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SettingsTab {
    #[default]
    Company,
    Smtp,
    Social,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [Self::Company, Self::Smtp, Self::Social];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsTab::Company => "company",
            SettingsTab::Smtp => "smtp",
            SettingsTab::Social => "social",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Company => "Company",
            SettingsTab::Smtp => "Smtp",
            SettingsTab::Social => "Social",
        }
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingsTab {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| DomainError::validation(format!("unknown settings tab '{s}'")))
    }
}

/// One edit of one field of the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEdit {
    CompanyName(String),
    CompanyEmail(String),
    CompanyPhone(String),
    CompanyAddress(String),
    SmtpHost(String),
    SmtpPort(u16),
    SmtpUser(String),
    SmtpPassword(String),
    RecipientEmail(String),
    SocialLink(SocialPlatform, String),
}

impl SettingsEdit {
    /// Field names accepted by [`SettingsEdit::parse`].
    pub const FIELDS: [&'static str; 12] = [
        "company_name",
        "company_email",
        "company_phone",
        "company_address",
        "smtp_host",
        "smtp_port",
        "smtp_user",
        "smtp_password",
        "recipient_email",
        "linkedin",
        "twitter",
        "facebook",
    ];

    /// Build an edit from a field name and its raw text value.
    ///
    /// Social platforms may be named bare (`linkedin`) or qualified
    /// (`social_links.linkedin`).
    pub fn parse(field: &str, value: &str) -> Result<Self, DomainError> {
        let field = field.trim();
        let value = value.to_string();

        let edit = match field {
            "company_name" => Self::CompanyName(value),
            "company_email" => Self::CompanyEmail(value),
            "company_phone" => Self::CompanyPhone(value),
            "company_address" => Self::CompanyAddress(value),
            "smtp_host" => Self::SmtpHost(value),
            "smtp_port" => {
                let port = value.trim().parse::<u16>().map_err(|_| {
                    DomainError::validation(format!("smtp_port must be a port number, got '{value}'"))
                })?;
                Self::SmtpPort(port)
            }
            "smtp_user" => Self::SmtpUser(value),
            "smtp_password" => Self::SmtpPassword(value),
            "recipient_email" => Self::RecipientEmail(value),
            other => {
                let platform = other.strip_prefix("social_links.").unwrap_or(other);
                let platform = platform
                    .parse::<SocialPlatform>()
                    .map_err(|_| DomainError::validation(format!("unknown settings field '{field}'")))?;
                Self::SocialLink(platform, value)
            }
        };

        Ok(edit)
    }

    pub fn tab(&self) -> SettingsTab {
        match self {
            Self::CompanyName(_)
            | Self::CompanyEmail(_)
            | Self::CompanyPhone(_)
            | Self::CompanyAddress(_) => SettingsTab::Company,
            Self::SmtpHost(_)
            | Self::SmtpPort(_)
            | Self::SmtpUser(_)
            | Self::SmtpPassword(_)
            | Self::RecipientEmail(_) => SettingsTab::Smtp,
            Self::SocialLink(..) => SettingsTab::Social,
        }
    }

    fn apply_to(self, draft: &mut Settings) {
        match self {
            Self::CompanyName(v) => draft.site.company_name = v,
            Self::CompanyEmail(v) => draft.site.company_email = v,
            Self::CompanyPhone(v) => draft.site.company_phone = v,
            Self::CompanyAddress(v) => draft.site.company_address = v,
            Self::SmtpHost(v) => draft.mail.smtp_host = v,
            Self::SmtpPort(v) => draft.mail.smtp_port = v,
            Self::SmtpUser(v) => draft.mail.smtp_user = v,
            Self::SmtpPassword(v) => draft.mail.smtp_password = v,
            Self::RecipientEmail(v) => draft.mail.recipient_email = v,
            Self::SocialLink(platform, url) => draft.site.social_links.set(platform, url),
        }
    }
}

/// Back-office settings screen: one in-memory draft, loaded and saved whole.
pub struct SettingsEditor {
    gateway: Arc<dyn AdminGateway>,
    notifier: Arc<dyn Notifier>,
    draft: Settings,
    active_tab: SettingsTab,
}

impl SettingsEditor {
    pub fn new(gateway: Arc<dyn AdminGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            gateway,
            notifier,
            draft: Settings::blank(),
            active_tab: SettingsTab::default(),
        }
    }

    pub fn draft(&self) -> &Settings {
        &self.draft
    }

    pub fn active_tab(&self) -> SettingsTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.active_tab = tab;
    }

    /// Fetch the full settings and replace the draft with them, laid over
    /// the empty-default object.
    ///
    /// On failure an error notification is raised and the draft is kept.
    pub fn load(&mut self) -> Result<&Settings, DomainError> {
        match self.gateway.load_settings() {
            Ok(patch) => {
                self.draft = Settings::blank().merged(patch);
                Ok(&self.draft)
            }
            Err(err) => {
                warn!(target: "hdmonks::admin", error = %err, "loading admin settings failed");
                self.notifier.notify(Notification::error(LOAD_FAILED));
                Err(err)
            }
        }
    }

    pub fn edit(&mut self, edit: SettingsEdit) {
        edit.apply_to(&mut self.draft);
    }

    /// Send the whole draft. The draft is not touched on either outcome.
    pub fn save(&self) -> Result<(), DomainError> {
        match self.gateway.save_settings(&self.draft) {
            Ok(()) => {
                info!(target: "hdmonks::admin", "settings saved");
                self.notifier.notify(Notification::success(SAVE_SUCCEEDED));
                Ok(())
            }
            Err(err) => {
                warn!(target: "hdmonks::admin", error = %err, "saving admin settings failed");
                self.notifier.notify(Notification::error(SAVE_FAILED));
                Err(err)
            }
        }
    }
}
