use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainError;

pub const DEFAULT_COMPANY_NAME: &str = "HD MONKS";
pub const DEFAULT_SITE_TITLE: &str = "HD MONKS - Business Solutions";
pub const DEFAULT_SITE_DESCRIPTION: &str = "End-to-end business solutions from startup to IPO";
pub const DEFAULT_LOGO_URL: &str = "https://customer-assets.emergentagent.com/job_bizlaunch-guide-1/artifacts/7w27dsce_HD%20Monks%20%282%29.png";
pub const DEFAULT_COMPANY_EMAIL: &str = "contact@hdmonks.com";
pub const DEFAULT_COMPANY_PHONE: &str = "+91 XXX XXX XXXX";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Public branding and contact details rendered on every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub company_name: String,
    pub site_title: String,
    pub site_description: String,
    pub company_logo_url: String,
    pub favicon_url: String,
    pub company_email: String,
    pub company_phone: String,
    pub company_address: String,
    pub social_links: SocialLinks,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.into(),
            site_title: DEFAULT_SITE_TITLE.into(),
            site_description: DEFAULT_SITE_DESCRIPTION.into(),
            company_logo_url: DEFAULT_LOGO_URL.into(),
            favicon_url: String::new(),
            company_email: DEFAULT_COMPANY_EMAIL.into(),
            company_phone: DEFAULT_COMPANY_PHONE.into(),
            company_address: String::new(),
            social_links: SocialLinks::default(),
        }
    }
}

impl SiteSettings {
    /// Every field empty. Used as the base of the admin draft.
    pub fn blank() -> Self {
        Self {
            company_name: String::new(),
            site_title: String::new(),
            site_description: String::new(),
            company_logo_url: String::new(),
            favicon_url: String::new(),
            company_email: String::new(),
            company_phone: String::new(),
            company_address: String::new(),
            social_links: SocialLinks::default(),
        }
    }

    /// Overlay `patch`: present keys win, absent keys keep the current value.
    pub fn apply(&mut self, patch: SiteSettingsPatch) {
        let SiteSettingsPatch {
            company_name,
            site_title,
            site_description,
            company_logo_url,
            favicon_url,
            company_email,
            company_phone,
            company_address,
            social_links,
        } = patch;

        overlay(&mut self.company_name, company_name);
        overlay(&mut self.site_title, site_title);
        overlay(&mut self.site_description, site_description);
        overlay(&mut self.company_logo_url, company_logo_url);
        overlay(&mut self.favicon_url, favicon_url);
        overlay(&mut self.company_email, company_email);
        overlay(&mut self.company_phone, company_phone);
        overlay(&mut self.company_address, company_address);
        if let Some(links) = social_links {
            self.social_links.apply(links);
        }
    }

    pub fn merged(mut self, patch: SiteSettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Social profile URLs keyed by platform. Empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Twitter => &self.twitter,
            SocialPlatform::Facebook => &self.facebook,
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        let slot = match platform {
            SocialPlatform::Linkedin => &mut self.linkedin,
            SocialPlatform::Twitter => &mut self.twitter,
            SocialPlatform::Facebook => &mut self.facebook,
        };
        *slot = url.into();
    }

    /// Per-platform merge: a partial object only replaces the platforms it names.
    pub fn apply(&mut self, patch: SocialLinksPatch) {
        overlay(&mut self.linkedin, patch.linkedin);
        overlay(&mut self.twitter, patch.twitter);
        overlay(&mut self.facebook, patch.facebook);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Linkedin,
    Twitter,
    Facebook,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [Self::Linkedin, Self::Twitter, Self::Facebook];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown social platform '{s}'")))
    }
}

/// Outbound mail configuration. Only ever exchanged with the admin endpoints.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_password: String,
    pub recipient_email: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            smtp_host: String::new(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_user: String::new(),
            smtp_password: String::new(),
            recipient_email: String::new(),
        }
    }
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_password", &redacted(&self.smtp_password))
            .field("recipient_email", &self.recipient_email)
            .finish()
    }
}

impl MailSettings {
    pub fn apply(&mut self, patch: MailSettingsPatch) {
        overlay(&mut self.smtp_host, patch.smtp_host);
        overlay(&mut self.smtp_port, patch.smtp_port);
        overlay(&mut self.smtp_user, patch.smtp_user);
        overlay(&mut self.smtp_password, patch.smtp_password);
        overlay(&mut self.recipient_email, patch.recipient_email);
    }
}

/// The full settings resource as seen by the admin endpoints.
///
/// Keys this client does not know are kept in `extra` and written back on
/// save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(flatten)]
    pub site: SiteSettings,
    #[serde(flatten)]
    pub mail: MailSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// The admin editor's empty-default object.
    pub fn blank() -> Self {
        Self {
            site: SiteSettings::blank(),
            mail: MailSettings::default(),
            extra: Map::new(),
        }
    }

    pub fn apply(&mut self, patch: SettingsPatch) {
        self.site.apply(patch.site);
        self.mail.apply(patch.mail);
        self.extra.extend(patch.extra);
    }

    pub fn merged(mut self, patch: SettingsPatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Server payload for the public settings. `null` and a missing key both
/// deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettingsPatch {
    pub company_name: Option<String>,
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub company_logo_url: Option<String>,
    pub favicon_url: Option<String>,
    pub company_email: Option<String>,
    pub company_phone: Option<String>,
    pub company_address: Option<String>,
    pub social_links: Option<SocialLinksPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinksPatch {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailSettingsPatch {
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub recipient_email: Option<String>,
}

impl fmt::Debug for MailSettingsPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettingsPatch")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field(
                "smtp_password",
                &self.smtp_password.as_deref().map(redacted),
            )
            .field("recipient_email", &self.recipient_email)
            .finish()
    }
}

/// Server payload for the admin settings resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(flatten)]
    pub site: SiteSettingsPatch,
    #[serde(flatten)]
    pub mail: MailSettingsPatch,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn overlay<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "***"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_keep_defaults() {
        let patch: SiteSettingsPatch =
            serde_json::from_value(serde_json::json!({ "company_name": "Acme" })).unwrap();
        let merged = SiteSettings::default().merged(patch);

        assert_eq!(merged.company_name, "Acme");
        assert_eq!(merged.site_title, DEFAULT_SITE_TITLE);
        assert_eq!(merged.company_email, DEFAULT_COMPANY_EMAIL);
        assert_eq!(merged.company_logo_url, DEFAULT_LOGO_URL);
    }

    #[test]
    fn null_fields_fall_back_to_previous_value() {
        let patch: SiteSettingsPatch = serde_json::from_value(serde_json::json!({
            "site_title": null,
            "company_phone": null,
            "social_links": null,
        }))
        .unwrap();
        let merged = SiteSettings::default().merged(patch);

        assert_eq!(merged, SiteSettings::default());
    }

    #[test]
    fn empty_string_is_a_present_value() {
        let patch = SiteSettingsPatch {
            company_phone: Some(String::new()),
            ..Default::default()
        };
        let merged = SiteSettings::default().merged(patch);
        assert_eq!(merged.company_phone, "");
    }

    #[test]
    fn partial_social_links_merge_per_platform() {
        let mut base = SiteSettings::default();
        base.social_links.twitter = "https://twitter.com/hdmonks".into();
        base.social_links.facebook = "https://facebook.com/hdmonks".into();

        let patch: SiteSettingsPatch = serde_json::from_value(serde_json::json!({
            "social_links": { "linkedin": "https://linkedin.com/company/hdmonks" }
        }))
        .unwrap();
        let merged = base.merged(patch);

        assert_eq!(
            merged.social_links.linkedin,
            "https://linkedin.com/company/hdmonks"
        );
        assert_eq!(merged.social_links.twitter, "https://twitter.com/hdmonks");
        assert_eq!(merged.social_links.facebook, "https://facebook.com/hdmonks");
    }

    #[test]
    fn admin_payload_without_port_keeps_default_port() {
        let patch: SettingsPatch = serde_json::from_value(serde_json::json!({
            "company_name": "HD MONKS",
            "smtp_host": "smtp.gmail.com",
            "smtp_user": "mailer"
        }))
        .unwrap();
        let merged = Settings::blank().merged(patch);

        assert_eq!(merged.mail.smtp_port, DEFAULT_SMTP_PORT);
        assert_eq!(merged.mail.smtp_host, "smtp.gmail.com");
        assert_eq!(merged.site.company_name, "HD MONKS");
        assert_eq!(merged.site.company_email, "");
    }

    #[test]
    fn settings_serialize_as_one_flat_object() {
        let mut settings = Settings::blank();
        settings.mail.smtp_port = 465;
        settings.site.social_links.linkedin = "x".into();

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["smtp_port"], 465);
        assert_eq!(value["company_name"], "");
        assert_eq!(value["social_links"]["linkedin"], "x");
        assert!(value.get("site").is_none());
        assert!(value.get("mail").is_none());
        assert!(value.get("extra").is_none());
    }

    #[test]
    fn unknown_admin_keys_are_carried_to_the_next_save() {
        let patch: SettingsPatch = serde_json::from_value(serde_json::json!({
            "company_name": "HD MONKS",
            "smtp_port": 465,
            "social_links": { "linkedin": "https://linkedin.com/a" },
            "_id": "6650f0c2a1b2c3d4e5f60718",
            "updated_at": "2026-01-05T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(patch.extra.len(), 2);

        let merged = Settings::blank().merged(patch);
        let value = serde_json::to_value(&merged).unwrap();

        assert_eq!(value["_id"], "6650f0c2a1b2c3d4e5f60718");
        assert_eq!(value["updated_at"], "2026-01-05T10:00:00Z");
        assert_eq!(value["smtp_port"], 465);
        assert_eq!(value["social_links"]["linkedin"], "https://linkedin.com/a");
        assert!(merged.extra.get("company_name").is_none());
    }

    #[test]
    fn debug_output_hides_smtp_password() {
        let mut mail = MailSettings::default();
        mail.smtp_password = "hunter2".into();
        let rendered = format!("{mail:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn social_platform_parses_case_insensitively() {
        assert_eq!(
            "LinkedIn".parse::<SocialPlatform>().unwrap(),
            SocialPlatform::Linkedin
        );
        assert!("myspace".parse::<SocialPlatform>().is_err());
    }
}
