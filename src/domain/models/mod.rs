use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod catalogue;
mod icon;
pub mod settings;

pub use catalogue::{filter_stages, BusinessType, RecordId, Service, Stage};
pub use icon::Icon;
pub use settings::{
    MailSettings, MailSettingsPatch, Settings, SettingsPatch, SiteSettings, SiteSettingsPatch,
    SocialLinks, SocialLinksPatch, SocialPlatform,
};

/// Lead submitted through the contact form. Write-only from the client's side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub business_type: String,
    pub message: String,
}

impl ContactInquiry {
    /// Trimmed copy, the way the payload is sent over the wire.
    pub fn normalized(&self) -> Self {
        Self {
            full_name: sanitize_single_line(&self.full_name),
            email: self.email.trim().to_string(),
            phone: sanitize_single_line(&self.phone),
            business_type: self.business_type.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient user-visible message (a toast in the browser build).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

fn sanitize_single_line(input: &str) -> String {
    input.lines().next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_inquiry_is_trimmed() {
        let inquiry = ContactInquiry {
            full_name: "  Asha Rao \nignored".into(),
            email: " asha@example.com ".into(),
            phone: " 98765 ".into(),
            business_type: " startup".into(),
            message: "\n Need GST help \n".into(),
        };
        let normalized = inquiry.normalized();

        assert_eq!(normalized.full_name, "Asha Rao");
        assert_eq!(normalized.email, "asha@example.com");
        assert_eq!(normalized.phone, "98765");
        assert_eq!(normalized.business_type, "startup");
        assert_eq!(normalized.message, "Need GST help");
    }

    #[test]
    fn notification_levels_serialize_lowercase() {
        let value = serde_json::to_value(Notification::error("boom")).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["message"], "boom");
    }
}
