//! Domain layer: settings, catalogue, and inquiry types for the HD MONKS site.

pub mod errors;
pub mod models;

pub use errors::DomainError;
pub use models::{
    filter_stages, BusinessType, ContactInquiry, Icon, MailSettings, MailSettingsPatch,
    Notification, NotificationLevel, RecordId, Service, Settings, SettingsPatch, SiteSettings,
    SiteSettingsPatch, SocialLinks, SocialLinksPatch, SocialPlatform, Stage,
};
