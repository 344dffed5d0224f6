//! Capabilities the application services are wired with.

use crate::domain::{
    ContactInquiry, DomainError, Icon, Notification, Settings, SettingsPatch, SiteSettingsPatch,
    Stage,
};

/// Public, unauthenticated endpoints of the site backend.
pub trait SiteApi: Send + Sync {
    fn public_settings(&self) -> Result<SiteSettingsPatch, DomainError>;

    fn stages(&self) -> Result<Vec<Stage>, DomainError>;

    fn submit_contact(&self, inquiry: &ContactInquiry) -> Result<(), DomainError>;
}

/// Bearer-authorized settings resource used by the back-office.
pub trait AdminGateway: Send + Sync {
    fn load_settings(&self) -> Result<SettingsPatch, DomainError>;

    /// Replace the stored settings wholesale.
    fn save_settings(&self, settings: &Settings) -> Result<(), DomainError>;
}

/// Source of the admin bearer token.
pub trait CredentialProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Sink for transient user-visible messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Global page metadata a renderer exposes to the settings provider.
pub trait DocumentSink {
    fn set_title(&mut self, title: &str);

    fn set_meta_description(&mut self, description: &str);

    /// Point the favicon link at `href`, creating the link if none exists.
    fn set_favicon(&mut self, href: &str);
}

/// Maps the symbolic icon names stored on services to something drawable.
pub trait IconLookup: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Icon>;

    fn symbol(&self, name: &str) -> Option<&'static str>;
}
