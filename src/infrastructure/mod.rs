//! Infrastructure layer wiring concrete adapters (HTTP, storage, presentation sinks).

pub mod credentials;
pub mod document;
pub mod http_client;
pub mod icons;
pub mod notifications;
pub mod storage;

pub use credentials::StaticCredentials;
pub use document::HeadDocument;
pub use http_client::{RemoteAdminGateway, RemoteSiteApi};
pub use icons::StaticIconSet;
pub use notifications::{ConsoleNotifier, NotificationLog};
pub use storage::SledCredentialStore;
