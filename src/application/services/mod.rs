//! Service layer orchestrating the site flows over injected gateways.

mod catalogue;
mod contact_form;
mod gateways;
mod settings_editor;
mod settings_provider;
#[cfg(test)]
pub(crate) mod testing;

pub use catalogue::{CataloguePage, STAGES_FAILED};
pub use contact_form::{ContactForm, SUBMIT_FAILED, SUBMIT_SUCCEEDED};
pub use gateways::{AdminGateway, CredentialProvider, DocumentSink, IconLookup, Notifier, SiteApi};
pub use settings_editor::{
    SettingsEdit, SettingsEditor, SettingsTab, LOAD_FAILED, SAVE_FAILED, SAVE_SUCCEEDED,
};
pub use settings_provider::{
    apply_document_metadata, SettingsProvider, FALLBACK_DESCRIPTION, FALLBACK_TITLE,
};
