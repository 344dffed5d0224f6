//! Application layer wiring DTOs and services for the site client.

pub mod dtos;
pub mod services;

pub use dtos::{AckResponse, ApiEnvelope, CatalogueView};
pub use services::{CataloguePage, ContactForm, SettingsEditor, SettingsProvider};
