//! Storage adapters for the site client.
//!
//! Currently only the sled-backed credential store that stands in for the
//! browser's local storage.

pub mod sled_store;

pub use sled_store::{SledCredentialStore, ADMIN_TOKEN_KEY};
