use std::path::Path;

use parking_lot::Mutex;
use sled::{Config, Db, Tree};
use tracing::warn;

use crate::{application::services::CredentialProvider, domain::DomainError};

const CREDENTIALS_TREE: &str = "credentials";

/// Key the admin bearer token is stored under.
pub const ADMIN_TOKEN_KEY: &str = "admin_token";

/// Persistent client-side credential storage backed by `sled`.
///
/// Holds at most the admin bearer token under [`ADMIN_TOKEN_KEY`]. The token
/// is read on every lookup so a login from another process is picked up.
pub struct SledCredentialStore {
    db: Db,
    credentials: Tree,
    write_lock: Mutex<()>,
}

impl SledCredentialStore {
    /// Opens (or creates) the credential database rooted at `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, DomainError> {
        let dir = data_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|err| {
            DomainError::storage(format!("failed to create data directory {:?}: {err}", dir))
        })?;

        let db = Config::default()
            .path(&dir)
            .cache_capacity(1024 * 1024)
            .open()
            .map_err(|err| DomainError::storage(format!("failed to open sled db: {err}")))?;

        let credentials = db.open_tree(CREDENTIALS_TREE).map_err(|err| {
            DomainError::storage(format!("failed to open credentials tree: {err}"))
        })?;

        Ok(Self {
            db,
            credentials,
            write_lock: Mutex::new(()),
        })
    }

    pub fn token(&self) -> Result<Option<String>, DomainError> {
        let value = self
            .credentials
            .get(ADMIN_TOKEN_KEY)
            .map_err(|err| DomainError::storage(format!("failed to read token: {err}")))?;

        value
            .map(|bytes| {
                String::from_utf8(bytes.to_vec())
                    .map_err(|err| DomainError::storage(format!("stored token is not UTF-8: {err}")))
            })
            .transpose()
    }

    pub fn store_token(&self, token: &str) -> Result<(), DomainError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DomainError::validation("token cannot be empty"));
        }

        let _guard = self.write_lock.lock();
        self.credentials
            .insert(ADMIN_TOKEN_KEY, token.as_bytes())
            .map_err(|err| DomainError::storage(format!("failed to store token: {err}")))?;
        self.flush()
    }

    /// Remove the stored token. Returns whether one was present.
    pub fn clear_token(&self) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock();
        let previous = self
            .credentials
            .remove(ADMIN_TOKEN_KEY)
            .map_err(|err| DomainError::storage(format!("failed to remove token: {err}")))?;
        self.flush()?;
        Ok(previous.is_some())
    }

    fn flush(&self) -> Result<(), DomainError> {
        self.db
            .flush()
            .map(|_| ())
            .map_err(|err| DomainError::storage(format!("failed to flush credentials: {err}")))
    }
}

impl CredentialProvider for SledCredentialStore {
    fn bearer_token(&self) -> Option<String> {
        match self.token() {
            Ok(token) => token,
            Err(err) => {
                warn!(target: "hdmonks::credentials", error = %err, "credential lookup failed");
                None
            }
        }
    }
}
