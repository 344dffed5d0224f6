use serde::{Deserialize, Serialize};

use crate::domain::{BusinessType, DomainError, Stage};

/// Response envelope used by every public endpoint: `{ success, data }`.
///
/// The admin endpoints omit `success`, which then reads as `false`; callers
/// that talk to them use [`ApiEnvelope::into_payload`] instead of
/// [`ApiEnvelope::into_data`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Data of a `success: true` envelope.
    pub fn into_data(self, what: &str) -> Result<T, DomainError> {
        if !self.success {
            return Err(DomainError::rejected(self.describe_rejection(what)));
        }
        self.data
            .ok_or_else(|| DomainError::rejected(format!("{what}: response carried no data")))
    }

    /// Data regardless of the `success` flag.
    pub fn into_payload(self, what: &str) -> Result<T, DomainError> {
        self.data
            .ok_or_else(|| DomainError::rejected(format!("{what}: response carried no data")))
    }

    fn describe_rejection(&self, what: &str) -> String {
        match &self.message {
            Some(message) => format!("{what}: {message}"),
            None => format!("{what}: success flag not set"),
        }
    }
}

/// Acknowledgement body of write endpoints that return no data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AckResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl AckResponse {
    pub fn into_result(self, what: &str) -> Result<(), DomainError> {
        if self.success {
            Ok(())
        } else {
            Err(DomainError::rejected(match self.message {
                Some(message) => format!("{what}: {message}"),
                None => format!("{what}: success flag not set"),
            }))
        }
    }
}

/// Filtered catalogue as handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogueView {
    pub business_type: String,
    pub progress_percentage: u8,
    pub stages: Vec<Stage>,
}

impl CatalogueView {
    pub fn new(business_type: BusinessType, stages: Vec<Stage>) -> Self {
        Self {
            business_type: business_type.tag().to_string(),
            progress_percentage: business_type.progress_percentage(),
            stages,
        }
    }
}
