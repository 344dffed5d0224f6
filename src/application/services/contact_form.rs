use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{BusinessType, ContactInquiry, DomainError, Notification};

use super::gateways::{Notifier, SiteApi};

pub const SUBMIT_SUCCEEDED: &str = "Thank you! We will get back to you soon.";
pub const SUBMIT_FAILED: &str = "Failed to submit inquiry. Please try again.";

/// The lead-capture form on the home page.
pub struct ContactForm {
    api: Arc<dyn SiteApi>,
    notifier: Arc<dyn Notifier>,
    draft: ContactInquiry,
}

impl ContactForm {
    pub fn new(
        api: Arc<dyn SiteApi>,
        notifier: Arc<dyn Notifier>,
        business_type: BusinessType,
    ) -> Self {
        Self {
            api,
            notifier,
            draft: blank_inquiry(business_type.tag()),
        }
    }

    pub fn fields(&self) -> &ContactInquiry {
        &self.draft
    }

    pub fn fields_mut(&mut self) -> &mut ContactInquiry {
        &mut self.draft
    }

    /// Submit the inquiry once.
    ///
    /// A blank required field stops the submission before any request. On
    /// success the form is cleared; on failure it keeps its contents so the
    /// visitor can resubmit.
    pub fn submit(&mut self) -> Result<(), DomainError> {
        validate_inquiry(&self.draft)?;

        match self.api.submit_contact(&self.draft.normalized()) {
            Ok(()) => {
                info!(target: "hdmonks::contact", "inquiry submitted");
                self.draft = blank_inquiry(&self.draft.business_type);
                self.notifier.notify(Notification::success(SUBMIT_SUCCEEDED));
                Ok(())
            }
            Err(err) => {
                warn!(target: "hdmonks::contact", error = %err, "submitting inquiry failed");
                self.notifier.notify(Notification::error(SUBMIT_FAILED));
                Err(err)
            }
        }
    }
}

fn blank_inquiry(business_type: &str) -> ContactInquiry {
    ContactInquiry {
        business_type: business_type.to_string(),
        ..ContactInquiry::default()
    }
}

fn validate_inquiry(inquiry: &ContactInquiry) -> Result<(), DomainError> {
    if inquiry.full_name.trim().is_empty() {
        return Err(DomainError::validation("full name is required"));
    }
    if inquiry.email.trim().is_empty() {
        return Err(DomainError::validation("email is required"));
    }
    if !looks_like_email(inquiry.email.trim()) {
        return Err(DomainError::validation(format!(
            "'{}' is not an email address",
            inquiry.email.trim()
        )));
    }
    if inquiry.phone.trim().is_empty() {
        return Err(DomainError::validation("phone is required"));
    }
    if inquiry.message.trim().is_empty() {
        return Err(DomainError::validation("message is required"));
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
