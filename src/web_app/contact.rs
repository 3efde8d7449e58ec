// web_app/contact.rs - Contact form controller
//
// Success is terminal for the mounted page. Failure keeps the fields so the
// visitor can retry.

use crate::web_app::api::StorefrontApi;
use crate::web_app::error::{FormError, StorefrontError};
use crate::web_app::model::ContactMessage;

pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

impl ContactMessage {
    /// Every field is required; email needs text on both sides of an `@`.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::Missing("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(FormError::Missing("Email"));
        }
        if self.message.trim().is_empty() {
            return Err(FormError::Missing("Message"));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(FormError::InvalidEmail),
        }
    }
}

/// Where the contact page is in its lifecycle
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Sending,
    /// Error text shown under the form; fields untouched
    Failed(String),
    /// Terminal "thank you" state
    Sent,
}

impl ContactStatus {
    pub fn error(&self) -> Option<&str> {
        match self {
            ContactStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, ContactStatus::Sent)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, ContactStatus::Sending)
    }
}

/// Validate and submit `form`, returning the next page status.
///
/// The form itself is only borrowed, so whatever the caller holds stays
/// populated on failure.
pub async fn submit<A: StorefrontApi>(api: &A, form: &ContactMessage) -> ContactStatus {
    match try_submit(api, form).await {
        Ok(()) => {
            tracing::info!("contact message sent");
            ContactStatus::Sent
        }
        Err(StorefrontError::Validation(e)) => ContactStatus::Failed(e.to_string()),
        Err(e) => {
            tracing::warn!("contact submit failed: {}", e);
            ContactStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string())
        }
    }
}

async fn try_submit<A: StorefrontApi>(api: &A, form: &ContactMessage) -> Result<(), StorefrontError> {
    form.validate()?;
    api.send_contact(form).await?;
    Ok(())
}
