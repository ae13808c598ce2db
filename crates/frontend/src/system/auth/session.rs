use contracts::shared::ids::ApplicantId;

use super::storage;
use crate::shared::config::ApiConfig;

/// The signed-in applicant, handed explicitly to screens that call the API.
///
/// The bearer token is not held here: it is read from storage on every
/// request so a token refreshed elsewhere is picked up immediately.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicantSession {
    applicant_id: ApplicantId,
    token_key: String,
}

impl ApplicantSession {
    pub fn new(applicant_id: ApplicantId, token_key: impl Into<String>) -> Self {
        Self {
            applicant_id,
            token_key: token_key.into(),
        }
    }

    /// Restore the session written to localStorage by the login flow.
    pub fn restore(config: &ApiConfig) -> Option<Self> {
        let applicant = storage::get_applicant(&config.user_key)?;
        Some(Self::new(applicant.id, config.token_key.clone()))
    }

    pub fn applicant_id(&self) -> &ApplicantId {
        &self.applicant_id
    }

    /// `Authorization` header value, or `None` when no token is stored.
    pub fn bearer_header(&self) -> Option<String> {
        storage::get_bearer_token(&self.token_key).map(|token| bearer_value(&token))
    }
}

pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}
