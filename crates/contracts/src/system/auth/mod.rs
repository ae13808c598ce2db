use serde::{Deserialize, Serialize};

use crate::shared::ids::ApplicantId;

/// Session user record written to local storage by the login flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInfo {
    pub id: ApplicantId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
