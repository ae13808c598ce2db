use contracts::system::auth::ApplicantInfo;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get a raw item from localStorage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Get the bearer token stored under `key`
///
/// An empty value counts as no token.
pub fn get_bearer_token(key: &str) -> Option<String> {
    get_item(key).filter(|token| !token.is_empty())
}

/// Get the signed-in applicant record stored under `key`
pub fn get_applicant(key: &str) -> Option<ApplicantInfo> {
    let raw = get_item(key)?;
    match serde_json::from_str::<ApplicantInfo>(&raw) {
        Ok(info) => Some(info),
        Err(e) => {
            log::warn!("Stored applicant record under '{}' is unreadable: {}", key, e);
            None
        }
    }
}
