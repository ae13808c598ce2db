use thiserror::Error;

/// Failure of a call to the job-board API.
///
/// The text is for diagnostics only; screens show their own fixed messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no bearer token in local storage")]
    NotAuthenticated,
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::Status(503).to_string(),
            "server responded with status 503"
        );
        assert_eq!(
            ApiError::NotAuthenticated.to_string(),
            "no bearer token in local storage"
        );
    }
}
