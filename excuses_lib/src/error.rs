//! Error types for fetching the excuse page.

/// Errors that can occur while requesting the excuse page.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// The request could not be completed, or the body could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("Failed to fetch: {status}")]
    Status { status: u16 },
    /// The configured page URL does not parse.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_carries_code() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "Failed to fetch: 503");
    }

    #[test]
    fn invalid_url_message() {
        let err = FetchError::InvalidUrl("relative URL without a base".into());
        assert_eq!(err.to_string(), "invalid url: relative URL without a base");
    }
}
