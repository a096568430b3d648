//! Common error types used across the workspace.
//!
//! Each failure family has its own typed error; [`BlogError`] unifies them
//! via `#[from]` so that `?` works across layers. Display strings are shown
//! to the reader in error views, so they stay short and plain.

/// Top-level error for every fallible operation in techblog.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// A domain invariant was violated (typically a form field).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The API reported that a resource does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The API could not be reached or answered unexpectedly.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{0} is required")]
    EmptyField(&'static str),

    /// A date is not in `YYYY-MM-DD` form.
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// An identifier is empty.
    #[error("identifier must not be empty")]
    EmptyId,
}

/// A resource looked up by id was not found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Kind of resource (e.g. `"Post"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

/// Failures talking to the external JSON API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, …).
    #[error("network error: {0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("unexpected response status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_without_id() {
        let err: BlogError = NotFoundError {
            entity: "Post",
            id: "42".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn should_display_field_name_when_field_is_empty() {
        let err: BlogError = ValidationError::EmptyField("title").into();
        assert_eq!(err.to_string(), "title is required");
    }

    #[test]
    fn should_display_status_code_for_status_error() {
        let err = ApiError::Status { status: 500 };
        assert_eq!(err.to_string(), "unexpected response status 500");
    }
}
