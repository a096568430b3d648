//! API endpoint URLs and response-status mapping.
//!
//! Shared by every [`BlogApi`](crate::ports::BlogApi) adapter so that URL
//! shapes and the error taxonomy stay identical across transports.

use techblog_domain::error::{ApiError, BlogError, NotFoundError};
use techblog_domain::id::PostId;
use techblog_domain::route::encode_segment;

use crate::config::ClientConfig;

/// URL builder for the JSON API collection endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base: config.api_base_url().to_string(),
        }
    }

    /// `{base}/posts`
    #[must_use]
    pub fn posts(&self) -> String {
        format!("{}/posts", self.base)
    }

    /// `{base}/posts/{id}`
    #[must_use]
    pub fn post(&self, id: &PostId) -> String {
        format!("{}/posts/{}", self.base, encode_segment(&id.to_string()))
    }

    /// `{base}/comments`
    #[must_use]
    pub fn comments(&self) -> String {
        format!("{}/comments", self.base)
    }

    /// `{base}/comments?postId={id}`
    #[must_use]
    pub fn comments_for(&self, post_id: &PostId) -> String {
        format!(
            "{}/comments?postId={}",
            self.base,
            encode_segment(&post_id.to_string())
        )
    }
}

/// Accept any 2xx status.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for every other status.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(ApiError::Status { status })
}

/// Like [`check_status`], but a `404` becomes [`BlogError::NotFound`].
///
/// # Errors
///
/// Returns [`BlogError::NotFound`] for `404` and [`BlogError::Api`] for any
/// other non-2xx status.
pub fn check_lookup(status: u16, entity: &'static str, id: &PostId) -> Result<(), BlogError> {
    if status == 404 {
        return Err(NotFoundError {
            entity,
            id: id.to_string(),
        }
        .into());
    }
    check_status(status)?;
    Ok(())
}
