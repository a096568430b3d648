//! Form submissions — field extraction and payload construction.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use techblog_domain::comment::NewComment;
use techblog_domain::error::{BlogError, ValidationError};
use techblog_domain::id::PostId;
use techblog_domain::post::NewPost;

/// `id` of the create-post form on the admin view.
pub const CREATE_POST_FORM_ID: &str = "create-post-form";

/// `id` of the comment form on the post-detail view.
pub const COMMENT_FORM_ID: &str = "comment-form";

/// Name of the hidden field carrying the post id in the comment form.
pub const POST_ID_FIELD: &str = "postId";

/// Values of a submitted form, keyed by control `name` (or `id`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a control value. A later value for the same name wins.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

/// Build the create-post payload from the admin form.
///
/// # Errors
///
/// Returns [`BlogError::Validation`] when any of `title`, `excerpt`,
/// `image`, `content` is missing or blank.
pub fn new_post(fields: &FormFields, today: NaiveDate) -> Result<NewPost, BlogError> {
    NewPost::builder()
        .title(fields.text("title"))
        .excerpt(fields.text("excerpt"))
        .image(fields.text("image"))
        .content(fields.text("content"))
        .date(today)
        .build()
}

/// Post id embedded in the comment form, as rendered.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyField`] when the field is missing and
/// [`ValidationError::EmptyId`] when it is blank.
pub fn comment_target(fields: &FormFields) -> Result<&str, ValidationError> {
    let value = fields
        .get(POST_ID_FIELD)
        .ok_or(ValidationError::EmptyField(POST_ID_FIELD))?
        .trim();
    if value.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(value)
}

/// Build the comment payload for `post_id` from the post-detail form.
///
/// `post_id` is the id of the displayed post as the API returned it, so the
/// payload echoes it back in the same JSON representation.
///
/// # Errors
///
/// Returns [`BlogError::Validation`] when `author` or `text` is missing or
/// blank.
pub fn new_comment(
    post_id: PostId,
    fields: &FormFields,
    today: NaiveDate,
) -> Result<NewComment, BlogError> {
    NewComment::builder(post_id)
        .author(fields.text("author"))
        .text(fields.text("text"))
        .date(today)
        .build()
}
