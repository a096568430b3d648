//! Comment — a reader's note attached to a post.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::BlogError;
use crate::id::{CommentId, PostId};
use crate::post::require;
use crate::time;

/// A comment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
}

/// Payload for creating a comment. The API assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: PostId,
    pub author: String,
    pub text: String,
    pub date: String,
}

impl NewComment {
    /// Create a builder for a comment on `post_id`.
    #[must_use]
    pub fn builder(post_id: PostId) -> NewCommentBuilder {
        NewCommentBuilder {
            post_id,
            author: None,
            text: None,
            date: None,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Validation`] when `author` or `text` is blank or
    /// `date` is not `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), BlogError> {
        require("author", &self.author)?;
        require("text", &self.text)?;
        time::parse_date(&self.date)?;
        Ok(())
    }
}

/// Step-by-step builder for [`NewComment`].
#[derive(Debug)]
pub struct NewCommentBuilder {
    post_id: PostId,
    author: Option<String>,
    text: Option<String>,
    date: Option<NaiveDate>,
}

impl NewCommentBuilder {
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Comment day; defaults to today (UTC).
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Consume the builder, validate, and return a [`NewComment`].
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Validation`] if `author` or `text` is missing or blank.
    pub fn build(self) -> Result<NewComment, BlogError> {
        let comment = NewComment {
            post_id: self.post_id,
            author: self.author.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            date: time::format_date(self.date.unwrap_or_else(time::today)),
        };
        comment.validate()?;
        Ok(comment)
    }
}
