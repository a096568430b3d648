//! Post — an article published on the blog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BlogError, ValidationError};
use crate::id::PostId;
use crate::route::Route;
use crate::time;

/// An article as returned by the API.
///
/// Only `id` and `title` are mandatory on the wire; the API store is
/// external and older records may lack the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Cover image URL.
    #[serde(default)]
    pub image: String,
    /// Rich markup, rendered as-is.
    #[serde(default)]
    pub content: String,
    /// Publication day, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

impl Post {
    /// In-app path of this post's detail page.
    #[must_use]
    pub fn path(&self) -> String {
        Route::PostDetail(self.id.clone()).path()
    }
}

/// Payload for creating a post. The API assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub content: String,
    pub date: String,
}

impl NewPost {
    /// Create a builder for constructing a [`NewPost`].
    #[must_use]
    pub fn builder() -> NewPostBuilder {
        NewPostBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Validation`] when a field is blank or `date` is
    /// not `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), BlogError> {
        require("title", &self.title)?;
        require("excerpt", &self.excerpt)?;
        require("image", &self.image)?;
        require("content", &self.content)?;
        time::parse_date(&self.date)?;
        Ok(())
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(())
}

/// Step-by-step builder for [`NewPost`].
#[derive(Debug, Default)]
pub struct NewPostBuilder {
    title: Option<String>,
    excerpt: Option<String>,
    image: Option<String>,
    content: Option<String>,
    date: Option<NaiveDate>,
}

impl NewPostBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Publication day; defaults to today (UTC).
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Consume the builder, validate, and return a [`NewPost`].
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Validation`] if any text field is missing or blank.
    pub fn build(self) -> Result<NewPost, BlogError> {
        let post = NewPost {
            title: self.title.unwrap_or_default(),
            excerpt: self.excerpt.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            date: time::format_date(self.date.unwrap_or_else(time::today)),
        };
        post.validate()?;
        Ok(post)
    }
}
