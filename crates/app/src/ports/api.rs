//! API port — the external REST/JSON collaborator.

use std::future::Future;
use std::rc::Rc;

use techblog_domain::comment::{Comment, NewComment};
use techblog_domain::error::BlogError;
use techblog_domain::id::PostId;
use techblog_domain::post::{NewPost, Post};

/// Client for the blog's JSON API.
///
/// Implementations map transport failures and non-success statuses onto
/// [`BlogError`]; a missing post must surface as [`BlogError::NotFound`].
pub trait BlogApi {
    /// `GET /posts`.
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, BlogError>>;

    /// `GET /posts/{id}`.
    fn get_post(&self, id: &PostId) -> impl Future<Output = Result<Post, BlogError>>;

    /// `GET /comments?postId={id}`.
    fn list_comments(
        &self,
        post_id: &PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, BlogError>>;

    /// `POST /posts`, returning the stored post with its assigned id.
    fn create_post(&self, post: &NewPost) -> impl Future<Output = Result<Post, BlogError>>;

    /// `POST /comments`, returning the stored comment with its assigned id.
    fn create_comment(
        &self,
        comment: &NewComment,
    ) -> impl Future<Output = Result<Comment, BlogError>>;
}

impl<T: BlogApi + ?Sized> BlogApi for Rc<T> {
    fn list_posts(&self) -> impl Future<Output = Result<Vec<Post>, BlogError>> {
        (**self).list_posts()
    }

    fn get_post(&self, id: &PostId) -> impl Future<Output = Result<Post, BlogError>> {
        (**self).get_post(id)
    }

    fn list_comments(
        &self,
        post_id: &PostId,
    ) -> impl Future<Output = Result<Vec<Comment>, BlogError>> {
        (**self).list_comments(post_id)
    }

    fn create_post(&self, post: &NewPost) -> impl Future<Output = Result<Post, BlogError>> {
        (**self).create_post(post)
    }

    fn create_comment(
        &self,
        comment: &NewComment,
    ) -> impl Future<Output = Result<Comment, BlogError>> {
        (**self).create_comment(comment)
    }
}
