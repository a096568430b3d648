//! Page loaders — fetch what a route needs and render it.
//!
//! Loaders never fail: fetch and render errors are caught here and turned
//! into the error view, so nothing escapes the render boundary.

use futures::future;

use techblog_domain::id::PostId;
use techblog_domain::route::Route;

use crate::navigation::Intent;
use crate::ports::BlogApi;
use crate::views::{self, ViewError};

/// Message shown when the post list cannot be loaded.
pub const HOME_ERROR: &str = "Error loading posts. Is the API server running?";

/// The screen currently written to the application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveView {
    /// Placeholder while `Route` fetches its data.
    Loading(Route),
    Home,
    PostDetail(PostId),
    About,
    Admin,
    Error,
}

impl ActiveView {
    /// Whether the markup of this view contains the element that produces
    /// `intent`. Header links exist on every view.
    #[must_use]
    pub fn accepts(&self, intent: &Intent) -> bool {
        match intent {
            Intent::Navigate(_) => true,
            Intent::Retry => matches!(self, Self::Error),
            Intent::CreatePost(_) => matches!(self, Self::Admin),
            Intent::AddComment(_) => matches!(self, Self::PostDetail(_)),
        }
    }
}

/// Rendered markup together with the view it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub markup: String,
    pub view: ActiveView,
}

impl Page {
    fn new(view: ActiveView, markup: Result<String, ViewError>) -> Self {
        match markup {
            Ok(markup) => Self { markup, view },
            Err(err) => {
                tracing::error!(%err, "view rendering failed");
                Self {
                    markup: views::FALLBACK_MARKUP.to_string(),
                    view: ActiveView::Error,
                }
            }
        }
    }

    fn error(message: &str) -> Self {
        Self::new(ActiveView::Error, views::error(message))
    }
}

/// Latest articles.
pub async fn home<A: BlogApi>(api: &A) -> Page {
    match api.list_posts().await {
        Ok(posts) => Page::new(ActiveView::Home, views::home(&posts)),
        Err(err) => {
            tracing::warn!(%err, "failed to load posts");
            Page::error(HOME_ERROR)
        }
    }
}

/// One article with its comments.
///
/// The post and its comments are fetched concurrently and both must
/// succeed before anything is rendered.
/// The active view keeps the id from the fetched post, which carries the
/// API's own representation (the route id is always parsed from text).
pub async fn post_detail<A: BlogApi>(api: &A, id: &PostId) -> Page {
    let (post, comments) = future::join(api.get_post(id), api.list_comments(id)).await;
    match (post, comments) {
        (Ok(post), Ok(comments)) => Page::new(
            ActiveView::PostDetail(post.id.clone()),
            views::post_detail(&post, &comments),
        ),
        (Err(err), _) | (_, Err(err)) => {
            tracing::warn!(%err, %id, "failed to load post");
            Page::error(&format!("Error loading post: {err}"))
        }
    }
}

#[must_use]
pub fn about() -> Page {
    Page::new(ActiveView::About, views::about())
}

#[must_use]
pub fn admin() -> Page {
    Page::new(ActiveView::Admin, views::admin())
}

/// Placeholder for a route that is still fetching.
#[must_use]
pub fn loading(route: &Route) -> Page {
    Page::new(ActiveView::Loading(route.clone()), views::loading())
}
