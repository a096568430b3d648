//! Client-side router.
//!
//! Owns the application root and drives every render: resolve the current
//! path, show a loading placeholder for routes that fetch, load the page,
//! and write it only if no newer navigation started in the meantime.
//! Form submissions go through here too, so the post-submit navigation uses
//! the same render path as everything else.

use std::cell::RefCell;

use techblog_domain::route::Route;
use techblog_domain::time;

use crate::forms::{self, FormFields};
use crate::navigation::Intent;
use crate::pages::{self, ActiveView, Page};
use crate::ports::{BlogApi, Document, History, Notifier};
use crate::transition::Transitions;

/// Shown after a post was stored.
pub const POST_CREATED: &str = "Post created successfully!";
/// Shown when storing a post failed.
pub const POST_FAILED: &str = "Error creating post";
/// Shown when storing a comment failed.
pub const COMMENT_FAILED: &str = "Error adding comment";

/// Result of a router operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The root now shows this view.
    Rendered(ActiveView),
    /// A later navigation took over; nothing was written.
    Superseded,
    /// The active view has no element producing this intent.
    Ignored,
    /// A submission was invalid or the API refused it.
    Rejected,
}

/// The client-side router.
///
/// Generic over its ports so that the browser adapter and the tests can
/// wire in their own implementations.
pub struct Router<A, D, H, N> {
    api: A,
    document: D,
    history: H,
    notifier: N,
    transitions: Transitions,
    active: RefCell<ActiveView>,
}

impl<A, D, H, N> Router<A, D, H, N>
where
    A: BlogApi,
    D: Document,
    H: History,
    N: Notifier,
{
    /// Create a router. Nothing is rendered until [`Router::start`].
    pub fn new(api: A, document: D, history: H, notifier: N) -> Self {
        Self {
            api,
            document,
            history,
            notifier,
            transitions: Transitions::new(),
            active: RefCell::new(ActiveView::Loading(Route::Home)),
        }
    }

    /// The view currently written to the root.
    #[must_use]
    pub fn active_view(&self) -> ActiveView {
        self.active.borrow().clone()
    }

    /// Render the initial location.
    pub async fn start(&self) -> Outcome {
        self.render_current().await
    }

    /// History moved (back/forward): render the new location without
    /// pushing an entry.
    pub async fn on_popstate(&self) -> Outcome {
        self.render_current().await
    }

    /// Push `path` onto history and render it.
    pub async fn navigate(&self, path: &str) -> Outcome {
        tracing::info!(path, "navigating");
        self.history.push(path);
        self.render_current().await
    }

    /// Carry out an intent produced by the navigation controller.
    pub async fn perform(&self, intent: Intent) -> Outcome {
        let accepted = self.active.borrow().accepts(&intent);
        if !accepted {
            tracing::warn!(?intent, view = ?self.active_view(), "intent not available on active view");
            return Outcome::Ignored;
        }

        match intent {
            Intent::Navigate(path) => self.navigate(&path).await,
            Intent::Retry => self.render_current().await,
            Intent::CreatePost(fields) => self.create_post(&fields).await,
            Intent::AddComment(fields) => self.add_comment(&fields).await,
        }
    }

    async fn render_current(&self) -> Outcome {
        let path = self.history.current_path();
        self.render(&path).await
    }

    #[tracing::instrument(skip(self))]
    async fn render(&self, path: &str) -> Outcome {
        let token = self.transitions.begin();
        let route = resolve(path);

        if route.needs_fetch() {
            self.commit(pages::loading(&route));
        }

        let page = match &route {
            Route::Home => pages::home(&self.api).await,
            Route::PostDetail(id) => pages::post_detail(&self.api, id).await,
            Route::About => pages::about(),
            Route::Admin => pages::admin(),
        };

        if !self.transitions.is_current(token) {
            tracing::debug!(%route, "discarding superseded render");
            return Outcome::Superseded;
        }

        let view = page.view.clone();
        self.commit(page);
        tracing::debug!(?view, "view rendered");
        Outcome::Rendered(view)
    }

    fn commit(&self, page: Page) {
        self.document.replace_root(&page.markup);
        *self.active.borrow_mut() = page.view;
    }

    #[tracing::instrument(skip(self, fields))]
    async fn create_post(&self, fields: &FormFields) -> Outcome {
        let post = match forms::new_post(fields, time::today()) {
            Ok(post) => post,
            Err(err) => {
                tracing::warn!(%err, "rejected post submission");
                self.notifier.notify(&format!("Cannot publish post: {err}"));
                return Outcome::Rejected;
            }
        };

        let token = self.transitions.current();
        match self.api.create_post(&post).await {
            Ok(created) => {
                tracing::info!(id = %created.id, title = %created.title, "post created");
                self.notifier.notify(POST_CREATED);
                if self.transitions.is_current(token) {
                    self.navigate(&Route::Home.path()).await
                } else {
                    Outcome::Superseded
                }
            }
            Err(err) => {
                tracing::error!(%err, "failed to create post");
                self.notifier.notify(POST_FAILED);
                Outcome::Rejected
            }
        }
    }

    #[tracing::instrument(skip(self, fields))]
    async fn add_comment(&self, fields: &FormFields) -> Outcome {
        let displayed = match &*self.active.borrow() {
            ActiveView::PostDetail(id) => id.clone(),
            _ => return Outcome::Ignored,
        };

        match forms::comment_target(fields) {
            Ok(target) if target == displayed.to_string() => {}
            Ok(target) => {
                tracing::warn!(target, post_id = %displayed, "comment targets a post that is not displayed");
                return Outcome::Ignored;
            }
            Err(err) => {
                tracing::warn!(%err, "rejected comment submission");
                self.notifier.notify(&format!("Cannot add comment: {err}"));
                return Outcome::Rejected;
            }
        }

        let comment = match forms::new_comment(displayed, fields, time::today()) {
            Ok(comment) => comment,
            Err(err) => {
                tracing::warn!(%err, "rejected comment submission");
                self.notifier.notify(&format!("Cannot add comment: {err}"));
                return Outcome::Rejected;
            }
        };

        let token = self.transitions.current();
        match self.api.create_comment(&comment).await {
            Ok(created) => {
                tracing::info!(id = %created.id, post_id = %created.post_id, "comment added");
                if self.transitions.is_current(token) {
                    self.render_current().await
                } else {
                    Outcome::Superseded
                }
            }
            Err(err) => {
                tracing::error!(%err, "failed to add comment");
                self.notifier.notify(COMMENT_FAILED);
                Outcome::Rejected
            }
        }
    }
}

/// Resolve a location to a route, ignoring any query string or fragment.
fn resolve(location: &str) -> Route {
    let path = location.split(['?', '#']).next().unwrap_or(location);
    Route::parse(path).unwrap_or_else(|| {
        tracing::warn!(path, "no route matched, falling back to home");
        Route::Home
    })
}
