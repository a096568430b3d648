//! In-memory port implementations shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tokio::sync::Notify;

use techblog_domain::comment::{Comment, NewComment};
use techblog_domain::error::{ApiError, BlogError, NotFoundError};
use techblog_domain::id::{CommentId, PostId};
use techblog_domain::post::{NewPost, Post};

use crate::ports::{BlogApi, Document, History, Notifier};
use crate::router::Router;

pub fn post(id: u64, title: &str) -> Post {
    Post {
        id: PostId::from_number(id),
        title: title.to_string(),
        excerpt: format!("About {title}"),
        image: format!("https://img.example/{id}.png"),
        content: format!("<p>{title} body</p>"),
        date: "2025-04-01".to_string(),
    }
}

pub fn comment(id: u64, post_id: u64, author: &str) -> Comment {
    Comment {
        id: CommentId::from_number(id),
        post_id: PostId::from_number(post_id),
        author: author.to_string(),
        text: format!("{author} was here"),
        date: "2025-04-02".to_string(),
    }
}

/// Ids in URLs carry no JSON type, so lookups match on the displayed form
/// the way a real API does.
fn same_id(stored: &PostId, requested: &PostId) -> bool {
    stored.to_string() == requested.to_string()
}

/// API backed by vectors, with switchable failures and per-post gates.
#[derive(Default)]
pub struct FakeApi {
    posts: RefCell<Vec<Post>>,
    comments: RefCell<Vec<Comment>>,
    read_failure: RefCell<Option<ApiError>>,
    comment_failure: RefCell<Option<ApiError>>,
    write_failure: RefCell<Option<ApiError>>,
    gates: RefCell<HashMap<PostId, Rc<Notify>>>,
    created_posts: RefCell<Vec<NewPost>>,
    created_comments: RefCell<Vec<NewComment>>,
}

impl FakeApi {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let api = Self::default();
        *api.posts.borrow_mut() = posts;
        api
    }

    pub fn add_comment(&self, comment: Comment) {
        self.comments.borrow_mut().push(comment);
    }

    pub fn fail_reads(&self, err: ApiError) {
        *self.read_failure.borrow_mut() = Some(err);
    }

    pub fn recover_reads(&self) {
        *self.read_failure.borrow_mut() = None;
    }

    pub fn fail_comments(&self, err: ApiError) {
        *self.comment_failure.borrow_mut() = Some(err);
    }

    pub fn fail_writes(&self, err: ApiError) {
        *self.write_failure.borrow_mut() = Some(err);
    }

    /// Make `get_post(id)` wait until the returned handle is notified.
    pub fn hold_post(&self, id: PostId) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        self.gates.borrow_mut().insert(id, Rc::clone(&gate));
        gate
    }

    pub fn created_posts(&self) -> Vec<NewPost> {
        self.created_posts.borrow().clone()
    }

    pub fn created_comments(&self) -> Vec<NewComment> {
        self.created_comments.borrow().clone()
    }

    fn check_reads(&self) -> Result<(), BlogError> {
        match self.read_failure.borrow().clone() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn check_writes(&self) -> Result<(), BlogError> {
        match self.write_failure.borrow().clone() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl BlogApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        self.check_reads()?;
        Ok(self.posts.borrow().clone())
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, BlogError> {
        let gate = self.gates.borrow().get(id).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.check_reads()?;
        self.posts
            .borrow()
            .iter()
            .find(|post| same_id(&post.id, id))
            .cloned()
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Post",
                    id: id.to_string(),
                }
                .into()
            })
    }

    async fn list_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, BlogError> {
        self.check_reads()?;
        if let Some(err) = self.comment_failure.borrow().clone() {
            return Err(err.into());
        }
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|comment| same_id(&comment.post_id, post_id))
            .cloned()
            .collect())
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, BlogError> {
        self.check_writes()?;
        self.created_posts.borrow_mut().push(post.clone());
        let mut posts = self.posts.borrow_mut();
        let created = Post {
            id: PostId::from_number(posts.len() as u64 + 1),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            image: post.image.clone(),
            content: post.content.clone(),
            date: post.date.clone(),
        };
        posts.push(created.clone());
        Ok(created)
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, BlogError> {
        self.check_writes()?;
        self.created_comments.borrow_mut().push(comment.clone());
        let mut comments = self.comments.borrow_mut();
        let created = Comment {
            id: CommentId::from_number(comments.len() as u64 + 1),
            post_id: comment.post_id.clone(),
            author: comment.author.clone(),
            text: comment.text.clone(),
            date: comment.date.clone(),
        };
        comments.push(created.clone());
        Ok(created)
    }
}

/// Root element that records every write.
#[derive(Default)]
pub struct RecordingDocument {
    writes: RefCell<Vec<String>>,
}

impl RecordingDocument {
    pub fn current(&self) -> String {
        self.writes.borrow().last().cloned().unwrap_or_default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl Document for RecordingDocument {
    fn replace_root(&self, markup: &str) {
        self.writes.borrow_mut().push(markup.to_string());
    }
}

/// Session history as a stack of paths.
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
}

impl MemoryHistory {
    pub fn at(path: &str) -> Self {
        Self {
            entries: RefCell::new(vec![path.to_string()]),
        }
    }

    /// Simulate the back button (the caller then fires `on_popstate`).
    pub fn back(&self) {
        let mut entries = self.entries.borrow_mut();
        if entries.len() > 1 {
            entries.pop();
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries.borrow().last().cloned().unwrap_or_default()
    }

    fn push(&self, path: &str) {
        self.entries.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub type TestRouter =
    Router<Rc<FakeApi>, Rc<RecordingDocument>, Rc<MemoryHistory>, Rc<RecordingNotifier>>;

/// A router wired to in-memory ports, with handles to inspect them.
pub struct Harness {
    pub api: Rc<FakeApi>,
    pub document: Rc<RecordingDocument>,
    pub history: Rc<MemoryHistory>,
    pub notifier: Rc<RecordingNotifier>,
    pub router: TestRouter,
}

impl Harness {
    pub fn new(api: FakeApi, path: &str) -> Self {
        let api = Rc::new(api);
        let document = Rc::new(RecordingDocument::default());
        let history = Rc::new(MemoryHistory::at(path));
        let notifier = Rc::new(RecordingNotifier::default());
        let router = Router::new(
            Rc::clone(&api),
            Rc::clone(&document),
            Rc::clone(&history),
            Rc::clone(&notifier),
        );
        Self {
            api,
            document,
            history,
            notifier,
            router,
        }
    }
}
