//! View renderers — markup for each screen.
//!
//! Every function here is pure: same input, byte-identical output. Text from
//! the API is HTML-escaped by the templates; only post `content` is inserted
//! as markup. All in-app links carry the `data-link` attribute and are handled
//! by the delegated listener (see [`navigation`](crate::navigation)).

use askama::Template;

use techblog_domain::comment::Comment;
use techblog_domain::post::Post;

use crate::forms::{COMMENT_FORM_ID, CREATE_POST_FORM_ID};

/// Written to the root when a template itself fails to render.
pub const FALLBACK_MARKUP: &str =
    r#"<div class="error"><p>Something went wrong.</p><a href="/" data-link>Home</a></div>"#;

/// A template failed to render.
#[derive(Debug, thiserror::Error)]
#[error("failed to render {view} view")]
pub struct ViewError {
    view: &'static str,
    #[source]
    source: askama::Error,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeView<'a> {
    posts: &'a [Post],
}

#[derive(Template)]
#[template(path = "post.html")]
struct PostView<'a> {
    post: &'a Post,
    comments: &'a [Comment],
    comment_form_id: &'static str,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutView;

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminView {
    form_id: &'static str,
}

#[derive(Template)]
#[template(path = "loading.html")]
struct LoadingView<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorView<'a> {
    message: &'a str,
}

fn render(view: &'static str, template: &impl Template) -> Result<String, ViewError> {
    template
        .render()
        .map_err(|source| ViewError { view, source })
}

/// Grid of summary cards, one per post.
///
/// # Errors
///
/// Returns [`ViewError`] if the template fails to render.
pub fn home(posts: &[Post]) -> Result<String, ViewError> {
    render("home", &HomeView { posts })
}

/// Full article, comment form, and comment list.
///
/// # Errors
///
/// Returns [`ViewError`] if the template fails to render.
pub fn post_detail(post: &Post, comments: &[Comment]) -> Result<String, ViewError> {
    render(
        "post",
        &PostView {
            post,
            comments,
            comment_form_id: COMMENT_FORM_ID,
        },
    )
}

/// # Errors
///
/// Returns [`ViewError`] if the template fails to render.
pub fn about() -> Result<String, ViewError> {
    render("about", &AboutView)
}

/// Create-post form.
///
/// # Errors
///
/// Returns [`ViewError`] if the template fails to render.
pub fn admin() -> Result<String, ViewError> {
    render(
        "admin",
        &AdminView {
            form_id: CREATE_POST_FORM_ID,
        },
    )
}

/// Placeholder shown while a route fetches its data.
///
/// # Errors
///
/// Returns [`ViewError`] if the template fails to render.
pub fn loading() -> Result<String, ViewError> {
    render(
        "loading",
        &LoadingView {
            message: "Loading\u{2026}",
        },
    )
}

/// Inline error with a retry button.
///
/// # Errors
///
/// Returns [`ViewError`] if the template fails to render.
pub fn error(message: &str) -> Result<String, ViewError> {
    render("error", &ErrorView { message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use techblog_domain::id::{CommentId, PostId};

    fn post(id: u64, title: &str) -> Post {
        Post {
            id: PostId::from_number(id),
            title: title.to_string(),
            excerpt: format!("About {title}"),
            image: format!("https://img.example/{id}.png"),
            content: "<p>Body <em>here</em></p>".to_string(),
            date: "2025-04-01".to_string(),
        }
    }

    fn comment(id: u64, post_id: u64, author: &str) -> Comment {
        Comment {
            id: CommentId::from_number(id),
            post_id: PostId::from_number(post_id),
            author: author.to_string(),
            text: format!("{author} was here"),
            date: "2025-04-02".to_string(),
        }
    }

    #[test]
    fn should_render_one_card_per_post() {
        let markup = home(&[post(1, "A")]).unwrap();
        assert_eq!(markup.matches(r#"class="card""#).count(), 1);
        assert!(markup.contains(r#"<h2 class="card-title">A</h2>"#));
        assert!(markup.contains(r#"href="/post/1""#));
    }

    #[test]
    fn should_render_header_links_as_in_app_links() {
        let markup = about().unwrap();
        assert!(markup.contains(r#"<a href="/about" data-link>About</a>"#));
        assert!(markup.contains(r#"<a href="/admin" data-link>New Post</a>"#));
    }

    #[test]
    fn should_render_empty_state_on_home_without_posts() {
        let markup = home(&[]).unwrap();
        assert!(markup.contains("No articles yet."));
        assert!(!markup.contains(r#"class="card""#));
    }

    #[test]
    fn should_render_byte_identical_markup_for_same_data() {
        let posts = vec![post(1, "A"), post(2, "B")];
        assert_eq!(home(&posts).unwrap(), home(&posts).unwrap());
    }

    #[test]
    fn should_escape_titles_but_not_content() {
        let mut evil = post(3, "<script>x</script>");
        evil.content = "<p>kept</p>".to_string();
        let markup = post_detail(&evil, &[]).unwrap();
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("<h1>&#60;script&#62;x&#60;/script&#62;</h1>"));
        assert!(markup.contains("<p>kept</p>"));
    }

    #[test]
    fn should_render_empty_comment_state_with_zero_count() {
        let markup = post_detail(&post(1, "A"), &[]).unwrap();
        assert!(markup.contains(r#"Comments (<span class="comment-count">0</span>)"#));
        assert!(markup.contains("No comments yet."));
        assert!(!markup.contains("comments-list"));
    }

    #[test]
    fn should_render_comment_list_and_count() {
        let comments = vec![comment(1, 1, "Ada"), comment(2, 1, "Linus")];
        let markup = post_detail(&post(1, "A"), &comments).unwrap();
        assert!(markup.contains(r#"Comments (<span class="comment-count">2</span>)"#));
        assert_eq!(markup.matches(r#"<li class="comment">"#).count(), 2);
        assert!(!markup.contains("No comments yet."));
    }

    #[test]
    fn should_tag_comment_form_with_post_id() {
        let markup = post_detail(&post(8, "A"), &[]).unwrap();
        assert!(markup.contains(&format!(r#"<form id="{COMMENT_FORM_ID}""#)));
        assert!(markup.contains(r#"<input type="hidden" name="postId" value="8">"#));
    }

    #[test]
    fn should_render_create_post_form_with_required_fields() {
        let markup = admin().unwrap();
        assert!(markup.contains(&format!(r#"<form id="{CREATE_POST_FORM_ID}">"#)));
        for field in ["title", "excerpt", "image", "content"] {
            assert!(markup.contains(&format!(r#"name="{field}""#)), "missing {field}");
        }
        assert_eq!(markup.matches("required").count(), 4);
    }

    #[test]
    fn should_render_error_with_retry_affordance() {
        let markup = error("Error loading post: Post not found").unwrap();
        assert!(markup.contains("Error loading post: Post not found"));
        assert!(markup.contains("data-retry"));
    }

    #[test]
    fn should_render_loading_placeholder() {
        let markup = loading().unwrap();
        assert!(markup.contains(r#"class="loading""#));
        assert!(markup.contains("Loading\u{2026}"));
    }
}
