//! Single-page-app shell handling.

use techblog_app::config::API_URL_META;

const POST_PREFIX: &str = "/post/";

/// Shell served when the build output has no `index.html`.
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>TechBlog</title>
  </head>
  <body>
    <div id="app"><p class="loading">The client has not been built yet.</p></div>
  </body>
</html>
"#;

/// Insert the API base URL `<meta>` right before `</head>`, or at the top of
/// the document when there is no head.
#[must_use]
pub fn inject_api_url(index: &str, api_url: &str) -> String {
    let meta = format!(
        r#"<meta name="{API_URL_META}" content="{}">"#,
        escape_attribute(api_url)
    );
    match index.find("</head>") {
        Some(at) => {
            let (head, rest) = index.split_at(at);
            format!("{head}  {meta}\n  {rest}")
        }
        None => format!("{meta}\n{index}"),
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Whether `path` should be answered with the shell.
///
/// Anything whose last segment has no extension is a client route (the
/// client itself decides what to render, unknown paths included).
/// `/index.html` is also routed by the client, and so is every `/post/…`
/// path since post ids may contain dots.
#[must_use]
pub fn is_client_route(path: &str) -> bool {
    if path == "/index.html" || path.starts_with(POST_PREFIX) {
        return true;
    }
    let last = path.rsplit('/').next().unwrap_or_default();
    !last.contains('.')
}
