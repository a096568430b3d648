//! Route — the logical screen addressed by a URL path.
//!
//! Matching is ordered and exact, except for post detail which matches on
//! the `/post/` prefix and takes the following segment as the post id.
//! Paths that match nothing yield `None`; the router falls back to
//! [`Route::Home`] for them.

use std::fmt;

use crate::id::PostId;

/// Prefix of post-detail paths.
const POST_PREFIX: &str = "/post/";

/// A client-side screen. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` or `/index.html` — latest articles.
    Home,
    /// `/post/{id}` — a single article with its comments.
    PostDetail(PostId),
    /// `/about` — static page.
    About,
    /// `/admin` — create-post form.
    Admin,
}

impl Route {
    /// Match `path` against the known routes.
    ///
    /// Returns `None` when nothing matches, including `/post/` with an
    /// empty or undecodable id segment.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" | "/index.html" => return Some(Self::Home),
            "/about" => return Some(Self::About),
            "/admin" => return Some(Self::Admin),
            _ => {}
        }

        let rest = path.strip_prefix(POST_PREFIX)?;
        let segment = rest.split('/').next().unwrap_or_default();
        let id = decode_segment(segment)?.parse().ok()?;
        Some(Self::PostDetail(id))
    }

    /// Canonical path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::PostDetail(id) => format!("{POST_PREFIX}{}", encode_segment(&id.to_string())),
            Self::About => "/about".to_string(),
            Self::Admin => "/admin".to_string(),
        }
    }

    /// Whether rendering this route needs data from the API.
    #[must_use]
    pub fn needs_fetch(&self) -> bool {
        matches!(self, Self::Home | Self::PostDetail(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Percent-encode a single path or query component.
///
/// Only RFC 3986 unreserved characters pass through unchanged, so the
/// output is also safe inside an HTML attribute.
#[must_use]
pub fn encode_segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Decode `%XX` escapes in a path segment.
///
/// Malformed escapes are kept literally; returns `None` if the decoded bytes
/// are not UTF-8.
#[must_use]
pub fn decode_segment(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let Some(&[hi, lo]) = bytes.get(i + 1..i + 3)
            && let (Some(hi), Some(lo)) = (hex_value(hi), hex_value(lo))
        {
            out.push((hi << 4) | lo);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).ok()
}

fn hex_value(digit: u8) -> Option<u8> {
    char::from(digit)
        .to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
}
