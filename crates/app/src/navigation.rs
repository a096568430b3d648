//! Navigation controller — turns UI events into intents.
//!
//! Adapters install one delegated listener per event type on the stable
//! application root and describe each event with a [`UiEvent`]. Views are
//! plain markup, so nothing needs re-binding after a render: whether an
//! intent is honoured is decided against the active view at dispatch time
//! (see [`ActiveView::accepts`](crate::pages::ActiveView::accepts)).

use crate::forms::{COMMENT_FORM_ID, CREATE_POST_FORM_ID, FormFields};

/// Attribute marking an element as an in-app link.
pub const LINK_ATTRIBUTE: &str = "data-link";

/// Attribute marking the retry affordance of the error view.
pub const RETRY_ATTRIBUTE: &str = "data-retry";

/// What a click landed on, as found by walking up from the event target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// Closest ancestor carrying [`LINK_ATTRIBUTE`].
    Link {
        href: String,
        /// The anchor's `target` attribute, if any.
        target: Option<String>,
    },
    /// Closest ancestor carrying [`RETRY_ATTRIBUTE`].
    Retry,
    /// Anything else.
    Other,
}

/// A DOM event, stripped down to what routing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click {
        target: ClickTarget,
        /// A modifier key was held or a non-primary button was used.
        modified: bool,
    },
    Submit {
        form_id: String,
        fields: FormFields,
    },
}

/// What the router should do in response to a UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Push `path` onto history and render it.
    Navigate(String),
    /// Re-render the current location without touching history.
    Retry,
    CreatePost(FormFields),
    AddComment(FormFields),
}

/// Decide whether `event` is ours to handle.
///
/// `Some` means the adapter must suppress the browser default and hand the
/// intent to the router; `None` means the browser keeps the event.
#[must_use]
pub fn interpret(event: &UiEvent) -> Option<Intent> {
    match event {
        UiEvent::Click { modified: true, .. } => None,
        UiEvent::Click { target, .. } => match target {
            ClickTarget::Link { href, target } => {
                let same_tab = target.as_deref().is_none_or(|t| t == "_self");
                (same_tab && is_in_app(href)).then(|| Intent::Navigate(href.clone()))
            }
            ClickTarget::Retry => Some(Intent::Retry),
            ClickTarget::Other => None,
        },
        UiEvent::Submit { form_id, fields } => match form_id.as_str() {
            CREATE_POST_FORM_ID => Some(Intent::CreatePost(fields.clone())),
            COMMENT_FORM_ID => Some(Intent::AddComment(fields.clone())),
            _ => None,
        },
    }
}

/// Root-relative paths stay in the app; absolute and protocol-relative URLs
/// leave it.
fn is_in_app(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}
