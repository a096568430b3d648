//! `web-sys` implementations of the document, history, and notifier ports.

use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

use techblog_app::ports::{Document, History, Notifier};

/// The application root. Views replace its contents wholesale.
pub struct RootElement {
    root: Element,
}

impl RootElement {
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl Document for RootElement {
    fn replace_root(&self, markup: &str) {
        self.root.set_inner_html(markup);
    }
}

/// `window.history` plus `window.location`.
pub struct BrowserHistory {
    window: Window,
    history: web_sys::History,
}

impl BrowserHistory {
    /// # Errors
    ///
    /// Fails if the window exposes no history object.
    pub fn new(window: &Window) -> Result<Self, JsValue> {
        Ok(Self {
            window: window.clone(),
            history: window.history()?,
        })
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        match self.window.location().pathname() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(?err, "cannot read location, assuming /");
                "/".to_string()
            }
        }
    }

    fn push(&self, path: &str) {
        if let Err(err) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
        {
            tracing::warn!(?err, path, "history push rejected");
        }
    }
}

/// Blocking `window.alert`.
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    #[must_use]
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            tracing::warn!(?err, message, "alert failed");
        }
    }
}

/// `content` of `<meta name="{name}">`, if present.
#[must_use]
pub fn meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    document
        .query_selector(&format!(r#"meta[name="{name}"]"#))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
