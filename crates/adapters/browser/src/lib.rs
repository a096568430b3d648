//! # techblog-adapter-browser
//!
//! Browser adapter compiled to WebAssembly.
//!
//! ## Responsibilities
//! - Implement [`BlogApi`](techblog_app::ports::BlogApi) over `fetch` via
//!   [`gloo-net`](https://docs.rs/gloo-net)
//! - Implement the `Document`, `History`, and `Notifier` ports over `web-sys`
//! - Install one delegated listener per event type on the application root
//!   (plus `popstate` on the window) and forward intents to the router
//! - Route `tracing` output and panics to the browser console
//!
//! ## Dependency rule
//! Depends on `techblog-app` and `techblog-domain`. Browser types never
//! cross into those crates.

use std::rc::Rc;

use techblog_app::config::{API_URL_META, ClientConfig};
use techblog_app::router::Router;

pub mod api;
pub mod dom;
mod events;
mod logging;

use api::GlooBlogApi;
use dom::{AlertNotifier, BrowserHistory, RootElement};

/// `id` of the element every view is rendered into.
pub const ROOT_ID: &str = "app";

/// The router wired to browser ports.
pub type AppRouter = Router<GlooBlogApi, RootElement, BrowserHistory, AlertNotifier>;

/// Reasons the client could not be mounted.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingRoot(&'static str),
    /// A browser API call was rejected.
    #[error("browser call failed: {0}")]
    Browser(String),
}

impl From<wasm_bindgen::JsValue> for StartError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Browser(format!("{value:?}"))
    }
}

/// Entry point: set up logging, mount the router on `#app`, and render the
/// initial location.
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init();

    if let Err(err) = mount() {
        tracing::error!(%err, "failed to start techblog client");
    }
}

fn mount() -> Result<(), StartError> {
    let window = web_sys::window().ok_or(StartError::NoWindow)?;
    let document = window.document().ok_or(StartError::NoDocument)?;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or(StartError::MissingRoot(ROOT_ID))?;

    let config = ClientConfig::from_override(dom::meta_content(&document, API_URL_META).as_deref());
    tracing::info!(api = config.api_base_url(), "starting techblog client");

    let router = Rc::new(Router::new(
        GlooBlogApi::new(&config),
        RootElement::new(root.clone()),
        BrowserHistory::new(&window)?,
        AlertNotifier::new(window.clone()),
    ));
    events::install(&window, &root, &router)?;

    wasm_bindgen_futures::spawn_local(async move {
        router.start().await;
    });
    Ok(())
}
