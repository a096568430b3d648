//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world (the JSON API and the browser). Each has a blanket implementation
//! for `Rc<T>` so one adapter instance can be shared between the router and
//! the event listeners that drive it.

pub mod api;
pub mod document;
pub mod history;
pub mod notifier;

pub use api::BlogApi;
pub use document::Document;
pub use history::History;
pub use notifier::Notifier;
