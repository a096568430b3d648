//! # techblog-app
//!
//! Application layer — the client-side router and everything it drives.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `BlogApi` — the external JSON API (posts, comments)
//!   - `Document` — the single application root that views are written into
//!   - `History` — session history (current path, push)
//!   - `Notifier` — blocking user notifications
//! - Render **views** (home, post detail, about, admin, loading, error) as
//!   markup strings
//! - Interpret **UI events** into navigation and form-submission intents
//! - Run the **router**: resolve a path, fetch, render, discard stale renders
//!
//! ## Dependency rule
//! Depends on `techblog-domain` only. Never imports adapter crates or
//! browser bindings. Adapters depend on *this* crate, not the reverse.
//!
//! ## Threading
//! Everything here runs on the UI thread; port futures are not required to
//! be `Send`.

pub mod config;
pub mod endpoints;
pub mod forms;
pub mod navigation;
pub mod pages;
pub mod ports;
pub mod router;
pub mod transition;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;
