//! # techblog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum) that hosts the
//! compiled browser client.
//!
//! ## Responsibilities
//! - Serve the static build output (wasm, JS glue, CSS, images)
//! - Answer every client route (`/`, `/post/3`, `/about`, …) with the
//!   `index.html` shell so that deep links and reloads land in the app
//! - Tell the client where the JSON API lives by injecting
//!   `<meta name="techblog-api-url">` into the shell
//! - Expose `/health` for probes
//!
//! ## Dependency rule
//! Depends on `techblog-app` for the client configuration only. The blog API
//! itself is an external service; nothing here proxies it.

pub mod error;
pub mod router;
pub mod spa;
pub mod state;
