//! # techblog-domain
//!
//! Pure domain model for the techblog client.
//!
//! ## Responsibilities
//! - Foundational types: API-assigned identifiers, error conventions, dates
//! - Define **Posts** (articles) and the payload used to create them
//! - Define **Comments** attached to a post and their creation payload
//! - Define **Routes** (the logical screens addressed by a URL path)
//! - Contain all invariant enforcement (required fields, date format)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod comment;
pub mod post;
pub mod route;
