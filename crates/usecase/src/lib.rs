//! # Use Cases
//!
//! Application-level orchestration of a directory listing.
//!
//! - [`orchestrator`]: validate, enumerate, describe and rank one directory
//! - [`dto`]: the ranked result handed back to the presentation layer
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::Listing;
pub use orchestrator::{ListDirectory, ListingPorts};
