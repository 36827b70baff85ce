//! # Ports
//!
//! Interface definitions for the collaborators a listing run talks to.
//!
//! - [`filesystem`]: path probing, directory reading and per-entry `stat`
//! - [`identity`]: uid/gid to name lookup
//! - [`attributes`]: extended attribute and ACL presence queries
//!
//! The use case depends only on these traits, so it can be driven by stubs.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod attributes;
pub mod filesystem;
pub mod identity;
