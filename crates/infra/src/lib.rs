// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod attributes;
pub mod filesystem;
pub mod identity;
pub mod platform;

pub use attributes::XattrProbe;
pub use filesystem::StdFileSystem;
pub use identity::SystemIdentityResolver;
