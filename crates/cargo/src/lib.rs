//! # versync-cargo
//!
//! Cargo.toml support for versync. The read side parses the manifest as TOML
//! and extracts `package.version`, degrading to a default on any failure so
//! the sync run can always proceed. The write side rewrites the first
//! `version = "..."` assignment textually, leaving the rest of the file
//! byte-identical.

pub mod manifest;

pub use manifest::{CargoManifest, DEFAULT_VERSION};
