//! Namesmith-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across namesmith:
//!
//! - **Path Utilities**: Extension allow-lists, hidden-file detection and
//!   extension splitting that keeps the original casing
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use namesmith_common::{Error, Result};
//! use namesmith_common::paths::{default_extensions, has_allowed_extension, split_extension};
//! use std::path::Path;
//!
//! assert!(has_allowed_extension(Path::new("ZRK-002.mkv"), &default_extensions()));
//! assert_eq!(split_extension("ZRK-002.MP4"), ("ZRK-002", ".MP4"));
//!
//! fn example() -> Result<()> {
//!     Err(Error::Tool {
//!         tool: "jvav-lookup".into(),
//!         message: "timed out".into(),
//!     })
//! }
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};
