//! Namesmith - identify video files by their embedded code and rename them
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod metadata;
pub mod notifications;
pub mod process;
pub mod rename;
pub mod scanner;
