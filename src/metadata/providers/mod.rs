//! Concrete metadata resolver implementations.
//!
//! Each submodule implements the [`MetadataResolver`](super::MetadataResolver)
//! trait for one kind of backend.

pub mod command;
pub mod memory;
pub mod unavailable;

pub use command::CommandResolver;
pub use memory::MemoryResolver;
pub use unavailable::UnavailableResolver;
