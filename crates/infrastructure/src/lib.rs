//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_directory;

pub use in_memory_directory::InMemoryDirectory;
