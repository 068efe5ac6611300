//! Storage backend implementations.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | In-process store for tests and local runs |
//! | MongoDB | `mongodb` | Document store reached through a connection string |
//!
//! # Example
//!
//! ```
//! use logos_persistence::backends::memory::MemoryBackend;
//!
//! let backend = MemoryBackend::new();
//! ```

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
