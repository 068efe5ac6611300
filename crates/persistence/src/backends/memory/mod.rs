//! In-process backend implementation.
//!
//! Holds both collections in `Vec`s behind `parking_lot` read-write locks.
//! Vector order is insertion order, which gives listings the stable ordering
//! offset pagination needs. Filters are evaluated by linear scan.
//!
//! # Example
//!
//! ```
//! use logos_persistence::backends::memory::MemoryBackend;
//! use logos_persistence::core::{Backend, BackendKind};
//!
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.kind(), BackendKind::Memory);
//! ```

mod backend;
mod storage;

pub use backend::MemoryBackend;
