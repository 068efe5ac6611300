//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Store identity and health
//! - [`ArticleStorage`] - Article queries and insert-if-absent
//! - [`ItemStorage`] - Item CRUD
//!
//! # Trait Hierarchy
//!
//! ```text
//! Backend
//!     ├── ArticleStorage
//!     └── ItemStorage
//! ```

mod backend;
mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::{ArticleStorage, ItemStorage};
