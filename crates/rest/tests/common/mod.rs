//! Common test utilities for HTTP API testing.
//!
//! - [`harness`] - Test server over an in-memory store
//! - [`fixtures`] - Article and item fixtures
//! - [`assertions`] - Response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
