//! Shared storage contract checks.
//!
//! Every backend must pass [`contract`]; the per-backend test files only
//! differ in how they build the store.

#![allow(dead_code)]

pub mod contract;
pub mod fixtures;
