//! harbor-core
//!
//! Shared domain types and storage key conventions.
//! No storage SDK or image codec dependency — this is the shared vocabulary of
//! the Harbor system.

pub mod error;
pub mod models;
pub mod storage_keys;
