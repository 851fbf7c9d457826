//! harbor-storage
//!
//! Object storage for user uploads. Defines the [`store::ObjectStore`] port the
//! media pipeline writes through, an S3 adapter and an in-memory adapter.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use memory::MemoryStore;
pub use s3::S3Store;
pub use store::{ObjectStore, WriteOptions};
