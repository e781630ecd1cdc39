//! DocuLens Storage Library
//!
//! Storage abstraction for uploaded document files. The [`Storage`] trait
//! decouples the upload/download handlers from the backend; the local
//! filesystem backend is the only implementation.
//!
//! Storage keys are bare filenames (`{uuid}.{ext}`); keys must not contain
//! `..` or a leading `/`.

pub mod local;
pub mod traits;

// Re-export commonly used types
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
