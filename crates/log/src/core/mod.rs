//! Core types shared across the crate.
//!
//! ### [`error`] - Error handling
//! [`LogError`] covers the few operations that report failure to the caller:
//! opening or reopening the backing file, closing the sink, and turning a
//! [`Config`](crate::Config) into a logger.

pub mod error;

pub use error::{LogError, LogResult};
