//! Filesystem adapters
//!
//! Sources of files to check.

pub mod local;

pub use local::LocalDirectory;
