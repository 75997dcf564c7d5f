//! Application layer
//!
//! Use cases and application services that orchestrate domain logic.

mod cancellation;
mod check_directory;
pub mod dto;
mod worker;

pub use cancellation::CancellationToken;
pub use check_directory::{CheckDirectoryUseCase, CheckEvent};
pub use worker::{CheckHandle, spawn_check};
