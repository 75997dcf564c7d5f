//! Repository traits (interfaces)
//!
//! These traits define the contracts for external dependencies.
//! They follow the Dependency Inversion Principle (DIP) from SOLID.

mod file_mover;
mod file_source;

pub use file_mover::FileMover;
pub use file_source::FileSource;
