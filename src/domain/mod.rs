//! Domain layer - Core business logic
//!
//! This module contains the core domain entities, repository traits,
//! and domain services. Moving and listing files happens behind the
//! repository traits, never here.

pub mod entities;
pub mod repositories;
pub mod services;
