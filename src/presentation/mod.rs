//! Presentation layer
//!
//! Command-line front end. It submits a check and displays the results;
//! it never runs detection itself.

pub mod cli;
