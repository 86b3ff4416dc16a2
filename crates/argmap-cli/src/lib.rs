//! argmap CLI library
//!
//! This module exposes the CLI main function so the binary stays a
//! one-liner and the commands remain testable.

mod cli;

pub use cli::run;
