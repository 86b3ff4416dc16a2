//! argmap-core: Argument-vector parsing with negation rules and typed lookup
//!
//! This crate turns a raw argument vector (program name already removed) into
//! an immutable table of option names and values, then answers typed queries
//! against it. Options use the single-dash convention (`-port=8333`), `--` is
//! accepted as a synonym for `-`, and a `no`-prefixed option negates its base
//! option unless a direct assignment for the base appears anywhere in the
//! input.
//!
//! # Example
//!
//! ```rust
//! use argmap_core::ArgTable;
//!
//! let args = ArgTable::parse(["-port=8333", "-nolisten", "--debug"]);
//! assert_eq!(args.get_i64("-port", 0), 8333);
//! assert!(!args.get_bool("-listen", true));
//! assert!(args.get_bool("-debug", false));
//! ```

pub mod error;
pub mod token;

mod args;

pub use args::ArgTable;
pub use error::{Error, Result};
pub use token::Token;
