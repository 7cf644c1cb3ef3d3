//! aviary: ancestry and descendant queries over a parent-linked node forest.
//!
//! Layered architecture:
//! - `domain`: entities, the in-memory forest, pure ancestry algorithms
//! - `application`: services orchestrating domain logic behind store traits
//! - `infrastructure`: store/filesystem implementations and DI wiring
//! - `cli`: argument parsing, dispatch and output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
