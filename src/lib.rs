//! lexitree: a persistent classification tree of lexical units.
//!
//! Layers, inner to outer: [`domain`] (the tree and its operations),
//! [`application`] (the graph store), [`infrastructure`] (I/O and wiring),
//! [`cli`] (argument parsing and dispatch).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
