//! Snip CLI library - A tiny keyword-addressed snippet notebook.
//!
//! This library exposes the core functionality of the `snip` CLI for use in
//! tests and potentially other applications.
//!
//! # Modules
//!
//! - `cli`: Command-line argument definitions
//! - `config`: Database path resolution
//! - `error`: Error types with user-recoverable hints
//! - `logging`: Tracing setup (human/robot sinks)
//! - `store`: SQLite-backed snippet storage
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
