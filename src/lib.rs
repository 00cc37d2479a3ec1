//! Duscope - a du frontend that picks the most informative entries
//!
//! This crate provides:
//! - A bounded top-K accumulator over a streamed du report
//! - A threshold search with tree pruning that converges on a target
//!   output line count
//! - Tree, flat, parseable and JSON renderers

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod select;
pub mod source;

// Re-export commonly used types
pub use config::Config;
pub use error::{DuscopeError, Result};
pub use select::{Entry, SelectionResult};
