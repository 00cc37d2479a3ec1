//! Usage data source: spawns `du` and streams its report.

mod du;
mod parse;

pub use du::{DuSource, SourceOptions};
pub use parse::{parse_line, Record};
