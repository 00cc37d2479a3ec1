//! Report command: wires the du stream through selection and rendering.

use std::path::Path;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::render::{self, DisplayMode};
use crate::select::{self, SelectionResult, TopAccumulator};
use crate::source::{DuSource, Record, SourceOptions};

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub lines: usize,
    pub format: DisplayMode,
    pub total_label: String,
    pub source: SourceOptions,
    pub scan_factor: usize,
}

impl Settings {
    pub fn merge(cli: &Cli, config: &Config) -> Self {
        Self {
            lines: cli.lines.unwrap_or(config.display.lines),
            format: cli.format.unwrap_or(config.display.format),
            total_label: cli
                .total_label
                .clone()
                .unwrap_or_else(|| config.display.total_label.clone()),
            source: SourceOptions {
                command: cli
                    .du_command
                    .clone()
                    .unwrap_or_else(|| config.source.du_command.clone()),
                one_file_system: cli.one_file_system || config.source.one_file_system,
                apparent_size: cli.apparent_size || config.source.apparent_size,
            },
            scan_factor: cli.scan_factor.unwrap_or(config.source.scan_factor),
        }
    }
}

/// Run the whole pipeline and print the report.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let settings = Settings::merge(cli, config);

    tracing::info!(path = %cli.path.display(), lines = settings.lines, "building usage report");

    let result = collect(&cli.path, &settings)?;
    let output = render::render(&result, settings.format, &settings.total_label)?;

    // The report is rendered in full before the first line is printed,
    // so an aborted run never leaves a misleading partial tree.
    println!("{output}");
    Ok(())
}

/// Stream the usage report into a bounded accumulator and select the
/// entries worth displaying.
fn collect(path: &Path, settings: &Settings) -> Result<SelectionResult> {
    let capacity = (settings.lines + 1) * settings.scan_factor;
    let mut accumulator = TopAccumulator::new(capacity);
    let mut total: Option<u64> = None;

    let mut source = DuSource::spawn(path, &settings.source)?;
    for record in &mut source {
        match record? {
            Record::Entry { size, path } => accumulator.insert(path, size),
            Record::Total(size) => total = Some(size),
        }
    }
    source.finish()?;

    if accumulator.is_empty() {
        return Err(crate::error::DuscopeError::EmptyInput);
    }

    tracing::debug!(candidates = accumulator.len(), capacity, "accumulation finished");

    let snapshot = accumulator.snapshot();
    let total = total.unwrap_or_else(|| {
        // du -c always ends with a total row; a missing one means the
        // report was truncated. Best effort from what survived.
        tracing::warn!("usage report ended without a total row");
        snapshot.iter().map(|e| e.size).sum()
    });

    select::select(snapshot, total, settings.lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn settings(args: &[&str]) -> Settings {
        let cli = Cli::parse_from(args);
        Settings::merge(&cli, &Config::default())
    }

    #[test]
    fn cli_overrides_config() {
        let s = settings(&["duscope", "-n", "7", "--format", "flat", "-x"]);
        assert_eq!(s.lines, 7);
        assert_eq!(s.format, DisplayMode::Flat);
        assert!(s.source.one_file_system);
    }

    #[test]
    fn config_defaults_apply_without_flags() {
        let s = settings(&["duscope"]);
        assert_eq!(s.lines, 20);
        assert_eq!(s.format, DisplayMode::Tree);
        assert_eq!(s.total_label, "total");
        assert_eq!(s.scan_factor, 10);
        assert_eq!(s.source.command, "du");
    }

    #[test]
    fn collect_reports_a_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/big"), vec![0u8; 64 * 1024]).unwrap();
        std::fs::write(dir.path().join("small"), vec![0u8; 1024]).unwrap();

        let s = settings(&["duscope", "-n", "5"]);
        let result = collect(dir.path(), &s).unwrap();

        assert!(!result.entries.is_empty());
        assert!(result.entries.len() <= 5);
        assert!(result.total > 0);
        // every selected entry lives under the scanned root
        for e in &result.entries {
            assert!(e.joined().starts_with(&dir.path().display().to_string()));
        }
    }

    #[test]
    fn collect_fails_on_a_missing_reporter() {
        let s = settings(&["duscope", "--du-command", "no-such-du"]);
        let err = collect(Path::new("."), &s).unwrap_err();
        assert!(matches!(err, crate::error::DuscopeError::Source { .. }));
    }
}
