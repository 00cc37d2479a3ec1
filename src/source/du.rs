use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use super::parse::{parse_line, Record};
use crate::error::{DuscopeError, Result};

/// How to invoke the external usage reporter.
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Binary to run, normally `du`
    pub command: String,

    /// Stay on one filesystem (`-x`)
    pub one_file_system: bool,

    /// Report apparent byte sizes (`-b`) instead of 1 KiB blocks.
    /// Block mode works everywhere; `-b` needs GNU du.
    pub apparent_size: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            command: "du".to_string(),
            one_file_system: false,
            apparent_size: false,
        }
    }
}

impl SourceOptions {
    fn args(&self) -> Vec<&'static str> {
        let mut args = vec!["-a", "-c"];
        args.push(if self.apparent_size { "-b" } else { "-k" });
        if self.one_file_system {
            args.push("-x");
        }
        args
    }

    fn scale(&self) -> u64 {
        if self.apparent_size {
            1
        } else {
            1024
        }
    }
}

/// A running `du` child whose report is consumed line by line, so
/// memory stays bounded no matter how many entries it prints.
///
/// Stderr is inherited: permission warnings go straight to the user.
#[derive(Debug)]
pub struct DuSource {
    child: Child,
    lines: Lines<BufReader<ChildStdout>>,
    command: String,
    scale: u64,
    line_no: usize,
}

impl DuSource {
    pub fn spawn(root: &Path, options: &SourceOptions) -> Result<Self> {
        let mut command = Command::new(&options.command);
        command
            .args(options.args())
            .arg(root)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        tracing::debug!(?command, "spawning usage reporter");

        let mut child = command.spawn().map_err(|source| DuscopeError::Source {
            command: options.command.clone(),
            source,
        })?;

        // Piped stdout is always present after a successful spawn.
        let stdout = child.stdout.take().ok_or_else(|| DuscopeError::Source {
            command: options.command.clone(),
            source: std::io::Error::other("child stdout unavailable"),
        })?;

        Ok(Self {
            child,
            lines: BufReader::new(stdout).lines(),
            command: options.command.clone(),
            scale: options.scale(),
            line_no: 0,
        })
    }

    /// Reap the child once the stream is drained. A nonzero exit with
    /// usable output (permission errors along the way) is only worth a
    /// warning.
    pub fn finish(mut self) -> Result<()> {
        let status = self.child.wait().map_err(|source| DuscopeError::Source {
            command: self.command.clone(),
            source,
        })?;
        if !status.success() {
            tracing::warn!(%status, command = %self.command, "usage reporter exited with errors");
        }
        Ok(())
    }
}

impl Iterator for DuSource {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    self.line_no += 1;
                    if line.is_empty() {
                        continue;
                    }
                    return Some(parse_line(&line, self.scale, self.line_no));
                }
                Err(source) => {
                    return Some(Err(DuscopeError::Source {
                        command: self.command.clone(),
                        source,
                    }))
                }
            }
        }
    }
}
