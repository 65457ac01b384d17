use crate::{parse, render};
use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, trace};

/// Source path that reads flake8 output from standard input
const STDIN_SOURCE: &str = "-";

/// Result of a successful conversion
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A report was written to the destination
    Written { files: usize, violations: usize },
    /// No violations found; nothing was written
    Clean,
}

/// Convert flake8 output at `source` into a JUnit XML report at `destination`
///
/// When the source has no violations no report is written, and any report left
/// at `destination` by a previous run is removed.
pub fn convert(source: &str, destination: &Path) -> Result<Outcome> {
    let text = read_source(source)?;
    let groups = parse::parse(&text);
    trace!(
        "Parsed violations: {}",
        serde_json::to_string(&groups).unwrap_or_default()
    );

    let report = render::render(&groups);
    write_report(destination, report.as_deref())?;

    if report.is_some() {
        Ok(Outcome::Written {
            files: groups.len(),
            violations: groups.violation_count(),
        })
    } else {
        Ok(Outcome::Clean)
    }
}

/// Read flake8 output from a file, or from stdin when `source` is `-`
pub fn read_source(source: &str) -> Result<String> {
    if source == STDIN_SOURCE {
        debug!("Reading flake8 output from stdin");
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read flake8 output from stdin")?;
        return Ok(text);
    }

    debug!("Reading flake8 output from {}", source);
    std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read flake8 output from {}", source))
}

/// Write the report to `destination`, or remove a stale one when there is no report
pub fn write_report(destination: &Path, report: Option<&str>) -> Result<()> {
    match report {
        Some(xml) => {
            std::fs::write(destination, xml)
                .with_context(|| format!("Failed to write report to {}", destination.display()))?;
            info!("Report written to {}", destination.display());
        }
        None => match std::fs::symlink_metadata(destination) {
            Ok(meta) if meta.is_file() => {
                std::fs::remove_file(destination).with_context(|| {
                    format!("Failed to remove stale report at {}", destination.display())
                })?;
                info!("Removed stale report at {}", destination.display());
            }
            Ok(_) => {
                debug!(
                    "{} is not a regular file, leaving it in place",
                    destination.display()
                );
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No violations found, no report written");
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to inspect report path {}", destination.display())
                });
            }
        },
    }
    Ok(())
}
