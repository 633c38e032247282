//! Snapshot serialization

use std::fs;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::cli::OutputFormat;
use crate::discovery::Snapshot;
use crate::error::{DiscoveryError, Result};

/// Render a snapshot in the requested format
pub fn render_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
        OutputFormat::Yaml => Ok(serde_yml::to_string(snapshot)?),
    }
}

/// Write a snapshot to a file, or to stdout when no path is given
pub fn write_snapshot(
    snapshot: &Snapshot,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<()> {
    let rendered = render_snapshot(snapshot, format)?;

    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", rendered)).map_err(|e| {
                DiscoveryError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            info!("Snapshot written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered)?;
        }
    }

    Ok(())
}
