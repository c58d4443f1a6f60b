//! The export pipeline: read the stylesheet, extract, write JSON.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tokencss::extract_palette;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};

/// What was written, for the summary printed after an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub group_count: usize,
    pub grouped_path: PathBuf,
    /// Family name and output path, in config order.
    pub families: Vec<(String, PathBuf)>,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Extracted {} color groups to {}",
            self.group_count,
            self.grouped_path.display()
        )?;
        for (name, path) in &self.families {
            writeln!(f, "Extracted {} colors to {}", name, path.display())?;
        }
        Ok(())
    }
}

/// Writes `value` as pretty-printed JSON (two-space indent, no trailing newline).
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs a full export as described by `config`.
pub fn run(config: &ExportConfig) -> Result<ExportReport> {
    let css = fs::read_to_string(&config.input).map_err(|source| ExportError::ReadSource {
        path: config.input.clone(),
        source,
    })?;
    log::info!("Read {} bytes from {}", css.len(), config.input.display());

    let palette = extract_palette(&css, &config.grammar());

    fs::create_dir_all(&config.out_dir).map_err(|source| ExportError::CreateDir {
        path: config.out_dir.clone(),
        source,
    })?;

    let grouped_path = config.grouped_path();
    write_json(&grouped_path, &palette.groups)?;
    log::info!("Wrote {}", grouped_path.display());

    let mut families = Vec::with_capacity(config.families.len());
    // The grammar lists families in config order, and so does the palette
    for (output, extracted) in config.families.iter().zip(&palette.families) {
        let path = config.family_path(output);
        write_json(&path, &extracted.records)?;
        log::info!("Wrote {}", path.display());
        families.push((output.family.name.clone(), path));
    }

    Ok(ExportReport {
        group_count: palette.groups.len(),
        grouped_path,
        families,
    })
}
