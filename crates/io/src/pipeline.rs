// Pipeline entry point: locate the file, read the table, score and label.

use std::path::{Path, PathBuf};

use exosift_engine::classify::Thresholds;
use exosift_engine::model::Catalog;
use exosift_engine::resolve::Overrides;

use crate::error::PipelineError;
use crate::{csv, xlsx};

/// Extensions routed to the Excel reader; everything else is treated as
/// delimited text.
const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsb", "ods"];

/// Run the triage pipeline over the catalog at `path` with default
/// thresholds and no column overrides — the service-boundary execution
/// mode (no interactive prompting).
pub fn run_pipeline(path: &str) -> Result<Catalog, PipelineError> {
    run_pipeline_with(path, &Overrides::new(), &Thresholds::default())
}

/// Run the triage pipeline with explicit overrides and thresholds.
pub fn run_pipeline_with(
    path: &str,
    overrides: &Overrides,
    thresholds: &Thresholds,
) -> Result<Catalog, PipelineError> {
    let catalog = load_catalog(path)?;
    exosift_engine::run(&catalog, overrides, thresholds).map_err(PipelineError::from)
}

/// Locate and read a catalog without scoring it.
pub fn load_catalog(path: &str) -> Result<Catalog, PipelineError> {
    let file = locate(path)?;
    read_table(&file).map_err(PipelineError::Parse)
}

/// Read a catalog table, dispatching on the file extension.
pub fn read_table(path: &Path) -> Result<Catalog, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some(ext) if EXCEL_EXTENSIONS.contains(&ext) => xlsx::import(path),
        _ => csv::import(path),
    }
}

/// Resolve the input path: as given first, then relative to the current
/// directory. The error carries the path exactly as the caller supplied it.
fn locate(path: &str) -> Result<PathBuf, PipelineError> {
    let direct = PathBuf::from(path);
    if direct.exists() {
        return Ok(direct);
    }

    if let Ok(cwd) = std::env::current_dir() {
        let fallback = cwd.join(path);
        if fallback.exists() {
            return Ok(fallback);
        }
    }

    Err(PipelineError::FileNotFound(path.to_string()))
}
