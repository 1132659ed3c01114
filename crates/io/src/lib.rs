// Catalog file I/O - CSV/TSV and Excel readers, pipeline orchestration

pub mod csv;
pub mod error;
pub mod pipeline;
pub mod xlsx;

pub use error::PipelineError;
pub use pipeline::{load_catalog, read_table, run_pipeline, run_pipeline_with};
