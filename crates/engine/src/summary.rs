use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Catalog, Cell, CLASS_COLUMN};

/// Row total plus label distribution over the output `class` column.
#[derive(Debug, Clone, Serialize)]
pub struct ClassSummary {
    pub total_rows: usize,
    pub class_counts: HashMap<String, usize>,
}

/// Compute summary statistics from a scored catalog.
///
/// `class_counts` stays empty when the catalog carries no `class` column —
/// callers upstream of the pipeline (or on its earlier trivial variant)
/// still get a well-formed summary.
pub fn summarize(catalog: &Catalog) -> ClassSummary {
    let mut class_counts: HashMap<String, usize> = HashMap::new();

    if let Some(idx) = catalog.column_index(CLASS_COLUMN) {
        for row in &catalog.rows {
            if let Some(Cell::Text(label)) = row.get(idx) {
                *class_counts.entry(label.clone()).or_insert(0) += 1;
            }
        }
    }

    ClassSummary {
        total_rows: catalog.len(),
        class_counts,
    }
}
