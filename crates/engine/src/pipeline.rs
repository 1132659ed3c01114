//! Row-wise triage orchestration over an in-memory catalog.
//!
//! Resolve columns once, then per row: coerce the four features, score,
//! round to one decimal, label. Once resolution succeeds no per-row
//! failure is possible — coercion is total and scoring tolerates the
//! sentinel.

use crate::classify::{self, Thresholds};
use crate::coerce;
use crate::error::EngineError;
use crate::model::{Catalog, Cell, RoleMap, CLASS_COLUMN, SCORE_COLUMN};
use crate::resolve::{self, Overrides};
use crate::score::{self, Features};

/// Run the full triage pass: returns a copy of the catalog with `score`
/// and `class` columns appended, row order preserved.
pub fn run(
    catalog: &Catalog,
    overrides: &Overrides,
    thresholds: &Thresholds,
) -> Result<Catalog, EngineError> {
    let roles = resolve::resolve(&catalog.columns, overrides)?;
    Ok(annotate(catalog, &roles, thresholds))
}

/// Score and label every row against an already-resolved role map.
pub fn annotate(catalog: &Catalog, roles: &RoleMap, thresholds: &Thresholds) -> Catalog {
    let orbper = catalog.column_index(&roles.orbper);
    let trandur = catalog.column_index(&roles.trandur);
    let trandept = catalog.column_index(&roles.trandept);
    let tmag = catalog.column_index(&roles.tmag);

    let mut columns = catalog.columns.clone();
    columns.push(SCORE_COLUMN.to_string());
    columns.push(CLASS_COLUMN.to_string());

    let mut out = Catalog::new(columns);
    for row in &catalog.rows {
        let features = Features {
            orbper: cell_number(row, orbper),
            trandur: cell_number(row, trandur),
            trandept: cell_number(row, trandept),
            tmag: cell_number(row, tmag),
        };
        let score = round1(score::composite(&features));
        let class = classify::label(score, thresholds);

        let mut scored = row.clone();
        scored.resize(catalog.columns.len(), Cell::Empty);
        scored.push(Cell::Number(score));
        scored.push(Cell::Text(class.to_string()));
        out.rows.push(scored);
    }
    out
}

fn cell_number(row: &[Cell], index: Option<usize>) -> Option<f64> {
    index.and_then(|i| row.get(i)).and_then(coerce::to_number)
}

/// Stored scores carry one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
