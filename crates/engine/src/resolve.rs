//! Column resolution: map a catalog's actual header names onto the five
//! semantic roles.

use std::collections::HashMap;

use crate::candidates::candidates_for;
use crate::error::EngineError;
use crate::model::{Role, RoleMap};

/// Manual role → column overrides, highest-priority resolution source.
pub type Overrides = HashMap<Role, String>;

/// Resolve every role against the catalog's column names.
///
/// Per role, in priority order:
/// 1. a manual override naming a present column (case-sensitive),
/// 2. the first candidate with an exact case-insensitive match,
/// 3. the first candidate that is a case-insensitive substring of some
///    column — within a candidate, the first matching column in table
///    order wins.
///
/// Pure function of its inputs; resolving twice yields the same map.
/// Fails with a single aggregated error listing every mandatory role that
/// stayed unresolved.
pub fn resolve(columns: &[String], overrides: &Overrides) -> Result<RoleMap, EngineError> {
    let id = resolve_role(Role::Id, columns, overrides);
    let orbper = resolve_role(Role::OrbPer, columns, overrides);
    let trandur = resolve_role(Role::TranDur, columns, overrides);
    let trandept = resolve_role(Role::TranDept, columns, overrides);
    let tmag = resolve_role(Role::Tmag, columns, overrides);

    match (orbper, trandur, trandept, tmag) {
        (Some(orbper), Some(trandur), Some(trandept), Some(tmag)) => Ok(RoleMap {
            id,
            orbper,
            trandur,
            trandept,
            tmag,
        }),
        (orbper, trandur, trandept, tmag) => {
            let mut missing = Vec::new();
            if orbper.is_none() {
                missing.push(Role::OrbPer.to_string());
            }
            if trandur.is_none() {
                missing.push(Role::TranDur.to_string());
            }
            if trandept.is_none() {
                missing.push(Role::TranDept.to_string());
            }
            if tmag.is_none() {
                missing.push(Role::Tmag.to_string());
            }
            Err(EngineError::UnresolvedRoles(missing))
        }
    }
}

fn resolve_role(role: Role, columns: &[String], overrides: &Overrides) -> Option<String> {
    if let Some(name) = overrides.get(&role) {
        if columns.iter().any(|c| c == name) {
            return Some(name.clone());
        }
        // An override naming an absent column falls through to detection.
    }

    let lowered: Vec<String> = columns.iter().map(|c| c.to_lowercase()).collect();

    // Pass 1: exact case-insensitive match.
    for cand in candidates_for(role) {
        if let Some(pos) = lowered.iter().position(|c| c == cand) {
            return Some(columns[pos].clone());
        }
    }

    // Pass 2: candidate as substring of a column name.
    for cand in candidates_for(role) {
        if let Some(pos) = lowered.iter().position(|c| c.contains(cand)) {
            return Some(columns[pos].clone());
        }
    }

    None
}
