//! Static candidate-name table for column detection.
//!
//! One ordered list of lowercase header variants per role, drawn from the
//! TESS/NASA/Kepler catalog conventions this tool ingests. List order is
//! the tie-break: the resolver walks each list front to back, so earlier
//! entries win over later ones. Process-wide read-only data, safe to share
//! across concurrent runs.

use crate::model::Role;

pub const ID_CANDIDATES: &[&str] = &["toi", "tid", "id", "kepid", "epic", "object_id", "target_name"];

pub const ORBPER_CANDIDATES: &[&str] = &[
    "orbper",
    "pl_orbper",
    "koi_period",
    "orbital_period",
    "period",
    "per",
];

pub const TRANDUR_CANDIDATES: &[&str] = &[
    "trandur",
    "pl_trandurh",
    "pl_trandur",
    "koi_duration",
    "duration",
    "dur",
];

pub const TRANDEPT_CANDIDATES: &[&str] = &[
    "trandept",
    "pl_trandep",
    "koi_depth",
    "tran_depth",
    "depth",
];

pub const TMAG_CANDIDATES: &[&str] = &["tmag", "st_tmag", "tessmag", "koi_kepmag", "kepmag", "mag"];

/// Candidate header names for a role, in tie-break order.
pub fn candidates_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Id => ID_CANDIDATES,
        Role::OrbPer => ORBPER_CANDIDATES,
        Role::TranDur => TRANDUR_CANDIDATES,
        Role::TranDept => TRANDEPT_CANDIDATES,
        Role::Tmag => TMAG_CANDIDATES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    // The resolver lowercases table columns and compares against these
    // lists directly, so every candidate must already be lowercase.
    #[test]
    fn all_candidates_are_lowercase() {
        for role in Role::ALL {
            for cand in candidates_for(role) {
                assert_eq!(
                    *cand,
                    cand.to_lowercase(),
                    "candidate '{cand}' for role '{role}' is not lowercase"
                );
            }
        }
    }

    #[test]
    fn every_role_has_candidates() {
        for role in Role::ALL {
            assert!(!candidates_for(role).is_empty());
        }
    }
}
