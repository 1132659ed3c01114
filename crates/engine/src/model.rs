use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Cells and catalog
// ---------------------------------------------------------------------------

/// A single raw catalog value, as loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => {
                // Integers without decimals
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
        }
    }
}

/// Name of the appended score column.
pub const SCORE_COLUMN: &str = "score";
/// Name of the appended class-label column.
pub const CLASS_COLUMN: &str = "class";

/// An in-memory catalog table: ordered columns, ordered rows.
///
/// Column names are case-preserved exactly as read. Row order is significant
/// and preserved end-to-end — output row `i` always derives from input row
/// `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Catalog {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row, padding or truncating to the column count.
    /// Delimited inputs may be ragged; the catalog itself never is.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// The five semantic column roles the pipeline works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Id,
    OrbPer,
    TranDur,
    TranDept,
    Tmag,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Id,
        Role::OrbPer,
        Role::TranDur,
        Role::TranDept,
        Role::Tmag,
    ];

    /// Roles that must resolve for a pipeline run to proceed.
    /// `id` is optional and currently unused downstream (reserved).
    pub const MANDATORY: [Role; 4] = [Role::OrbPer, Role::TranDur, Role::TranDept, Role::Tmag];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::OrbPer => "orbper",
            Self::TranDur => "trandur",
            Self::TranDept => "trandept",
            Self::Tmag => "tmag",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "orbper" => Ok(Self::OrbPer),
            "trandur" => Ok(Self::TranDur),
            "trandept" => Ok(Self::TranDept),
            "tmag" => Ok(Self::Tmag),
            other => Err(format!(
                "unknown role '{other}' (expected id, orbper, trandur, trandept, tmag)"
            )),
        }
    }
}

/// Result of column resolution: every mandatory role bound to a column name
/// present in the catalog. Cannot be constructed with a mandatory role
/// missing — that failure mode is `EngineError::UnresolvedRoles`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMap {
    pub id: Option<String>,
    pub orbper: String,
    pub trandur: String,
    pub trandept: String,
    pub tmag: String,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Class labels in ascending order of plausibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Class {
    /// Ambiguous planet candidate.
    Apc,
    /// Planet candidate.
    Pc,
    /// Confirmed-planet-like.
    Cp,
}

impl Class {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apc => "APC",
            Self::Pc => "PC",
            Self::Cp => "CP",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
