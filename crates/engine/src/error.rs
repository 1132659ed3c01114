use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// One or more mandatory catalog roles could not be matched to a column.
    /// Carries every missing role, so a caller sees the full remediation
    /// list in a single failure.
    UnresolvedRoles(Vec<String>),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedRoles(roles) => {
                write!(
                    f,
                    "could not resolve catalog columns for: {}",
                    roles.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}
