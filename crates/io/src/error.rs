use std::fmt;

use exosift_engine::EngineError;

/// Fatal pipeline failures. None of these are retried and there is no
/// partial-result fallback; numeric-cell problems never surface here —
/// they degrade to the coercion sentinel inside the engine.
#[derive(Debug)]
pub enum PipelineError {
    /// Input path absent, both as given and relative to the current
    /// directory. Carries the path exactly as the caller supplied it.
    FileNotFound(String),
    /// Malformed or unreadable table content.
    Parse(String),
    /// Mandatory catalog roles could not be resolved to columns.
    Resolve(EngineError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "file not found: {path}"),
            Self::Parse(msg) => write!(f, "failed to read catalog: {msg}"),
            Self::Resolve(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EngineError> for PipelineError {
    fn from(err: EngineError) -> Self {
        Self::Resolve(err)
    }
}
