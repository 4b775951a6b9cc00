use std::fmt;

/// Errors surfaced by shape construction.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// Rectangle configuration could not be resolved (unknown mode code,
    /// wrong arguments for the mode, negative or non-finite dimensions).
    InvalidConfiguration { reason: String },
    /// Triangle with coincident or collinear vertices; angles are undefined.
    DegenerateGeometry { reason: String },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { reason } => {
                write!(f, "invalid rectangle configuration: {reason}")
            }
            Self::DegenerateGeometry { reason } => write!(f, "degenerate triangle: {reason}"),
        }
    }
}

impl std::error::Error for ShapeError {}
