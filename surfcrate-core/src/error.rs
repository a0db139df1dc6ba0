//! Error types for surfcrate

use std::fmt;

use thiserror::Error;

/// Stable identifier of a rendering surface node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    /// Allocate a process-unique identifier
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Main error type for surfcrate operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration incomplete: {0}")]
    ConfigurationIncomplete(String),

    #[error("malformed grid{}: {detail} ({rows} rows)", .surface.map(|s| format!(" on {s}")).unwrap_or_default())]
    MalformedGrid {
        surface: Option<SurfaceId>,
        rows: usize,
        detail: String,
    },

    #[error("failed to load data from {path}: {message}")]
    DataLoad { path: String, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attach the identity of the surface being rendered to a grid error
    pub fn with_surface(self, id: SurfaceId) -> Self {
        match self {
            Error::MalformedGrid { rows, detail, .. } => Error::MalformedGrid {
                surface: Some(id),
                rows,
                detail,
            },
            other => other,
        }
    }
}

/// Result type alias for surfcrate operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_ids_are_unique() {
        let a = SurfaceId::next();
        let b = SurfaceId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_grid_message_names_surface() {
        let err = Error::MalformedGrid {
            surface: None,
            rows: 3,
            detail: "row 1 has 2 columns, expected 4".to_string(),
        }
        .with_surface(SurfaceId(7));

        let message = err.to_string();
        assert!(message.contains("surface#7"));
        assert!(message.contains("3 rows"));
        assert!(message.contains("row 1 has 2 columns"));
    }

    #[test]
    fn test_with_surface_keeps_other_errors() {
        let err = Error::InvalidData("bad".into()).with_surface(SurfaceId(1));
        assert!(matches!(err, Error::InvalidData(_)));
    }
}
