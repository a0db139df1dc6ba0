//! Sample documents: a rectangular grid of floats stored as JSON
//!
//! ```json
//! { "name": "LEIAT504", "samples": [[0.0, 0.1], [0.2, 0.3]] }
//! ```
//!
//! `pcv_values` is accepted in place of `samples`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use surfcrate_core::GridView;

use crate::error::IoError;

/// A loaded sample grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleDocument {
    /// Optional label of the data set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Row-major samples
    #[serde(alias = "pcv_values")]
    pub samples: Vec<Vec<f64>>,
}

impl SampleDocument {
    /// Parse and validate a document. `origin` names the source in error messages.
    pub fn from_json(text: &str, origin: &str) -> Result<Self, IoError> {
        let doc: SampleDocument = serde_json::from_str(text).map_err(|e| IoError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        doc.validate(origin)?;
        Ok(doc)
    }

    /// Check that the samples form a non-empty rectangular grid of finite values
    pub fn validate(&self, origin: &str) -> Result<(), IoError> {
        let grid = GridView::new(&self.samples).map_err(|e| IoError::InvalidSamples {
            path: origin.to_string(),
            message: e.to_string(),
        })?;

        if let Some((r, c, v)) = grid.cells().find(|(_, _, v)| !v.is_finite()) {
            return Err(IoError::InvalidSamples {
                path: origin.to_string(),
                message: format!("sample ({}, {}) is not finite: {}", r, c, v),
            });
        }
        Ok(())
    }

    /// `(rows, cols)` of the grid
    pub fn dimensions(&self) -> (usize, usize) {
        (self.samples.len(), self.samples.first().map_or(0, Vec::len))
    }

    /// Minimum and maximum sample
    pub fn range(&self) -> Option<(f64, f64)> {
        self.samples.iter().flatten().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

/// Load a sample document from a JSON file
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<SampleDocument, IoError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    if !path.exists() {
        return Err(IoError::FileNotFound { path: origin });
    }

    let text = fs::read_to_string(path)?;
    let doc = SampleDocument::from_json(&text, &origin)?;
    let (rows, cols) = doc.dimensions();
    log::info!("loaded {}x{} samples from {}", rows, cols, origin);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_samples() {
        let doc = SampleDocument::from_json(r#"{"samples": [[0.5, -1.0], [2.0, 0.0]]}"#, "inline").unwrap();
        assert_eq!(doc.dimensions(), (2, 2));
        assert_eq!(doc.range(), Some((-1.0, 2.0)));
        assert_eq!(doc.name, None);
    }

    #[test]
    fn test_pcv_values_alias() {
        let doc = SampleDocument::from_json(
            r#"{"name": "LEIAT504", "pcv_values": [[0.0, 0.1, 0.2], [0.3, 0.4, 0.5]]}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(doc.name.as_deref(), Some("LEIAT504"));
        assert_eq!(doc.dimensions(), (2, 3));
    }

    #[test]
    fn test_ragged_samples_are_rejected() {
        let err = SampleDocument::from_json(r#"{"samples": [[0.0, 1.0], [2.0]]}"#, "ragged.json").unwrap_err();
        assert!(matches!(err, IoError::InvalidSamples { .. }));
        assert!(err.to_string().contains("ragged.json"));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let err = SampleDocument::from_json(r#"{"values": []}"#, "bad.json").unwrap_err();
        assert!(matches!(err, IoError::ParseError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"samples": [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]}}"#).unwrap();

        let doc = load_samples(file.path()).unwrap();
        assert_eq!(doc.dimensions(), (3, 2));
    }

    #[test]
    fn test_missing_file_converts_to_data_load_error() {
        let err = load_samples("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));

        let core: surfcrate_core::Error = err.into();
        match core {
            surfcrate_core::Error::DataLoad { path, .. } => assert_eq!(path, "/definitely/not/here.json"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
