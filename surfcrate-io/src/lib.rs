//! I/O operations for surfcrate
//! 
//! This crate loads the data a surface is rendered from and persists what
//! it renders:
//! - Sample grids from JSON documents (`samples` or `pcv_values`)
//! - Surface configuration from JSON
//! - SVG documents to disk

pub mod error;
pub mod samples;

pub use error::*;
pub use samples::*;

use std::fs;
use std::path::Path;

use surfcrate_core::SurfaceConfig;

/// Load a surface configuration from a JSON file. Missing fields take defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SurfaceConfig, IoError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    if !path.exists() {
        return Err(IoError::FileNotFound { path: origin });
    }

    let text = fs::read_to_string(path)?;
    SurfaceConfig::from_json(&text).map_err(|e| IoError::ParseError {
        path: origin,
        message: e.to_string(),
    })
}

/// Write an SVG document, creating parent directories as needed
pub fn write_svg<P: AsRef<Path>>(path: P, svg: &str) -> Result<(), IoError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg).map_err(|e| IoError::WriteError {
        message: format!("{}: {}", path.display(), e),
    })?;
    log::info!("wrote {} bytes to {}", svg.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("surface.json");
        fs::write(&path, r#"{ "width": 700, "height": 600, "decorations": false }"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.width, 700.0);
        assert_eq!(config.height, 600.0);
        assert!(!config.decorations);
        assert_eq!(config.zoom, 1.0);
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(&path), Err(IoError::ParseError { .. })));
    }

    #[test]
    fn test_load_config_rejects_unusable_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("surface.json");
        fs::write(&path, r#"{ "precision": 500 }"#).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, IoError::ParseError { .. }));
        assert!(err.to_string().contains("precision 500"));
    }

    #[test]
    fn test_write_svg_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("surface.svg");
        write_svg(&path, "<svg/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
