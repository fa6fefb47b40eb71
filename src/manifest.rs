use crate::error::{ReleaseError, Result};
use std::fs;
use std::path::Path;

/// Read the package name from an npm manifest (`package.json`).
///
/// Used to scope registry lookups when no package name is given on the
/// command line. Anything beyond the name is the registry CLI's business.
pub fn package_name<P: AsRef<Path>>(path: P) -> Result<String> {
    let raw = fs::read_to_string(&path)?;

    let manifest: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| ReleaseError::config(format!("Cannot parse package manifest: {}", e)))?;

    manifest
        .get("name")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| ReleaseError::config("Package manifest has no 'name' field"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_package_name() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "name": "my-package", "version": "1.0.0" }"#)
            .unwrap();
        file.flush().unwrap();

        assert_eq!(package_name(file.path()).unwrap(), "my-package");
    }

    #[test]
    fn test_missing_name_field() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "version": "1.0.0" }"#).unwrap();
        file.flush().unwrap();

        assert!(matches!(
            package_name(file.path()),
            Err(ReleaseError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        file.flush().unwrap();

        assert!(package_name(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            package_name("/nonexistent/package.json"),
            Err(ReleaseError::Io(_))
        ));
    }
}
