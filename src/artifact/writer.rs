use crate::SitegenError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Sibling path the artifact is staged at before the rename
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes the artifact, replacing any previous one in a single rename
///
/// Parent directories are created as needed. The contents go to a sibling
/// temporary file first so a failed write never leaves a truncated artifact
/// behind.
///
/// # Arguments
///
/// * `path` - Destination of the artifact
/// * `contents` - Rendered artifact
///
/// # Returns
///
/// * `Ok(())` - The artifact is in place
/// * `Err(SitegenError::Artifact)` - Writing or renaming failed
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), SitegenError> {
    let to_error = |source: std::io::Error| SitegenError::Artifact {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    let staging = staging_path(path);
    let result = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&staging);
        return Err(to_error(e));
    }

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_into_new_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app/config/site-config.ts");

        write_artifact(&path, "export default {};\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export default {};\n");
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_replaces_existing_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site-config.ts");
        fs::write(&path, "old").unwrap();

        write_artifact(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        // A directory in the way of the file makes the rename fail
        let path = dir.path().join("site-config.ts");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let result = write_artifact(&path, "new");

        assert!(matches!(result, Err(SitegenError::Artifact { .. })));
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_staging_path_is_sibling() {
        let path = Path::new("app/config/site-config.ts");
        assert_eq!(
            staging_path(path),
            PathBuf::from("app/config/site-config.ts.tmp")
        );
    }
}
