//! Filesystem-backed project loader.

use async_trait::async_trait;

use hearth_core::{HearthError, ProjectLoader};

/// Opens a project root by verifying it is an existing directory before
/// handing it to the editor shell. Failure details are carried in the
/// error; the welcome screen itself only re-renders on failure.
pub struct FsProjectLoader;

#[async_trait]
impl ProjectLoader for FsProjectLoader {
    async fn open(&self, path: &str) -> hearth_core::Result<()> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|err| HearthError::project_open(path, err.to_string()))?;

        if !metadata.is_dir() {
            return Err(HearthError::project_open(path, "not a directory"));
        }

        tracing::info!(path, "opening project");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn opens_an_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FsProjectLoader;
        assert!(loader.open(dir.path().to_str().unwrap()).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_a_missing_path() {
        let loader = FsProjectLoader;
        assert!(loader.open("/nowhere/at/all").await.is_err());
    }

    #[tokio::test]
    async fn rejects_a_plain_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let loader = FsProjectLoader;
        assert!(loader.open(file.path().to_str().unwrap()).await.is_err());
    }
}
