//! Artifact output.
//!
//! The generator writes exactly one file per run. Check mode renders without
//! writing and reports drift between the rendered text and what is on disk,
//! which is how CI guards the committed module.

use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::generation::GenerationError;

/// Write the rendered module to `path`, creating parent directories.
pub async fn write_module(path: &Path, content: &str) -> Result<(), GenerationError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(path).await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;

    tracing::info!(path = %path.display(), bytes = content.len(), "wrote client module");
    Ok(())
}

/// Compare the rendered module against the file on disk.
pub async fn check_module(path: &Path, content: &str) -> Result<(), GenerationError> {
    let existing = fs::read_to_string(path).await.map_err(|e| {
        GenerationError::Check(format!("cannot read {}: {e}", path.display()))
    })?;

    if existing != content {
        return Err(GenerationError::Check(format!(
            "{} differs from the rendered module; re-run `thermogen generate`",
            path.display()
        )));
    }

    tracing::info!(path = %path.display(), "module is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_and_verifies_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/api.rs");

        write_module(&path, "pub struct Generated;\n").await.unwrap();
        check_module(&path, "pub struct Generated;\n").await.unwrap();
    }

    #[tokio::test]
    async fn check_detects_drift() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api.rs");

        write_module(&path, "pub struct Generated;\n").await.unwrap();
        let result = check_module(&path, "pub struct Changed;\n").await;
        assert!(matches!(result, Err(GenerationError::Check(_))));
    }

    #[tokio::test]
    async fn check_fails_when_target_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.rs");

        let result = check_module(&path, "x").await;
        assert!(matches!(result, Err(GenerationError::Check(_))));
    }
}
