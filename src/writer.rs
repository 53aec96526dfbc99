// ulaw-wav/src/writer.rs
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, WaveError};

/// Loads a whole input container into memory.
pub async fn read_input(path: &Path) -> Result<Vec<u8>> {
    let exists = tokio::fs::try_exists(path).await.map_err(|e| WaveError::io(path, e))?;
    if !exists {
        return Err(WaveError::MissingInput { path: path.to_path_buf() });
    }
    let data = tokio::fs::read(path).await.map_err(|e| WaveError::io(path, e))?;
    debug!(path = %path.display(), bytes = data.len(), "Girdi dosyası okundu.");
    Ok(data)
}

/// Writes the output through a uniquely named temp file in the destination
/// directory, then persists it over the destination. The destination only
/// ever holds a complete file, and no other file in the directory is touched.
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn target_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    pub async fn write(&self, data: &[u8]) -> Result<()> {
        let dir = self.target_dir();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| WaveError::io(&dir, e))?;

        let path = self.path.clone();
        let bytes = data.to_vec();
        tokio::task::spawn_blocking(move || persist_in(&dir, &path, &bytes))
            .await
            .map_err(|e| WaveError::io(&self.path, std::io::Error::other(e)))??;

        info!(path = %self.path.display(), bytes = data.len(), "Çıktı dosyası diske yazıldı.");
        Ok(())
    }
}

// The temp file is removed on drop if any step fails.
fn persist_in(dir: &Path, path: &Path, data: &[u8]) -> Result<()> {
    let mut staging = NamedTempFile::new_in(dir).map_err(|e| WaveError::io(dir, e))?;
    staging.write_all(data).map_err(|e| WaveError::io(staging.path(), e))?;
    staging.as_file().sync_all().map_err(|e| WaveError::io(staging.path(), e))?;
    staging.persist(path).map_err(|e| WaveError::io(path, e.error))?;
    Ok(())
}
