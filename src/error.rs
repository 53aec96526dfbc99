// ulaw-wav/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaveError>;

#[derive(Error, Debug)]
pub enum WaveError {
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("No '{tag}' chunk in container")]
    ChunkNotFound { tag: String },

    #[error("'{tag}' chunk header at offset {offset} is truncated")]
    TruncatedChunk { tag: String, offset: usize },

    #[error("Payload of {len} bytes does not fit a 32-bit RIFF size field")]
    PayloadTooLarge { len: usize },

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WaveError {
    pub fn chunk_not_found(tag: &[u8; 4]) -> Self {
        Self::ChunkNotFound { tag: String::from_utf8_lossy(tag).into_owned() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
