// ulaw-wav/src/concat.rs
use std::path::Path;
use tracing::{info, instrument};

use crate::error::Result;
use crate::wav::{data_payload, ulaw_header};
use crate::writer::{read_input, FileWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenated {
    pub bytes: Vec<u8>,
    pub first_len: usize,
    pub second_len: usize,
}

impl Concatenated {
    pub fn payload_len(&self) -> usize {
        self.first_len + self.second_len
    }
}

/// Joins the "data" payloads of two µ-law containers under a new header.
/// Each payload is bounded by its declared chunk length.
pub fn concat_buffers(first: &[u8], second: &[u8]) -> Result<Concatenated> {
    let a = data_payload(first)?;
    let b = data_payload(second)?;
    let header = ulaw_header(a.len() + b.len())?;

    let mut bytes = Vec::with_capacity(header.len() + a.len() + b.len());
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(a);
    bytes.extend_from_slice(b);

    Ok(Concatenated { bytes, first_len: a.len(), second_len: b.len() })
}

#[instrument(skip_all, fields(first = %first.display(), second = %second.display(), output = %output.display()))]
pub async fn concat_files(first: &Path, second: &Path, output: &Path) -> Result<Concatenated> {
    // Both inputs are loaded before anything is written.
    let first_data = read_input(first).await?;
    let second_data = read_input(second).await?;
    let joined = concat_buffers(&first_data, &second_data)?;

    FileWriter::new(output).write(&joined.bytes).await?;
    info!(first_len = joined.first_len, second_len = joined.second_len, "Ses dosyaları birleştirildi.");
    Ok(joined)
}
