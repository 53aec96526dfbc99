// ulaw-wav/src/transcode.rs
//! 16-bit PCM WAVE -> µ-law WAVE.

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::audio::encode_pcm16le;
use crate::error::Result;
use crate::wav::{data_payload_start, ulaw_header};
use crate::writer::{read_input, FileWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcoded {
    /// Header followed by the encoded payload.
    pub bytes: Vec<u8>,
    pub samples: usize,
    pub dropped_trailing_byte: bool,
}

/// Everything from the end of the "data" chunk header to the end of `input`
/// is read as little-endian 16-bit samples.
pub fn transcode_buffer(input: &[u8]) -> Result<Transcoded> {
    let start = data_payload_start(input)?;
    let pcm = &input[start..];

    let encoded = encode_pcm16le(pcm);
    let header = ulaw_header(encoded.len())?;

    let mut bytes = Vec::with_capacity(header.len() + encoded.len());
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(&encoded);

    Ok(Transcoded { bytes, samples: encoded.len(), dropped_trailing_byte: pcm.len() % 2 == 1 })
}

#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub async fn transcode_file(input: &Path, output: &Path) -> Result<Transcoded> {
    let data = read_input(input).await?;
    let transcoded = transcode_buffer(&data)?;
    if transcoded.dropped_trailing_byte {
        warn!("PCM verisinin son tek baytı atlandı.");
    }

    FileWriter::new(output).write(&transcoded.bytes).await?;
    info!(samples = transcoded.samples, "µ-law dönüşümü tamamlandı.");
    Ok(transcoded)
}
