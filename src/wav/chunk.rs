// ulaw-wav/src/wav/chunk.rs
use tracing::{debug, warn};

use crate::error::{Result, WaveError};

pub const DATA_TAG: &[u8; 4] = b"data";

/// Size of a chunk header: 4-byte tag followed by a 4-byte little-endian length.
pub const CHUNK_HEADER_LEN: usize = 8;

/// Offset of the leftmost occurrence of `marker` in `buf`.
pub fn find_marker(buf: &[u8], marker: &[u8; 4]) -> Option<usize> {
    buf.windows(marker.len()).position(|window| window == marker)
}

/// Like [`find_marker`], but a missing tag is an error the caller must stop on.
pub fn locate_chunk(buf: &[u8], tag: &[u8; 4]) -> Result<usize> {
    let offset = find_marker(buf, tag).ok_or_else(|| WaveError::chunk_not_found(tag))?;
    debug!(tag = %String::from_utf8_lossy(tag), offset, "Chunk bulundu.");
    Ok(offset)
}

/// Reads the length field of the chunk whose tag starts at `offset`.
pub fn declared_chunk_len(buf: &[u8], offset: usize) -> Result<u32> {
    let header = buf.get(offset..offset + CHUNK_HEADER_LEN).ok_or_else(|| {
        let rest = buf.get(offset..).unwrap_or_default();
        WaveError::TruncatedChunk {
            tag: String::from_utf8_lossy(&rest[..rest.len().min(4)]).into_owned(),
            offset,
        }
    })?;
    Ok(u32::from_le_bytes([header[4], header[5], header[6], header[7]]))
}

/// First byte after the "data" chunk header. Never past the end of `buf`.
pub fn data_payload_start(buf: &[u8]) -> Result<usize> {
    let offset = locate_chunk(buf, DATA_TAG)?;
    Ok((offset + CHUNK_HEADER_LEN).min(buf.len()))
}

/// The "data" chunk contents as bounded by its declared length.
///
/// Bytes after the declared end (trailing chunks, padding) are excluded. A
/// declared length that runs past the buffer is cut at the buffer end.
pub fn data_payload(buf: &[u8]) -> Result<&[u8]> {
    let offset = locate_chunk(buf, DATA_TAG)?;
    let declared = declared_chunk_len(buf, offset)? as usize;
    let start = offset + CHUNK_HEADER_LEN;
    let available = buf.len() - start;
    if declared > available {
        warn!(declared, available, "Data chunk dosya sonunu aşıyor, mevcut baytlarla sınırlandı.");
    }
    Ok(&buf[start..start + declared.min(available)])
}
