// ulaw-wav/src/wav/header.rs
//! Canonical µ-law WAVE header: `fmt ` (18 bytes), `fact`, then `data`.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{Result, WaveError};

pub const WAVE_FORMAT_MULAW: u16 = 7;
pub const CHANNELS: u16 = 1;
pub const SAMPLE_RATE: u32 = 8000;
pub const BITS_PER_SAMPLE: u16 = 8;

const FMT_CHUNK_LEN: u32 = 18;
const FACT_CHUNK_LEN: u32 = 4;

/// Total header size; the payload starts at this offset.
pub const ULAW_HEADER_LEN: usize = 58;

/// Builds the header for `len` bytes of mono 8 kHz µ-law audio. Lengths that
/// do not fit the 32-bit RIFF size field are rejected.
pub fn ulaw_header(len: usize) -> Result<Bytes> {
    let payload_len = payload_len_u32(len)?;
    let byte_rate = SAMPLE_RATE * u32::from(CHANNELS) * u32::from(BITS_PER_SAMPLE) / 8;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;

    let mut header = BytesMut::with_capacity(ULAW_HEADER_LEN);

    header.put_slice(b"RIFF");
    header.put_u32_le(payload_len + (ULAW_HEADER_LEN - 8) as u32);
    header.put_slice(b"WAVE");

    header.put_slice(b"fmt ");
    header.put_u32_le(FMT_CHUNK_LEN);
    header.put_u16_le(WAVE_FORMAT_MULAW);
    header.put_u16_le(CHANNELS);
    header.put_u32_le(SAMPLE_RATE);
    header.put_u32_le(byte_rate);
    header.put_u16_le(block_align);
    header.put_u16_le(BITS_PER_SAMPLE);
    header.put_u16_le(0); // cbSize

    // One byte per mono sample, so the sample count equals the payload size.
    header.put_slice(b"fact");
    header.put_u32_le(FACT_CHUNK_LEN);
    header.put_u32_le(payload_len);

    header.put_slice(b"data");
    header.put_u32_le(payload_len);

    debug_assert_eq!(header.len(), ULAW_HEADER_LEN);
    Ok(header.freeze())
}

fn payload_len_u32(len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|n| n.checked_add((ULAW_HEADER_LEN - 8) as u32).is_some())
        .ok_or(WaveError::PayloadTooLarge { len })
}
