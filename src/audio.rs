// ulaw-wav/src/audio.rs
//! G.711 µ-law companding of 16-bit linear PCM.

/// Added to the magnitude before the exponent lookup.
pub const BIAS: i32 = 0x84;
/// Largest magnitude that survives biasing without leaving the table range.
pub const CLIP: i32 = 32635;

/// floor(log2((|x| + BIAS) / 128)), indexed by `(|x| + BIAS) >> 7`.
pub static ULAW_EXPONENT_TABLE: [u8; 256] = [
    0, 0, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
    7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7,
];

/// Encodes one linear sample to its µ-law code.
///
/// The magnitude is taken in `i32`, so `i16::MIN` saturates like any other
/// out-of-range value instead of wrapping back to a negative index.
pub fn linear_to_ulaw(pcm_val: i16) -> u8 {
    let sample = i32::from(pcm_val);
    let sign: u8 = if sample < 0 { 0x80 } else { 0 };
    let biased = sample.abs().min(CLIP) + BIAS;

    // CLIP + BIAS = 32767, so the index never exceeds 255.
    let exponent = ULAW_EXPONENT_TABLE[(biased >> 7) as usize];
    let mantissa = ((biased >> (i32::from(exponent) + 3)) & 0x0F) as u8;
    !(sign | (exponent << 4) | mantissa)
}

/// Encodes a little-endian 16-bit PCM byte stream, one output byte per sample.
/// A trailing odd byte is ignored.
pub fn encode_pcm16le(payload: &[u8]) -> Vec<u8> {
    payload
        .chunks_exact(2)
        .map(|pair| linear_to_ulaw(i16::from_le_bytes([pair[0], pair[1]])))
        .collect()
}
