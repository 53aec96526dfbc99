pub mod chunk;
pub mod header;

pub use chunk::{data_payload, data_payload_start, find_marker, locate_chunk, DATA_TAG};
pub use header::{ulaw_header, ULAW_HEADER_LEN};
