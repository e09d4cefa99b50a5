//! Thread wire codec: the Base64 token entry points.
//!
//! Token layout before Base64: 6 big-endian timestamp bytes (the top 48
//! bits of the 64-bit tick value), 16 identifier bytes, then 5 bytes per
//! child block in append order.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::codec::child_block::{decode_child_block, encode_child_block};
use crate::error::DecodeError;
use crate::limits::{
    CHILD_BLOCK_LEN, HEADER_LEN, IDENTIFIER_LEN, MAX_CHILD_BLOCKS, MIN_TOKEN_LEN, TIMESTAMP_LEN,
};
use crate::model::{Thread, ThreadId};
use crate::util::filetime::{ticks_to_unix_nanos, unix_nanos_to_ticks};

/// Encodes a thread into its raw (pre-Base64) wire bytes.
///
/// The low 16 bits of the tick value drop with the two trailing timestamp
/// bytes; blocks whose delta quantized to zero contribute nothing.
pub fn encode_thread_bytes(thread: &Thread) -> Vec<u8> {
    let ticks = unix_nanos_to_ticks(thread.date_unix_nano());
    let tick_bytes = (ticks as u64).to_be_bytes();

    let mut buf = Vec::with_capacity(HEADER_LEN + thread.child_blocks().len() * CHILD_BLOCK_LEN);
    buf.extend_from_slice(&tick_bytes[..TIMESTAMP_LEN]);
    buf.extend_from_slice(thread.identifier().as_bytes());
    for block in thread.child_blocks() {
        buf.extend_from_slice(encode_child_block(block).as_bytes());
    }
    buf
}

/// Encodes a thread into its Base64 wire token.
pub fn encode_thread(thread: &Thread) -> String {
    BASE64.encode(encode_thread_bytes(thread))
}

/// Decodes a wire token into a thread.
///
/// `topic` is attached out of band: it is never part of the token and does
/// not affect the recovered binary fields. Child blocks are consumed in
/// exact 5-byte chunks until fewer than 5 bytes remain (a trailing partial
/// chunk is ignored), capped at 500 blocks. On any failure the caller
/// receives the error and no partial thread.
pub fn decode_thread(token: &str, topic: &str) -> Result<Thread, DecodeError> {
    // coarse pre-check: character count against the decoded header's byte
    // length, kept exactly as legacy producers apply it
    if token.len() < MIN_TOKEN_LEN {
        return Err(DecodeError::TokenTooShort { len: token.len() });
    }

    let bytes = BASE64.decode(token)?;
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::IdentifierTruncated { len: bytes.len() });
    }

    // first 6 bytes, zero-extended to the full 64-bit tick value
    let mut tick_bytes = [0u8; 8];
    tick_bytes[..TIMESTAMP_LEN].copy_from_slice(&bytes[..TIMESTAMP_LEN]);
    let date_unix_nano = ticks_to_unix_nanos(u64::from_be_bytes(tick_bytes)) as i64;

    let mut id_bytes = [0u8; IDENTIFIER_LEN];
    id_bytes.copy_from_slice(&bytes[TIMESTAMP_LEN..HEADER_LEN]);

    let mut child_blocks = Vec::new();
    for chunk in bytes[HEADER_LEN..]
        .chunks_exact(CHILD_BLOCK_LEN)
        .take(MAX_CHILD_BLOCKS)
    {
        child_blocks.push(decode_child_block(chunk)?);
    }

    Ok(Thread::from_parts(
        date_unix_nano,
        ThreadId::from_bytes(id_bytes),
        topic,
        child_blocks,
    ))
}
