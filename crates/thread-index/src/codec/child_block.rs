//! Child block wire codec: the packed 5-byte record.
//!
//! Layout, big-endian: bit 39 is the time flag, bits 38..8 the 31-bit
//! quantized delta field, byte 4 the random/sequence nibbles.

use crate::error::DecodeError;
use crate::limits::CHILD_BLOCK_LEN;
use crate::model::block::{quantize_ticks, restore_ticks, ChildBlock};

/// Flag bit within the leading dword.
const TIME_FLAG_BIT: u32 = 0x8000_0000;

/// Wire form of one child block.
///
/// A block whose delta quantized to zero contributes nothing to the token:
/// that is the `Empty` variant, deliberately distinct from five zero bytes.
/// Decoding never produces `Empty` since real wire input always has bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireChildBlock {
    /// Zero-length encoding of a degenerate (zero-delta) block.
    Empty,
    /// The packed 5-byte record.
    Packed([u8; CHILD_BLOCK_LEN]),
}

impl WireChildBlock {
    /// The encoded bytes: none for `Empty`, exactly 5 for `Packed`.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WireChildBlock::Empty => &[],
            WireChildBlock::Packed(bytes) => bytes,
        }
    }

    /// Returns true for the zero-length encoding.
    pub fn is_empty(&self) -> bool {
        matches!(self, WireChildBlock::Empty)
    }
}

/// Encodes a child block into its wire form.
///
/// A zero `time_difference` short-circuits to [`WireChildBlock::Empty`];
/// everything else packs into 5 bytes. Out-of-nibble-range counters wrap
/// into neighboring bits, matching the legacy producer byte for byte.
pub fn encode_child_block(block: &ChildBlock) -> WireChildBlock {
    if block.time_difference == 0 {
        return WireChildBlock::Empty;
    }

    let ticks = (block.time_difference / 100) as u64;
    let mut dword = quantize_ticks(block.time_flag, ticks);
    if block.time_flag {
        dword |= TIME_FLAG_BIT;
    }

    let [b0, b1, b2, b3] = dword.to_be_bytes();
    WireChildBlock::Packed([
        b0,
        b1,
        b2,
        b3,
        (block.random_num << 4) | block.sequence_count,
    ])
}

/// Decodes a child block from raw wire bytes.
///
/// Accepts any length in [0, 5]; shorter inputs are zero-padded before
/// unpacking, with no content validation. Longer input fails with
/// [`DecodeError::BlockSizeMismatch`]. The recovered `time_difference` is
/// the quantized value at the window's precision, not the pre-quantization
/// input.
pub fn decode_child_block(input: &[u8]) -> Result<ChildBlock, DecodeError> {
    if input.len() > CHILD_BLOCK_LEN {
        return Err(DecodeError::BlockSizeMismatch { len: input.len() });
    }

    let mut bytes = [0u8; CHILD_BLOCK_LEN];
    bytes[..input.len()].copy_from_slice(input);

    let dword = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let time_flag = dword & TIME_FLAG_BIT != 0;
    let field = dword & !TIME_FLAG_BIT;
    let ticks = restore_ticks(time_flag, field);

    Ok(ChildBlock {
        time_flag,
        time_difference: (ticks * 100) as i64,
        random_num: bytes[4] >> 4,
        sequence_count: bytes[4] & 0x0F,
    })
}
