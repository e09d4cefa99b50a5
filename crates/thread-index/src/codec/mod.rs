//! Wire encoding/decoding for the conversation index.
//!
//! `thread` owns the Base64 token entry points; `child_block` packs and
//! unpacks the per-reply 5-byte records.

pub mod child_block;
pub mod thread;

pub use child_block::{decode_child_block, encode_child_block, WireChildBlock};
pub use thread::{decode_thread, encode_thread, encode_thread_bytes};
