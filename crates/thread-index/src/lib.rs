//! Outlook/MAPI conversation index codec.
//!
//! This crate encodes and decodes the binary value behind the `Thread-Index`
//! email header: a Base64-carried token that groups replies into a
//! conversation thread and records, for each reply, a quantized time offset
//! from the thread's start.
//!
//! # Overview
//!
//! - **Deterministic identity**: a thread's 16-byte identifier derives from
//!   its topic, so independent senders converge on the same conversation
//! - **Compact reply history**: each reply appends a 5-byte child block
//!   holding a quantized offset from the thread's creation time
//! - **Legacy bit-exact**: tokens match the format's historical producers
//!   byte for byte, verified against captured vectors
//!
//! # Quick Start
//!
//! ```rust
//! use thread_index::{decode_thread, Thread};
//!
//! // start a conversation and render its Thread-Index header value
//! let mut thread = Thread::new("Quarterly planning");
//! let token = thread.to_token();
//!
//! // each reply appends a child block recording its offset
//! thread.add_child_block();
//!
//! // recover a thread from a wire token; the topic travels out of band
//! let parsed = decode_thread(&token, "Quarterly planning").unwrap();
//! assert_eq!(parsed.identifier(), thread.identifier());
//! assert!(parsed.child_blocks().is_empty());
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Thread, ChildBlock, ThreadId)
//! - [`codec`]: Wire encoding/decoding of tokens and child blocks
//! - [`util`]: FILETIME tick conversions
//! - [`error`]: Error types
//! - [`limits`]: Wire-format constants and decoding limits
//!
//! # Wire Format
//!
//! A token is standard Base64 (padded) over:
//! - 6 bytes: top 48 bits of the creation time, in 100ns ticks since
//!   1601-01-01, big-endian
//! - 16 bytes: thread identifier
//! - 5 bytes per child block: one flag bit, a 31-bit quantized delta field,
//!   and a random/sequence nibble pair
//!
//! # Decoding Untrusted Tokens
//!
//! The decoder never panics on malformed input:
//! - a coarse length pre-check rejects obviously short tokens
//! - child block consumption is capped at 500 blocks
//! - every failure surfaces as a recoverable [`DecodeError`]

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod util;

// Re-export commonly used types at crate root
pub use codec::{
    decode_child_block, decode_thread, encode_child_block, encode_thread, encode_thread_bytes,
    WireChildBlock,
};
pub use error::DecodeError;
pub use model::{ChildBlock, Thread, ThreadId, TOPIC_NAMESPACE};
pub use util::filetime::{ticks_to_unix_nanos, unix_nanos_to_ticks, Filetime};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
