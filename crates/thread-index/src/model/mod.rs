//! Data model types for the conversation-index codec.
//!
//! This module contains the core types behind a Thread-Index header:
//! - Identifiers (topic-derived UUIDs)
//! - Child blocks (quantized per-reply time offsets)
//! - Threads (the aggregate a token encodes)

pub mod block;
pub mod id;
pub mod thread;

pub use block::ChildBlock;
pub use id::{ThreadId, TOPIC_NAMESPACE};
pub use thread::Thread;
