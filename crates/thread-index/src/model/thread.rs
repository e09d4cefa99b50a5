//! Conversation threads: the aggregate behind a Thread-Index header.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec;
use crate::model::block::ChildBlock;
use crate::model::id::ThreadId;

/// A conversation thread: header timestamp, identifier, out-of-band topic,
/// and the ordered child blocks recorded for each reply.
///
/// Threads are append-only: a new child block is always pushed to the end,
/// never spliced or reordered. The wire token is recomputed from current
/// state on demand, not cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    date_unix_nano: i64,
    identifier: ThreadId,
    topic: String,
    child_blocks: Vec<ChildBlock>,
}

impl Thread {
    /// Starts a fresh conversation: timestamp now, identifier derived from
    /// the topic, no child blocks.
    pub fn new(topic: &str) -> Self {
        Self {
            date_unix_nano: now_unix_nanos(),
            identifier: ThreadId::from_topic(topic),
            topic: topic.to_string(),
            child_blocks: Vec::new(),
        }
    }

    /// Reconstructs a thread from explicit parts.
    ///
    /// For cloning or rebuilding a thread whose values are already known;
    /// performs no validation and cannot fail.
    pub fn from_parts(
        date_unix_nano: i64,
        identifier: ThreadId,
        topic: &str,
        child_blocks: Vec<ChildBlock>,
    ) -> Self {
        Self {
            date_unix_nano,
            identifier,
            topic: topic.to_string(),
            child_blocks,
        }
    }

    /// Header creation time, nanoseconds since the Unix epoch.
    pub fn date_unix_nano(&self) -> i64 {
        self.date_unix_nano
    }

    /// The thread identifier.
    pub fn identifier(&self) -> ThreadId {
        self.identifier
    }

    /// The out-of-band topic. Empty for threads parsed without one.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The recorded child blocks, in append order.
    pub fn child_blocks(&self) -> &[ChildBlock] {
        &self.child_blocks
    }

    /// Records a reply arriving now: appends a child block holding the
    /// elapsed time since the header timestamp.
    ///
    /// The elapsed time saturates at the `i64` bounds: a token whose
    /// wrapped timestamp parsed to an extreme value still accepts replies.
    pub fn add_child_block(&mut self) {
        let delta_ns = now_unix_nanos().saturating_sub(self.date_unix_nano);
        self.child_blocks.push(ChildBlock::from_delta(delta_ns));
    }

    /// The Base64 wire token, conventionally carried in a Thread-Index
    /// header.
    pub fn to_token(&self) -> String {
        codec::encode_thread(self)
    }

    /// Base64 of the raw identifier bytes, used as a correlation header
    /// alongside the token.
    pub fn reference(&self) -> String {
        self.identifier.to_base64()
    }
}

impl fmt::Display for Thread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

/// Current system time as Unix nanoseconds.
fn now_unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as i64
}
