//! Wire-format constants and decoding limits.
//!
//! These values are frozen by the legacy conversation-index format; changing
//! any of them breaks bit compatibility with existing tokens.

/// Minimum length of a token string, in characters, before any decoding.
///
/// This is a coarse pre-check: the threshold is the minimum *byte* length of
/// a decoded header, compared against the Base64 *character* count. Legacy
/// producers applied exactly this check, so it is kept as-is rather than
/// replaced with a Base64-aware bound.
pub const MIN_TOKEN_LEN: usize = 22;

/// Length of the timestamp region: the top 6 of 8 big-endian tick bytes.
pub const TIMESTAMP_LEN: usize = 6;

/// Length of the thread identifier region (a raw UUID).
pub const IDENTIFIER_LEN: usize = 16;

/// Decoded length of the fixed header: timestamp plus identifier.
pub const HEADER_LEN: usize = TIMESTAMP_LEN + IDENTIFIER_LEN;

/// Encoded length of one child block.
pub const CHILD_BLOCK_LEN: usize = 5;

/// Maximum number of child blocks consumed from a single token.
///
/// A safety cap against malformed or hostile input, not a protocol limit;
/// a real conversation never comes close.
pub const MAX_CHILD_BLOCKS: usize = 500;
