//! Error types for conversation-index decoding.

use thiserror::Error;

/// Error while decoding a wire token or child block.
///
/// All failures are recoverable results: parsing an untrusted or legacy
/// token never panics. Encoding is infallible and has no error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The token string fails the coarse pre-decode length check.
    #[error("token length {len} is shorter than the 22 character header minimum")]
    TokenTooShort { len: usize },

    /// The token is not valid standard-alphabet Base64.
    #[error("invalid base64 in token: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decoded buffer is too short to hold the 22-byte header, so the
    /// 16-byte identifier region cannot be reconstructed.
    #[error("identifier region truncated: decoded {len} bytes, header needs 22")]
    IdentifierTruncated { len: usize },

    /// A child block was given more than the 5 bytes the format allows.
    #[error("child block length {len} outside expected range [0, 5]")]
    BlockSizeMismatch { len: usize },
}
