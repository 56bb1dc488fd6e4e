use thiserror::Error;

/// Unified error type for the chatlink library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The token wrapper or its base64 payload is structurally invalid.
    #[error("malformed chatlink token: {0}")]
    MalformedToken(String),

    /// The binary payload ended before the variant's layout was fully read.
    #[error("truncated chatlink payload: needed {needed} byte(s) at offset {offset}")]
    TruncatedPayload { offset: usize, needed: usize },

    /// The first payload byte is not one of the defined chatlink types.
    #[error("unknown chatlink type: 0x{0:02X}")]
    UnknownDiscriminant(u8),

    /// A strict decode was given an expected type that disagrees with the payload.
    #[error("unexpected chatlink type: expected 0x{expected:02X}, got 0x{actual:02X}")]
    DiscriminantMismatch { expected: u8, actual: u8 },

    /// The variant has no defined wire format and cannot be encoded.
    #[error("chatlink type 0x{0:02X} cannot be encoded")]
    UnsupportedEncodeVariant(u8),

    /// An account id string did not parse as a UUID on encode.
    #[error("invalid account id: {0}")]
    InvalidAccountId(String),
}

/// A specialized `Result` type for chatlink operations.
pub type Result<T> = std::result::Result<T, Error>;
