//! Error types for the deckstring decoder.
//!
//! Every failure is terminal: decoding is pure and deterministic, so
//! retrying with the same input can never succeed. The variant itself is
//! the complete diagnostic. The decoder never logs.

/// Errors that can occur while decoding a deckstring.
///
/// The four variants form a closed taxonomy. Callers are expected to
/// match on the *kind*; the payloads (the offending version, the byte
/// offset) are there to make error messages useful, not to drive logic.
#[derive(Debug, thiserror::Error)]
pub enum DeckstringError {
    /// The input text is not valid standard (padded) base64.
    ///
    /// The inner `base64::DecodeError` says exactly what was wrong:
    /// an invalid character, a bad padding run, or an impossible length.
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),

    /// The decoded buffer is empty, or its first byte is not the
    /// required `0x00` marker.
    #[error("invalid deckstring: missing 0x00 marker byte")]
    InvalidDeckstring,

    /// The version field was something other than `1`.
    #[error("unsupported deckstring version {0} (expected 1)")]
    UnsupportedVersion(u32),

    /// A varint or raw byte was required but the buffer ran out.
    ///
    /// `offset` is the position in the decoded buffer where a byte was
    /// expected, which is always the buffer length.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEndOfInput {
        /// Byte offset at which input ran out.
        offset: usize,
    },
}
