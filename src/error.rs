use thiserror::Error;

/// Errors surfaced by compression and decompression operations.
///
/// Every variant aborts the current call; no partial output is ever
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The stream does not begin with the expected 32-bit format tag.
    /// `found` is `None` when the stream is too short to hold one.
    #[error("expected tree-header stream tag, found {found:?}")]
    InvalidFormat { found: Option<u32> },

    /// The serialized code tree ended before its structure was complete,
    /// or a leaf carried a symbol outside the alphabet.
    #[error("compressed stream header ends mid-tree")]
    MalformedHeader,

    /// The payload ended before the end-of-stream marker was decoded.
    #[error("compressed payload is truncated")]
    TruncatedStream,

    /// No code is assigned to a symbol observed while encoding.
    #[error("no code assigned to symbol {0}")]
    MissingCode(u16),
}
