//! Error types for the codec and the reconciliation engine
//!
//! Malformed wire input is always recoverable: the caller discards the
//! stream and requests retransmission or a resync. Nothing in here should
//! ever abort the process.

use thiserror::Error;

/// Canonical control events forwarded to the external protocol state
/// machine. The core never drives the state machine itself; it only maps
/// its outcomes onto this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Unit of work completed; proceed.
    Success,
    /// Transient failure (storage hiccup etc.); retry the same work later.
    TempFail,
    /// Structural failure; abandon and trigger a full resynchronization.
    HardFail,
    /// The work invalidated itself (e.g. sync-key reset); re-plan and
    /// reissue the command from scratch.
    Reprocess,
}

/// Decoding failures. Every variant is distinct so the transport layer can
/// decide between re-requesting the stream and hard-failing the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown code page 0x{0:02X}")]
    UnknownCodePage(u8),

    #[error("END token with no open element")]
    UnbalancedEnd,

    #[error("unknown token 0x{code:02X} on code page {page}")]
    UnknownToken { page: u8, code: u8 },

    #[error("stream ended inside an incomplete document")]
    TruncatedStream,

    #[error("unsupported global token 0x{0:02X}")]
    UnsupportedGlobalToken(u8),

    #[error("token 0x{code:02X} on code page {page} carries attributes")]
    AttributesUnsupported { page: u8, code: u8 },

    #[error("unsupported character set 0x{0:X}, only UTF-8 is accepted")]
    UnsupportedCharset(u32),

    #[error("stream declares a string table, which MS-ASWBXML does not use")]
    StringTablePresent,

    #[error("multi-byte integer exceeds 32 bits")]
    OversizedInteger,

    #[error("inline string is not valid UTF-8")]
    InvalidUtf8,

    #[error("peel-off store error: {0}")]
    Store(String),
}

/// Encoding failures: the document tree references names the token tables
/// do not carry, or a peeled-off payload cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("no code page for namespace {0:?}")]
    UnknownNamespace(String),

    #[error("element {name:?} is not in the {namespace:?} token table")]
    UnknownElement { namespace: String, name: String },

    #[error("element carries body reference {0:?} but no peel-off store was supplied")]
    MissingStore(String),

    #[error("element {0:?} has both a body reference and inline children")]
    AmbiguousContent(String),

    #[error("peel-off store error: {0}")]
    Store(String),
}

/// Reconciliation failures. These only occur before or outside the per-op
/// loop; per-op outcomes are ordinary control flow, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// The decoded delta is structurally impossible. Detected before the
    /// loop starts; partial application of a corrupt delta is worse than
    /// rejecting it and resyncing.
    #[error("malformed delta: {0}")]
    MalformedDelta(String),

    /// The pending queue snapshot was not strictly ascending by ordinal.
    #[error("pending queue ordinal {0} duplicated or out of order")]
    OrdinalConflict(i64),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ReconcileError {
    /// How the external state machine should react to this error.
    pub fn control_event(&self) -> ControlEvent {
        match self {
            ReconcileError::MalformedDelta(_) => ControlEvent::HardFail,
            ReconcileError::OrdinalConflict(_) => ControlEvent::HardFail,
            ReconcileError::Storage(_) => ControlEvent::TempFail,
        }
    }
}
