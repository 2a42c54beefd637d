//! WBXML binary codec
//!
//! Lossless translation between the wire's tokenized binary form and an
//! in-memory document tree, across 25 independently defined namespaces
//! that may be switched mid-stream. The codec is stateless and pure given
//! its input bytes; it performs no I/O and is safe to run concurrently
//! for independent streams.

pub mod codepages;
pub mod decoder;
pub mod dom;
pub mod encoder;

pub use codepages::{CodePage, TokenDef, TokenPolicy};
pub use decoder::{decode, Decoder, PeelOffStore};
pub use dom::{DocNode, Element, OpaqueKind, BODY_REF_ATTR};
pub use encoder::{encode, Encoder};

/// WBXML version 1.3.
pub(crate) const VERSION: u8 = 0x03;
/// Unknown public identifier.
pub(crate) const PUBLIC_ID: u8 = 0x01;
/// IANA MIBenum for UTF-8, the only charset the protocol uses.
pub(crate) const CHARSET_UTF8: u32 = 0x6A;

// Global control tokens. Only four are live in MS-ASWBXML; everything
// else in the global space is rejected rather than skipped, since a
// silent skip would corrupt subsequent page-relative offsets.
pub(crate) const SWITCH_PAGE: u8 = 0x00;
pub(crate) const END: u8 = 0x01;
pub(crate) const STR_I: u8 = 0x03;
pub(crate) const OPAQUE: u8 = 0xC3;

/// Mask selecting the page-relative tag code from a token byte.
pub(crate) const TAG_CODE_MASK: u8 = 0x3F;
/// Token byte bit: element has content (children follow, then END).
pub(crate) const TAG_HAS_CONTENT: u8 = 0x40;
/// Token byte bit: element has attributes. Never used by this protocol.
pub(crate) const TAG_HAS_ATTRIBUTES: u8 = 0x80;
