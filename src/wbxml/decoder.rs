//! WBXML decoder
//!
//! Streams the binary input once, front to back, maintaining the active
//! code page and an element stack. Malformed input never panics; every
//! failure mode is a distinct [`DecodeError`] so the transport layer can
//! decide between retransmission and a hard session failure.

use tracing::{debug, warn};

use super::codepages::{self, CodePage, TokenPolicy};
use super::dom::{DocNode, Element, OpaqueKind, BODY_REF_ATTR};
use super::{CHARSET_UTF8, END, OPAQUE, STR_I, SWITCH_PAGE, TAG_CODE_MASK, TAG_HAS_ATTRIBUTES, TAG_HAS_CONTENT, VERSION};
use crate::error::DecodeError;

/// Out-of-line storage for oversized payloads (message bodies,
/// attachment data). Implementations typically write to a file or blob
/// store and hand back a reference the model layer understands.
pub trait PeelOffStore {
    /// Store one payload; the returned reference is recorded on the
    /// element as its `body-ref` attribute.
    fn store(&mut self, namespace: &str, element: &str, payload: &[u8]) -> Result<String, String>;

    /// Resolve a previously stored payload for re-encoding.
    fn load(&self, body_ref: &str) -> Result<Vec<u8>, String>;
}

/// Decode a complete WBXML message (including its four-field preamble)
/// into a document tree. Peel-off payloads stay inline; use [`Decoder`]
/// with a [`PeelOffStore`] to divert them.
pub fn decode(bytes: &[u8]) -> Result<Element, DecodeError> {
    Decoder::new().decode(bytes)
}

/// Decoder with optional peel-off diversion.
#[derive(Default)]
pub struct Decoder<'s> {
    store: Option<&'s mut dyn PeelOffStore>,
}

impl<'s> Decoder<'s> {
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Divert `PeelOff`-policy payloads into `store` instead of holding
    /// them in the tree. Affected elements carry a `body-ref` attribute
    /// with the store's reference.
    pub fn with_store(store: &'s mut dyn PeelOffStore) -> Self {
        Self { store: Some(store) }
    }

    pub fn decode(&mut self, bytes: &[u8]) -> Result<Element, DecodeError> {
        let mut r = Reader::new(bytes);
        self.read_preamble(&mut r)?;

        let mut page: &'static CodePage =
            codepages::page(0).expect("page 0 exists");
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        while let Some(byte) = r.peek() {
            r.next()?;
            match byte {
                SWITCH_PAGE => {
                    let index = r.next()?;
                    page = codepages::page(index)
                        .ok_or(DecodeError::UnknownCodePage(index))?;
                }
                END => {
                    let done = stack.pop().ok_or(DecodeError::UnbalancedEnd)?;
                    attach(done, &mut stack, &mut root)?;
                }
                STR_I => {
                    let text = r.cstring()?;
                    let parent =
                        stack.last_mut().ok_or(DecodeError::UnbalancedEnd)?;
                    parent.push(DocNode::Text(text));
                }
                OPAQUE => {
                    let len = r.mb_u32()? as usize;
                    let data = r.take(len)?;
                    let parent =
                        stack.last_mut().ok_or(DecodeError::UnbalancedEnd)?;
                    self.attach_opaque(parent, data)?;
                }
                b if b & TAG_CODE_MASK < 0x05 => {
                    // ENTITY, LITERAL*, EXT_*, PI, STR_T: unused by
                    // MS-ASWBXML, and skipping them would desynchronize
                    // the stream.
                    return Err(DecodeError::UnsupportedGlobalToken(b));
                }
                b => {
                    let code = b & TAG_CODE_MASK;
                    if b & TAG_HAS_ATTRIBUTES != 0 {
                        return Err(DecodeError::AttributesUnsupported {
                            page: page.index,
                            code,
                        });
                    }
                    let def = page.token_by_code(code).ok_or(
                        DecodeError::UnknownToken { page: page.index, code },
                    )?;
                    let element = Element::new(page.namespace, def.name);
                    if b & TAG_HAS_CONTENT != 0 {
                        stack.push(element);
                    } else {
                        attach(element, &mut stack, &mut root)?;
                    }
                }
            }
        }

        if !stack.is_empty() {
            return Err(DecodeError::TruncatedStream);
        }
        let root = root.ok_or(DecodeError::TruncatedStream)?;
        debug!(root = %root.name, namespace = %root.namespace, "decoded wbxml document");
        Ok(root)
    }

    fn read_preamble(&self, r: &mut Reader) -> Result<(), DecodeError> {
        let version = r.next()?;
        if version != VERSION {
            // Tolerated; servers have been seen announcing other minors.
            warn!(version, "unexpected wbxml version");
        }
        let _public_id = r.mb_u32()?;
        let charset = r.mb_u32()?;
        if charset != CHARSET_UTF8 {
            return Err(DecodeError::UnsupportedCharset(charset));
        }
        let string_table_len = r.mb_u32()?;
        if string_table_len != 0 {
            return Err(DecodeError::StringTablePresent);
        }
        Ok(())
    }

    fn attach_opaque(
        &mut self,
        parent: &mut Element,
        data: &[u8],
    ) -> Result<(), DecodeError> {
        // Policy comes from the parent's own token table, not the page
        // that happens to be active when the opaque run arrives.
        let policy = codepages::page_for_namespace(&parent.namespace)
            .and_then(|p| p.token_by_name(&parent.name))
            .map(|t| t.policy)
            .unwrap_or(TokenPolicy::Normal);

        match policy {
            TokenPolicy::PeelOff => {
                if let Some(store) = self.store.as_mut() {
                    let body_ref = store
                        .store(&parent.namespace, &parent.name, data)
                        .map_err(DecodeError::Store)?;
                    debug!(
                        element = %parent.name,
                        body_ref = %body_ref,
                        bytes = data.len(),
                        "peeled off opaque payload"
                    );
                    parent.set_attribute(BODY_REF_ATTR, &body_ref);
                } else {
                    parent.push(DocNode::Opaque {
                        data: data.to_vec(),
                        kind: OpaqueKind::Raw,
                    });
                }
            }
            TokenPolicy::OpaqueBase64 => parent.push(DocNode::Opaque {
                data: data.to_vec(),
                kind: OpaqueKind::Base64,
            }),
            _ => parent.push(DocNode::Opaque {
                data: data.to_vec(),
                kind: OpaqueKind::Raw,
            }),
        }
        Ok(())
    }
}

fn attach(
    element: Element,
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
) -> Result<(), DecodeError> {
    if let Some(parent) = stack.last_mut() {
        parent.push(DocNode::Element(element));
    } else if root.is_none() {
        *root = Some(element);
    } else {
        // A second top-level element; one document per stream.
        return Err(DecodeError::UnbalancedEnd);
    }
    Ok(())
}

/// Forward-only byte reader with the WBXML primitive readings.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<u8, DecodeError> {
        let b = *self.buf.get(self.pos).ok_or(DecodeError::TruncatedStream)?;
        self.pos += 1;
        Ok(b)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        if self.buf.len() - self.pos < n {
            return Err(DecodeError::TruncatedStream);
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// WBXML multi-byte unsigned integer: 7-bit groups, high bit set on
    /// all but the last byte.
    fn mb_u32(&mut self) -> Result<u32, DecodeError> {
        let mut value: u32 = 0;
        for _ in 0..5 {
            let b = self.next()?;
            if value > u32::MAX >> 7 {
                return Err(DecodeError::OversizedInteger);
            }
            value = (value << 7) | u32::from(b & 0x7F);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DecodeError::OversizedInteger)
    }

    /// Inline null-terminated UTF-8 string.
    fn cstring(&mut self) -> Result<String, DecodeError> {
        let start = self.pos;
        loop {
            match self.buf.get(self.pos) {
                Some(0) => break,
                Some(_) => self.pos += 1,
                None => return Err(DecodeError::TruncatedStream),
            }
        }
        let raw = &self.buf[start..self.pos];
        self.pos += 1; // consume the terminator
        String::from_utf8(raw.to_vec()).map_err(|_| DecodeError::InvalidUtf8)
    }
}
