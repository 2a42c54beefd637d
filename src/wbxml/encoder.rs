//! WBXML encoder
//!
//! Inverse traversal of the document tree. Emits `SWITCH_PAGE` only when
//! the next element's namespace differs from the active page, and picks
//! the one-byte empty-element form for childless elements, so output from
//! a decode/encode round trip is byte-identical to the input.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::error;

use super::codepages::{self, TokenPolicy};
use super::decoder::PeelOffStore;
use super::dom::{DocNode, Element, BODY_REF_ATTR};
use super::{CHARSET_UTF8, END, OPAQUE, PUBLIC_ID, STR_I, SWITCH_PAGE, TAG_HAS_CONTENT, VERSION};
use crate::error::EncodeError;

/// Encode a document tree into a complete WBXML message, preamble
/// included. Fails if the tree names an element the token tables do not
/// carry, or holds a peeled-off body reference with no store to resolve
/// it.
pub fn encode(root: &Element) -> Result<Vec<u8>, EncodeError> {
    Encoder::new().encode(root)
}

/// Encoder with optional peel-off resolution.
#[derive(Default)]
pub struct Encoder<'s> {
    store: Option<&'s mut dyn PeelOffStore>,
}

impl<'s> Encoder<'s> {
    pub fn new() -> Self {
        Self { store: None }
    }

    pub fn with_store(store: &'s mut dyn PeelOffStore) -> Self {
        Self { store: Some(store) }
    }

    pub fn encode(&mut self, root: &Element) -> Result<Vec<u8>, EncodeError> {
        let mut out = vec![VERSION, PUBLIC_ID, CHARSET_UTF8 as u8, 0x00];
        let mut current_page = 0u8;
        self.emit_element(&mut out, root, &mut current_page)?;
        Ok(out)
    }

    fn emit_element(
        &mut self,
        out: &mut Vec<u8>,
        element: &Element,
        current_page: &mut u8,
    ) -> Result<(), EncodeError> {
        let page = codepages::page_for_namespace(&element.namespace)
            .ok_or_else(|| EncodeError::UnknownNamespace(element.namespace.clone()))?;
        if page.index != *current_page {
            out.push(SWITCH_PAGE);
            out.push(page.index);
            *current_page = page.index;
        }

        let def = page.token_by_name(&element.name).ok_or_else(|| {
            EncodeError::UnknownElement {
                namespace: element.namespace.clone(),
                name: element.name.clone(),
            }
        })?;

        let body_ref = element.attribute(BODY_REF_ATTR);
        if body_ref.is_some() && !element.children.is_empty() {
            // A stored payload and inline children cannot both be the
            // element's content; refuse rather than drop either.
            return Err(EncodeError::AmbiguousContent(element.name.clone()));
        }
        let has_content = body_ref.is_some() || !element.children.is_empty();
        if has_content {
            out.push(def.code | TAG_HAS_CONTENT);
        } else {
            out.push(def.code);
            return Ok(());
        }

        if let Some(body_ref) = body_ref {
            let store = self
                .store
                .as_mut()
                .ok_or_else(|| EncodeError::MissingStore(body_ref.to_string()))?;
            let payload = store.load(body_ref).map_err(EncodeError::Store)?;
            out.push(OPAQUE);
            emit_mb_u32(out, payload.len() as u32);
            out.extend_from_slice(&payload);
        } else {
            for child in &element.children {
                match child {
                    DocNode::Element(el) => {
                        self.emit_element(out, el, current_page)?
                    }
                    DocNode::Text(text) => emit_text(out, def.policy, text),
                    DocNode::Opaque { data, .. } => {
                        // Raw bytes regardless of the base64 tag; the tag
                        // only governs the text-domain view.
                        out.push(OPAQUE);
                        emit_mb_u32(out, data.len() as u32);
                        out.extend_from_slice(data);
                    }
                }
            }
        }
        out.push(END);
        Ok(())
    }
}

fn emit_text(out: &mut Vec<u8>, policy: TokenPolicy, text: &str) {
    match policy {
        TokenPolicy::OpaqueRaw => {
            out.push(OPAQUE);
            emit_mb_u32(out, text.len() as u32);
            out.extend_from_slice(text.as_bytes());
        }
        TokenPolicy::OpaqueBase64 => match BASE64.decode(text) {
            Ok(bytes) => {
                out.push(OPAQUE);
                emit_mb_u32(out, bytes.len() as u32);
                out.extend_from_slice(&bytes);
            }
            Err(_) => {
                error!(text, "text under a base64-opaque element is not valid base64");
                out.push(OPAQUE);
                emit_mb_u32(out, text.len() as u32);
                out.extend_from_slice(text.as_bytes());
            }
        },
        _ => {
            out.push(STR_I);
            out.extend_from_slice(text.as_bytes());
            out.push(0x00);
        }
    }
}

fn emit_mb_u32(out: &mut Vec<u8>, mut value: u32) {
    let mut groups = [0u8; 5];
    let mut n = 0;
    loop {
        groups[n] = (value & 0x7F) as u8;
        n += 1;
        value >>= 7;
        if value == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        let mut b = groups[i];
        if i > 0 {
            b |= 0x80;
        }
        out.push(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wbxml::decoder::decode;
    use crate::wbxml::dom::OpaqueKind;

    fn folder_sync_tree() -> Element {
        Element::new("FolderHierarchy", "FolderSync")
            .child(Element::with_text("FolderHierarchy", "Status", "1"))
            .child(Element::with_text("FolderHierarchy", "SyncKey", "2"))
    }

    #[test]
    fn test_encode_switches_page_once() {
        let bytes = encode(&folder_sync_tree()).unwrap();
        assert_eq!(
            bytes,
            vec![
                0x03, 0x01, 0x6A, 0x00, // preamble
                0x00, 0x07, // SWITCH_PAGE 7
                0x16 | 0x40, // FolderSync
                0x0C | 0x40, 0x03, b'1', 0x00, 0x01, // Status "1"
                0x12 | 0x40, 0x03, b'2', 0x00, 0x01, // SyncKey "2"
                0x01,
            ]
        );
    }

    #[test]
    fn test_encode_empty_element_form() {
        let mut sync = Element::new("AirSync", "Sync");
        sync.push(DocNode::Element(Element::new("AirSync", "GetChanges")));
        let bytes = encode(&sync).unwrap();
        // Page 0 is already active: no SWITCH_PAGE.
        assert_eq!(bytes, vec![0x03, 0x01, 0x6A, 0x00, 0x45, 0x13, 0x01]);
    }

    #[test]
    fn test_encode_unknown_names() {
        let el = Element::new("NoSuchNamespace", "Sync");
        assert_eq!(
            encode(&el),
            Err(EncodeError::UnknownNamespace("NoSuchNamespace".into()))
        );
        let el = Element::new("AirSync", "FolderSync");
        assert_eq!(
            encode(&el),
            Err(EncodeError::UnknownElement {
                namespace: "AirSync".into(),
                name: "FolderSync".into()
            })
        );
    }

    #[test]
    fn test_encode_body_ref_with_children_rejected() {
        let mut el = Element::with_text("AirSyncBase", "Data", "inline");
        el.set_attribute(BODY_REF_ATTR, "7");
        assert_eq!(
            encode(&el),
            Err(EncodeError::AmbiguousContent("Data".into()))
        );
    }

    #[test]
    fn test_encode_text_under_opaque_element() {
        let el = Element::with_text("ComposeMail", "Mime", "hi");
        let bytes = encode(&el).unwrap();
        assert_eq!(
            bytes,
            vec![0x03, 0x01, 0x6A, 0x00, 0x00, 0x15, 0x50, 0xC3, 0x02, b'h', b'i', 0x01]
        );
    }

    #[test]
    fn test_encode_text_under_base64_element() {
        // "AQI=" decodes to 0x01 0x02.
        let el = Element::with_text("Email2", "ConversationId", "AQI=");
        let bytes = encode(&el).unwrap();
        assert_eq!(
            bytes,
            vec![0x03, 0x01, 0x6A, 0x00, 0x00, 0x16, 0x49, 0xC3, 0x02, 0x01, 0x02, 0x01]
        );
        // Invalid base64 falls back to the raw bytes.
        let el = Element::with_text("Email2", "ConversationId", "not base64!");
        let bytes = encode(&el).unwrap();
        assert_eq!(&bytes[9..20], b"not base64!");
    }

    #[test]
    fn test_mb_u32_encoding() {
        let mut out = Vec::new();
        emit_mb_u32(&mut out, 0);
        assert_eq!(out, vec![0x00]);
        out.clear();
        emit_mb_u32(&mut out, 0x7F);
        assert_eq!(out, vec![0x7F]);
        out.clear();
        emit_mb_u32(&mut out, 200);
        assert_eq!(out, vec![0x81, 0x48]);
        out.clear();
        emit_mb_u32(&mut out, 0x4000);
        assert_eq!(out, vec![0x81, 0x80, 0x00]);
    }

    #[test]
    fn test_tree_round_trip() {
        let mut mime = Element::new("ComposeMail", "Mime");
        mime.push(DocNode::Opaque { data: b"raw bytes".to_vec(), kind: OpaqueKind::Raw });
        let tree = Element::new("ComposeMail", "SendMail")
            .child(Element::with_text("ComposeMail", "ClientId", "c-1"))
            .child(Element::with_text("ComposeMail", "SaveInSentItems", ""))
            .child(mime);
        let decoded = decode(&encode(&tree).unwrap()).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn test_bytes_round_trip_with_page_switches() {
        // Sync > Collections > Collection > {CollectionId, ApplicationData
        // > airsyncbase:Body > Data} — exercises 0 -> 17 -> 0 switching.
        let bytes: Vec<u8> = vec![
            0x03, 0x01, 0x6A, 0x00,
            0x45, // Sync
            0x5C, // Collections
            0x4F, // Collection
            0x52, 0x03, b'5', 0x00, 0x01, // CollectionId "5"
            0x5D, // ApplicationData
            0x00, 0x11, // SWITCH_PAGE 17
            0x4A, // Body
            0x4B, 0x03, b'h', b'i', 0x00, 0x01, // Data "hi" (inline string)
            0x01, // /Body
            0x01, // /ApplicationData (END is page-independent)
            0x01, 0x01, 0x01,
        ];
        let tree = decode(&bytes).unwrap();
        assert_eq!(encode(&tree).unwrap(), bytes);
    }

    #[test]
    fn test_bytes_round_trip_opaque() {
        let bytes: Vec<u8> = vec![
            0x03, 0x01, 0x6A, 0x00,
            0x00, 0x16, // page 22 Email2
            0x49, // ConversationId
            0xC3, 0x03, 0xDE, 0xAD, 0x99,
            0x01,
        ];
        let tree = decode(&bytes).unwrap();
        assert_eq!(encode(&tree).unwrap(), bytes);
    }
}
