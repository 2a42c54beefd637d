//! Pending operations
//!
//! A pending operation is a locally queued, not-yet-acknowledged client
//! mutation. The queue itself is persisted by an external layer; the core
//! only defines the record and the rules for mutating it during a
//! reconciliation pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a pending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingState {
    /// Queued, not yet sent.
    New,
    /// In flight to the server. Must not be mutated locally; a conflicting
    /// delta is resolved when this operation's own response arrives.
    Dispatched,
    /// The server rejected it; kept for inspection/retry.
    Failed,
    /// Superseded; kept only until the persistence layer reaps it.
    Deleted,
}

/// What the operation asks the server to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingKind {
    FolderCreate,
    FolderUpdate,
    FolderDelete,
    ItemCreate,
    ItemUpdate,
    ItemDelete,
    ItemMove,
}

/// Identifier-bearing fields a rewrite can target. Dispatch is explicit
/// and compile-time; there is no set-field-by-name anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefField {
    ServerId,
    ParentId,
    DestParentId,
}

/// The fields that hold parent/container references.
pub const PARENT_REF_FIELDS: [RefField; 2] = [RefField::ParentId, RefField::DestParentId];

/// One queued client mutation.
///
/// `id` is the creation ordinal: the queue is always processed in
/// ascending `id` order, and ids are unique per account (enforced by the
/// reconciler, not assumed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOp {
    pub id: i64,
    pub account_id: String,
    pub state: PendingState,
    pub kind: PendingKind,
    /// Correlation token carried in the outgoing command so the server
    /// acknowledgment can be matched back to this operation.
    pub token: String,
    /// Client-generated temporary id for created items.
    pub client_id: Option<String>,
    /// Server-assigned id of the item this operation targets.
    pub server_id: Option<String>,
    /// Container the target lives in.
    pub parent_id: Option<String>,
    /// Destination container for moves.
    pub dest_parent_id: Option<String>,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PendingOp {
    pub fn new(id: i64, account_id: &str, kind: PendingKind) -> Self {
        Self {
            id,
            account_id: account_id.to_string(),
            state: PendingState::New,
            kind,
            token: Uuid::new_v4().to_string(),
            client_id: None,
            server_id: None,
            parent_id: None,
            dest_parent_id: None,
            display_name: None,
            created_at: Utc::now(),
        }
    }

    pub fn ref_field(&self, field: RefField) -> Option<&str> {
        match field {
            RefField::ServerId => self.server_id.as_deref(),
            RefField::ParentId => self.parent_id.as_deref(),
            RefField::DestParentId => self.dest_parent_id.as_deref(),
        }
    }

    pub fn ref_field_mut(&mut self, field: RefField) -> &mut Option<String> {
        match field {
            RefField::ServerId => &mut self.server_id,
            RefField::ParentId => &mut self.parent_id,
            RefField::DestParentId => &mut self.dest_parent_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_op_defaults() {
        let op = PendingOp::new(1, "acct-1", PendingKind::FolderCreate);
        assert_eq!(op.state, PendingState::New);
        assert!(!op.token.is_empty());
        assert!(op.server_id.is_none());
    }

    #[test]
    fn test_ref_field_dispatch() {
        let mut op = PendingOp::new(1, "acct-1", PendingKind::ItemMove);
        *op.ref_field_mut(RefField::ParentId) = Some("f-1".into());
        *op.ref_field_mut(RefField::DestParentId) = Some("f-2".into());
        assert_eq!(op.ref_field(RefField::ParentId), Some("f-1"));
        assert_eq!(op.ref_field(RefField::DestParentId), Some("f-2"));
        assert_eq!(op.ref_field(RefField::ServerId), None);
    }

    #[test]
    fn test_op_serialization_round_trip() {
        let mut op = PendingOp::new(7, "acct-1", PendingKind::ItemCreate);
        op.client_id = Some("tmp-1".into());
        let json = serde_json::to_string(&op).unwrap();
        let back: PendingOp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}
