//! FolderHierarchy delta delegates
//!
//! Concrete [`DeltaDelegate`] implementations for the two folder-related
//! server responses: the acknowledgment of a client `FolderCreate`, and a
//! `FolderSync` push. Both consume the decoded response tree straight
//! from the codec.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::pending::{PendingOp, PendingState, RefField};
use super::reconciler::{DeltaDelegate, DeltaDisposition, DomainModel};
use super::rewrite::{Rewrite, RewriteSet};
use crate::error::ReconcileError;
use crate::wbxml::Element;

const NS: &str = "FolderHierarchy";

/// Command completed.
pub const STATUS_OK: u32 = 1;
/// The folder hierarchy sync key is no longer valid; the client must
/// discard its folder state and resync from scratch.
pub const STATUS_SYNC_KEY_INVALID: u32 = 9;

/// ActiveSync folder type for a user-created mail folder.
const USER_FOLDER_TYPE: u32 = 12;
/// ParentId of top-level folders.
const ROOT_PARENT_ID: &str = "0";

/// One folder as the server describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub server_id: String,
    pub parent_id: String,
    pub display_name: String,
    pub folder_type: u32,
}

/// Folder-side view of the local model required by these delegates.
pub trait FolderModel: DomainModel {
    fn upsert_folder(&mut self, account_id: &str, folder: &FolderRecord)
        -> Result<(), ReconcileError>;
    fn delete_folder(&mut self, account_id: &str, server_id: &str) -> Result<(), ReconcileError>;
}

fn require_text(el: &Element, name: &str) -> Result<String, ReconcileError> {
    match el.child_text(name) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ReconcileError::MalformedDelta(format!("{} missing {}", el.name, name))),
    }
}

fn require_int(el: &Element, name: &str) -> Result<u32, ReconcileError> {
    require_text(el, name)?.trim().parse().map_err(|_| {
        ReconcileError::MalformedDelta(format!("{} has non-numeric {}", el.name, name))
    })
}

impl FolderRecord {
    fn from_change(el: &Element) -> Result<Self, ReconcileError> {
        Ok(Self {
            server_id: require_text(el, "ServerId")?,
            parent_id: require_text(el, "ParentId")?,
            display_name: require_text(el, "DisplayName")?,
            folder_type: require_int(el, "Type")?,
        })
    }
}

/// Acknowledgment of a `FolderCreate` this client sent. On success the
/// server's permanent id supersedes the temporary one the folder was
/// queued under, for the model and for every later pending operation.
#[derive(Debug)]
pub struct FolderCreateAck {
    token: String,
    temp_id: String,
    parent_id: String,
    display_name: String,
    status: u32,
    server_id: Option<String>,
}

impl FolderCreateAck {
    /// Bind a decoded `FolderCreate` response to the pending operation
    /// that sent the command. Structural problems surface here, before
    /// any pass begins.
    pub fn from_response(response: &Element, pending: &PendingOp) -> Result<Self, ReconcileError> {
        if response.namespace != NS || response.name != "FolderCreate" {
            return Err(ReconcileError::MalformedDelta(format!(
                "expected FolderCreate response, got {}:{}",
                response.namespace, response.name
            )));
        }
        let status = require_int(response, "Status")?;
        let server_id = if status == STATUS_OK {
            Some(require_text(response, "ServerId")?)
        } else {
            None
        };
        let temp_id = pending
            .ref_field(RefField::ServerId)
            .or(pending.client_id.as_deref())
            .ok_or_else(|| {
                ReconcileError::MalformedDelta(
                    "pending folder create has no temporary id".to_string(),
                )
            })?;
        Ok(Self {
            token: pending.token.clone(),
            temp_id: temp_id.to_string(),
            parent_id: pending
                .ref_field(RefField::ParentId)
                .unwrap_or(ROOT_PARENT_ID)
                .to_string(),
            display_name: pending.display_name.clone().unwrap_or_default(),
            status,
            server_id,
        })
    }

    pub fn status(&self) -> u32 {
        self.status
    }
}

impl<M: FolderModel> DeltaDelegate<M> for FolderCreateAck {
    fn apply_to_pending(
        &mut self,
        op: &mut PendingOp,
        _rewrites: &RewriteSet,
    ) -> Result<DeltaDisposition, ReconcileError> {
        if op.token != self.token {
            return Ok(DeltaDisposition::nothing());
        }
        match &self.server_id {
            Some(server_id) => Ok(DeltaDisposition::delete()
                .with_rewrite(Rewrite::parent_ref(&self.temp_id, server_id))),
            None => {
                warn!(op.id, status = self.status, "folder create rejected by server");
                op.state = PendingState::Failed;
                Ok(DeltaDisposition::update())
            }
        }
    }

    fn apply_to_model(&mut self, account_id: &str, model: &mut M) -> Result<(), ReconcileError> {
        let Some(server_id) = &self.server_id else {
            return Ok(());
        };
        // Re-key the placeholder folder under its permanent id. Children
        // were already re-pointed by the parent-reference rewrite.
        model.delete_folder(account_id, &self.temp_id)?;
        model.upsert_folder(
            account_id,
            &FolderRecord {
                server_id: server_id.clone(),
                parent_id: self.parent_id.clone(),
                display_name: self.display_name.clone(),
                folder_type: USER_FOLDER_TYPE,
            },
        )
    }
}

/// A server-pushed `FolderSync` delta: folder adds, renames/moves, and
/// deletes, plus the next hierarchy sync key.
#[derive(Debug)]
pub struct FolderSyncDelta {
    status: u32,
    sync_key: Option<String>,
    adds: Vec<FolderRecord>,
    updates: Vec<FolderRecord>,
    deletes: Vec<String>,
    announced_deletes: bool,
}

impl FolderSyncDelta {
    pub fn from_response(response: &Element) -> Result<Self, ReconcileError> {
        if response.namespace != NS || response.name != "FolderSync" {
            return Err(ReconcileError::MalformedDelta(format!(
                "expected FolderSync response, got {}:{}",
                response.namespace, response.name
            )));
        }
        let status = require_int(response, "Status")?;
        let mut delta = Self {
            status,
            sync_key: None,
            adds: Vec::new(),
            updates: Vec::new(),
            deletes: Vec::new(),
            announced_deletes: false,
        };
        if status != STATUS_OK {
            return Ok(delta);
        }
        delta.sync_key = Some(require_text(response, "SyncKey")?);
        if let Some(changes) = response.find("Changes") {
            for add in changes.find_all("Add") {
                delta.adds.push(FolderRecord::from_change(add)?);
            }
            for update in changes.find_all("Update") {
                delta.updates.push(FolderRecord::from_change(update)?);
            }
            for delete in changes.find_all("Delete") {
                delta.deletes.push(require_text(delete, "ServerId")?);
            }
        }
        Ok(delta)
    }

    pub fn status(&self) -> u32 {
        self.status
    }

    /// The hierarchy sync key to persist once the pass succeeds.
    pub fn sync_key(&self) -> Option<&str> {
        self.sync_key.as_deref()
    }
}

impl<M: FolderModel> DeltaDelegate<M> for FolderSyncDelta {
    fn cancels_pass(&self) -> bool {
        self.status == STATUS_SYNC_KEY_INVALID
    }

    fn apply_to_pending(
        &mut self,
        op: &mut PendingOp,
        _rewrites: &RewriteSet,
    ) -> Result<DeltaDisposition, ReconcileError> {
        let mut disposition = match op.ref_field(RefField::ServerId) {
            Some(id) if self.deletes.iter().any(|d| d == id) => DeltaDisposition::delete(),
            _ => DeltaDisposition::nothing(),
        };
        // Deletes become rewrites exactly once, at the first visited
        // operation, so every later one in the queue sees them.
        if !self.announced_deletes {
            self.announced_deletes = true;
            for deleted in &self.deletes {
                disposition.rewrites.push(Rewrite::target_deleted(deleted));
            }
        }
        Ok(disposition)
    }

    fn apply_to_model(&mut self, account_id: &str, model: &mut M) -> Result<(), ReconcileError> {
        if self.status != STATUS_OK {
            warn!(status = self.status, "folder sync failed, model left as is");
            return Ok(());
        }
        for folder in self.adds.iter().chain(&self.updates) {
            model.upsert_folder(account_id, folder)?;
        }
        for server_id in &self.deletes {
            model.delete_folder(account_id, server_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::ControlEvent;
    use crate::sync::pending::PendingKind;
    use crate::sync::reconciler::{PendingQueue, ReconcilePass};
    use crate::wbxml::decode;

    #[derive(Default)]
    struct MemQueue {
        ops: Vec<PendingOp>,
    }

    impl PendingQueue for MemQueue {
        fn query_ordered(&self, account_id: &str) -> Result<Vec<PendingOp>, ReconcileError> {
            Ok(self.ops.iter().filter(|o| o.account_id == account_id).cloned().collect())
        }
        fn persist_update(&mut self, op: &PendingOp) -> Result<(), ReconcileError> {
            *self.ops.iter_mut().find(|o| o.id == op.id).unwrap() = op.clone();
            Ok(())
        }
        fn persist_delete(&mut self, op: &PendingOp) -> Result<(), ReconcileError> {
            self.ops.retain(|o| o.id != op.id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemFolderModel {
        folders: HashMap<String, FolderRecord>,
        rewrite_calls: Vec<(String, String)>,
    }

    impl DomainModel for MemFolderModel {
        fn rewrite_parent_references(
            &mut self,
            _account_id: &str,
            match_id: &str,
            replace_id: &str,
        ) -> Result<(), ReconcileError> {
            self.rewrite_calls.push((match_id.to_string(), replace_id.to_string()));
            for folder in self.folders.values_mut() {
                if folder.parent_id == match_id {
                    folder.parent_id = replace_id.to_string();
                }
            }
            Ok(())
        }
    }

    impl FolderModel for MemFolderModel {
        fn upsert_folder(
            &mut self,
            _account_id: &str,
            folder: &FolderRecord,
        ) -> Result<(), ReconcileError> {
            self.folders.insert(folder.server_id.clone(), folder.clone());
            Ok(())
        }
        fn delete_folder(
            &mut self,
            _account_id: &str,
            server_id: &str,
        ) -> Result<(), ReconcileError> {
            self.folders.remove(server_id);
            Ok(())
        }
    }

    fn ns_el(name: &str) -> Element {
        Element::new(NS, name)
    }

    fn ns_text(name: &str, text: &str) -> Element {
        Element::with_text(NS, name, text)
    }

    fn pending_create(id: i64, temp_id: &str) -> PendingOp {
        let mut op = PendingOp::new(id, "acct-1", PendingKind::FolderCreate);
        op.server_id = Some(temp_id.to_string());
        op.parent_id = Some(ROOT_PARENT_ID.to_string());
        op.display_name = Some("Receipts".to_string());
        op
    }

    #[test]
    fn test_folder_create_ack_rekeys_folder_and_later_ops() {
        let creator = pending_create(1, "tmp-1");
        let mut later = PendingOp::new(2, "acct-1", PendingKind::ItemCreate);
        later.parent_id = Some("tmp-1".into());

        let mut queue = MemQueue::default();
        queue.ops = vec![creator.clone(), later];
        let mut model = MemFolderModel::default();
        model.folders.insert(
            "tmp-1".into(),
            FolderRecord {
                server_id: "tmp-1".into(),
                parent_id: ROOT_PARENT_ID.into(),
                display_name: "Receipts".into(),
                folder_type: USER_FOLDER_TYPE,
            },
        );

        let response = ns_el("FolderCreate")
            .child(ns_text("Status", "1"))
            .child(ns_text("SyncKey", "5"))
            .child(ns_text("ServerId", "srv-99"));
        let ack = FolderCreateAck::from_response(&response, &creator).unwrap();

        let outcome = ReconcilePass::for_command_ack(ack)
            .run("acct-1", &mut queue, &mut model)
            .unwrap();

        assert_eq!(outcome.deleted, 1);
        assert_eq!(outcome.updated, 1);
        assert!(queue.ops.iter().all(|o| o.id != 1));
        assert_eq!(queue.ops[0].parent_id.as_deref(), Some("srv-99"));
        assert!(!model.folders.contains_key("tmp-1"));
        assert_eq!(model.folders["srv-99"].display_name, "Receipts");
        assert_eq!(model.rewrite_calls.len(), 1);
    }

    #[test]
    fn test_folder_create_rejection_marks_op_failed() {
        let creator = pending_create(1, "tmp-1");
        let mut queue = MemQueue::default();
        queue.ops = vec![creator.clone()];
        let mut model = MemFolderModel::default();

        let response = ns_el("FolderCreate").child(ns_text("Status", "110"));
        let ack = FolderCreateAck::from_response(&response, &creator).unwrap();
        assert_eq!(ack.status(), 110);

        let outcome = ReconcilePass::for_command_ack(ack)
            .run("acct-1", &mut queue, &mut model)
            .unwrap();
        assert_eq!(outcome.updated, 1);
        assert_eq!(outcome.deleted, 0);
        assert_eq!(queue.ops[0].state, PendingState::Failed);
        assert!(model.rewrite_calls.is_empty());
    }

    #[test]
    fn test_folder_create_malformed_responses() {
        let creator = pending_create(1, "tmp-1");
        // No Status at all.
        let err = FolderCreateAck::from_response(&ns_el("FolderCreate"), &creator).unwrap_err();
        assert!(matches!(err, ReconcileError::MalformedDelta(_)));
        assert_eq!(err.control_event(), ControlEvent::HardFail);
        // Success without the assigned id.
        let response = ns_el("FolderCreate").child(ns_text("Status", "1"));
        assert!(FolderCreateAck::from_response(&response, &creator).is_err());
        // Wrong element entirely.
        let response = ns_el("FolderSync").child(ns_text("Status", "1"));
        assert!(FolderCreateAck::from_response(&response, &creator).is_err());
    }

    fn folder_sync_response() -> Element {
        let add = ns_el("Add")
            .child(ns_text("ServerId", "srv-7"))
            .child(ns_text("ParentId", "0"))
            .child(ns_text("DisplayName", "Archive"))
            .child(ns_text("Type", "1"));
        let delete = ns_el("Delete").child(ns_text("ServerId", "srv-3"));
        ns_el("FolderSync")
            .child(ns_text("Status", "1"))
            .child(ns_text("SyncKey", "12"))
            .child(ns_el("Changes").child(add).child(delete))
    }

    #[test]
    fn test_folder_sync_applies_changes_and_moots_targeting_ops() {
        let mut doomed = PendingOp::new(1, "acct-1", PendingKind::ItemDelete);
        doomed.server_id = Some("srv-3".into());
        doomed.state = PendingState::Failed;
        let mut queue = MemQueue::default();
        queue.ops = vec![doomed];

        let mut model = MemFolderModel::default();
        model.folders.insert(
            "srv-3".into(),
            FolderRecord {
                server_id: "srv-3".into(),
                parent_id: "0".into(),
                display_name: "Old".into(),
                folder_type: 1,
            },
        );

        let delta = FolderSyncDelta::from_response(&folder_sync_response()).unwrap();
        assert_eq!(delta.sync_key(), Some("12"));

        let outcome = ReconcilePass::for_server_delta(delta)
            .run("acct-1", &mut queue, &mut model)
            .unwrap();

        // Failed ops are in scope for a pushed delta.
        assert_eq!(outcome.visited, 1);
        assert_eq!(outcome.deleted, 1);
        assert!(queue.ops.is_empty());
        assert!(!model.folders.contains_key("srv-3"));
        assert_eq!(model.folders["srv-7"].display_name, "Archive");
    }

    #[test]
    fn test_folder_sync_key_reset_cancels_pass() {
        let response = ns_el("FolderSync").child(ns_text("Status", "9"));
        let delta = FolderSyncDelta::from_response(&response).unwrap();

        let mut queue = MemQueue::default();
        queue.ops = vec![pending_create(1, "tmp-1")];
        let mut model = MemFolderModel::default();

        let outcome = ReconcilePass::for_server_delta(delta)
            .run("acct-1", &mut queue, &mut model)
            .unwrap();
        assert!(outcome.cancelled);
        assert_eq!(outcome.control_event(), ControlEvent::Reprocess);
        assert_eq!(outcome.visited, 0);
        assert_eq!(queue.ops.len(), 1);
    }

    #[test]
    fn test_folder_sync_parses_wire_bytes() {
        // FolderSync > { Status "1", SyncKey "2", Changes > Delete >
        // ServerId "srv-3" } straight off the codec.
        let bytes: Vec<u8> = vec![
            0x03, 0x01, 0x6A, 0x00,
            0x00, 0x07, // SWITCH_PAGE FolderHierarchy
            0x56, // FolderSync
            0x4C, 0x03, b'1', 0x00, 0x01, // Status
            0x52, 0x03, b'2', 0x00, 0x01, // SyncKey
            0x4E, // Changes
            0x50, // Delete
            0x48, 0x03, b's', b'r', b'v', b'-', b'3', 0x00, 0x01, // ServerId
            0x01, 0x01, 0x01,
        ];
        let tree = decode(&bytes).unwrap();
        let delta = FolderSyncDelta::from_response(&tree).unwrap();
        assert_eq!(delta.status(), STATUS_OK);
        assert_eq!(delta.sync_key(), Some("2"));
        assert_eq!(delta.deletes, vec!["srv-3".to_string()]);
    }

    #[test]
    fn test_folder_sync_malformed_change_entry() {
        let add = ns_el("Add").child(ns_text("ServerId", "srv-7")); // no name/parent/type
        let response = ns_el("FolderSync")
            .child(ns_text("Status", "1"))
            .child(ns_text("SyncKey", "2"))
            .child(ns_el("Changes").child(add));
        assert!(matches!(
            FolderSyncDelta::from_response(&response),
            Err(ReconcileError::MalformedDelta(_))
        ));
    }
}
