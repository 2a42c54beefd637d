//! Identifier rewrites
//!
//! A rewrite records that an identifier baked into earlier-queued
//! operations is no longer valid, either because the server assigned the
//! real id for something the client created under a temporary one, or
//! because the server destroyed the thing outright. Rewrites accumulate
//! during a reconciliation pass and are replayed, oldest first, onto every
//! operation visited after the one that produced them.

use serde::{Deserialize, Serialize};

use super::pending::{PendingOp, RefField, PARENT_REF_FIELDS};

/// What applying a rewrite (or a delta) to one pending operation calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReconcileAction {
    #[default]
    DoNothing,
    /// The operation changed and must be persisted.
    Update,
    /// The operation is now moot and must be removed from the queue.
    Delete,
}

/// One recorded identifier rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rewrite {
    /// A container id was superseded: every parent-reference field equal
    /// to `match_id` becomes `replace_id`.
    ParentRef { match_id: String, replace_id: String },
    /// The server destroyed the item with this id; operations targeting
    /// it are moot. Model-side this is a no-op (the delta that produced
    /// the rewrite already removed the item).
    TargetDeleted { server_id: String },
}

impl Rewrite {
    pub fn parent_ref(match_id: &str, replace_id: &str) -> Self {
        Rewrite::ParentRef {
            match_id: match_id.to_string(),
            replace_id: replace_id.to_string(),
        }
    }

    pub fn target_deleted(server_id: &str) -> Self {
        Rewrite::TargetDeleted { server_id: server_id.to_string() }
    }

    /// Apply this rewrite to one pending operation.
    pub fn apply_to_pending(&self, op: &mut PendingOp) -> ReconcileAction {
        match self {
            Rewrite::ParentRef { match_id, replace_id } => {
                let mut changed = false;
                for field in PARENT_REF_FIELDS {
                    let slot = op.ref_field_mut(field);
                    if slot.as_deref() == Some(match_id.as_str()) {
                        *slot = Some(replace_id.clone());
                        changed = true;
                    }
                }
                if changed {
                    ReconcileAction::Update
                } else {
                    ReconcileAction::DoNothing
                }
            }
            Rewrite::TargetDeleted { server_id } => {
                if op.ref_field(RefField::ServerId) == Some(server_id.as_str()) {
                    ReconcileAction::Delete
                } else {
                    ReconcileAction::DoNothing
                }
            }
        }
    }
}

/// Append-only accumulator for a pass. Iteration order is insertion
/// order, so replay is always oldest rewrite first.
#[derive(Debug, Clone, Default)]
pub struct RewriteSet {
    rewrites: Vec<Rewrite>,
}

impl RewriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rewrite: Rewrite) {
        self.rewrites.push(rewrite);
    }

    pub fn extend(&mut self, rewrites: impl IntoIterator<Item = Rewrite>) {
        self.rewrites.extend(rewrites);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rewrite> {
        self.rewrites.iter()
    }

    pub fn len(&self) -> usize {
        self.rewrites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewrites.is_empty()
    }

    /// Replay every recorded rewrite onto `op`, oldest first. `Delete`
    /// wins immediately; later rewrites are not consulted for a doomed
    /// operation.
    pub fn apply_to_pending(&self, op: &mut PendingOp) -> ReconcileAction {
        let mut action = ReconcileAction::DoNothing;
        for rewrite in &self.rewrites {
            match rewrite.apply_to_pending(op) {
                ReconcileAction::Delete => return ReconcileAction::Delete,
                ReconcileAction::Update => action = ReconcileAction::Update,
                ReconcileAction::DoNothing => {}
            }
        }
        action
    }
}

impl FromIterator<Rewrite> for RewriteSet {
    fn from_iter<T: IntoIterator<Item = Rewrite>>(iter: T) -> Self {
        Self { rewrites: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::pending::PendingKind;

    fn op_in(parent: &str) -> PendingOp {
        let mut op = PendingOp::new(1, "acct-1", PendingKind::ItemCreate);
        op.parent_id = Some(parent.to_string());
        op
    }

    #[test]
    fn test_parent_ref_hits_both_parent_fields() {
        let mut op = op_in("tmp-1");
        op.dest_parent_id = Some("tmp-1".into());
        op.server_id = Some("tmp-1".into());
        let action = Rewrite::parent_ref("tmp-1", "srv-99").apply_to_pending(&mut op);
        assert_eq!(action, ReconcileAction::Update);
        assert_eq!(op.parent_id.as_deref(), Some("srv-99"));
        assert_eq!(op.dest_parent_id.as_deref(), Some("srv-99"));
        // server_id is the op's own target, not a parent reference.
        assert_eq!(op.server_id.as_deref(), Some("tmp-1"));
    }

    #[test]
    fn test_parent_ref_miss_is_noop() {
        let mut op = op_in("other");
        let action = Rewrite::parent_ref("tmp-1", "srv-99").apply_to_pending(&mut op);
        assert_eq!(action, ReconcileAction::DoNothing);
        assert_eq!(op.parent_id.as_deref(), Some("other"));
    }

    #[test]
    fn test_target_deleted_matches_server_id_only() {
        let mut op = op_in("srv-5");
        assert_eq!(
            Rewrite::target_deleted("srv-5").apply_to_pending(&mut op),
            ReconcileAction::DoNothing
        );
        op.server_id = Some("srv-5".into());
        assert_eq!(
            Rewrite::target_deleted("srv-5").apply_to_pending(&mut op),
            ReconcileAction::Delete
        );
    }

    #[test]
    fn test_set_replays_oldest_first() {
        let mut set = RewriteSet::new();
        set.push(Rewrite::parent_ref("a", "b"));
        set.push(Rewrite::parent_ref("b", "c"));
        let mut op = op_in("a");
        assert_eq!(set.apply_to_pending(&mut op), ReconcileAction::Update);
        // The second rewrite sees the first one's output.
        assert_eq!(op.parent_id.as_deref(), Some("c"));
    }

    #[test]
    fn test_set_delete_short_circuits() {
        let mut set = RewriteSet::new();
        set.push(Rewrite::target_deleted("srv-5"));
        set.push(Rewrite::parent_ref("f-1", "f-2"));
        let mut op = op_in("f-1");
        op.server_id = Some("srv-5".into());
        assert_eq!(set.apply_to_pending(&mut op), ReconcileAction::Delete);
        // Doomed op: the later parent rewrite never ran.
        assert_eq!(op.parent_id.as_deref(), Some("f-1"));
    }
}
