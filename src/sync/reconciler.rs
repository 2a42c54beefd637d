//! Reconciliation engine
//!
//! One generic pass that folds a server delta into the pending-operation
//! queue and the local model. Every kind of server response runs through
//! the same five steps; a delta only supplies a delegate saying what the
//! delta means for a single operation and for the model. The pass never
//! blocks on I/O beyond what the queue and model traits do, and callers
//! serialize passes per account (see [`AccountLocks`]).
//!
//! [`AccountLocks`]: crate::sync::locks::AccountLocks

use tracing::{debug, info, warn};

use super::pending::{PendingOp, PendingState};
use super::rewrite::{ReconcileAction, Rewrite, RewriteSet};
use crate::error::{ControlEvent, ReconcileError};

/// Storage for the per-account pending queue.
pub trait PendingQueue {
    /// All live pending operations for the account, ascending by id.
    fn query_ordered(&self, account_id: &str) -> Result<Vec<PendingOp>, ReconcileError>;
    fn persist_update(&mut self, op: &PendingOp) -> Result<(), ReconcileError>;
    fn persist_delete(&mut self, op: &PendingOp) -> Result<(), ReconcileError>;
}

/// The local item/folder model, as far as the engine needs to see it.
/// Delta delegates typically require a richer subtrait.
pub trait DomainModel {
    /// Replace every occurrence of `match_id` used as a container
    /// reference with `replace_id`, across all record kinds.
    fn rewrite_parent_references(
        &mut self,
        account_id: &str,
        match_id: &str,
        replace_id: &str,
    ) -> Result<(), ReconcileError>;
}

/// What one delta application decided for one pending operation.
#[derive(Debug, Clone, Default)]
pub struct DeltaDisposition {
    pub action: ReconcileAction,
    /// Abort the rest of the pass. The remaining operations and the
    /// model are left untouched; the caller sees `Reprocess`.
    pub cancel: bool,
    /// New rewrites this application discovered. They apply to every
    /// operation visited after this one, and to the model at pass end.
    pub rewrites: Vec<Rewrite>,
}

impl DeltaDisposition {
    pub fn nothing() -> Self {
        Self::default()
    }

    pub fn update() -> Self {
        Self { action: ReconcileAction::Update, ..Self::default() }
    }

    pub fn delete() -> Self {
        Self { action: ReconcileAction::Delete, ..Self::default() }
    }

    pub fn cancel() -> Self {
        Self { cancel: true, ..Self::default() }
    }

    pub fn with_rewrite(mut self, rewrite: Rewrite) -> Self {
        self.rewrites.push(rewrite);
        self
    }
}

/// Delta-specific behavior plugged into the generic pass.
pub trait DeltaDelegate<M: DomainModel> {
    /// Consulted once, before any operation is visited. Returning true
    /// aborts the pass immediately (nothing is touched, caller sees
    /// `Reprocess`). Deltas that invalidate the whole local state, such
    /// as a sync-key reset, use this.
    fn cancels_pass(&self) -> bool {
        false
    }

    /// Fold the delta into one pending operation. `rewrites` holds
    /// everything accumulated so far, already applied to `op`.
    fn apply_to_pending(
        &mut self,
        op: &mut PendingOp,
        rewrites: &RewriteSet,
    ) -> Result<DeltaDisposition, ReconcileError>;

    /// Fold the delta into the local model, once, after every operation
    /// has been visited and accumulated rewrites have been applied.
    fn apply_to_model(&mut self, account_id: &str, model: &mut M) -> Result<(), ReconcileError>;
}

/// Which queue entries a pass visits. Command acknowledgments skip
/// failed operations (they were already resolved); server-pushed deltas
/// visit them too, since a push can moot a failed operation's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitScope {
    SkipFailed,
    IncludeFailed,
}

impl VisitScope {
    fn visits(self, state: PendingState) -> bool {
        match state {
            PendingState::Deleted => false,
            PendingState::Failed => self == VisitScope::IncludeFailed,
            PendingState::New | PendingState::Dispatched => true,
        }
    }
}

/// Counters and the final control signal for one completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassOutcome {
    pub visited: usize,
    pub updated: usize,
    pub deleted: usize,
    /// Parent-reference rewrites pushed into the model.
    pub rewrites_applied: usize,
    pub cancelled: bool,
}

impl PassOutcome {
    pub fn control_event(&self) -> ControlEvent {
        if self.cancelled {
            ControlEvent::Reprocess
        } else {
            ControlEvent::Success
        }
    }
}

/// One reconciliation pass over an account's queue.
pub struct ReconcilePass<D> {
    delegate: D,
    scope: VisitScope,
    rewrites: RewriteSet,
}

impl<D> ReconcilePass<D> {
    /// Pass for the acknowledgment of a command this client sent.
    pub fn for_command_ack(delegate: D) -> Self {
        Self { delegate, scope: VisitScope::SkipFailed, rewrites: RewriteSet::new() }
    }

    /// Pass for a delta the server pushed unprompted.
    pub fn for_server_delta(delegate: D) -> Self {
        Self { delegate, scope: VisitScope::IncludeFailed, rewrites: RewriteSet::new() }
    }

    /// Seed the pass with rewrites recorded before it started, e.g. ones
    /// persisted across a process restart. They replay onto every visited
    /// operation before any new ones.
    pub fn with_rewrites(mut self, rewrites: RewriteSet) -> Self {
        self.rewrites = rewrites;
        self
    }

    pub fn run<Q, M>(
        mut self,
        account_id: &str,
        queue: &mut Q,
        model: &mut M,
    ) -> Result<PassOutcome, ReconcileError>
    where
        Q: PendingQueue,
        M: DomainModel,
        D: DeltaDelegate<M>,
    {
        let mut outcome = PassOutcome::default();

        if self.delegate.cancels_pass() {
            info!(account_id, "delta invalidates local state, pass cancelled");
            outcome.cancelled = true;
            return Ok(outcome);
        }

        let ops = queue.query_ordered(account_id)?;
        // Ordering is load-bearing; reject a bad snapshot before touching
        // anything.
        for pair in ops.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(ReconcileError::OrdinalConflict(pair[1].id));
            }
        }

        for mut op in ops {
            if !self.scope.visits(op.state) {
                continue;
            }
            outcome.visited += 1;

            if op.state == PendingState::Dispatched {
                debug!(op.id, "in flight, deferring to its own acknowledgment");
                continue;
            }

            let rewritten = match self.rewrites.apply_to_pending(&mut op) {
                ReconcileAction::Delete => {
                    debug!(op.id, "mooted by an accumulated rewrite");
                    queue.persist_delete(&op)?;
                    outcome.deleted += 1;
                    continue;
                }
                ReconcileAction::Update => true,
                ReconcileAction::DoNothing => false,
            };

            let disposition = self.delegate.apply_to_pending(&mut op, &self.rewrites)?;
            self.rewrites.extend(disposition.rewrites);
            // One persistence call per operation, covering both the
            // rewrite mutation and the delta mutation.
            match disposition.action {
                ReconcileAction::Delete => {
                    queue.persist_delete(&op)?;
                    outcome.deleted += 1;
                }
                ReconcileAction::Update => {
                    queue.persist_update(&op)?;
                    outcome.updated += 1;
                }
                ReconcileAction::DoNothing if rewritten => {
                    queue.persist_update(&op)?;
                    outcome.updated += 1;
                }
                ReconcileAction::DoNothing => {}
            }
            if disposition.cancel {
                warn!(op.id, account_id, "pass cancelled while visiting queue");
                outcome.cancelled = true;
                return Ok(outcome);
            }
        }

        for rewrite in self.rewrites.iter() {
            if let Rewrite::ParentRef { match_id, replace_id } = rewrite {
                model.rewrite_parent_references(account_id, match_id, replace_id)?;
                outcome.rewrites_applied += 1;
            }
        }

        self.delegate.apply_to_model(account_id, model)?;

        info!(
            account_id,
            visited = outcome.visited,
            updated = outcome.updated,
            deleted = outcome.deleted,
            rewrites = outcome.rewrites_applied,
            "reconciliation pass complete"
        );
        Ok(outcome)
    }
}
