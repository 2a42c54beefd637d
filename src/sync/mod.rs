//! Pending-operation reconciliation
//!
//! The client queues local mutations as pending operations and plays
//! server responses back through a single generic reconciliation pass:
//! load the account's queue in creation order, fold the delta into each
//! operation (replaying accumulated identifier rewrites first), then fold
//! the rewrites and the delta into the local model. See [`reconciler`]
//! for the pass itself and [`folder`] for the concrete folder deltas.

pub mod folder;
pub mod locks;
pub mod pending;
pub mod reconciler;
pub mod rewrite;

pub use folder::{FolderCreateAck, FolderModel, FolderRecord, FolderSyncDelta};
pub use locks::AccountLocks;
pub use pending::{PendingKind, PendingOp, PendingState, RefField};
pub use reconciler::{
    DeltaDelegate, DeltaDisposition, DomainModel, PassOutcome, PendingQueue, ReconcilePass,
};
pub use rewrite::{ReconcileAction, Rewrite, RewriteSet};
