//! ActiveSync synchronization core: the WBXML binary codec and the
//! pending-operation reconciliation engine.
//!
//! The [`wbxml`] module translates losslessly between the wire's
//! tokenized binary form and a structured document tree. The [`sync`]
//! module keeps the client's queue of unacknowledged local mutations
//! consistent with server responses, propagating identifier rewrites to
//! later-queued operations and to the local model in one ordered pass.
//! Neither module performs network or disk I/O; storage is reached only
//! through the traits in [`sync::reconciler`] and
//! [`wbxml::PeelOffStore`].

pub mod error;
pub mod sync;
pub mod wbxml;

pub use error::{ControlEvent, DecodeError, EncodeError, ReconcileError};
