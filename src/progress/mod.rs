//! Durable per-checkpoint completion state.
//!
//! The store is the single writer of [`state::ProgressState`]; everything else reads
//! snapshots. Storage failures never escape: they are logged and the in-memory state
//! stays authoritative.

pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod store;
