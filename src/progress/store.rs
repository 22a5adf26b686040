use crate::{
    foundation::error::{RoadmapError, RoadmapResult},
    progress::state::ProgressState,
    progress::storage::KeyValueStorage,
};

/// Whether a best-effort write reached durable storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The write reached storage.
    Persisted,
    /// The write failed; only memory holds the update.
    NotPersisted,
}

impl SaveOutcome {
    /// `true` for [`SaveOutcome::Persisted`].
    pub fn is_persisted(self) -> bool {
        matches!(self, Self::Persisted)
    }
}

/// Result of [`ProgressStore::mark_complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    /// Newly completed, with the outcome of the write.
    Marked(SaveOutcome),
    /// Already complete; nothing written.
    AlreadyComplete,
    /// No checkpoint at that index.
    OutOfRange,
}

/// Single-writer owner of the persisted [`ProgressState`].
#[derive(Debug)]
pub struct ProgressStore<S> {
    storage: S,
    key: String,
    len: usize,
    state: ProgressState,
}

impl<S: KeyValueStorage> ProgressStore<S> {
    /// Open the store and load the snapshot once.
    pub fn open(storage: S, key: impl Into<String>, len: usize) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            len,
            state: ProgressState::all_false(len),
        };
        store.state = store.load();
        store
    }

    /// Read the persisted snapshot.
    ///
    /// Falls back to all-false when the key is absent, the content is not a boolean
    /// array of the right length, or the medium cannot be read.
    pub fn load(&self) -> ProgressState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => ProgressState::all_false(self.len),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "progress snapshot unusable, starting fresh");
                ProgressState::all_false(self.len)
            }
        }
    }

    fn try_load(&self) -> RoadmapResult<Option<ProgressState>> {
        let Some(raw) = self.storage.read(&self.key)? else {
            return Ok(None);
        };
        let state: ProgressState = serde_json::from_str(&raw)?;
        if state.len() != self.len {
            return Err(RoadmapError::validation(format!(
                "stored progress has {} entries, expected {}",
                state.len(),
                self.len
            )));
        }
        Ok(Some(state))
    }

    /// Adopt `state` and write it through. Write failures are logged, never raised.
    pub fn save(&mut self, state: ProgressState) -> SaveOutcome {
        if state.len() != self.len {
            tracing::error!(
                got = state.len(),
                expected = self.len,
                "refusing to save progress of the wrong length"
            );
            return SaveOutcome::NotPersisted;
        }
        self.state = state;
        self.persist()
    }

    /// Mark `index` complete. Already-complete and out-of-range indices are no-ops.
    pub fn mark_complete(&mut self, index: usize) -> MarkOutcome {
        if index >= self.len {
            return MarkOutcome::OutOfRange;
        }
        if !self.state.set(index) {
            return MarkOutcome::AlreadyComplete;
        }
        tracing::info!(index, "checkpoint completed");
        MarkOutcome::Marked(self.persist())
    }

    /// Mark every checkpoint incomplete and write through.
    pub fn reset_all(&mut self) -> SaveOutcome {
        self.state.clear();
        tracing::info!("progress reset");
        self.persist()
    }

    fn persist(&mut self) -> SaveOutcome {
        let write = serde_json::to_string(&self.state)
            .map_err(RoadmapError::from)
            .and_then(|json| self.storage.write(&self.key, &json));
        match write {
            Ok(()) => SaveOutcome::Persisted,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to persist progress");
                SaveOutcome::NotPersisted
            }
        }
    }

    /// In-memory snapshot.
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Number of completed checkpoints.
    pub fn completed_count(&self) -> usize {
        self.state.completed_count()
    }

    /// Highest completed index, if any.
    pub fn last_completed_index(&self) -> Option<usize> {
        self.state.last_completed_index()
    }

    /// Checkpoint the avatar should head for.
    pub fn next_index(&self) -> usize {
        self.state.next_index()
    }

    /// Storage key of the snapshot.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/store.rs"]
mod tests;
