/// One completion flag per checkpoint, indexed by checkpoint order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ProgressState(Vec<bool>);

impl ProgressState {
    /// `len` incomplete checkpoints.
    pub fn all_false(len: usize) -> Self {
        Self(vec![false; len])
    }

    /// State from raw flags, one per checkpoint.
    pub fn from_flags(flags: Vec<bool>) -> Self {
        Self(flags)
    }

    /// Number of checkpoints tracked.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no checkpoints are tracked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flags in checkpoint order.
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// `true` when checkpoint `index` is complete; out-of-range is incomplete.
    pub fn is_complete(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Number of completed checkpoints.
    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|done| **done).count()
    }

    /// Highest completed index, if any.
    pub fn last_completed_index(&self) -> Option<usize> {
        self.0.iter().rposition(|done| *done)
    }

    /// Checkpoint after the last completed one, clamped to the last valid index.
    pub fn next_index(&self) -> usize {
        let next = self.last_completed_index().map_or(0, |i| i + 1);
        next.min(self.0.len().saturating_sub(1))
    }

    pub(crate) fn set(&mut self, index: usize) -> bool {
        match self.0.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.0.iter_mut().for_each(|slot| *slot = false);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/state.rs"]
mod tests;
