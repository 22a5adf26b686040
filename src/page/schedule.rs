/// Work deferred onto the page's timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Open the given route.
    Navigate(String),
}

#[derive(Clone, Debug)]
struct Scheduled {
    due_ms: f64,
    seq: u64,
    task: Task,
}

/// Fixed-delay timers on a virtual clock advanced by the page tick.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    now_ms: f64,
    next_seq: u64,
    entries: Vec<Scheduled>,
}

impl DeferredQueue {
    /// Queue at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once `delay_ms` of virtual time has passed.
    pub fn schedule(&mut self, delay_ms: u64, task: Task) {
        let due_ms = self.now_ms + delay_ms as f64;
        self.entries.push(Scheduled {
            due_ms,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Move the clock forward and drain every task now due, earliest first.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<Task> {
        self.now_ms += dt_ms.max(0.0);
        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.due_ms <= now);
        self.entries = pending;
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Virtual time elapsed so far.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/schedule.rs"]
mod tests;
