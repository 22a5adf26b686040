/// Handle tying a pending toast to its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// Messages for a toast bound to an operation's outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackedMessages {
    /// Shown while the operation runs.
    pub pending: String,
    /// Replaces the pending toast on success.
    pub success: String,
    /// Replaces the pending toast on failure.
    pub failure: String,
}

impl TrackedMessages {
    /// Bundle the three messages.
    pub fn new(
        pending: impl Into<String>,
        success: impl Into<String>,
        failure: impl Into<String>,
    ) -> Self {
        Self {
            pending: pending.into(),
            success: success.into(),
            failure: failure.into(),
        }
    }
}

/// Transient notification surface. Purely observational.
pub trait Notifier {
    /// Show a one-off success message.
    fn success(&mut self, message: &str);

    /// Show a message that stays until settled.
    fn pending(&mut self, message: &str) -> ToastId;

    /// Replace the pending toast `id` with its outcome.
    fn settle(&mut self, id: ToastId, ok: bool, message: &str);
}

/// Show `messages.pending`, run `op`, then settle with success or failure.
pub fn track<N, T, E>(
    notifier: &mut N,
    messages: &TrackedMessages,
    op: impl FnOnce() -> Result<T, E>,
) -> Result<T, E>
where
    N: Notifier + ?Sized,
{
    let id = notifier.pending(&messages.pending);
    let out = op();
    match &out {
        Ok(_) => notifier.settle(id, true, &messages.success),
        Err(_) => notifier.settle(id, false, &messages.failure),
    }
    out
}

/// Everything a notifier was asked to show, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Toast {
    /// Immediate success message.
    Success(String),
    /// Pending message awaiting an outcome.
    Pending(ToastId, String),
    /// Pending message settled successfully.
    Resolved(ToastId, String),
    /// Pending message settled with a failure.
    Rejected(ToastId, String),
}

/// Notifier that keeps every toast in memory.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl RecordingNotifier {
    /// Notifier with no toasts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts in the order they were shown.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.toasts.push(Toast::Success(message.to_string()));
    }

    fn pending(&mut self, message: &str) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast::Pending(id, message.to_string()));
        id
    }

    fn settle(&mut self, id: ToastId, ok: bool, message: &str) {
        let toast = if ok {
            Toast::Resolved(id, message.to_string())
        } else {
            Toast::Rejected(id, message.to_string())
        };
        self.toasts.push(toast);
    }
}

/// Routes toasts to the log.
#[derive(Clone, Debug, Default)]
pub struct LogNotifier {
    next_id: u64,
}

impl Notifier for LogNotifier {
    fn success(&mut self, message: &str) {
        tracing::info!(target: "roadmap::toast", "{message}");
    }

    fn pending(&mut self, message: &str) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        tracing::info!(target: "roadmap::toast", toast = id.0, "{message}");
        id
    }

    fn settle(&mut self, id: ToastId, ok: bool, message: &str) {
        if ok {
            tracing::info!(target: "roadmap::toast", toast = id.0, "{message}");
        } else {
            tracing::warn!(target: "roadmap::toast", toast = id.0, "{message}");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/notify.rs"]
mod tests;
