/// Transfers the user to another view. Fire-and-forget.
pub trait Navigator {
    /// Leave the roadmap for `target`.
    fn navigate(&mut self, target: &str);
}

/// Navigator that remembers every target, for tests and simulations.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visited: Vec<String>,
}

impl RecordingNavigator {
    /// Navigator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in the order they were requested.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &str) {
        self.visited.push(target.to_string());
    }
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, target: &str) {
        self(target)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/navigate.rs"]
mod tests;
