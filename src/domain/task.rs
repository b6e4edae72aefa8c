/// A named unit of work with a free-text description.
/// The name is the task's identity inside a `TaskStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub description: String,
}

impl Task {
    pub fn new(name: String, description: String) -> Self {
        Self { name, description }
    }

    /// Short one-line summary for list rows
    pub fn summary(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            // Only the first line of a multi-line description
            let first = self.description.lines().next().unwrap_or_default();
            format!("{} — {}", self.name, first)
        }
    }
}
