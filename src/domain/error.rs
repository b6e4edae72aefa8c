use thiserror::Error;

/// Reasons a state transition is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Task name cannot be empty")]
    EmptyName,

    #[error("No task at position {index} (there are {len})")]
    StaleSelection { index: usize, len: usize },
}
