use super::enums::FormField;
use super::task::Task;

/// Transient input buffers of the create-or-edit dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub name: String,
    pub description: String,
    /// Name of the task being edited (None = create mode)
    pub seed: Option<String>,
    pub field: FormField,
    /// Highlighted row of the task list inside the form
    pub list_cursor: usize,
    /// Last validation error, shown under the inputs
    pub error: Option<String>,
}

impl TaskForm {
    /// Empty form for a new task
    pub fn create() -> Self {
        Self::default()
    }

    /// Form seeded from an existing task
    pub fn edit(task: Task) -> Self {
        Self {
            seed: Some(task.name.clone()),
            name: task.name,
            description: task.description,
            ..Self::default()
        }
    }

    pub fn is_edit(&self) -> bool {
        self.seed.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Task"
        } else {
            "Create Task"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Edit"
        } else {
            "Add"
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) -> bool {
        match self.field {
            FormField::Name => self.name.push(c),
            FormField::Description => self.description.push(c),
            FormField::List => return false,
        }
        self.error = None;
        true
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) -> bool {
        let removed = match self.field {
            FormField::Name => self.name.pop(),
            FormField::Description => self.description.pop(),
            FormField::List => None,
        };
        removed.is_some()
    }

    pub fn cursor_up(&mut self) -> bool {
        if self.list_cursor > 0 {
            self.list_cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn cursor_down(&mut self, len: usize) -> bool {
        if self.list_cursor + 1 < len {
            self.list_cursor += 1;
            true
        } else {
            false
        }
    }
}
