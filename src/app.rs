use crate::domain::{DialogState, RenamePolicy, Task, TaskError, TaskForm, TaskStore};
use tracing::{debug, info, warn};

/// User intent routed into the screen's state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// "Create Task" entry point
    CreateTask,
    /// "Edit Task" entry point (opens the selector)
    EditTask,
    SelectorUp,
    SelectorDown,
    /// Pick the task at a position for editing
    Pick(usize),
    /// Pick the task under the selector cursor
    PickHighlighted,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormListUp,
    FormListDown,
    Submit,
    /// Delete a task by name from the form's list
    Delete(String),
    /// Delete the task under the form's list cursor
    DeleteHighlighted,
    /// Cancel button, back navigation, or a click outside the dialog
    Cancel,
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    /// Not valid in the current state; nothing changed
    Ignored,
    /// Refused; the reason is recorded on the form when one is open
    Rejected(TaskError),
}

impl Outcome {
    fn from_flag(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Ignored
        }
    }

    /// Whether observers should be told about this outcome
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Immutable copy of the screen state, read by renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub dialog: DialogState,
    pub selected_index: Option<usize>,
    pub selector_cursor: usize,
    pub form: Option<TaskForm>,
}

/// Screen state: the task store plus the dialog/selection state machine
#[derive(Debug, Clone)]
pub struct AppState {
    pub tasks: TaskStore,
    pub dialog: DialogState,
    /// Task targeted for editing; None outside edit mode
    pub selected_index: Option<usize>,
    /// Highlighted row of the selector dialog
    pub selector_cursor: usize,
    /// Present exactly when `dialog` is `ShowingForm`
    pub form: Option<TaskForm>,
    pub allow_empty_names: bool,
    pub rename_policy: RenamePolicy,
}

impl AppState {
    pub fn new(allow_empty_names: bool, rename_policy: RenamePolicy) -> Self {
        Self {
            tasks: TaskStore::new(),
            dialog: DialogState::Hidden,
            selected_index: None,
            selector_cursor: 0,
            form: None,
            allow_empty_names,
            rename_policy,
        }
    }

    /// Apply one action. Actions that are not valid in the current dialog
    /// state are ignored.
    pub fn apply(&mut self, action: Action) -> Outcome {
        let before = self.dialog;

        let outcome = match (self.dialog, action) {
            (DialogState::Hidden, Action::CreateTask) => {
                self.open_create_form();
                Outcome::Changed
            }
            (DialogState::Hidden, Action::EditTask) => {
                self.open_selector();
                Outcome::Changed
            }

            (DialogState::ShowingSelector, Action::SelectorUp) => Outcome::from_flag(self.selector_up()),
            (DialogState::ShowingSelector, Action::SelectorDown) => Outcome::from_flag(self.selector_down()),
            (DialogState::ShowingSelector, Action::Pick(index)) => self.pick_task(index),
            (DialogState::ShowingSelector, Action::PickHighlighted) => {
                if self.tasks.is_empty() {
                    Outcome::Ignored
                } else {
                    self.pick_task(self.selector_cursor)
                }
            }

            (DialogState::ShowingForm, Action::FormInput(c)) => {
                Outcome::from_flag(self.form.as_mut().is_some_and(|form| form.push_char(c)))
            }
            (DialogState::ShowingForm, Action::FormBackspace) => {
                Outcome::from_flag(self.form.as_mut().is_some_and(|form| form.backspace()))
            }
            (DialogState::ShowingForm, Action::FormNextField) => match self.form.as_mut() {
                Some(form) => {
                    form.next_field();
                    Outcome::Changed
                }
                None => Outcome::Ignored,
            },
            (DialogState::ShowingForm, Action::FormListUp) => {
                Outcome::from_flag(self.form.as_mut().is_some_and(|form| form.cursor_up()))
            }
            (DialogState::ShowingForm, Action::FormListDown) => {
                let len = self.tasks.len();
                Outcome::from_flag(self.form.as_mut().is_some_and(|form| form.cursor_down(len)))
            }
            (DialogState::ShowingForm, Action::Submit) => self.submit_form(),
            (DialogState::ShowingForm, Action::Delete(name)) => self.delete_task(&name),
            (DialogState::ShowingForm, Action::DeleteHighlighted) => self.delete_highlighted(),

            (DialogState::ShowingSelector | DialogState::ShowingForm, Action::Cancel) => {
                debug!("dialog cancelled");
                self.close_dialog();
                Outcome::Changed
            }

            (state, action) => {
                debug!(?state, ?action, "action ignored");
                Outcome::Ignored
            }
        };

        if self.dialog != before {
            debug!(from = ?before, to = ?self.dialog, "dialog transition");
        }

        outcome
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.snapshot(),
            dialog: self.dialog,
            selected_index: self.selected_index,
            selector_cursor: self.selector_cursor,
            form: self.form.clone(),
        }
    }

    /// Open an empty form (create mode)
    fn open_create_form(&mut self) {
        self.selected_index = None;
        self.form = Some(TaskForm::create());
        self.dialog = DialogState::ShowingForm;
    }

    /// Open the task selector (first step of edit mode)
    fn open_selector(&mut self) {
        self.selected_index = None;
        self.selector_cursor = 0;
        self.dialog = DialogState::ShowingSelector;
    }

    fn selector_up(&mut self) -> bool {
        if self.selector_cursor > 0 {
            self.selector_cursor -= 1;
            true
        } else {
            false
        }
    }

    fn selector_down(&mut self) -> bool {
        if self.selector_cursor + 1 < self.tasks.len() {
            self.selector_cursor += 1;
            true
        } else {
            false
        }
    }

    /// Enter edit mode for the task at `index`, seeding the form from it
    fn pick_task(&mut self, index: usize) -> Outcome {
        let Some(task) = self.tasks.get(index) else {
            return self.reject(TaskError::StaleSelection {
                index,
                len: self.tasks.len(),
            });
        };

        debug!(index, task = %task.name, "task picked for editing");
        let mut form = TaskForm::edit(task);
        form.list_cursor = index;

        self.selected_index = Some(index);
        self.form = Some(form);
        self.dialog = DialogState::ShowingForm;
        Outcome::Changed
    }

    /// Submit the form: add in create mode, edit in edit mode
    fn submit_form(&mut self) -> Outcome {
        if !self.allow_empty_names && self.form.as_ref().is_some_and(|form| form.name.is_empty()) {
            return self.reject(TaskError::EmptyName);
        }

        let Some(form) = self.form.take() else {
            return Outcome::Ignored;
        };

        match form.seed {
            Some(original) => {
                info!(task = %form.name, original = %original, "task edited");
                self.tasks
                    .rename(&original, form.name, form.description, self.rename_policy);
            }
            None => {
                let overwrite = self.tasks.contains(&form.name);
                info!(task = %form.name, overwrite, "task added");
                self.tasks.add(form.name, form.description);
            }
        }

        self.close_dialog();
        Outcome::Changed
    }

    /// Delete a task by name and close the form. No confirmation.
    fn delete_task(&mut self, name: &str) -> Outcome {
        if self.tasks.delete(name).is_some() {
            info!(task = %name, "task deleted");
        } else {
            debug!(task = %name, "delete of unknown task");
        }

        // Positions shifted, so any selection is stale now
        self.close_dialog();
        Outcome::Changed
    }

    fn delete_highlighted(&mut self) -> Outcome {
        let cursor = self.form.as_ref().map(|form| form.list_cursor).unwrap_or(0);
        match self.tasks.get(cursor) {
            Some(task) => self.delete_task(&task.name),
            None => Outcome::Ignored,
        }
    }

    /// Back to the main screen with neutral selection
    fn close_dialog(&mut self) {
        self.form = None;
        self.selected_index = None;
        self.selector_cursor = 0;
        self.dialog = DialogState::Hidden;
    }

    fn reject(&mut self, err: TaskError) -> Outcome {
        warn!(error = %err, "action rejected");
        if let Some(form) = self.form.as_mut() {
            form.error = Some(err.to_string());
        }
        Outcome::Rejected(err)
    }
}
