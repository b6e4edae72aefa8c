use super::enums::RenamePolicy;
use super::task::Task;
use indexmap::IndexMap;

/// Ordered mapping from task name to description.
///
/// Names are unique. Iteration order is insertion order and is the order the
/// tasks are displayed in; removing a task keeps the others in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    entries: IndexMap<String, String>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task at the end, or overwrite the description of an existing
    /// task with the same name (its position is kept)
    pub fn add(&mut self, name: String, description: String) {
        self.entries.insert(name, description);
    }

    /// Same operation as `add`; the store does not tell insert from update
    pub fn edit(&mut self, name: String, description: String) {
        self.add(name, description);
    }

    /// Remove a task by name. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    /// Task at a position in iteration order
    pub fn get(&self, index: usize) -> Option<Task> {
        self.entries
            .get_index(index)
            .map(|(name, description)| Task::new(name.clone(), description.clone()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, description)| (name.as_str(), description.as_str()))
    }

    /// Consistent copy of the collection for rendering
    pub fn snapshot(&self) -> Vec<Task> {
        self.iter()
            .map(|(name, description)| Task::new(name.to_string(), description.to_string()))
            .collect()
    }

    /// Edit path for a task that was seeded from `original`.
    ///
    /// With an unchanged name (or an `original` that no longer exists) this is
    /// plain `edit`. Otherwise the rename follows `policy`; either way a third
    /// task that already used the new name is overwritten.
    pub fn rename(&mut self, original: &str, name: String, description: String, policy: RenamePolicy) {
        if original == name || !self.entries.contains_key(original) {
            self.edit(name, description);
            return;
        }

        match policy {
            RenamePolicy::DeleteInsert => {
                self.entries.shift_remove(original);
                self.entries.insert(name, description);
            }
            RenamePolicy::InPlace => {
                // Drop the colliding task first so the index below is final
                self.entries.shift_remove(&name);
                if let Some(index) = self.entries.get_index_of(original) {
                    self.entries.shift_remove_index(index);
                    self.entries.shift_insert(index, name, description);
                }
            }
        }
    }
}
