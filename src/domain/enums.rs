use serde::{Deserialize, Serialize};

/// Which modal surface is on screen. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    /// List of tasks to pick one for editing
    ShowingSelector,
    /// Create-or-edit form
    ShowingForm,
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// How an edit that changes a task's name is applied to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenamePolicy {
    /// The entry keeps its position under the new name
    #[default]
    InPlace,
    /// The old entry is removed and the new name is inserted at the end
    DeleteInsert,
}

impl RenamePolicy {
    /// Parse policy from a CLI value like "in-place"
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().replace('_', "-").as_str() {
            "in-place" => Some(Self::InPlace),
            "delete-insert" => Some(Self::DeleteInsert),
            _ => None,
        }
    }

    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::InPlace => "in-place",
            Self::DeleteInsert => "delete-insert",
        }
    }
}

/// Focused input of the task form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    /// The task list with delete controls
    List,
}

impl FormField {
    /// Next field in Tab order (wraps around)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::List,
            Self::List => Self::Name,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Name | Self::Description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_policy_from_tag() {
        assert_eq!(RenamePolicy::from_tag("in-place"), Some(RenamePolicy::InPlace));
        assert_eq!(RenamePolicy::from_tag("IN_PLACE"), Some(RenamePolicy::InPlace));
        assert_eq!(RenamePolicy::from_tag("delete-insert"), Some(RenamePolicy::DeleteInsert));
        assert_eq!(RenamePolicy::from_tag("rename"), None);
    }

    #[test]
    fn test_rename_policy_serde_names() {
        let json = serde_json::to_string(&RenamePolicy::DeleteInsert).unwrap();
        assert_eq!(json, "\"delete_insert\"");
        let parsed: RenamePolicy = serde_json::from_str("\"in_place\"").unwrap();
        assert_eq!(parsed, RenamePolicy::InPlace);
    }

    #[test]
    fn test_form_field_cycle() {
        assert_eq!(FormField::Name.next(), FormField::Description);
        assert_eq!(FormField::Description.next(), FormField::List);
        assert_eq!(FormField::List.next(), FormField::Name);
        assert!(!FormField::List.is_text());
    }

    #[test]
    fn test_dialog_state_is_open() {
        assert!(!DialogState::Hidden.is_open());
        assert!(DialogState::ShowingSelector.is_open());
        assert!(DialogState::ShowingForm.is_open());
    }
}
