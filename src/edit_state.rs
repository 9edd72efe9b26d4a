//! View State
//!
//! Transient form state owned by the components: the pending text of the add
//! form and the edit mode of each row. None of this lives in the todo list.
//! Input events replace the pending value explicitly through `set_*`.

/// Pending text of the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddDraft {
    text: String,
}

impl AddDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Submit is disabled while the input is empty
    pub fn can_submit(&self) -> bool {
        !self.text.is_empty()
    }

    /// Take the pending text for submission, leaving the draft empty
    pub fn take_submission(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        Some(std::mem::take(&mut self.text))
    }
}

/// Edit mode of a single row
///
/// The pending title is seeded once, when the row is first rendered.
/// Leaving edit mode without saving keeps whatever was typed, so entering
/// edit mode again shows the unsaved text rather than the current title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowEdit {
    editing: bool,
    pending_title: String,
}

impl RowEdit {
    pub fn new(title: &str) -> Self {
        Self {
            editing: false,
            pending_title: title.to_string(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn pending_title(&self) -> &str {
        &self.pending_title
    }

    pub fn set_pending_title(&mut self, title: String) {
        self.pending_title = title;
    }

    /// Flip between view and edit mode without saving
    pub fn toggle(&mut self) {
        self.editing = !self.editing;
    }

    pub fn can_save(&self) -> bool {
        self.editing && !self.pending_title.is_empty()
    }

    /// Leave edit mode and hand back the title to save
    pub fn save(&mut self) -> Option<String> {
        if !self.can_save() {
            return None;
        }
        self.editing = false;
        Some(self.pending_title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_draft_submit_resets_text() {
        let mut draft = AddDraft::default();
        assert!(!draft.can_submit());
        assert_eq!(draft.take_submission(), None);

        draft.set_text("Write tests".to_string());
        assert!(draft.can_submit());
        assert_eq!(draft.take_submission().as_deref(), Some("Write tests"));
        assert_eq!(draft.text(), "");
        assert!(!draft.can_submit());
    }

    #[test]
    fn test_row_starts_in_view_mode_with_title() {
        let row = RowEdit::new("Learn React");
        assert!(!row.is_editing());
        assert_eq!(row.pending_title(), "Learn React");
        assert!(!row.can_save());
    }

    #[test]
    fn test_row_save_returns_title_and_leaves_edit_mode() {
        let mut row = RowEdit::new("Learn React");
        row.toggle();
        row.set_pending_title("Learn React deeply".to_string());

        assert_eq!(row.save().as_deref(), Some("Learn React deeply"));
        assert!(!row.is_editing());
        assert_eq!(row.pending_title(), "Learn React deeply");
    }

    #[test]
    fn test_row_cancel_keeps_unsaved_text() {
        let mut row = RowEdit::new("Learn React");
        row.toggle();
        row.set_pending_title("half typed".to_string());
        row.toggle();
        assert!(!row.is_editing());

        row.toggle();
        assert_eq!(row.pending_title(), "half typed");
    }

    #[test]
    fn test_row_empty_title_cannot_be_saved() {
        let mut row = RowEdit::new("Learn React");
        row.toggle();
        row.set_pending_title(String::new());
        assert!(!row.can_save());
        assert_eq!(row.save(), None);
        assert!(row.is_editing());
    }

    #[test]
    fn test_row_save_outside_edit_mode_is_ignored() {
        let mut row = RowEdit::new("Learn React");
        assert_eq!(row.save(), None);
    }
}
