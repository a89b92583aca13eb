/// Whether a task row is showing its description or an edit box.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing {
        text: String,
    },
}

impl EditMode {
    /// Opens the edit box pre-filled with the current description.
    pub fn enter(&mut self, current: &str) {
        *self = EditMode::Editing {
            text: current.to_string(),
        };
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing { .. })
    }

    /// Text in the edit box, if the row is being edited.
    pub fn text(&self) -> Option<&str> {
        match self {
            EditMode::Viewing => None,
            EditMode::Editing { text } => Some(text),
        }
    }

    /// Replaces the edit box text. Ignored while viewing.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        if let EditMode::Editing { text } = self {
            *text = new_text.into();
        }
    }

    /// Leaves edit mode and returns the trimmed description to save.
    ///
    /// Blank text is refused: the row stays in edit mode and `None` is returned.
    pub fn commit(&mut self) -> Option<String> {
        let description = self.text()?.trim();
        if description.is_empty() {
            return None;
        }
        let description = description.to_string();
        *self = EditMode::Viewing;
        Some(description)
    }

    /// Leaves edit mode without saving anything.
    pub fn cancel(&mut self) {
        *self = EditMode::Viewing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_viewing() {
        let mode = EditMode::default();

        assert!(!mode.is_editing());
        assert_eq!(mode.text(), None);
    }

    #[test]
    fn can_enter_with_current_description() {
        let mut mode = EditMode::default();

        mode.enter("buy milk");

        assert_eq!(mode.text(), Some("buy milk"));
    }

    #[test]
    fn can_commit_edited_text() {
        let mut mode = EditMode::default();
        mode.enter("buy milk");
        mode.set_text(" buy oat milk ");

        let committed = mode.commit();

        assert_eq!(committed.as_deref(), Some("buy oat milk"));
        assert_eq!(mode, EditMode::Viewing);
    }

    #[test]
    fn cannot_commit_blank_text() {
        let mut mode = EditMode::default();
        mode.enter("buy milk");
        mode.set_text("  ");

        assert_eq!(mode.commit(), None);
        assert!(mode.is_editing());
    }

    #[test]
    fn cancel_discards_text() {
        let mut mode = EditMode::default();
        mode.enter("buy milk");
        mode.set_text("something else");

        mode.cancel();

        assert_eq!(mode, EditMode::Viewing);
    }

    #[test]
    fn set_text_while_viewing_does_nothing() {
        let mut mode = EditMode::default();

        mode.set_text("ignored");

        assert_eq!(mode, EditMode::Viewing);
        assert_eq!(mode.commit(), None);
    }
}
