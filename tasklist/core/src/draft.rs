/// Text typed into the add-task box but not yet submitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Takes the trimmed draft and clears it, or returns `None` and leaves the
    /// draft alone when it is blank.
    pub fn submit(&mut self) -> Option<String> {
        let description = self.text.trim();
        if description.is_empty() {
            return None;
        }
        let description = description.to_string();
        self.text.clear();
        Some(description)
    }
}
