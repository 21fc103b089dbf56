//! Generated command with a hand-edit escape hatch
//!
//! The displayed command normally tracks the compiler output. While a hand
//! edit is in progress, refreshes are suppressed; committing the edit makes
//! the typed text authoritative until the next refresh overwrites it.

/// Authoritative command string plus an optional in-progress hand edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableCommand {
    /// Text currently considered the command
    committed: String,
    /// Last compiler output seen by [`Self::refresh`]
    compiled: String,
    /// In-progress hand edit
    draft: Option<String>,
}

impl EditableCommand {
    pub fn new(compiled: impl Into<String>) -> Self {
        let compiled = compiled.into();
        Self {
            committed: compiled.clone(),
            compiled,
            draft: None,
        }
    }

    /// Accept fresh compiler output.
    ///
    /// Overwrites any committed hand edit. Ignored for display while a hand
    /// edit is in progress; returns whether the displayed text was replaced.
    pub fn refresh(&mut self, compiled: String) -> bool {
        self.compiled = compiled;
        if self.draft.is_some() {
            return false;
        }
        self.committed = self.compiled.clone();
        true
    }

    /// Start a hand edit seeded with the current command
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.committed.clone());
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn push(&mut self, c: char) {
        if let Some(draft) = self.draft.as_mut() {
            draft.push(c);
        }
    }

    pub fn pop(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.pop();
        }
    }

    pub fn clear_draft(&mut self) {
        if let Some(draft) = self.draft.as_mut() {
            draft.clear();
        }
    }

    /// Replace the whole draft
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.draft.is_some() {
            self.draft = Some(text.into());
        }
    }

    /// Finish the hand edit; the typed text becomes the command.
    /// Returns `false` when no edit was in progress.
    pub fn commit(&mut self) -> bool {
        match self.draft.take() {
            Some(draft) => {
                self.committed = draft;
                true
            }
            None => false,
        }
    }

    /// Text to show: the draft while editing, otherwise the command
    pub fn displayed(&self) -> &str {
        self.draft.as_deref().unwrap_or(&self.committed)
    }

    /// The authoritative command (what copy writes)
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Whether the shown text is a committed hand edit rather than compiler output
    ///
    /// False while a draft is open, even if the compiler moved on underneath it.
    pub fn is_hand_edited(&self) -> bool {
        self.draft.is_none() && self.committed != self.compiled
    }
}
