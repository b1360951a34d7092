use crate::error::ValidationError;
use crate::models::Category;

pub(crate) const MAX_SELECTED: usize = 3;

/// Unsaved category picks on the preferences page.
///
/// Holds at most [`MAX_SELECTED`] distinct categories in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionBuffer {
    selected: Vec<Category>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &[Category] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_SELECTED
    }

    pub fn contains(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// Removes `category` if picked, appends it if there is room, otherwise does nothing.
    pub fn toggle(&mut self, category: Category) {
        if let Some(pos) = self.selected.iter().position(|c| *c == category) {
            self.selected.remove(pos);
        } else if !self.is_full() {
            self.selected.push(category);
        }
    }

    /// Replaces the contents, keeping first occurrences and at most three entries.
    pub fn reset(&mut self, from: &[Category]) {
        self.selected.clear();
        for c in from {
            if self.is_full() {
                break;
            }
            if !self.selected.contains(c) {
                self.selected.push(*c);
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Snapshot to send to the backend, or why it can't be sent.
    pub fn validate_for_commit(&self) -> Result<Vec<Category>, ValidationError> {
        if self.selected.is_empty() || self.selected.len() > MAX_SELECTED {
            return Err(ValidationError::SelectionSize);
        }
        Ok(self.selected.clone())
    }
}
