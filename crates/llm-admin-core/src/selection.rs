use serde::{Deserialize, Serialize};

/// Most models that can be compared side by side at once.
pub const MAX_COMPARED_MODELS: usize = 5;

/// The set of models picked for comparison. Owned by the application
/// state and passed down to whatever renders it; insertion order is
/// the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    ids: Vec<String>,
}

impl ModelSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a model in or out of the selection and reports whether
    /// it is selected afterwards. Toggling a sixth model on is a no-op.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|m| m == id) {
            self.ids.remove(pos);
            false
        } else if self.ids.len() < MAX_COMPARED_MODELS {
            self.ids.push(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|m| m == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARED_MODELS
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut selection = ModelSelection::new();

        assert!(selection.toggle("bard"));
        assert!(selection.contains("bard"));

        assert!(!selection.toggle("bard"));
        assert!(!selection.contains("bard"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_capped_at_five_models() {
        let mut selection = ModelSelection::new();
        for id in ["a", "b", "c", "d", "e"] {
            assert!(selection.toggle(id));
        }
        assert!(selection.is_full());

        // Sixth model is silently ignored.
        assert!(!selection.toggle("f"));
        assert_eq!(selection.len(), 5);
        assert!(!selection.contains("f"));

        // Deselecting an existing model still works at the cap.
        assert!(!selection.toggle("c"));
        assert_eq!(selection.len(), 4);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut selection = ModelSelection::new();
        selection.toggle("bard");
        selection.toggle("bert");
        selection.toggle("alexa");

        assert_eq!(selection.ids(), ["bard", "bert", "alexa"]);
    }

    #[test]
    fn test_clear() {
        let mut selection = ModelSelection::new();
        selection.toggle("bard");
        selection.clear();
        assert!(selection.is_empty());
    }
}
