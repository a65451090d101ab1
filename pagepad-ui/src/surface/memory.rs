//! Headless in-memory surface.

use std::collections::{HashMap, HashSet};

use super::Surface;

/// A rendered list row: visible text plus the identifier of its delete
/// control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub text: String,
    pub delete_id: String,
}

/// An in-memory [`Surface`] with no real rendering.
///
/// Tests and demos use it to observe exactly what the widgets would have
/// drawn: attributes, texts, disabled flags, and list rows are all
/// inspectable.
#[derive(Debug, Default)]
pub struct MemorySurface {
    prefers_dark: bool,
    root_attrs: HashMap<String, String>,
    texts: HashMap<String, String>,
    inputs: HashMap<String, String>,
    disabled: HashSet<String>,
    lists: HashMap<String, Vec<ListRow>>,
}

impl MemorySurface {
    /// Create a surface reporting a light color-scheme preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reported color-scheme preference.
    pub fn with_prefers_dark(mut self, prefers_dark: bool) -> Self {
        self.prefers_dark = prefers_dark;
        self
    }

    /// The rows currently rendered into a list element.
    pub fn rows(&self, list_id: &str) -> &[ListRow] {
        self.lists.get(list_id).map_or(&[], Vec::as_slice)
    }

    /// Whether a control is currently disabled.
    pub fn is_disabled(&self, id: &str) -> bool {
        self.disabled.contains(id)
    }
}

impl Surface for MemorySurface {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn root_attr(&self, name: &str) -> Option<String> {
        self.root_attrs.get(name).cloned()
    }

    fn set_root_attr(&mut self, name: &str, value: &str) {
        self.root_attrs.insert(name.to_string(), value.to_string());
    }

    fn text(&self, id: &str) -> Option<String> {
        self.texts.get(id).cloned()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.texts.insert(id.to_string(), text.to_string());
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) {
        if disabled {
            self.disabled.insert(id.to_string());
        } else {
            self.disabled.remove(id);
        }
    }

    fn input_value(&self, id: &str) -> Option<String> {
        self.inputs.get(id).cloned()
    }

    fn set_input_value(&mut self, id: &str, value: &str) {
        self.inputs.insert(id.to_string(), value.to_string());
    }

    fn clear_rows(&mut self, list_id: &str) {
        self.lists.remove(list_id);
    }

    fn append_row(&mut self, list_id: &str, text: &str, delete_id: &str) {
        self.lists
            .entry(list_id.to_string())
            .or_default()
            .push(ListRow {
                text: text.to_string(),
                delete_id: delete_id.to_string(),
            });
    }
}
