//! Todo list widget.

use log::warn;
use pagepad_store::{Store, StoreError};

use crate::surface::Surface;

/// Store key for the persisted todo list (a JSON array of strings).
pub const TODOS_KEY: &str = "todos";

/// Element id of the list element.
pub const LIST_ID: &str = "todo-list";

/// Element id of the text input.
pub const INPUT_ID: &str = "todo-input";

/// Element id of the submit form.
pub const FORM_ID: &str = "todo-form";

/// Element id of the clear-all control.
pub const CLEAR_ID: &str = "todo-clear";

const DELETE_ID_PREFIX: &str = "todo-del-";

/// The delete-control id for the row at `idx`.
pub fn delete_id(idx: usize) -> String {
    format!("{DELETE_ID_PREFIX}{idx}")
}

/// The row index a delete-control id addresses, if it is one.
pub fn parse_delete_id(id: &str) -> Option<usize> {
    id.strip_prefix(DELETE_ID_PREFIX)?.parse().ok()
}

/// Widget owning the persisted todo list and its rendering.
pub struct TodoWidget {
    store: Store,
}

impl TodoWidget {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The current list, read fresh from the store.
    ///
    /// Absence and deserialization failure both yield an empty list;
    /// backend errors still propagate.
    pub fn todos(&self) -> Result<Vec<String>, StoreError> {
        match self.store.get(TODOS_KEY) {
            Ok(items) => Ok(items.unwrap_or_default()),
            Err(StoreError::Deserialization(err)) => {
                warn!("discarding unreadable todo list: {err}");
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    /// Persist the full list, overwriting prior contents.
    pub fn save(&self, items: &[String]) -> Result<(), StoreError> {
        self.store.set(TODOS_KEY, &items)
    }

    /// Re-render the list: clear all rows, then append one per item in
    /// order, each with a positionally-addressed delete control.
    pub fn render(&self, surface: &mut dyn Surface, items: &[String]) {
        surface.clear_rows(LIST_ID);
        for (idx, item) in items.iter().enumerate() {
            surface.append_row(LIST_ID, item, &delete_id(idx));
        }
    }

    /// Form submit: trim the input; if anything is left, append it to
    /// the freshly-read list, persist, re-render, and clear the input.
    /// Whitespace-only input silently does nothing.
    pub fn submit(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        let input = surface.input_value(INPUT_ID).unwrap_or_default();
        let value = input.trim();
        if value.is_empty() {
            return Ok(());
        }

        let mut next = self.todos()?;
        next.push(value.to_string());
        self.save(&next)?;
        self.render(surface, &next);
        surface.set_input_value(INPUT_ID, "");
        Ok(())
    }

    /// Delete click: re-read the list at click time and remove the entry
    /// at `idx`. The index is positional at render time; resolving it
    /// against the freshly-read list is what keeps it valid. Out of
    /// range is a no-op.
    pub fn remove(&self, surface: &mut dyn Surface, idx: usize) -> Result<(), StoreError> {
        let mut next = self.todos()?;
        if idx < next.len() {
            next.remove(idx);
        }
        self.save(&next)?;
        self.render(surface, &next);
        Ok(())
    }

    /// Clear click: persist an empty list and re-render.
    pub fn clear(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        self.save(&[])?;
        self.render(surface, &[]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_id_round_trip() {
        assert_eq!(parse_delete_id(&delete_id(0)), Some(0));
        assert_eq!(parse_delete_id(&delete_id(12)), Some(12));
    }

    #[test]
    fn test_parse_delete_id_rejects_other_ids() {
        assert_eq!(parse_delete_id("todo-clear"), None);
        assert_eq!(parse_delete_id("todo-del-"), None);
        assert_eq!(parse_delete_id("todo-del-x"), None);
        assert_eq!(parse_delete_id("count-dec"), None);
    }
}
