//! Rendering surface abstraction.

mod memory;

pub use memory::{ListRow, MemorySurface};

/// The rendering surface the widgets draw on.
///
/// A document-like collaborator: elements are addressed by string
/// identifier, the root carries presentation attributes, and list
/// elements hold ordered rows. Widgets only ever write derived state
/// into the surface; the persistent store stays the source of truth.
///
/// Implementations dispatch events back to the page as [`PageEvent`]s
/// carrying the clicked element's identifier.
///
/// [`PageEvent`]: crate::page::PageEvent
pub trait Surface {
    /// Whether the surface reports a dark color-scheme preference.
    fn prefers_dark(&self) -> bool;

    /// Read a presentation attribute on the root element.
    fn root_attr(&self, name: &str) -> Option<String>;

    /// Write a presentation attribute on the root element.
    fn set_root_attr(&mut self, name: &str, value: &str);

    /// Read an element's text content.
    fn text(&self, id: &str) -> Option<String>;

    /// Write an element's text content.
    fn set_text(&mut self, id: &str, text: &str);

    /// Enable or disable a control.
    fn set_disabled(&mut self, id: &str, disabled: bool);

    /// Read an input field's current value.
    fn input_value(&self, id: &str) -> Option<String>;

    /// Write an input field's value.
    fn set_input_value(&mut self, id: &str, value: &str);

    /// Remove all rows from a list element.
    fn clear_rows(&mut self, list_id: &str);

    /// Append a row to a list element.
    ///
    /// The row shows `text` and carries a delete control addressable by
    /// `delete_id`.
    fn append_row(&mut self, list_id: &str, text: &str, delete_id: &str);
}
