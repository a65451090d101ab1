//! The three page widgets.
//!
//! Each widget owns one piece of persisted state and its rendering, and
//! nothing else: every mutating operation re-reads the current value
//! from the store, computes the next value, persists it, then re-renders
//! from that same value.

pub mod counter;
pub mod theme;
pub mod todos;

pub use counter::CounterWidget;
pub use theme::{Theme, ThemeWidget};
pub use todos::TodoWidget;
