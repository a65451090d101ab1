//! Persisted-state page widgets.
//!
//! Three independent widgets (theme toggle, counter, todo list), each
//! following the same load → render → mutate → persist → re-render cycle
//! over two injected collaborators: a [`Store`] for persistence and a
//! [`Surface`] for rendering. [`Page`] wires all three and dispatches
//! surface events to them.
//!
//! [`Store`]: pagepad_store::Store

pub mod page;
pub mod surface;
pub mod widgets;

pub use page::{Page, PageEvent};
pub use surface::{MemorySurface, Surface};
pub use widgets::{CounterWidget, Theme, ThemeWidget, TodoWidget};
