//! Page wiring and event dispatch.

use log::debug;
use pagepad_store::{Store, StoreError};

use crate::surface::Surface;
use crate::widgets::{CounterWidget, ThemeWidget, TodoWidget, counter, theme, todos};

/// A surface event, targeted at an element by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A control was clicked.
    Click { target: String },
    /// A form was submitted. The surface has already suppressed any
    /// default navigation; the input's value is read back through the
    /// surface, not carried on the event.
    Submit { target: String },
}

/// The page: all three widgets over one shared store handle.
///
/// No widget depends on another; the page only routes events to them.
pub struct Page {
    theme: ThemeWidget,
    counter: CounterWidget,
    todos: TodoWidget,
}

impl Page {
    pub fn new(store: Store) -> Self {
        Self {
            theme: ThemeWidget::new(store.clone()),
            counter: CounterWidget::new(store.clone()),
            todos: TodoWidget::new(store),
        }
    }

    /// Initialize every widget. Call exactly once, after the surface
    /// signals it is ready for rendering.
    pub fn mount(&self, surface: &mut dyn Surface) -> Result<(), StoreError> {
        self.theme.init(surface)?;
        self.counter.init(surface)?;
        let items = self.todos.todos()?;
        self.todos.render(surface, &items);
        Ok(())
    }

    /// Route a surface event to the widget owning its target element.
    ///
    /// Events for unknown targets are ignored.
    pub fn handle(&self, surface: &mut dyn Surface, event: &PageEvent) -> Result<(), StoreError> {
        match event {
            PageEvent::Click { target } => match target.as_str() {
                theme::TOGGLE_ID => self.theme.toggle(surface),
                counter::INC_ID => self.counter.increment(surface),
                counter::DEC_ID => self.counter.decrement(surface),
                counter::RESET_ID => self.counter.reset(surface),
                todos::CLEAR_ID => self.todos.clear(surface),
                other => {
                    if let Some(idx) = todos::parse_delete_id(other) {
                        self.todos.remove(surface, idx)
                    } else {
                        debug!("ignoring click on {other}");
                        Ok(())
                    }
                }
            },
            PageEvent::Submit { target } => {
                if target == todos::FORM_ID {
                    self.todos.submit(surface)
                } else {
                    debug!("ignoring submit from {target}");
                    Ok(())
                }
            }
        }
    }

    pub fn theme(&self) -> &ThemeWidget {
        &self.theme
    }

    pub fn counter(&self) -> &CounterWidget {
        &self.counter
    }

    pub fn todos(&self) -> &TodoWidget {
        &self.todos
    }
}
