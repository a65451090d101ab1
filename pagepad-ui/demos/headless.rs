//! Headless end-to-end demo.
//!
//! Mounts the page on a `MemorySurface` over the durable sqlite store,
//! replays a short interaction script, and prints the rendered state.
//! Run it twice to watch the state survive the restart.

use std::fs;
use std::fs::File;

use pagepad_store::{SqliteBackend, Store, paths};
use pagepad_ui::widgets::{counter, theme, todos};
use pagepad_ui::{MemorySurface, Page, PageEvent, Surface};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("pagepad-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let db = paths::store_db().expect("Failed to resolve data directory");
    if let Some(dir) = db.parent() {
        fs::create_dir_all(dir).expect("Failed to create data directory");
    }
    let store = Store::new(SqliteBackend::new(&db).expect("Failed to open store database"));

    let page = Page::new(store);
    let mut surface = MemorySurface::new().with_prefers_dark(true);
    page.mount(&mut surface).expect("Failed to mount page");

    println!("-- after mount --");
    print_state(&surface);

    let script = [
        PageEvent::Click {
            target: theme::TOGGLE_ID.to_string(),
        },
        PageEvent::Click {
            target: counter::INC_ID.to_string(),
        },
        PageEvent::Click {
            target: counter::INC_ID.to_string(),
        },
        PageEvent::Click {
            target: counter::DEC_ID.to_string(),
        },
    ];
    for event in &script {
        page.handle(&mut surface, event).expect("Event failed");
    }

    surface.set_input_value(todos::INPUT_ID, "  water the plants  ");
    page.handle(
        &mut surface,
        &PageEvent::Submit {
            target: todos::FORM_ID.to_string(),
        },
    )
    .expect("Submit failed");

    println!("-- after interactions --");
    print_state(&surface);
    println!("store database: {}", db.display());
}

fn print_state(surface: &MemorySurface) {
    println!(
        "theme: {} (toggle label: {})",
        surface
            .root_attr(theme::THEME_ATTR)
            .unwrap_or_else(|| "unset".to_string()),
        surface.text(theme::TOGGLE_ID).unwrap_or_default(),
    );
    println!(
        "count: {} (decrement {})",
        surface.text(counter::COUNT_ID).unwrap_or_default(),
        if surface.is_disabled(counter::DEC_ID) {
            "disabled"
        } else {
            "enabled"
        },
    );
    for row in surface.rows(todos::LIST_ID) {
        println!("todo: {} [{}]", row.text, row.delete_id);
    }
}
