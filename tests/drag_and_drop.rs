//! End-to-end tests of the tag screen through the public app API.
//!
//! Every scenario renders into a 60x20 test terminal. With that size the
//! chips of `["#a", "#b", "#c"]` sit on rows 6..=8 at columns 2, 11 and 20,
//! and "Add new" follows at column 29.

use std::time::{Duration, Instant};

use dragtags_config::Config;
use dragtags_protocol::Message;
use dragtags_tui::App;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(60, 20)).unwrap()
}

fn app_with(titles: &[&str], animation_duration_ms: u64) -> App {
    App::with_config(&Config {
        tags: titles.iter().map(ToString::to_string).collect(),
        animation_duration_ms,
    })
}

fn titles(app: &App) -> Vec<String> {
    app.controller()
        .tags()
        .iter()
        .map(|tag| tag.title.clone())
        .collect()
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn drag_swaps_then_waits_for_animation() {
    let mut terminal = test_terminal();
    let mut app = app_with(&["#a", "#b", "#c"], 250);
    let start = Instant::now();

    terminal.draw(|frame| app.view_at(frame, start)).unwrap();

    // Grab "#a" and move it over "#b"
    app.update_at(Message::PointerDown { column: 4, row: 7 }, start);
    app.update_at(Message::PointerDrag { column: 5, row: 7 }, start);
    app.update_at(Message::PointerDrag { column: 13, row: 7 }, start);
    assert_eq!(titles(&app), ["#b", "#a", "#c"]);

    // The next layout pass places "#a" in the middle slot
    terminal.draw(|frame| app.view_at(frame, start)).unwrap();

    // Swapping is suppressed until the animation had time to settle
    let during = start + Duration::from_millis(100);
    app.update_at(Message::PointerDrag { column: 22, row: 7 }, during);
    assert_eq!(titles(&app), ["#b", "#a", "#c"]);

    let after = start + Duration::from_millis(250);
    app.tick(after);
    terminal.draw(|frame| app.view_at(frame, after)).unwrap();
    app.update_at(Message::PointerDrag { column: 22, row: 7 }, after);
    assert_eq!(titles(&app), ["#b", "#c", "#a"]);

    app.update_at(Message::PointerUp { column: 22, row: 7 }, after);
    assert!(app.controller().tags().dragged().is_none());
    assert!(app.controller().session().dragged().is_none());
}

#[test]
fn zero_duration_swaps_on_next_tick() {
    let mut terminal = test_terminal();
    let mut app = app_with(&["#a", "#b", "#c"], 0);
    let now = Instant::now();

    terminal.draw(|frame| app.view_at(frame, now)).unwrap();
    app.update_at(Message::PointerDown { column: 4, row: 7 }, now);
    app.update_at(Message::PointerDrag { column: 5, row: 7 }, now);
    app.update_at(Message::PointerDrag { column: 13, row: 7 }, now);
    assert!(!app.controller().is_dnd_enabled());

    app.tick(now);
    assert!(app.controller().is_dnd_enabled());
}

#[test]
fn click_removes_and_modal_adds() {
    let mut terminal = test_terminal();
    let mut app = app_with(&["#a", "#b", "#c"], 250);
    let now = Instant::now();

    terminal.draw(|frame| app.view_at(frame, now)).unwrap();

    // Click "#b"
    app.update_at(Message::PointerDown { column: 13, row: 7 }, now);
    app.update_at(Message::PointerUp { column: 13, row: 7 }, now);
    assert_eq!(titles(&app), ["#a", "#c"]);

    terminal.draw(|frame| app.view_at(frame, now)).unwrap();
    assert!(!screen(&terminal).contains("#b"));

    // "Add new" moved left after the removal
    let add_new = app.tags_layout().add_new.unwrap();
    app.update_at(
        Message::PointerDown {
            column: add_new.x,
            row: add_new.y + 1,
        },
        now,
    );
    app.update_at(
        Message::PointerUp {
            column: add_new.x,
            row: add_new.y + 1,
        },
        now,
    );
    assert!(app.modal().is_some());

    terminal.draw(|frame| app.view_at(frame, now)).unwrap();
    assert!(screen(&terminal).contains("Add a tag..."));

    // Submitting nothing raises the alert
    app.update(Message::ModalSubmit);
    terminal.draw(|frame| app.view_at(frame, now)).unwrap();
    assert!(screen(&terminal).contains("Please enter new tag first"));
    app.update(Message::Escape);

    for ch in "#new".chars() {
        app.update(Message::ModalInput { ch });
    }
    app.update(Message::ModalSubmit);
    assert!(app.modal().is_none());
    assert_eq!(titles(&app), ["#a", "#c", "#new"]);

    terminal.draw(|frame| app.view_at(frame, now)).unwrap();
    assert!(screen(&terminal).contains("✕ #new"));
}

#[test]
fn too_small_terminal_disables_dragging() {
    let mut app = app_with(&["#a", "#b"], 250);
    let now = Instant::now();

    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|frame| app.view_at(frame, now)).unwrap();
    assert!(screen(&terminal).contains("Terminal too small"));

    app.update_at(Message::PointerDown { column: 4, row: 7 }, now);
    app.update_at(Message::PointerDrag { column: 5, row: 7 }, now);
    assert!(app.controller().session().dragged().is_none());
}
