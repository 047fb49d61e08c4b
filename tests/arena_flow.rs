//! End-to-end behavior of the lane arena: lane list, add-lane modal,
//! welcome overlay and display mode, driven through key presses.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lane_arena::arena::display::DisplayMode;
use lane_arena::arena::{AddOutcome, Arena};
use lane_arena::feed::board::FeedBoard;
use lane_arena::tui::input::handle_key;
use lane_arena::tui::TuiCommand;

fn press(arena: &mut Arena, code: KeyCode) -> Option<TuiCommand> {
    handle_key(arena, KeyEvent::new(code, KeyModifiers::NONE), &FeedBoard::new())
}

fn type_text(arena: &mut Arena, text: &str) {
    for c in text.chars() {
        press(arena, KeyCode::Char(c));
    }
}

/// Open the modal from whichever view is active, type, and press Enter.
fn add_via_keys(arena: &mut Arena, name: &str) -> Option<TuiCommand> {
    press(arena, KeyCode::Char('a'));
    assert!(arena.modal_open());
    type_text(arena, name);
    press(arena, KeyCode::Enter)
}

#[test]
fn test_first_run_flow() {
    let mut arena = Arena::new();
    assert!(arena.welcome_visible());

    // "Add Your First Lane"
    assert_eq!(add_via_keys(&mut arena, "rust"), Some(TuiCommand::LanesChanged));
    assert!(!arena.welcome_visible());
    assert!(!arena.modal_open());

    // "Add Lane" from the arena header
    add_via_keys(&mut arena, "golang");
    add_via_keys(&mut arena, "  zig  ");
    assert_eq!(arena.lanes().names(), vec!["rust", "golang", "zig"]);
}

#[test]
fn test_out_of_range_delete_never_changes_lanes() {
    let mut arena = Arena::new();
    for name in ["a", "b", "c"] {
        let _ = arena.add_lane(name);
    }
    for stale in [3, 4, 17, usize::MAX] {
        arena.remove_lane(stale);
        assert_eq!(arena.lanes().names(), vec!["a", "b", "c"]);
    }
}

#[test]
fn test_deletion_reindexes() {
    let mut arena = Arena::new();
    for name in ["a", "b", "c"] {
        let _ = arena.add_lane(name);
    }
    arena.remove_lane(1);
    assert_eq!(arena.lanes().names(), vec!["a", "c"]);
    arena.remove_lane(1);
    assert_eq!(arena.lanes().names(), vec!["a"]);
}

#[test]
fn test_trim_and_reject() {
    let mut arena = Arena::new();
    assert_eq!(arena.add_lane("   "), AddOutcome::Rejected);
    assert_eq!(arena.add_lane(""), AddOutcome::Rejected);
    assert_eq!(arena.lanes().len(), 0);

    assert_eq!(arena.add_lane("  foo  "), AddOutcome::Added { index: 0 });
    assert_eq!(arena.lanes().get(0).unwrap().source_name.as_str(), "foo");
}

#[test]
fn test_clear_all_does_not_restore_welcome() {
    let mut arena = Arena::new();
    add_via_keys(&mut arena, "rust");
    assert_eq!(press(&mut arena, KeyCode::Char('C')), Some(TuiCommand::LanesChanged));
    assert!(arena.lanes().is_empty());
    assert!(!arena.welcome_visible());

    // Still in the arena: "Add Lane" works without the overlay
    add_via_keys(&mut arena, "golang");
    assert_eq!(arena.lanes().names(), vec!["golang"]);
}

#[test]
fn test_logo_reenters_welcome_with_lanes() {
    let mut arena = Arena::new();
    add_via_keys(&mut arena, "rust");
    add_via_keys(&mut arena, "golang");

    press(&mut arena, KeyCode::Char('w'));
    assert!(arena.welcome_visible());
    assert_eq!(arena.lanes().len(), 2);

    // Only a successful add leaves the overlay again
    add_via_keys(&mut arena, "zig");
    assert!(!arena.welcome_visible());
    assert_eq!(arena.lanes().len(), 3);
}

#[test]
fn test_logo_reenters_welcome_when_empty() {
    let mut arena = Arena::new();
    add_via_keys(&mut arena, "rust");
    press(&mut arena, KeyCode::Char('C'));
    press(&mut arena, KeyCode::Char('w'));
    assert!(arena.welcome_visible());
}

#[test]
fn test_display_mode_independent() {
    let mut arena = Arena::new();
    add_via_keys(&mut arena, "rust");
    let names = arena.lanes().names();

    press(&mut arena, KeyCode::Char('t'));
    assert_eq!(arena.display_mode(), DisplayMode::Dark);
    assert_eq!(arena.lanes().names(), names);
    assert!(!arena.welcome_visible());
    assert!(!arena.modal_open());

    arena.show_welcome();
    press(&mut arena, KeyCode::Char('t'));
    assert_eq!(arena.display_mode(), DisplayMode::Light);
    assert!(arena.welcome_visible());
    assert_eq!(arena.lanes().names(), names);
}

#[test]
fn test_commit_vs_cancel() {
    let mut arena = Arena::new();
    press(&mut arena, KeyCode::Char('a'));
    type_text(&mut arena, "golang");
    press(&mut arena, KeyCode::Esc);

    assert!(arena.lanes().is_empty());
    assert!(!arena.modal_open());
    assert_eq!(arena.composer().buffer(), "");

    press(&mut arena, KeyCode::Char('a'));
    assert_eq!(arena.composer().buffer(), "");
}

#[test]
fn test_rejected_commit_allows_correction() {
    let mut arena = Arena::new();
    press(&mut arena, KeyCode::Char('a'));
    type_text(&mut arena, "  ");
    assert_eq!(press(&mut arena, KeyCode::Enter), None);
    assert!(arena.modal_open());

    type_text(&mut arena, "rust");
    assert_eq!(press(&mut arena, KeyCode::Enter), Some(TuiCommand::LanesChanged));
    assert_eq!(arena.lanes().names(), vec!["rust"]);
}

#[test]
fn test_duplicate_names_are_separate_lanes() {
    let mut arena = Arena::new();
    add_via_keys(&mut arena, "rust");
    add_via_keys(&mut arena, "rust");
    assert_eq!(arena.lanes().names(), vec!["rust", "rust"]);

    press(&mut arena, KeyCode::Char('x'));
    assert_eq!(arena.lanes().len(), 1);
}
