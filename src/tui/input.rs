use super::TuiCommand;
use crate::arena::{AddOutcome, Arena};
use crate::feed::board::FeedBoard;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route one key press to whichever view currently owns input.
///
/// The modal, when open, takes every key. Otherwise the welcome overlay
/// and the arena are exclusive: arena shortcuts do nothing while the
/// overlay is up, and "Add Your First Lane" only exists on the overlay.
pub fn handle_key(arena: &mut Arena, key: KeyEvent, board: &FeedBoard) -> Option<TuiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TuiCommand::Quit);
    }

    if arena.modal_open() {
        handle_modal_key(arena, key)
    } else if arena.welcome_visible() {
        handle_welcome_key(arena, key)
    } else {
        handle_arena_key(arena, key, board)
    }
}

fn handle_modal_key(arena: &mut Arena, key: KeyEvent) -> Option<TuiCommand> {
    match key.code {
        KeyCode::Esc => {
            arena.cancel_composer();
            None
        }
        KeyCode::Enter => match arena.commit_composer() {
            AddOutcome::Added { .. } => Some(TuiCommand::LanesChanged),
            AddOutcome::Rejected => None,
        },
        KeyCode::Backspace => {
            arena.composer_backspace();
            None
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            arena.composer_push(c);
            None
        }
        _ => None,
    }
}

fn handle_welcome_key(arena: &mut Arena, key: KeyEvent) -> Option<TuiCommand> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Enter => {
            arena.open_composer();
            None
        }
        KeyCode::Char('t') => {
            arena.toggle_display_mode();
            None
        }
        KeyCode::Char('q') => Some(TuiCommand::Quit),
        _ => None,
    }
}

fn handle_arena_key(arena: &mut Arena, key: KeyEvent, board: &FeedBoard) -> Option<TuiCommand> {
    let lane_count = arena.lanes().len();
    match key.code {
        KeyCode::Char('a') => {
            arena.open_composer();
            None
        }
        KeyCode::Char('C') => {
            arena.clear_all();
            Some(TuiCommand::LanesChanged)
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            arena.remove_selected();
            (arena.lanes().len() != lane_count).then_some(TuiCommand::LanesChanged)
        }
        KeyCode::Char('h') | KeyCode::Left => {
            arena.layout_mut().select_prev();
            None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            arena.layout_mut().select_next(lane_count);
            None
        }
        KeyCode::Char('g') | KeyCode::Home => {
            arena.layout_mut().select_first();
            None
        }
        KeyCode::Char('G') | KeyCode::End => {
            arena.layout_mut().select_last(lane_count);
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let selected = arena.layout().selected();
            let post_count = arena
                .lanes()
                .get(selected)
                .map_or(0, |lane| board.post_count(lane.source_name.as_str()));
            arena.layout_mut().scroll_posts_down(post_count);
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            arena.layout_mut().scroll_posts_up();
            None
        }
        KeyCode::Char('t') => {
            arena.toggle_display_mode();
            None
        }
        KeyCode::Char('w') => {
            arena.show_welcome();
            None
        }
        KeyCode::Char('r') => Some(TuiCommand::Refresh),
        KeyCode::Char('q') => Some(TuiCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(arena: &mut Arena, board: &FeedBoard, s: &str) {
        for c in s.chars() {
            handle_key(arena, press(KeyCode::Char(c)), board);
        }
    }

    #[test]
    fn test_welcome_enter_opens_modal() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        assert!(handle_key(&mut arena, press(KeyCode::Enter), &board).is_none());
        assert!(arena.modal_open());
    }

    #[test]
    fn test_modal_swallows_shortcuts() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        handle_key(&mut arena, press(KeyCode::Char('a')), &board);

        // 'q' and 't' are text while the modal is open
        type_str(&mut arena, &board, "qt");
        assert_eq!(arena.composer().buffer(), "qt");
        assert!(!arena.display_mode().is_dark());

        let cmd = handle_key(&mut arena, press(KeyCode::Enter), &board);
        assert_eq!(cmd, Some(TuiCommand::LanesChanged));
        assert_eq!(arena.lanes().names(), vec!["qt"]);
        assert!(!arena.welcome_visible());
    }

    #[test]
    fn test_shifted_chars_typed_into_modal() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        arena.open_composer();
        handle_key(
            &mut arena,
            KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT),
            &board,
        );
        handle_key(
            &mut arena,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::ALT),
            &board,
        );
        assert_eq!(arena.composer().buffer(), "R");
    }

    #[test]
    fn test_blank_commit_stays_open() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        arena.open_composer();
        type_str(&mut arena, &board, "   ");
        assert!(handle_key(&mut arena, press(KeyCode::Enter), &board).is_none());
        assert!(arena.modal_open());
        assert_eq!(arena.composer().buffer(), "   ");
    }

    #[test]
    fn test_escape_cancels() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        arena.open_composer();
        type_str(&mut arena, &board, "golang");
        handle_key(&mut arena, press(KeyCode::Esc), &board);
        assert!(!arena.modal_open());
        assert!(arena.lanes().is_empty());
    }

    #[test]
    fn test_arena_keys_ignored_behind_welcome() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        let _ = arena.add_lane("rust");
        arena.show_welcome();

        assert!(handle_key(&mut arena, press(KeyCode::Char('C')), &board).is_none());
        assert!(handle_key(&mut arena, press(KeyCode::Char('x')), &board).is_none());
        assert!(handle_key(&mut arena, press(KeyCode::Char('r')), &board).is_none());
        assert_eq!(arena.lanes().len(), 1);
    }

    #[test]
    fn test_arena_delete_and_clear() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        for name in ["a", "b", "c"] {
            let _ = arena.add_lane(name);
        }

        handle_key(&mut arena, press(KeyCode::Right), &board);
        let cmd = handle_key(&mut arena, press(KeyCode::Char('x')), &board);
        assert_eq!(cmd, Some(TuiCommand::LanesChanged));
        assert_eq!(arena.lanes().names(), vec!["a", "c"]);

        let cmd = handle_key(&mut arena, press(KeyCode::Char('C')), &board);
        assert_eq!(cmd, Some(TuiCommand::LanesChanged));
        assert!(arena.lanes().is_empty());
        assert!(!arena.welcome_visible());

        // Nothing left to delete
        assert!(handle_key(&mut arena, press(KeyCode::Delete), &board).is_none());
    }

    #[test]
    fn test_logo_key_returns_to_welcome() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        let _ = arena.add_lane("rust");
        handle_key(&mut arena, press(KeyCode::Char('w')), &board);
        assert!(arena.welcome_visible());
    }

    #[test]
    fn test_post_scroll_limited_by_board() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        let _ = arena.add_lane("rust");
        handle_key(&mut arena, press(KeyCode::Char('j')), &board);
        assert_eq!(arena.layout().post_scroll(0), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        assert_eq!(
            handle_key(&mut arena, press(KeyCode::Char('q')), &board),
            Some(TuiCommand::Quit)
        );

        arena.open_composer();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut arena, ctrl_c, &board), Some(TuiCommand::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut arena = Arena::new();
        let board = FeedBoard::new();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert!(handle_key(&mut arena, key, &board).is_none());
        assert!(!arena.modal_open());
    }
}
