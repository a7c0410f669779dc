//! Integration tests for the TUI app driven by key events
//!
//! These drive `App` directly and render into a TestBackend.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use sortrace::ui::PlaybackMode;
use sortrace::{App, Config, SortAlgorithm};

use super::common::terminal::{buffer_contains, create_test_terminal_sized};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_size(app: &mut App, digits: &str) {
    press(app, KeyCode::Delete);
    for c in digits.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn app() -> App {
    App::new(Config::default().with_seed(42)).expect("app")
}

#[test]
fn test_enter_starts_race_and_shows_initial_frame() {
    let mut app = app();
    type_size(&mut app, "8");
    press(&mut app, KeyCode::Enter);

    let summary = app.summary().expect("race ran");
    assert_eq!(summary.size, 8);
    assert_eq!(summary.results.len(), SortAlgorithm::ALL.len());
    assert_eq!(app.mode(), PlaybackMode::Running);

    // Every lane shows its unsorted input before playback starts
    let bubble = app.lane_values(SortAlgorithm::Bubble).unwrap().to_vec();
    assert_eq!(bubble.len(), 8);
    for alg in SortAlgorithm::ALL {
        assert_eq!(app.lane_values(alg).unwrap(), bubble.as_slice());
    }
}

#[test]
fn test_ticks_drain_to_sorted_lanes() {
    let mut app = app();
    type_size(&mut app, "12");
    press(&mut app, KeyCode::Enter);

    while app.remaining() > 0 {
        app.on_tick();
    }

    for alg in SortAlgorithm::ALL {
        let values = app.lane_values(alg).unwrap();
        assert_eq!(values.len(), 12);
        assert!(sortrace::sort::is_sorted(values), "{alg}");
    }
}

#[test]
fn test_pause_and_step() {
    let mut app = app();
    type_size(&mut app, "10");
    press(&mut app, KeyCode::Enter);
    let queued = app.remaining();
    assert!(queued > 0);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.mode(), PlaybackMode::Paused);
    app.on_tick();
    assert_eq!(app.remaining(), queued);

    let lanes_with_frames = app
        .summary()
        .unwrap()
        .results
        .iter()
        .filter(|r| r.swaps > 0)
        .count();
    press(&mut app, KeyCode::Char('.'));
    assert_eq!(app.remaining(), queued - lanes_with_frames);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.mode(), PlaybackMode::Running);
    // Stepping only works while paused
    let before = app.remaining();
    app.step();
    assert_eq!(app.remaining(), before);
}

#[test]
fn test_cancel_drops_queued_frames() {
    let mut app = app();
    type_size(&mut app, "20");
    press(&mut app, KeyCode::Enter);
    assert!(app.remaining() > 0);

    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.remaining(), 0);
    // The summary of the cancelled race is kept
    assert_eq!(app.summary().unwrap().size, 20);
}

#[test]
fn test_invalid_size_keeps_previous_race() {
    let mut app = app();
    type_size(&mut app, "6");
    press(&mut app, KeyCode::Enter);
    let race_id = app.summary().unwrap().race_id;

    type_size(&mut app, "0");
    press(&mut app, KeyCode::Enter);
    assert!(app.size_input().error().is_some());
    assert_eq!(app.summary().unwrap().race_id, race_id);

    type_size(&mut app, "");
    press(&mut app, KeyCode::Enter);
    assert!(app.size_input().error().is_some());

    // Over the default max of 200
    type_size(&mut app, "5000");
    press(&mut app, KeyCode::Enter);
    assert!(app.size_input().error().is_some());
    assert_eq!(app.summary().unwrap().race_id, race_id);
}

#[test]
fn test_non_digits_ignored_and_backspace() {
    let mut app = app();
    assert_eq!(app.size_input().value(), "50");

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('7'));
    assert_eq!(app.size_input().value(), "57");
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit());

    let mut app = self::app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_draw_shows_every_lane() {
    let mut app = app();
    type_size(&mut app, "30");
    press(&mut app, KeyCode::Enter);

    let mut terminal = create_test_terminal_sized(150, 40);
    terminal.draw(|f| app.draw(f)).unwrap();
    let buffer = terminal.backend().buffer();

    for alg in SortAlgorithm::ALL {
        assert!(buffer_contains(buffer, alg.display_name()), "{alg}");
    }
    assert!(buffer_contains(buffer, "race #1"));
}

#[test]
fn test_draw_before_first_race() {
    let app = app();
    let mut terminal = create_test_terminal_sized(120, 30);
    terminal.draw(|f| app.draw(f)).unwrap();

    assert!(buffer_contains(
        terminal.backend().buffer(),
        "press Enter to start a race"
    ));
}

#[test]
fn test_subset_of_algorithms() {
    let config = Config::default()
        .with_seed(3)
        .with_algorithms(vec![SortAlgorithm::Heap, SortAlgorithm::Comb]);
    let mut app = App::new(config).unwrap();
    type_size(&mut app, "9");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.summary().unwrap().results.len(), 2);
    assert!(app.lane_values(SortAlgorithm::Bubble).is_none());
    assert_eq!(app.lane_values(SortAlgorithm::Heap).unwrap().len(), 9);
}

fn scripted(codes: &[KeyCode]) -> impl FnMut() -> std::io::Result<Option<Event>> {
    let mut events: VecDeque<Event> = codes
        .iter()
        .map(|&code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .collect();
    move || Ok(events.pop_front())
}

/// Playback slow enough that any wait on it would blow the timeout
fn slow_playback_app() -> App {
    let config = Config::default()
        .with_seed(8)
        .with_frame_interval(Duration::from_secs(60));
    App::new(config).unwrap()
}

#[tokio::test]
async fn test_event_loop_reads_keys_between_playback_frames() {
    let mut app = slow_playback_app();
    let mut terminal = create_test_terminal_sized(120, 30);

    let keys = [
        KeyCode::Delete,
        KeyCode::Char('7'),
        KeyCode::Enter,
        KeyCode::Char('p'),
        KeyCode::Char('q'),
    ];
    tokio::time::timeout(
        Duration::from_secs(5),
        app.event_loop(&mut terminal, scripted(&keys)),
    )
    .await
    .expect("keys handled without waiting for a playback frame")
    .unwrap();

    assert!(app.should_quit());
    assert_eq!(app.summary().unwrap().size, 7);
    assert_eq!(app.mode(), PlaybackMode::Paused);
    // Leaving the loop drops queued frames
    assert_eq!(app.remaining(), 0);
}

#[tokio::test]
async fn test_event_loop_plays_back_at_frame_cadence() {
    let config = Config::default()
        .with_seed(8)
        .with_frame_interval(Duration::from_millis(1));
    let mut app = App::new(config).unwrap();
    type_size(&mut app, "6");
    press(&mut app, KeyCode::Enter);

    let mut terminal = create_test_terminal_sized(120, 30);
    let mut polls = 0;
    let next_event = || {
        polls += 1;
        // Quit once, after enough input polls for every frame to play
        let quit = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        Ok((polls == 100).then_some(quit))
    };
    tokio::time::timeout(
        Duration::from_secs(30),
        app.event_loop(&mut terminal, next_event),
    )
    .await
    .unwrap()
    .unwrap();

    for alg in SortAlgorithm::ALL {
        let values = app.lane_values(alg).unwrap();
        assert!(sortrace::sort::is_sorted(values), "{alg}");
    }
}
