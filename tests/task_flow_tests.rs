use taskpad::core::action::{Action, DUPLICATE_MESSAGE, DUPLICATE_TITLE, Effect, Notice, update};
use taskpad::core::config::ResolvedConfig;
use taskpad::core::state::Home;
use taskpad::core::task::TaskId;
use taskpad::tui::components::{DialogEvent, DialogState};
use taskpad::tui::component::EventHandler;
use taskpad::tui::event::TuiEvent;
use taskpad::tui::{Focus, TuiState, dispatch};

// ============================================================================
// Helper Functions
// ============================================================================

fn titles(home: &Home) -> Vec<String> {
    home.tasks().iter().map(|t| t.title.clone()).collect()
}

fn add(home: &mut Home, title: &str) -> TaskId {
    assert_eq!(update(home, Action::AddTask(title.into())), Effect::None);
    home.tasks().last().map(|t| t.id).unwrap()
}

/// Runs the dialog the way the event loop does: press, then dispatch the
/// continuation if there is one.
fn answer(home: &mut Home, mut dialog: DialogState, key: char) -> Effect {
    match dialog.handle_event(&TuiEvent::InputChar(key)) {
        Some(DialogEvent::Pressed(Some(action))) => update(home, action),
        Some(DialogEvent::Pressed(None)) | Some(DialogEvent::Dismissed) | None => Effect::None,
    }
}

fn send(home: &mut Home, tui: &mut TuiState, events: &[TuiEvent]) {
    for event in events {
        dispatch(home, tui, event.clone());
    }
}

fn typed(s: &str) -> Vec<TuiEvent> {
    s.chars().map(TuiEvent::InputChar).collect()
}

// ============================================================================
// Core scenarios
// ============================================================================

#[test]
fn test_add_then_duplicate_is_rejected() {
    let mut home = Home::new();
    add(&mut home, "Buy milk");

    let effect = update(&mut home, Action::AddTask("Buy milk".into()));

    match effect {
        Effect::ShowNotice(Notice { title, message }) => {
            assert_eq!(title, DUPLICATE_TITLE);
            assert_eq!(message, DUPLICATE_MESSAGE);
        }
        other => panic!("expected a notice, got {:?}", other),
    }
    assert_eq!(titles(&home), vec!["Buy milk"]);
}

#[test]
fn test_toggle_twice_restores() {
    let mut home = Home::new();
    let id = add(&mut home, "A");

    update(&mut home, Action::ToggleTaskDone(id));
    assert!(home.find(id).is_some_and(|t| t.done));
    update(&mut home, Action::ToggleTaskDone(id));
    assert!(home.find(id).is_some_and(|t| !t.done));
}

#[test]
fn test_confirmed_removal_keeps_order_of_others() {
    let mut home = Home::new();
    add(&mut home, "A");
    let b = add(&mut home, "B");
    add(&mut home, "C");

    let effect = update(&mut home, Action::RemoveTask(b));
    assert_eq!(effect, Effect::ConfirmRemoval(b));
    assert_eq!(home.task_count(), 3);

    assert_eq!(answer(&mut home, DialogState::confirm_removal(b), 'y'), Effect::None);
    assert_eq!(titles(&home), vec!["A", "C"]);
}

#[test]
fn test_declined_removal_changes_nothing() {
    let mut home = Home::new();
    let a = add(&mut home, "A");
    update(&mut home, Action::ToggleTaskDone(a));

    update(&mut home, Action::RemoveTask(a));
    answer(&mut home, DialogState::confirm_removal(a), 'n');

    assert_eq!(titles(&home), vec!["A"]);
    assert!(home.tasks()[0].done);
}

#[test]
fn test_edit_keeps_id_and_done() {
    let mut home = Home::new();
    let id = add(&mut home, "A");
    update(&mut home, Action::ToggleTaskDone(id));

    update(
        &mut home,
        Action::EditTask {
            id,
            title: "A2".into(),
        },
    );

    let task = home.find(id).unwrap();
    assert_eq!(task.title, "A2");
    assert!(task.done);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut home = Home::new();
    add(&mut home, "A");
    let ghost = TaskId(-1);

    assert_eq!(update(&mut home, Action::ToggleTaskDone(ghost)), Effect::None);
    assert_eq!(update(&mut home, Action::RemoveTask(ghost)), Effect::None);
    assert_eq!(update(&mut home, Action::ConfirmRemoveTask(ghost)), Effect::None);
    assert_eq!(
        update(
            &mut home,
            Action::EditTask {
                id: ghost,
                title: "x".into()
            }
        ),
        Effect::None
    );
    assert_eq!(titles(&home), vec!["A"]);
    assert!(!home.tasks()[0].done);
}

#[test]
fn test_confirmation_after_task_vanished_is_noop() {
    let mut home = Home::new();
    let a = add(&mut home, "A");
    add(&mut home, "B");

    // Two confirmations queued for the same task
    update(&mut home, Action::RemoveTask(a));
    update(&mut home, Action::ConfirmRemoveTask(a));
    update(&mut home, Action::ConfirmRemoveTask(a));

    assert_eq!(titles(&home), vec!["B"]);
}

// ============================================================================
// Through the TUI dispatcher
// ============================================================================

#[test]
fn test_keyboard_session() {
    let mut home = Home::new();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    send(&mut home, &mut tui, &typed("Buy milk"));
    send(&mut home, &mut tui, &[TuiEvent::Submit]);
    send(&mut home, &mut tui, &typed("Walk dog"));
    send(&mut home, &mut tui, &[TuiEvent::Submit]);
    assert_eq!(titles(&home), vec!["Buy milk", "Walk dog"]);

    // Move to the list, select the second row, mark it done
    send(
        &mut home,
        &mut tui,
        &[TuiEvent::Tab, TuiEvent::CursorDown, TuiEvent::InputChar(' ')],
    );
    assert_eq!(tui.focus, Focus::List);
    assert!(home.tasks()[1].done);

    // Rename it
    let mut events = vec![TuiEvent::InputChar('e'), TuiEvent::CursorEnd];
    events.extend(typed("!"));
    events.push(TuiEvent::Submit);
    send(&mut home, &mut tui, &events);
    assert_eq!(titles(&home), vec!["Buy milk", "Walk dog!"]);

    // Remove the first, confirming with the keyboard
    send(
        &mut home,
        &mut tui,
        &[TuiEvent::CursorHome, TuiEvent::InputChar('d')],
    );
    assert!(tui.dialog.is_some());
    send(&mut home, &mut tui, &[TuiEvent::CursorLeft, TuiEvent::Submit]);
    assert!(tui.dialog.is_none());
    assert_eq!(titles(&home), vec!["Walk dog!"]);
}

#[test]
fn test_blank_input_never_reaches_core() {
    let mut home = Home::new();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    send(&mut home, &mut tui, &[TuiEvent::Submit]);
    send(&mut home, &mut tui, &typed("   "));
    send(&mut home, &mut tui, &[TuiEvent::Submit]);

    assert_eq!(home.task_count(), 0);
    assert!(tui.dialog.is_none());
}
