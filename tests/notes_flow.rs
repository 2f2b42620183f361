use std::rc::Rc;

use chrono::Utc;
use notes_app::analytics::notes_per_day;
use notes_app::config::{ChartOrder, Config};
use notes_app::state::{Action, AppState, INVALID_CREDENTIALS};
use notes_app::storage::{read_notes, MemoryStore};

fn login(state: &mut AppState, username: &str, password: &str) {
    state.apply(Action::OpenLogin);
    state.apply(Action::SetUsername(username.to_string()));
    state.apply(Action::SetPassword(password.to_string()));
    state.apply(Action::Login);
}

#[test]
fn note_survives_logout_and_login() {
    let memory = MemoryStore::new();
    let mut state = AppState::new(Config::default(), Rc::new(memory.clone()));
    assert!(state.store.notes().is_empty());
    assert!(!state.session.logged_in);

    login(&mut state, "user", "pass");
    assert!(state.session.logged_in);
    assert!(!state.session.show_login);

    let now = Utc::now();
    state.apply(Action::AddNote(now));
    let note = state.store.selected_note().cloned().expect("new note is selected");
    state.apply(Action::UpdateNote(note.with_title("Groceries")));
    let note = state.store.selected_note().cloned().expect("still selected");
    state.apply(Action::UpdateNote(note.with_tag("urgent")));

    state.apply(Action::Logout);
    assert!(!state.session.logged_in);
    login(&mut state, "user", "pass");

    let notes = state.store.notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Groceries");
    assert_eq!(notes[0].tags, vec!["urgent".to_string()]);

    let chart = notes_per_day(notes, ChartOrder::FirstSeen);
    assert_eq!(chart.len(), 1);
    assert_eq!(chart[0].date, now.date_naive().format("%Y-%m-%d").to_string());
    assert_eq!(chart[0].count, 1);

    assert_eq!(read_notes(&memory, "notes").unwrap(), notes);
}

#[test]
fn reload_hydrates_from_storage_with_fresh_session() {
    let memory = MemoryStore::new();
    {
        let mut state = AppState::new(Config::default(), Rc::new(memory.clone()));
        login(&mut state, "user", "pass");
        state.apply(Action::AddNote(Utc::now()));
        state.apply(Action::AddNote(Utc::now()));
    }

    let state = AppState::new(Config::default(), Rc::new(memory.clone()));
    assert_eq!(state.store.notes().len(), 2);
    assert!(!state.session.logged_in);
    assert_eq!(state.store.selected_id(), None);
}

#[test]
fn wrong_password_keeps_dialog_open_until_corrected() {
    let mut state = AppState::new(Config::default(), Rc::new(MemoryStore::new()));
    login(&mut state, "user", "letmein");
    assert!(!state.session.logged_in);
    assert!(state.session.show_login);
    assert_eq!(state.session.login_error, INVALID_CREDENTIALS);

    state.apply(Action::SetPassword("pass".to_string()));
    state.apply(Action::Login);
    assert!(state.session.logged_in);
    assert!(state.session.login_error.is_empty());
}

#[test]
fn custom_storage_key_is_honored() {
    let memory = MemoryStore::new();
    let config = Config {
        storage_key: "scratch".to_string(),
        ..Config::default()
    };
    let mut state = AppState::new(config, Rc::new(memory.clone()));
    state.apply(Action::AddNote(Utc::now()));
    assert!(memory.raw("notes").is_none());
    assert_eq!(read_notes(&memory, "scratch").unwrap().len(), 1);
}
