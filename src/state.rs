use std::rc::Rc;

use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::auth::{CredentialVerifier, StaticCredentials};
use crate::config::Config;
use crate::error::StoreError;
use crate::storage::{read_notes, write_notes, KeyValueStore};
use crate::types::{Note, NoteId};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// The notes collection, the current selection, and the slot they persist to.
#[derive(Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    storage: Rc<dyn KeyValueStore>,
    key: String,
    clear_selection_on_any_delete: bool,
    load_warning: Option<String>,
    persist_error: Option<String>,
}

impl NoteStore {
    /// Hydrates from storage. A malformed or unreadable blob yields an empty
    /// collection and a warning; the blob itself is left alone.
    pub fn load(storage: Rc<dyn KeyValueStore>, config: &Config) -> Self {
        let (notes, load_warning) = match read_notes(storage.as_ref(), &config.storage_key) {
            Ok(notes) => {
                log::info!("loaded {} notes from '{}'", notes.len(), config.storage_key);
                (notes, None)
            }
            Err(e) => {
                log::warn!("{}; starting with an empty collection", e);
                (Vec::new(), Some(load_warning_text(&e)))
            }
        };
        Self {
            notes,
            selected: None,
            storage,
            key: config.storage_key.clone(),
            clear_selection_on_any_delete: config.clear_selection_on_any_delete,
            load_warning,
            persist_error: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn selected_note(&self) -> Option<&Note> {
        let id = self.selected?;
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn persist_error(&self) -> Option<&str> {
        self.persist_error.as_deref()
    }

    /// Appends a default note created at `now` and selects it.
    ///
    /// The id is `now` in Unix milliseconds, bumped past the largest existing
    /// id when needed so ids stay unique.
    pub fn add(&mut self, now: DateTime<Utc>) -> NoteId {
        let stamp = now.timestamp_millis();
        let id = match self.notes.iter().map(|n| n.id).max() {
            Some(max) if max >= stamp => max + 1,
            _ => stamp,
        };
        self.notes.push(Note::new(id, now));
        self.selected = Some(id);
        log::info!("added note {}", id);
        self.persist();
        id
    }

    /// Replaces the note with the same id and selects it. Returns false, and
    /// changes nothing, when no such note exists.
    pub fn update(&mut self, note: Note) -> bool {
        let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) else {
            log::debug!("update for unknown note {} ignored", note.id);
            return false;
        };
        let id = note.id;
        *slot = note;
        self.selected = Some(id);
        log::debug!("updated note {}", id);
        self.persist();
        true
    }

    /// Removes the note with `id`, if any. Returns whether a note was removed.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() != before;
        if self.clear_selection_on_any_delete || self.selected == Some(id) {
            self.selected = None;
        }
        if removed {
            log::info!("removed note {}", id);
        }
        self.persist();
        removed
    }

    pub fn select(&mut self, id: NoteId) {
        if self.notes.iter().any(|n| n.id == id) {
            self.selected = Some(id);
        }
    }

    fn persist(&mut self) {
        match write_notes(self.storage.as_ref(), &self.key, &self.notes) {
            Ok(()) => {
                self.persist_error = None;
                self.load_warning = None;
            }
            Err(e) => {
                log::error!("{}", e);
                self.persist_error = Some(format!("Changes could not be saved: {}", e));
            }
        }
    }
}

fn load_warning_text(e: &StoreError) -> String {
    match e {
        StoreError::Parse(_) => {
            "Saved notes could not be read and were ignored. They will be replaced on the next change."
                .to_string()
        }
        other => format!("Saved notes could not be loaded: {}", other),
    }
}

/// Login gate state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub logged_in: bool,
    pub show_login: bool,
    pub username: String,
    pub password: String,
    pub login_error: String,
}

impl Session {
    pub fn login(&mut self, verifier: &dyn CredentialVerifier, username: &str, password: &str) -> bool {
        self.username = username.to_string();
        self.password = password.to_string();
        if verifier.verify(username, password) {
            self.logged_in = true;
            self.show_login = false;
            self.login_error.clear();
            log::info!("session opened for '{}'", username);
            true
        } else {
            self.login_error = INVALID_CREDENTIALS.to_string();
            log::warn!("rejected login for '{}'", username);
            false
        }
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.username.clear();
        self.password.clear();
        log::info!("session closed");
    }
}

pub enum Action {
    AddNote(DateTime<Utc>),
    UpdateNote(Note),
    DeleteNote(NoteId),
    SelectNote(NoteId),
    OpenLogin,
    CloseLogin,
    SetUsername(String),
    SetPassword(String),
    /// Submits the username and password currently in the dialog.
    Login,
    Logout,
}

/// Everything the top-level component owns.
#[derive(Clone)]
pub struct AppState {
    pub store: NoteStore,
    pub session: Session,
    pub config: Rc<Config>,
    verifier: Rc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(config: Config, storage: Rc<dyn KeyValueStore>) -> Self {
        let verifier = Rc::new(StaticCredentials::new(
            config.username.clone(),
            config.password.clone(),
        ));
        Self::with_verifier(config, storage, verifier)
    }

    pub fn with_verifier(
        config: Config,
        storage: Rc<dyn KeyValueStore>,
        verifier: Rc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            store: NoteStore::load(storage, &config),
            session: Session::default(),
            config: Rc::new(config),
            verifier,
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddNote(now) => {
                self.store.add(now);
            }
            Action::UpdateNote(note) => {
                self.store.update(note);
            }
            Action::DeleteNote(id) => {
                self.store.remove(id);
            }
            Action::SelectNote(id) => self.store.select(id),
            Action::OpenLogin => self.session.show_login = true,
            Action::CloseLogin => self.session.show_login = false,
            Action::SetUsername(username) => self.session.username = username,
            Action::SetPassword(password) => self.session.password = password,
            Action::Login => {
                let username = self.session.username.clone();
                let password = self.session.password.clone();
                self.session.login(self.verifier.as_ref(), &username, &password);
            }
            Action::Logout => self.session.logout(),
        }
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
