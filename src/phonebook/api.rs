//! # API Facade
//!
//! [`PhonebookApi`] is the state container for one phonebook session. It owns
//! the authoritative contact list and the current filter text, and it is the
//! single entry point UI clients use to act on them.
//!
//! ## Role and Responsibilities
//!
//! - **Loads** the list once, from storage or from the bundled seed list
//! - **Dispatches** user intents to the command layer (`commands/*.rs`)
//! - **Writes through** to storage after every successful mutation
//! - **Projects** the visible contacts through the current filter
//!
//! ## Failure Semantics
//!
//! Validation and duplicate failures are returned to the caller and leave the
//! list untouched. Storage failures are never returned: a failed read falls
//! back to the seed list and a failed write is logged and reported as a
//! warning message, with the in-memory list remaining authoritative.
//!
//! ## Generic Over Storage
//!
//! `PhonebookApi<S: Storage>` is generic over the persistence backend:
//! - Production: `PhonebookApi<FileStorage>`
//! - Testing: `PhonebookApi<InMemoryStorage>`

use crate::commands;
use crate::error::{PhonebookError, Result};
use crate::model::{Contact, ContactId, NewContact};
use crate::seed::seed_contacts;
use crate::store::codec::{decode_contacts, encode_contacts};
use crate::store::Storage;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where the contact list came from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Storage,
    Seed,
}

pub struct PhonebookApi<S: Storage> {
    storage: S,
    contacts: Vec<Contact>,
    filter: String,
    source: LoadSource,
    config_dir: Option<PathBuf>,
}

impl<S: Storage> PhonebookApi<S> {
    /// Start a session: read the persisted list once, falling back to the
    /// seed list when nothing usable is stored.
    pub fn initialize(storage: S) -> Self {
        let (contacts, source) = load_contacts(&storage);
        Self {
            storage,
            contacts,
            filter: String::new(),
            source,
            config_dir: None,
        }
    }

    pub fn with_config_dir(mut self, dir: PathBuf) -> Self {
        self.config_dir = Some(dir);
        self
    }

    pub fn add_contact(&mut self, candidate: NewContact) -> Result<CmdResult> {
        let mut result = commands::add::run(&mut self.contacts, candidate)?;
        debug!(total = self.contacts.len(), "contact added");
        self.write_through(&mut result);
        Ok(result)
    }

    pub fn delete_contact(&mut self, id: &ContactId) -> CmdResult {
        self.delete_contacts(std::slice::from_ref(id))
    }

    pub fn delete_contacts(&mut self, ids: &[ContactId]) -> CmdResult {
        let mut result = commands::delete::run(&mut self.contacts, ids);
        if result.mutated() {
            debug!(
                removed = result.affected_contacts.len(),
                total = self.contacts.len(),
                "contacts deleted"
            );
            self.write_through(&mut result);
        }
        result
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Contacts matching the current filter, in list order.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        commands::filter::visible(&self.contacts, &self.filter)
    }

    pub fn list_contacts(&self) -> CmdResult {
        commands::filter::run(&self.contacts, &self.filter)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn source(&self) -> LoadSource {
        self.source
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        let dir = self
            .config_dir
            .as_ref()
            .ok_or_else(|| PhonebookError::Store("No config directory available".to_string()))?;
        commands::config::run(dir, action)
    }

    fn write_through(&self, result: &mut CmdResult) {
        let outcome = encode_contacts(&self.contacts).and_then(|bytes| self.storage.write(&bytes));
        match outcome {
            Ok(()) => debug!(location = %self.storage.location(), "contacts saved"),
            Err(e) => {
                warn!(
                    error = %e,
                    location = %self.storage.location(),
                    "failed to save contacts; changes are kept for this session only"
                );
                result.add_message(CmdMessage::warning(format!(
                    "Changes could not be saved: {}",
                    e
                )));
            }
        }
    }
}

fn load_contacts<S: Storage>(storage: &S) -> (Vec<Contact>, LoadSource) {
    let bytes = match storage.read() {
        Ok(Some(bytes)) if !bytes.iter().all(u8::is_ascii_whitespace) => bytes,
        Ok(_) => {
            debug!(location = %storage.location(), "no stored contacts, using seed list");
            return (seed_contacts(), LoadSource::Seed);
        }
        Err(e) => {
            warn!(
                error = %e,
                location = %storage.location(),
                "failed to read stored contacts, using seed list"
            );
            return (seed_contacts(), LoadSource::Seed);
        }
    };

    match decode_contacts(&bytes) {
        Ok(contacts) => {
            debug!(count = contacts.len(), "loaded stored contacts");
            (contacts, LoadSource::Storage)
        }
        Err(e) => {
            warn!(
                error = %e,
                location = %storage.location(),
                "stored contacts are unreadable, using seed list"
            );
            (seed_contacts(), LoadSource::Seed)
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
