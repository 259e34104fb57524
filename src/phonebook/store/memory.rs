use super::Storage;
use crate::error::{PhonebookError, Result};
use std::cell::{Cell, RefCell};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since the phonebook is
/// single-threaded, which lets the `Storage` trait take `&self` throughout.
#[derive(Default)]
pub struct InMemoryStorage {
    data: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw bytes, as if a previous session wrote them.
    pub fn with_data(bytes: impl Into<Vec<u8>>) -> Self {
        let storage = Self::default();
        *storage.data.borrow_mut() = Some(bytes.into());
        storage
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Current stored bytes, bypassing error simulation.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for InMemoryStorage {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        if self.simulate_read_error.get() {
            return Err(PhonebookError::Store("Simulated read error".to_string()));
        }
        Ok(self.data.borrow().clone())
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhonebookError::Store("Simulated write error".to_string()));
        }
        *self.data.borrow_mut() = Some(bytes.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://contacts".to_string()
    }
}
