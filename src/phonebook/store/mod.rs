//! # Storage Layer
//!
//! The phonebook persists its whole contact list under a single key, as a JSON
//! array of `{id, name, number}` objects. The [`Storage`] trait is the narrow
//! seam between the state container and whatever holds those bytes.
//!
//! ## Implementations
//!
//! - [`fs::FileStorage`]: Production storage
//!   - One file per key: `<data_dir>/<key>.json`
//!   - Atomic writes (temp file, then rename)
//!
//! - [`memory::InMemoryStorage`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! The storage layer knows nothing about contacts; encoding and decoding the
//! list lives in [`codec`].

use crate::error::Result;

pub mod codec;
pub mod fs;
pub mod memory;

pub const DEFAULT_STORAGE_KEY: &str = "contacts";

/// Raw key-value persistence for one serialized contact list.
pub trait Storage {
    /// Read the stored bytes.
    /// Returns Ok(None) when nothing has been stored yet.
    /// Returns Err only on actual I/O failures.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the stored bytes.
    fn write(&self, bytes: &[u8]) -> Result<()>;

    /// Human-readable location of the stored data (a path or a virtual URI).
    fn location(&self) -> String;
}

impl<T: Storage + ?Sized> Storage for &T {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&self, bytes: &[u8]) -> Result<()> {
        (**self).write(bytes)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
