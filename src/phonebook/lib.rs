//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contacts library**: a validated, de-duplicated
//! list of `{id, name, number}` entries with a text filter and best-effort
//! local persistence. The bundled binary is one client of it; a web front end
//! could drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - The session state container: contact list + filter      │
//! │  - Loads once, writes through after every mutation          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, validation.rs)               │
//! │  - Pure business logic over a contact list                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Narrow Storage trait: read bytes / write bytes           │
//! │  - FileStorage (production), InMemoryStorage (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Model
//!
//! Validation and duplicate failures are returned as [`error::PhonebookError`]
//! values the user can act on. Storage failures never abort a session: they
//! are logged through `tracing` and the in-memory list stays authoritative.
//!
//! ## Module Overview
//!
//! - [`api`]: The session state container and entry point for all operations
//! - [`commands`]: Business logic for add, delete, filter and config
//! - [`validation`]: Name and phone number rules
//! - [`store`]: Storage abstraction, implementations and the JSON codec
//! - [`model`]: Core data types (`Contact`, `ContactId`, `NewContact`)
//! - [`seed`]: The bundled default contacts
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod seed;
pub mod store;
pub mod validation;
