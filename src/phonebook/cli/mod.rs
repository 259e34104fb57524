//! # CLI Behavior
//!
//! This is **one possible UI client** for the phonebook, standing in for the
//! form, list and filter widgets of a graphical front end.
//!
//! - `phonebook add <NAME> <NUMBER>`: the contact form. Invalid input prints
//!   one line per failing field.
//! - `phonebook list [--filter TEXT]`: the list view and filter box. Running
//!   `phonebook` with no arguments is the same as `phonebook list`.
//! - `phonebook delete <ID>...`: the delete buttons.
//! - `phonebook config [KEY] [VALUE]`: configuration.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `logging`: `tracing` subscriber setup
//! - `render`: Output formatting (tables, colors, messages, errors)
//! - `setup`: Argument parsing via clap

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
pub use render::render_error;
