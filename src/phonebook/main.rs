//! # Phonebook CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination. Everything the
//! CLI does goes through `phonebook::api`, so the library stays free of
//! terminal concerns.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprint!("{}", cli::render_error(&e));
        std::process::exit(1);
    }
}
