use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Keep a small list of names and phone numbers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding contacts and config (overrides PHONEBOOK_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Full name (quote names with spaces)
        name: String,

        /// Phone number, e.g. 459-12-56 or "+38 (050) 123-45-67"
        number: String,
    },

    /// List contacts, optionally filtered by name
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Show only contacts whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Delete one or more contacts by id
    #[command(alias = "rm", display_order = 3)]
    Delete {
        /// Ids of the contacts (as shown by `list`)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (storage-key, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
