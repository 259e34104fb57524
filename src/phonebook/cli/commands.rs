//! # CLI Layer
//!
//! Dispatch for the `phonebook` binary. Every invocation is one session:
//! build the context (data dir, config, logging, storage), initialize the
//! contact list, apply one user intent, and render the result.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print output

use super::logging;
use super::render::{print_messages, render_config, render_contact_list, use_color};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use phonebook::api::{ConfigAction, PhonebookApi};
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::model::{ContactId, NewContact};
use phonebook::store::fs::FileStorage;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const HOME_ENV: &str = "PHONEBOOK_HOME";

struct AppContext {
    api: PhonebookApi<FileStorage>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, number }) => handle_add(&mut ctx, name, number),
        Some(Commands::List { filter }) => handle_list(&mut ctx, filter),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhonebookError::Config("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;

    // Read without repairing so rejected values are logged once logging is up.
    let loaded = PhonebookConfig::read(&data_dir);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    let problems = config.repair();
    logging::init(cli.verbose, &config.log_level);
    if let Err(e) = &loaded {
        warn!(error = %e, "config is unreadable, using defaults");
    }
    for problem in problems {
        warn!(error = %problem, "ignoring invalid config value");
    }
    debug!(data_dir = %data_dir.display(), storage_key = %config.storage_key, "starting session");

    let storage = FileStorage::new(data_dir.clone()).with_key(&config.storage_key);
    let api = PhonebookApi::initialize(storage).with_config_dir(data_dir);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, name: String, number: String) -> Result<()> {
    let result = ctx.api.add_contact(NewContact::new(name, number))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>) -> Result<()> {
    if let Some(filter) = filter {
        ctx.api.set_filter(filter);
    }
    let result = ctx.api.list_contacts();
    print!(
        "{}",
        render_contact_list(&result.listed_contacts, ctx.api.filter(), use_color())
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let ids: Vec<ContactId> = ids.iter().map(|id| ContactId::new(id.trim())).collect();
    let result = ctx.api.delete_contacts(&ids);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
