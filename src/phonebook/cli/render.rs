use colored::{ColoredString, Colorize};
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::config::{PhonebookConfig, KEYS};
use phonebook::error::PhonebookError;
use phonebook::model::Contact;
use std::io::IsTerminal;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_NAME_WIDTH: usize = 40;

pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn styled(text: &str, use_color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if use_color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_contact_list(contacts: &[Contact], filter: &str, use_color: bool) -> String {
    if contacts.is_empty() {
        return if filter.is_empty() {
            "No contacts found.\n".to_string()
        } else {
            format!("No contacts match \"{}\".\n", filter)
        };
    }

    let name_width = contacts
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);
    let number_width = contacts.iter().map(|c| c.number.width()).max().unwrap_or(0);
    let index_width = contacts.len().to_string().len() + 1;

    let mut output = String::new();
    for (i, contact) in contacts.iter().enumerate() {
        let index = format!("{:>width$}", format!("{}.", i + 1), width = index_width);
        let name = truncate_to_width(&contact.name, name_width);
        let name_padding = name_width.saturating_sub(name.width());
        let number_padding = number_width.saturating_sub(contact.number.width());

        output.push_str(&format!(
            "  {} {}{}  {}{}  {}\n",
            styled(&index, use_color, |s| s.yellow()),
            styled(&name, use_color, |s| s.bold()),
            " ".repeat(name_padding),
            contact.number,
            " ".repeat(number_padding),
            styled(contact.id.as_str(), use_color, |s| s.dimmed()),
        ));
    }
    output
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => styled(&message.content, use_color, |s| s.dimmed()),
            MessageLevel::Success => styled(&message.content, use_color, |s| s.green()),
            MessageLevel::Warning => styled(&message.content, use_color, |s| s.yellow()),
            MessageLevel::Error => styled(&message.content, use_color, |s| s.red()),
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn render_config(config: &PhonebookConfig) -> String {
    KEYS.iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

/// Error text for stderr. Validation failures list every failing field.
pub fn render_error(error: &PhonebookError) -> String {
    match error {
        PhonebookError::Validation(errors) => {
            let mut output = String::from("Error: Contact not added\n");
            for (field, message) in errors.iter() {
                output.push_str(&format!("  {}: {}\n", field, message));
            }
            output
        }
        other => format!("Error: {}\n", other),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages, use_color()));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
