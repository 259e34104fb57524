//! Field validation for contact entries.
//!
//! Both validators trim their input and test it against a fixed pattern. They
//! return the human-readable message for a failing field, or an empty string
//! when the field is valid, so a form can show every failing field at once.
//!
//! Valid names:
//! - One or more Latin (`a-z`, `A-Z`) or Cyrillic (`а-я`, `А-Я`) letters
//! - Followed by any number of letters or spaces, each optionally preceded
//!   by a single apostrophe, dash or space
//!
//! Valid numbers:
//! - Optional leading `+`
//! - Digit groups of bounded length, optionally separated by a space, dash
//!   or dot, with an optional parenthesized group near the start
//! - At least five digits in total

use crate::model::{ContactField, NewContact};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

pub const NAME_ERROR: &str = "Name may contain only letters, apostrophe, dash and spaces. \
For example Adrian, Jacob Mercer, Charles de Batz de Castelmore d`Artagnan";

pub const NUMBER_ERROR: &str =
    "Phone number must be digits and can contain spaces, dashes, parentheses and can start with +";

// Digit classes are spelled `[0-9]`: `\d` in this engine also matches non-ASCII digits.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Zа-яА-Я]+(['\- ]?[a-zA-Zа-яА-Я ])*$").expect("name pattern compiles")
});

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\+?[0-9]{1,4}?[-.\s]?\(?[0-9]{1,3}?\)?[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,4}[-.\s]?[0-9]{1,9}$",
    )
    .expect("number pattern compiles")
});

/// Validates a contact name.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_name;
///
/// assert!(validate_name("Jacob Mercer").is_empty());
/// assert!(validate_name("  Anna-Maria ").is_empty());
/// assert!(!validate_name("R2D2").is_empty());
/// assert!(!validate_name("   ").is_empty());
/// ```
pub fn validate_name(input: &str) -> String {
    if NAME_PATTERN.is_match(input.trim()) {
        String::new()
    } else {
        NAME_ERROR.to_string()
    }
}

/// Validates a phone number.
///
/// # Examples
/// ```
/// use phonebook::validation::validate_number;
///
/// assert!(validate_number("459-12-56").is_empty());
/// assert!(validate_number("+38 (050) 123-45-67").is_empty());
/// assert!(!validate_number("123").is_empty());
/// ```
pub fn validate_number(input: &str) -> String {
    if NUMBER_PATTERN.is_match(input.trim()) {
        String::new()
    } else {
        NUMBER_ERROR.to_string()
    }
}

/// Per-field validation messages. An empty message means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub name: String,
    pub number: String,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.number.is_empty()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Number => &self.number,
        }
    }

    /// Failing fields with their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactField, &str)> + '_ {
        [ContactField::Name, ContactField::Number]
            .into_iter()
            .map(move |field| (field, self.get(field)))
            .filter(|(_, message)| !message.is_empty())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Runs both validators independently; neither short-circuits the other.
pub fn validate_contact(candidate: &NewContact) -> FieldErrors {
    FieldErrors {
        name: validate_name(&candidate.name),
        number: validate_number(&candidate.number),
    }
}
