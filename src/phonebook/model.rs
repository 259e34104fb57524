use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier of a contact.
///
/// Always serialized as a JSON string. Numeric ids, as written by clock-based
/// id schemes, are accepted on read and kept in their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => ContactId(text),
            RawId::Number(number) => ContactId(number.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(id: ContactId, name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            number: number.into(),
        }
    }

    /// Name key used for duplicate detection: trimmed and lower-cased.
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Number key used for duplicate detection: trimmed only.
    pub fn number_key(&self) -> &str {
        self.number.trim()
    }
}

/// A contact as submitted by the user, before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub number: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    pub fn number_key(&self) -> &str {
        self.number.trim()
    }
}

pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Number,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => f.write_str("name"),
            ContactField::Number => f.write_str("number"),
        }
    }
}

/// Rejection of a candidate that collides with an existing contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateContact {
    /// The name as the user submitted it.
    pub name: String,
    /// Fields that collide, in `Name`, `Number` order. Never empty.
    pub conflicts: Vec<ContactField>,
}

impl DuplicateContact {
    pub fn conflicts_on(&self, field: ContactField) -> bool {
        self.conflicts.contains(&field)
    }
}

impl fmt::Display for DuplicateContact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .conflicts
            .iter()
            .map(|field| format!("same {}", field))
            .collect();
        write!(
            f,
            "{} is already in contacts ({})",
            self.name.trim(),
            fields.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_accepts_numeric_json() {
        let contact: Contact =
            serde_json::from_str(r#"{"id": 1700000000123, "name": "Ann", "number": "1"}"#)
                .unwrap();
        assert_eq!(contact.id, ContactId::new("1700000000123"));
    }

    #[test]
    fn id_serializes_as_string() {
        let contact = Contact::new(ContactId::new("id-1"), "Ann", "459-12-56");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"id":"id-1","name":"Ann","number":"459-12-56"}"#);
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(ContactId::generate(), ContactId::generate());
    }

    #[test]
    fn keys_normalize_whitespace_and_case() {
        let candidate = NewContact::new("  Rosie SIMPSON ", " 459-12-56  ");
        assert_eq!(candidate.name_key(), "rosie simpson");
        assert_eq!(candidate.number_key(), "459-12-56");
    }

    #[test]
    fn duplicate_message_names_fields() {
        let dup = DuplicateContact {
            name: " Ann ".to_string(),
            conflicts: vec![ContactField::Name, ContactField::Number],
        };
        assert_eq!(
            dup.to_string(),
            "Ann is already in contacts (same name, same number)"
        );
        assert!(dup.conflicts_on(ContactField::Number));
    }
}
