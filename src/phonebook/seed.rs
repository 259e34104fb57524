use crate::model::{Contact, ContactId};

const SEED: &[(&str, &str, &str)] = &[
    ("id-1", "Rosie Simpson", "459-12-56"),
    ("id-2", "Hermione Kline", "443-89-12"),
    ("id-3", "Eden Clements", "645-17-79"),
    ("id-4", "Annie Copeland", "227-91-26"),
];

/// The bundled default phonebook, used when no valid persisted list exists.
pub fn seed_contacts() -> Vec<Contact> {
    SEED.iter()
        .map(|(id, name, number)| Contact::new(ContactId::new(*id), *name, *number))
        .collect()
}
