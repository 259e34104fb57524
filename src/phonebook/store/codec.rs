use crate::error::{PhonebookError, Result};
use crate::model::Contact;

/// Serialize a contact list to its persisted JSON array form.
pub fn encode_contacts(contacts: &[Contact]) -> Result<Vec<u8>> {
    serde_json::to_vec(contacts).map_err(PhonebookError::Serialization)
}

/// Parse a persisted contact list.
///
/// Fails on invalid JSON and on valid JSON of the wrong shape (anything but an
/// array of `{id, name, number}` objects).
pub fn decode_contacts(bytes: &[u8]) -> Result<Vec<Contact>> {
    serde_json::from_slice(bytes).map_err(PhonebookError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactId;
    use crate::seed::seed_contacts;

    #[test]
    fn list_survives_encode_and_decode() {
        let mut contacts = seed_contacts();
        contacts.insert(0, Contact::new(ContactId::generate(), "Ann", "+38 (050) 123-45-67"));

        let decoded = decode_contacts(&encode_contacts(&contacts).unwrap()).unwrap();
        assert_eq!(decoded, contacts);
    }

    #[test]
    fn empty_array_is_valid() {
        assert_eq!(decode_contacts(b"[]").unwrap(), Vec::new());
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            decode_contacts(b"not json"),
            Err(PhonebookError::Serialization(_))
        ));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(decode_contacts(br#"{"contacts": []}"#).is_err());
        assert!(decode_contacts(br#"[{"id": "1", "name": "Ann"}]"#).is_err());
        assert!(decode_contacts(br#"["Ann"]"#).is_err());
        assert!(decode_contacts(br#""not json""#).is_err());
    }
}
