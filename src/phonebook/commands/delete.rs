use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Contact, ContactId};

/// Remove contacts by id. Every entry carrying a requested id is removed, so
/// loaded lists with repeated ids are cleaned up too. Unknown ids are a no-op
/// and only produce an informational message.
pub fn run(contacts: &mut Vec<Contact>, ids: &[ContactId]) -> CmdResult {
    let mut result = CmdResult::default();

    for id in ids {
        let mut removed = Vec::new();
        contacts.retain(|c| {
            if &c.id == id {
                removed.push(c.clone());
                false
            } else {
                true
            }
        });

        if removed.is_empty() {
            result.add_message(CmdMessage::info(format!("No contact with id {}", id)));
        }
        for contact in removed {
            result.add_message(CmdMessage::success(format!(
                "Contact deleted ({}): {}",
                contact.id, contact.name
            )));
            result.affected_contacts.push(contact);
        }
    }

    result
}
