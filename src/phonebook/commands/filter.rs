use crate::commands::CmdResult;
use crate::model::Contact;

/// Contacts whose name contains `filter`, case-insensitively, in list order.
pub fn visible<'a>(contacts: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    let needle = filter.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn run(contacts: &[Contact], filter: &str) -> CmdResult {
    let listed = visible(contacts, filter).into_iter().cloned().collect();
    CmdResult::default().with_listed_contacts(listed)
}
