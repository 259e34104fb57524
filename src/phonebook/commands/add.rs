use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{Contact, ContactField, ContactId, DuplicateContact, NewContact};
use crate::validation::validate_contact;

/// Validate `candidate` and prepend it to `contacts`.
///
/// Both fields are validated before anything else and every failing field is
/// reported. A candidate matching an existing contact by name OR by number is
/// rejected. On any rejection `contacts` is left untouched.
pub fn run(contacts: &mut Vec<Contact>, candidate: NewContact) -> Result<CmdResult> {
    let errors = validate_contact(&candidate);
    if !errors.is_empty() {
        return Err(PhonebookError::Validation(errors));
    }

    if let Some(duplicate) = find_duplicate(contacts, &candidate) {
        return Err(PhonebookError::Duplicate(duplicate));
    }

    let contact = Contact::new(
        fresh_id(contacts),
        candidate.name.trim(),
        candidate.number.trim(),
    );
    contacts.insert(0, contact.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added: {} ({})",
        contact.name, contact.number
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}

/// Fields on which `candidate` collides with any existing contact.
pub fn find_duplicate(contacts: &[Contact], candidate: &NewContact) -> Option<DuplicateContact> {
    let name_key = candidate.name_key();
    let number_key = candidate.number_key();

    let mut conflicts = Vec::new();
    if contacts.iter().any(|c| c.name_key() == name_key) {
        conflicts.push(ContactField::Name);
    }
    if contacts.iter().any(|c| c.number_key() == number_key) {
        conflicts.push(ContactField::Number);
    }

    if conflicts.is_empty() {
        None
    } else {
        Some(DuplicateContact {
            name: candidate.name.clone(),
            conflicts,
        })
    }
}

fn fresh_id(contacts: &[Contact]) -> ContactId {
    loop {
        let id = ContactId::generate();
        if !contacts.iter().any(|c| c.id == id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_contacts;
    use crate::validation::{NAME_ERROR, NUMBER_ERROR};

    #[test]
    fn prepends_valid_contact() {
        let mut contacts = seed_contacts();
        let before = contacts.len();

        let result = run(&mut contacts, NewContact::new("Jacob Mercer", "555-12-34")).unwrap();

        assert_eq!(contacts.len(), before + 1);
        assert_eq!(contacts[0].name, "Jacob Mercer");
        assert_eq!(contacts[0].number, "555-12-34");
        assert_eq!(result.affected_contacts, vec![contacts[0].clone()]);
        assert!(result.mutated());
    }

    #[test]
    fn stores_trimmed_fields() {
        let mut contacts = Vec::new();
        run(&mut contacts, NewContact::new("  Ann  ", " 555-12-34 ")).unwrap();
        assert_eq!(contacts[0].name, "Ann");
        assert_eq!(contacts[0].number, "555-12-34");
    }

    #[test]
    fn assigns_unique_ids() {
        let mut contacts = Vec::new();
        run(&mut contacts, NewContact::new("Ann", "555-12-34")).unwrap();
        run(&mut contacts, NewContact::new("Bob", "555-12-35")).unwrap();
        assert_ne!(contacts[0].id, contacts[1].id);
        assert_eq!(contacts[0].name, "Bob");
    }

    #[test]
    fn invalid_fields_are_all_reported() {
        let mut contacts = seed_contacts();
        let err = run(&mut contacts, NewContact::new("R2D2", "call me")).unwrap_err();

        match err {
            PhonebookError::Validation(errors) => {
                assert_eq!(errors.name, NAME_ERROR);
                assert_eq!(errors.number, NUMBER_ERROR);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(contacts, seed_contacts());
    }

    #[test]
    fn validation_runs_before_duplicate_check() {
        let mut contacts = seed_contacts();
        let err = run(&mut contacts, NewContact::new("Rosie Simpson", "nope")).unwrap_err();
        assert!(matches!(err, PhonebookError::Validation(_)));
    }

    #[test]
    fn rejects_same_name_with_new_number() {
        let mut contacts = seed_contacts();
        let err =
            run(&mut contacts, NewContact::new("  rosie SIMPSON ", "111-11-11")).unwrap_err();

        match err {
            PhonebookError::Duplicate(dup) => {
                assert_eq!(dup.conflicts, vec![ContactField::Name]);
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
        assert_eq!(contacts, seed_contacts());
    }

    #[test]
    fn rejects_same_number_with_new_name() {
        let mut contacts = seed_contacts();
        let err =
            run(&mut contacts, NewContact::new("Jacob Mercer", " 459-12-56 ")).unwrap_err();

        match err {
            PhonebookError::Duplicate(dup) => {
                assert_eq!(dup.conflicts, vec![ContactField::Number]);
                assert_eq!(
                    dup.to_string(),
                    "Jacob Mercer is already in contacts (same number)"
                );
            }
            other => panic!("expected duplicate error, got {:?}", other),
        }
        assert_eq!(contacts, seed_contacts());
    }

    #[test]
    fn reports_both_conflicting_fields() {
        let contacts = seed_contacts();
        let dup =
            find_duplicate(&contacts, &NewContact::new("Eden Clements", "645-17-79")).unwrap();
        assert_eq!(dup.conflicts, vec![ContactField::Name, ContactField::Number]);
    }

    #[test]
    fn no_duplicate_in_empty_list() {
        assert!(find_duplicate(&[], &NewContact::new("Ann", "555-12-34")).is_none());
    }
}
