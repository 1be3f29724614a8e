use crate::core::{Contact, ContactId, ContactStatus, ImportedUser, NewContact};
use std::collections::HashSet;

/// In-memory contact list, kept sorted by name after every insertion.
///
/// Status changes and deletions leave the relative order of the remaining
/// contacts untouched.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以匯入的使用者取代目前內容，全部設為 Active 並依名稱排序
    pub fn initialize(&mut self, records: Vec<ImportedUser>) {
        self.contacts = records
            .into_iter()
            .map(|user| Contact {
                id: ContactId::generate(),
                name: user.name,
                email: user.email,
                phone: user.phone,
                status: ContactStatus::Active,
            })
            .collect();
        self.sort_by_name();
    }

    pub fn insert(&mut self, new_contact: NewContact) -> Contact {
        let contact = Contact {
            id: ContactId::generate(),
            name: new_contact.name,
            email: new_contact.email.trim().to_string(),
            phone: new_contact.phone,
            status: new_contact.status.unwrap_or_default(),
        };
        self.contacts.push(contact.clone());
        self.sort_by_name();
        contact
    }

    pub fn delete_by_id(&mut self, id: &ContactId) -> bool {
        match self.contacts.iter().position(|c| &c.id == id) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sets `target` on every listed contact that is not already in that state.
    /// Returns only the ids that actually flipped.
    pub fn set_status_for_ids(
        &mut self,
        ids: &HashSet<ContactId>,
        target: ContactStatus,
    ) -> HashSet<ContactId> {
        let mut changed = HashSet::new();
        for contact in self.contacts.iter_mut() {
            if ids.contains(&contact.id) && contact.status != target {
                contact.status = target;
                changed.insert(contact.id);
            }
        }
        changed
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find_by_id(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    // stable, so equal names keep insertion order
    fn sort_by_name(&mut self) {
        self.contacts.sort_by(|a, b| a.name.cmp(&b.name));
    }
}
