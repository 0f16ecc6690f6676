//! Name-keyed, in-memory store of contacts.

use super::birthdays::{self, UpcomingBirthday};
use crate::error::ContactBookResult;
use crate::models::Contact;
use chrono::NaiveDate;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Result of [`ContactDirectory::add_or_get`].
#[derive(Debug)]
pub struct Upserted<'a> {
    /// The stored contact, new or existing
    pub contact: &'a mut Contact,

    /// Whether the contact was created by this call
    pub created: bool,
}

/// The contact directory.
///
/// Owns every contact exclusively, keyed by name. Lives only in memory and
/// assumes a single caller; wrap it yourself if it must be shared.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory {
    contacts: HashMap<String, Contact>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the contact named `name`, creating and storing it if absent.
    ///
    /// An existing contact is returned as-is; its phones and birthday are
    /// never reset.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` when creating a contact with an
    /// empty name.
    pub fn add_or_get(&mut self, name: &str) -> ContactBookResult<Upserted<'_>> {
        match self.contacts.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(Upserted {
                contact: entry.into_mut(),
                created: false,
            }),
            Entry::Vacant(entry) => {
                let contact = Contact::new(name)?;
                tracing::debug!(contact = %name, "Contact created");
                Ok(Upserted {
                    contact: entry.insert(contact),
                    created: true,
                })
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Remove the contact named `name`. Deleting an unknown name is a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        let removed = self.contacts.remove(name);
        if removed.is_some() {
            tracing::debug!(contact = %name, "Contact deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// All contacts sorted by name, for stable listings.
    pub fn sorted_by_name(&self) -> Vec<&Contact> {
        let mut contacts: Vec<&Contact> = self.contacts.values().collect();
        contacts.sort_by(|a, b| a.name().cmp(b.name()));
        contacts
    }

    /// Contacts to congratulate within `window_days` of `today`.
    ///
    /// See [`birthdays::upcoming_birthdays`] for the window and weekend rules.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(self.contacts.values(), window_days, today)
    }
}
