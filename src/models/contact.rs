//! Contact model representing a person in the contact book.

use crate::domain::{BirthdayDate, PhoneNumber, ValidationError};
use crate::error::{ContactBookError, ContactBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the contact book.
///
/// The name is the directory key and cannot change after creation. Phone
/// numbers keep insertion order and may repeat; nothing here enforces
/// uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ContactRecord")]
pub struct Contact {
    /// Name of the contact, unique within a directory
    name: String,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// Date of birth, if one has been set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

/// Unvalidated wire form; names go through `Contact::new` on the way in.
#[derive(Deserialize)]
struct ContactRecord {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    birthday: Option<BirthdayDate>,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ContactBookError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        let mut contact = Contact::new(record.name)?;
        contact.phones = record.phones;
        contact.birthday = record.birthday;
        Ok(contact)
    }
}

impl Contact {
    /// Create a new contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> ContactBookResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> ContactBookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        tracing::debug!(contact = %self.name, phone = %raw, "Phone added");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `PhoneNotFound` if `old` is not on the contact
    /// - `Validation(InvalidPhone)` if `new` is malformed
    ///
    /// On error the phone list is left untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactBookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| ContactBookError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = PhoneNumber::new(new)?;
        tracing::debug!(contact = %self.name, old = %old, new = %new, "Phone edited");
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    ///
    /// Removing a number the contact does not have is not an error.
    /// Returns whether a phone was removed.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.phones.iter().position(|p| p == raw) {
            Some(index) => {
                self.phones.remove(index);
                tracing::debug!(contact = %self.name, phone = %raw, "Phone removed");
                true
            }
            None => false,
        }
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == raw)
    }

    /// Validate `raw` as `DD.MM.YYYY` and overwrite any existing birthday.
    pub fn set_birthday(&mut self, raw: &str) -> ContactBookResult<()> {
        let birthday = BirthdayDate::parse(raw)?;
        self.birthday = Some(birthday);
        tracing::debug!(contact = %self.name, birthday = %birthday, "Birthday set");
        Ok(())
    }

    /// Phone numbers joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line description: `Contact name: <name>, phones: <p1>, <p2>`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
