//! Command handlers for the assistant.
//!
//! Each handler calls into the directory or a contact and turns the outcome
//! into reply text. Errors bubble up as `ContactBookError` and are mapped to
//! user-facing text in one place, [`error_message`].

use super::command::{Command, ADD_USAGE, ENTER_USERNAME};
use crate::config::Config;
use crate::directory::ContactDirectory;
use crate::domain::ValidationError;
use crate::error::{ContactBookError, ContactBookResult};
use crate::matching::NameMatcher;
use crate::models::Contact;
use chrono::{Local, NaiveDate};

/// Command reference printed on startup and by `help`.
pub const HELP: &str = "\
  - hello: Get a greeting.
  - add [name] [phone]: Add or update a contact.
  - change [name] [old phone] [new phone]: Change a phone number.
  - remove-phone [name] [phone]: Remove a phone number.
  - phone [name]: Show the phone numbers of a contact.
  - show [name]: Show details of a contact.
  - all: Show all contacts.
  - delete [name]: Delete a contact.
  - add-birthday [name] [DD.MM.YYYY]: Add a birthday.
  - show-birthday [name]: Show a birthday.
  - birthdays: Show upcoming birthdays.
  - search [query]: Find contacts by name.
  - help: Show this list.
  - close or exit: Close the program.";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next command
    Text(String),
    /// Nothing to print
    Silent,
    /// Print the farewell and stop
    Exit(String),
}

/// Map a failed command to the text shown to the user.
pub fn error_message(err: &ContactBookError) -> String {
    match err {
        ContactBookError::Validation(ValidationError::EmptyName) => ENTER_USERNAME.to_string(),
        ContactBookError::Validation(ValidationError::InvalidPhone(_)) => ADD_USAGE.to_string(),
        ContactBookError::Validation(ValidationError::InvalidDate(_)) => {
            "Invalid date format. Use DD.MM.YYYY".to_string()
        }
        ContactBookError::PhoneNotFound(_) => "The old number is not correct".to_string(),
        ContactBookError::ContactNotFound(_) => "Contact not found.".to_string(),
        ContactBookError::MissingArgument(usage) => usage.to_string(),
    }
}

/// The interactive assistant: owns the directory and dispatches commands to it.
#[derive(Debug, Default)]
pub struct Assistant {
    directory: ContactDirectory,
    matcher: NameMatcher,
    config: Config,
}

impl Assistant {
    pub fn new(config: Config) -> Self {
        Self {
            directory: ContactDirectory::new(),
            matcher: NameMatcher::new(),
            config,
        }
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle one input line against the local calendar date.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        self.handle_line_on(line, Local::now().date_naive())
    }

    /// Handle one input line as if today were `today`.
    pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> Reply {
        match Command::parse(line).and_then(|command| self.execute(command, today)) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "Command failed");
                Reply::Text(error_message(&err))
            }
        }
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> ContactBookResult<Reply> {
        tracing::debug!(command = ?command, "Executing command");

        let text = match command {
            Command::Empty => return Ok(Reply::Silent),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => HELP.to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_phone(&name, &old_phone, &new_phone)?,
            Command::RemovePhone { name, phone } => self.remove_phone(&name, &phone)?,
            Command::Phone { name } => self.show_phones(&name),
            Command::Show { name } => self.show_contact(&name),
            Command::All => self.show_all(),
            Command::Delete { name } => self.delete_contact(&name)?,
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday)?,
            Command::ShowBirthday { name } => self.show_birthday(&name)?,
            Command::Birthdays => self.upcoming_birthdays(today),
            Command::Search { query } => self.search(&query),
            Command::Unknown(word) => {
                tracing::debug!(command = %word, "Unknown command");
                "Invalid command.".to_string()
            }
        };

        Ok(Reply::Text(text))
    }

    fn contact_mut(&mut self, name: &str) -> ContactBookResult<&mut Contact> {
        self.directory
            .find_mut(name)
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))
    }

    // The contact is kept even when the phone is rejected.
    fn add_contact(&mut self, name: &str, phone: &str) -> ContactBookResult<String> {
        let upserted = self.directory.add_or_get(name)?;
        upserted.contact.add_phone(phone)?;

        Ok(if upserted.created {
            "Contact added."
        } else {
            "Contact updated."
        }
        .to_string())
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactBookResult<String> {
        match self.contact_mut(name)?.edit_phone(old, new) {
            Ok(()) => Ok("Contact updated successfully".to_string()),
            Err(ContactBookError::Validation(ValidationError::InvalidPhone(_))) => {
                Ok("Invalid new phone number format".to_string())
            }
            Err(err) => Err(err),
        }
    }

    fn remove_phone(&mut self, name: &str, phone: &str) -> ContactBookResult<String> {
        self.contact_mut(name)?.remove_phone(phone);
        Ok("Phone removed.".to_string())
    }

    fn show_phones(&self, name: &str) -> String {
        match self.directory.find(name) {
            Some(contact) => format!("Phone numbers for {}: {}", name, contact.phones_display()),
            None => format!("No contact found with username {}", name),
        }
    }

    fn show_contact(&self, name: &str) -> String {
        match self.directory.find(name) {
            Some(contact) => contact.describe(),
            None => format!("No contact found with username {}", name),
        }
    }

    fn show_all(&self) -> String {
        if self.directory.is_empty() {
            return "No contacts saved.".to_string();
        }

        self.directory
            .sorted_by_name()
            .into_iter()
            .map(Contact::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> ContactBookResult<String> {
        self.directory
            .delete(name)
            .map(|_| "Contact deleted.".to_string())
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> ContactBookResult<String> {
        self.contact_mut(name)?.set_birthday(birthday)?;
        Ok(format!("Birthday added for {}.", name))
    }

    fn show_birthday(&self, name: &str) -> ContactBookResult<String> {
        let contact = self
            .directory
            .find(name)
            .ok_or_else(|| ContactBookError::ContactNotFound(name.to_string()))?;

        Ok(match contact.birthday() {
            Some(birthday) => format!("{}'s birthday: {}", name, birthday),
            None => format!("{} has no birthday set.", name),
        })
    }

    fn upcoming_birthdays(&self, today: NaiveDate) -> String {
        let window_days = self.config.birthday_window_days;
        let upcoming = self.directory.upcoming_birthdays(window_days, today);

        if upcoming.is_empty() {
            return if window_days == 7 {
                "No upcoming birthdays within the next week.".to_string()
            } else {
                format!("No upcoming birthdays within the next {} days.", window_days)
            };
        }

        let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
        format!("Upcoming birthdays:\n{}", lines.join("\n"))
    }

    fn search(&self, query: &str) -> String {
        let matches = self.matcher.find_matches(
            query,
            self.directory.iter().map(Contact::name),
            self.config.max_search_results,
            self.config.search_confidence_threshold,
        );

        if matches.is_empty() {
            return format!("No contacts match '{}'.", query);
        }

        let lines: Vec<String> = matches
            .iter()
            .map(|m| format!("{} ({}%)", m.name, m.confidence))
            .collect();
        format!("Matching contacts:\n{}", lines.join("\n"))
    }
}
