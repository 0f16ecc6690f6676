//! Command-line parsing for the assistant.

use crate::error::{ContactBookError, ContactBookResult};
use std::str::FromStr;

pub const ENTER_USERNAME: &str = "Enter username.";
pub const ADD_USAGE: &str = "Give me name and correct format of phone (10 digits) please.";
pub const CHANGE_USAGE: &str = "Enter name, old phone number, and new phone number.";
pub const REMOVE_PHONE_USAGE: &str = "Enter name and phone number to remove.";
pub const ADD_BIRTHDAY_USAGE: &str = "Add a user name and birthday please.";
pub const SEARCH_USAGE: &str = "Enter a name to search for.";

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input line
    Empty,
    Hello,
    Help,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Phone {
        name: String,
    },
    Show {
        name: String,
    },
    All,
    Delete {
        name: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Search {
        query: String,
    },
    Exit,
    /// Unrecognized command word
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// The first whitespace-separated token is the command word, matched
    /// case-insensitively; the rest are arguments. Extra arguments are
    /// ignored, except for `search` which joins them into one query.
    ///
    /// # Errors
    ///
    /// Returns `ContactBookError::MissingArgument` with a usage hint when a
    /// known command has too few arguments.
    pub fn parse(line: &str) -> ContactBookResult<Self> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(Command::Empty);
        };
        let args: Vec<&str> = tokens.collect();

        let arg = |index: usize, usage: &'static str| -> ContactBookResult<String> {
            args.get(index)
                .map(|s| s.to_string())
                .ok_or(ContactBookError::MissingArgument(usage))
        };

        let command = match word.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add {
                name: arg(0, ADD_USAGE)?,
                phone: arg(1, ADD_USAGE)?,
            },
            "change" => Command::Change {
                name: arg(0, CHANGE_USAGE)?,
                old_phone: arg(1, CHANGE_USAGE)?,
                new_phone: arg(2, CHANGE_USAGE)?,
            },
            "remove-phone" => Command::RemovePhone {
                name: arg(0, REMOVE_PHONE_USAGE)?,
                phone: arg(1, REMOVE_PHONE_USAGE)?,
            },
            "phone" => Command::Phone {
                name: arg(0, ENTER_USERNAME)?,
            },
            "show" => Command::Show {
                name: arg(0, ENTER_USERNAME)?,
            },
            "all" => Command::All,
            "delete" => Command::Delete {
                name: arg(0, ENTER_USERNAME)?,
            },
            "add-birthday" => Command::AddBirthday {
                name: arg(0, ADD_BIRTHDAY_USAGE)?,
                birthday: arg(1, ADD_BIRTHDAY_USAGE)?,
            },
            "show-birthday" => Command::ShowBirthday {
                name: arg(0, ENTER_USERNAME)?,
            },
            "birthdays" => Command::Birthdays,
            "search" => {
                if args.is_empty() {
                    return Err(ContactBookError::MissingArgument(SEARCH_USAGE));
                }
                Command::Search {
                    query: args.join(" "),
                }
            }
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        };

        Ok(command)
    }
}

impl FromStr for Command {
    type Err = ContactBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
