//! Contact Book - an interactive assistant for contacts, phone numbers and birthdays.
//!
//! The directory is kept in memory for the lifetime of the process and is
//! driven by a line-oriented command loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, birthdays)
//! - **models**: The contact entity
//! - **directory**: Name-keyed contact store and the birthday window query
//! - **matching**: Fuzzy name search
//! - **assistant**: Command parsing, dispatch and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use assistant::{Assistant, Command, Reply};
pub use config::Config;
pub use directory::{ContactDirectory, UpcomingBirthday};
pub use domain::{BirthdayDate, PhoneNumber, ValidationError};
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use matching::{NameMatch, NameMatcher};
pub use models::Contact;
