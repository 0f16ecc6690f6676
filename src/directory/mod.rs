//! Contact directory and the birthday window query.

pub mod birthdays;
mod contact_directory;

pub use birthdays::UpcomingBirthday;
pub use contact_directory::{ContactDirectory, Upserted};
