//! Domain value objects and types.
//!
//! Type-safe wrappers for phone numbers and birthdays. Each value object
//! validates at construction time, so an invalid phone or date can never be
//! stored on a contact.

pub mod birthday;
pub mod errors;
pub mod phone;

pub use birthday::{BirthdayDate, DATE_FORMAT};
pub use errors::ValidationError;
pub use phone::PhoneNumber;
