//! Shared fixtures for integration tests.
//!
//! Helpers for building directories with known contacts and for pinning
//! the reference date of birthday queries.

use chrono::NaiveDate;
use contact_book::ContactDirectory;

/// Build a date from day, month and year, in the order the assistant prints them.
#[allow(dead_code)]
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}

/// Add a contact with the given phones and optional birthday to `directory`.
#[allow(dead_code)]
pub fn add_contact(
    directory: &mut ContactDirectory,
    name: &str,
    phones: &[&str],
    birthday: Option<&str>,
) {
    let contact = directory.add_or_get(name).unwrap().contact;
    for phone in phones {
        contact.add_phone(phone).unwrap();
    }
    if let Some(birthday) = birthday {
        contact.set_birthday(birthday).unwrap();
    }
}

/// A directory with a mix of contacts, some with birthdays.
///
/// Relative to Monday 10.06.2024:
/// - Ann: birthday today
/// - Bob: Saturday 15.06, congratulated Monday 17.06
/// - Cleo: 17.06, exactly seven days out
/// - Dan: 18.06, one day beyond a week
/// - Eve: no birthday
#[allow(dead_code)]
pub fn sample_directory() -> ContactDirectory {
    let mut directory = ContactDirectory::new();
    add_contact(&mut directory, "Ann", &["1111111111"], Some("10.06.1990"));
    add_contact(&mut directory, "Bob", &["2222222222"], Some("15.06.1985"));
    add_contact(&mut directory, "Cleo", &[], Some("17.06.2000"));
    add_contact(&mut directory, "Dan", &["4444444444"], Some("18.06.1970"));
    add_contact(&mut directory, "Eve", &["5555555555", "5555555555"], None);
    directory
}
