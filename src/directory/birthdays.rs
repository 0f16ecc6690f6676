//! Birthday window query.
//!
//! Finds contacts whose next birthday falls within a number of days of a
//! reference date, and moves weekend birthdays to the following Monday so
//! congratulations land on a business day.

use crate::domain::{BirthdayDate, DATE_FORMAT};
use crate::models::Contact;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// A contact to congratulate and the business day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s birthday: {}", self.name, self.formatted_date())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// The first occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// The next `weekday` strictly after `date`; a date already on `weekday` moves a full week.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut days_ahead =
        weekday.num_days_from_monday() as i64 - date.weekday().num_days_from_monday() as i64;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date.checked_add_days(Days::new(days_ahead as u64))
}

/// Move Saturdays and Sundays to the following Monday; weekdays are unchanged.
pub fn roll_to_business_day(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => Some(date),
    }
}

/// Contacts with a birthday within `window_days` of `today`, both ends inclusive.
///
/// The window is checked against the real birthday; rollover happens after,
/// so a Saturday birthday at the window's edge yields a Monday just past it.
/// Results are ordered by congratulation date, then by name.
pub fn upcoming_birthdays<'a>(
    contacts: impl IntoIterator<Item = &'a Contact>,
    window_days: u32,
    today: NaiveDate,
) -> Vec<UpcomingBirthday> {
    let mut upcoming: Vec<UpcomingBirthday> = contacts
        .into_iter()
        .filter_map(|contact| {
            let birthday = contact.birthday()?;
            let next = next_occurrence(birthday, today)?;

            let days_until = next.signed_duration_since(today).num_days();
            if !(0..=i64::from(window_days)).contains(&days_until) {
                return None;
            }

            Some(UpcomingBirthday {
                name: contact.name().to_string(),
                congratulation_date: roll_to_business_day(next)?,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.name.cmp(&b.name))
    });

    tracing::debug!(
        window_days = window_days,
        today = %today,
        matches = upcoming.len(),
        "Computed upcoming birthdays"
    );

    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn contact(name: &str, birthday: &str) -> Contact {
        let mut contact = Contact::new(name).unwrap();
        contact.set_birthday(birthday).unwrap();
        contact
    }

    #[test]
    fn test_next_weekday_never_zero_shift() {
        // 10.06.2024 is a Monday
        assert_eq!(next_weekday(date(10, 6, 2024), Weekday::Mon), Some(date(17, 6, 2024)));
        assert_eq!(next_weekday(date(15, 6, 2024), Weekday::Mon), Some(date(17, 6, 2024)));
        assert_eq!(next_weekday(date(16, 6, 2024), Weekday::Mon), Some(date(17, 6, 2024)));
        assert_eq!(next_weekday(date(12, 6, 2024), Weekday::Fri), Some(date(14, 6, 2024)));
    }

    #[test]
    fn test_roll_to_business_day() {
        assert_eq!(roll_to_business_day(date(15, 6, 2024)), Some(date(17, 6, 2024)));
        assert_eq!(roll_to_business_day(date(16, 6, 2024)), Some(date(17, 6, 2024)));
        assert_eq!(roll_to_business_day(date(14, 6, 2024)), Some(date(14, 6, 2024)));
        assert_eq!(roll_to_business_day(date(10, 6, 2024)), Some(date(10, 6, 2024)));
    }

    #[test]
    fn test_next_occurrence_this_year_and_next() {
        let birthday = BirthdayDate::parse("15.06.1990").unwrap();
        assert_eq!(next_occurrence(&birthday, date(10, 6, 2024)), Some(date(15, 6, 2024)));
        assert_eq!(next_occurrence(&birthday, date(15, 6, 2024)), Some(date(15, 6, 2024)));
        assert_eq!(next_occurrence(&birthday, date(16, 6, 2024)), Some(date(15, 6, 2025)));
    }

    #[test]
    fn test_saturday_birthday_rolls_to_monday() {
        let contacts = vec![contact("Bob", "15.06.2024")];
        let upcoming = upcoming_birthdays(&contacts, 7, date(10, 6, 2024));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Bob");
        assert_eq!(upcoming[0].formatted_date(), "17.06.2024");
    }

    #[test]
    fn test_sunday_birthday_rolls_one_day() {
        let contacts = vec![contact("Sam", "16.06.1985")];
        let upcoming = upcoming_birthdays(&contacts, 7, date(10, 6, 2024));
        assert_eq!(upcoming[0].formatted_date(), "17.06.2024");
    }

    #[test]
    fn test_year_wrap() {
        let contacts = vec![contact("Cleo", "02.01.1990")];
        let upcoming = upcoming_birthdays(&contacts, 7, date(30, 12, 2024));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "02.01.2025");
    }

    #[test]
    fn test_year_wrap_with_rollover() {
        // 01.01.2023 is a Sunday
        let contacts = vec![contact("Nova", "01.01.2000")];
        let upcoming = upcoming_birthdays(&contacts, 7, date(30, 12, 2022));
        assert_eq!(upcoming[0].formatted_date(), "02.01.2023");
    }

    #[test]
    fn test_window_boundaries() {
        let today = date(10, 6, 2024);
        let contacts = vec![
            contact("Today", "10.06.1990"),
            contact("Edge", "17.06.1990"),
            contact("Beyond", "18.06.1990"),
            contact("Yesterday", "09.06.1990"),
        ];

        let names: Vec<String> = upcoming_birthdays(&contacts, 7, today)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["Today", "Edge"]);
    }

    #[test]
    fn test_window_checked_before_rollover() {
        // Saturday is exactly 5 days out; the Monday it moves to is 7 days out.
        let contacts = vec![contact("Bob", "15.06.1990")];
        let upcoming = upcoming_birthdays(&contacts, 5, date(10, 6, 2024));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "17.06.2024");
    }

    #[test]
    fn test_zero_window_only_today() {
        let contacts = vec![contact("Today", "10.06.1990"), contact("Tomorrow", "11.06.1990")];
        let upcoming = upcoming_birthdays(&contacts, 0, date(10, 6, 2024));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Today");
    }

    #[test]
    fn test_contact_without_birthday_is_skipped() {
        let contacts = vec![Contact::new("Nobody").unwrap()];
        assert!(upcoming_birthdays(&contacts, 366, date(10, 6, 2024)).is_empty());
    }

    #[test]
    fn test_leap_day_observed_on_feb_28() {
        // 25.02.2023 is a Saturday, 28.02.2023 a Tuesday
        let contacts = vec![contact("Leap", "29.02.2000")];
        let upcoming = upcoming_birthdays(&contacts, 7, date(25, 2, 2023));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "28.02.2023");
    }

    #[test]
    fn test_leap_day_in_leap_year() {
        // 29.02.2024 is a Thursday
        let contacts = vec![contact("Leap", "29.02.2000")];
        let upcoming = upcoming_birthdays(&contacts, 7, date(25, 2, 2024));
        assert_eq!(upcoming[0].formatted_date(), "29.02.2024");
    }

    #[test]
    fn test_results_sorted_by_date_then_name() {
        let contacts = vec![
            contact("Zed", "12.06.1990"),
            contact("Bob", "15.06.1990"),
            contact("Amy", "17.06.1990"),
            contact("Ann", "12.06.1991"),
        ];
        let upcoming = upcoming_birthdays(&contacts, 7, date(10, 6, 2024));
        let order: Vec<(&str, String)> = upcoming
            .iter()
            .map(|u| (u.name.as_str(), u.formatted_date()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Ann", "12.06.2024".to_string()),
                ("Zed", "12.06.2024".to_string()),
                ("Amy", "17.06.2024".to_string()),
                ("Bob", "17.06.2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_upcoming_birthday_display_and_serialization() {
        let upcoming = UpcomingBirthday {
            name: "Bob".to_string(),
            congratulation_date: date(17, 6, 2024),
        };
        assert_eq!(upcoming.to_string(), "Bob's birthday: 17.06.2024");
        assert_eq!(
            serde_json::to_string(&upcoming).unwrap(),
            r#"{"name":"Bob","congratulation_date":"17.06.2024"}"#
        );
    }
}
