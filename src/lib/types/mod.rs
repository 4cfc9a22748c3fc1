//! Shared data types for the page renderer.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

use time::{Date, Month, format_description::BorrowedFormatItem, macros::format_description};

const DISPLAY_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[day].[month].[year]");

/// Calendar date as written in page literals, `DD.MM.YYYY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageDate(Date);

impl PageDate {
    pub fn parse(s: &str) -> Option<Self> {
        Date::parse(s.trim(), DISPLAY_FORMAT).ok().map(Self)
    }

    pub fn from_calendar(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// `DD.MM.YYYY`, the form shown to readers.
    pub fn as_str(&self) -> String {
        format!(
            "{:02}.{:02}.{:04}",
            self.0.day(),
            u8::from(self.0.month()),
            self.0.year()
        )
    }

    /// `YYYY-MM-DD`, for `datetime` attributes.
    pub fn iso(&self) -> String {
        format!(
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl fmt::Display for PageDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}
