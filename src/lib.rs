mod consts;
mod prelude;
mod types;

pub use consts::*;
pub use types::{days_in_month, is_leap_year};

use crate::prelude::*;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::str::FromStr;
use types::{check_day, check_month, check_year};

/// A validated month/day/year calendar date.
///
/// Every constructed value satisfies the type's invariant: year within
/// `MIN_YEAR..=MAX_YEAR`, month within `1..=12`, and day no greater than the
/// leap-aware limit for that month. Checks run in a fixed order (year, then
/// month, then day), so when several fields are out of range the reported
/// error names the first one in that order.
///
/// The day check enforces an upper bound only; zero and negative days are
/// accepted (see [`CalendarDay::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{month}/{day}/{year}")]
pub struct CalendarDay {
    month: i32,
    day: i32,
    year: i32,
}

/// Error type for date construction, parsing, and replacement.
///
/// The three validation variants carry the offending field value so callers
/// can render it at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("{0} is not a valid year.")]
    InvalidYear(i32),

    /// Month outside `1..=12`.
    #[error("{0} is not a valid month.")]
    InvalidMonth(i32),

    /// Day above the limit for the given month and year.
    #[error("{0} is not a valid day (for that month/year).")]
    InvalidDay(i32),

    /// Text did not decompose into three integers.
    #[error("could not read {0:?} as a month/day/year date")]
    ParseFailed(String),
}

impl CalendarDay {
    /// Creates a new date, validating year, month, and day in that order.
    ///
    /// The day check is leap-aware for February and only enforces the upper
    /// bound per month; day values of zero or below are accepted, matching
    /// the historical contract of this type.
    ///
    /// # Errors
    /// Returns the error for the first failing field: `InvalidYear`,
    /// `InvalidMonth`, or `InvalidDay`, each carrying the rejected value.
    pub fn new(month: i32, day: i32, year: i32) -> Result<Self, DateError> {
        check_year(year)?;
        check_month(month)?;
        check_day(month, day, year)?;
        Ok(Self { month, day, year })
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Returns the year (`MIN_YEAR..=MAX_YEAR`)
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the date by value.
    ///
    /// `CalendarDay` is `Copy`, so this hands out an independent copy; no
    /// alias into the receiver's state escapes.
    #[inline]
    pub const fn get(&self) -> Self {
        *self
    }

    /// Replaces all three fields after re-validating them together, with the
    /// same ordering and error semantics as [`CalendarDay::new`].
    ///
    /// The replacement is atomic: on failure the previous value is left
    /// completely unchanged.
    ///
    /// # Errors
    /// Same as [`CalendarDay::new`].
    pub fn set(&mut self, month: i32, day: i32, year: i32) -> Result<(), DateError> {
        *self = Self::new(month, day, year)?;
        Ok(())
    }

    /// Replaces all three fields from a textual `month/day/year` date, with
    /// the same parsing and validation semantics as [`FromStr`].
    ///
    /// The replacement is atomic: on failure the previous value is left
    /// completely unchanged.
    ///
    /// # Errors
    /// `ParseFailed` for malformed text, otherwise same as
    /// [`CalendarDay::new`].
    pub fn set_text(&mut self, text: &str) -> Result<(), DateError> {
        *self = text.parse()?;
        Ok(())
    }

    /// Helper to parse one `/`-separated field as an integer.
    /// The whole input text is carried in the error, not just the field.
    fn parse_field(field: &str, text: &str) -> Result<i32, DateError> {
        field
            .parse::<i32>()
            .map_err(|_| DateError::ParseFailed(text.to_owned()))
    }
}

impl FromStr for CalendarDay {
    type Err = DateError;

    /// Parses a `month/day/year` date: exactly three `/`-separated fields,
    /// each a base-10 integer (sign optional, no whitespace tolerance).
    /// Range validation runs after parsing, in year/month/day order, so
    /// `"7/8/99"` reports `InvalidYear(99)` rather than a parse failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        if parts.len() != DATE_FIELDS {
            return Err(DateError::ParseFailed(s.to_owned()));
        }

        let month = Self::parse_field(parts[0], s)?;
        let day = Self::parse_field(parts[1], s)?;
        let year = Self::parse_field(parts[2], s)?;

        Self::new(month, day, year)
    }
}

impl PartialOrd for CalendarDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDay {
    /// Lexicographic on (year, month, day): year is the primary key, then
    /// month, then day. Consistent with `Eq` since both look at the same
    /// three fields.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl TryFrom<(i32, i32, i32)> for CalendarDay {
    type Error = DateError;

    /// Builds a date from a `(month, day, year)` tuple.
    fn try_from(value: (i32, i32, i32)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CalendarDay> for (i32, i32, i32) {
    /// Decomposes into a `(month, day, year)` tuple.
    fn from(date: CalendarDay) -> Self {
        (date.month, date.day, date.year)
    }
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
