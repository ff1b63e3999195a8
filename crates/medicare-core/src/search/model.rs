//! Filter building blocks shared by the list screens.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A category filter: either everything, or records whose field equals the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter<T> {
    All,
    Only(T),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }
}

impl<T: FromStr> FromStr for Filter<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Filter::All)
        } else {
            s.trim().parse().map(Filter::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Date window for appointment lists.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Upcoming,
}

impl DateFilter {
    /// `Today` means the same calendar day; `Upcoming` includes today.
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            DateFilter::All => true,
            DateFilter::Today => date == today,
            DateFilter::Upcoming => date >= today,
        }
    }
}

/// Case-insensitive substring test. `needle` must already be lowercase.
pub(crate) fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// A pure predicate over records of type `R`.
///
/// `apply` keeps the input order and never mutates the source, so applying
/// the same filter twice yields the same result as applying it once.
pub trait RecordFilter<R: Clone> {
    fn matches(&self, record: &R, today: NaiveDate) -> bool;

    /// True when the filter accepts every record.
    fn is_unrestricted(&self) -> bool;

    fn apply(&self, records: &[R], today: NaiveDate) -> Vec<R> {
        records
            .iter()
            .filter(|record| self.matches(record, today))
            .cloned()
            .collect()
    }
}
