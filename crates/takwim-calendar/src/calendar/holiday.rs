//! Read-only holiday lookup tables.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// ## Summary
/// Parses a `YYYY-MM-DD` key.
///
/// ## Errors
/// Returns `CalendarError::InvalidDate` if the key is not a valid calendar date.
pub fn parse_iso_date(key: &str) -> CalendarResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), ISO_DATE_FORMAT)
        .map_err(|_err| CalendarError::InvalidDate(key.to_string()))
}

/// ## Summary
/// Formats a date as its `YYYY-MM-DD` lookup key.
#[must_use]
pub fn iso_key(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Public holidays keyed by date, each with a display label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    entries: BTreeMap<NaiveDate, String>,
}

impl HolidaySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds a set from `(YYYY-MM-DD, label)` pairs.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidDate` for a malformed key and
    /// `CalendarError::Configuration` if the same date appears twice.
    pub fn from_iso_entries<I, K, V>(entries: I) -> CalendarResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (key, label) in entries {
            let date = parse_iso_date(key.as_ref())?;
            if map.insert(date, label.into()).is_some() {
                return Err(CalendarError::Configuration(format!(
                    "public holiday {} is listed more than once",
                    iso_key(date)
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Returns the label of the holiday on `date`, if any.
    #[must_use]
    pub fn label(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Returns the label for a `YYYY-MM-DD` key; malformed keys never match.
    #[must_use]
    pub fn label_for_key(&self, key: &str) -> Option<&str> {
        parse_iso_date(key).ok().and_then(|date| self.label(date))
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.entries
            .iter()
            .map(|(date, label)| (*date, label.as_str()))
    }

    /// Iterates the holidays of one year in date order.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.iter().filter(move |(date, _)| date.year() == year)
    }
}

impl FromIterator<(NaiveDate, String)> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An inclusive span of dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// ## Summary
    /// Creates a range covering `start` through `end`, both included.
    ///
    /// ## Errors
    /// Returns `CalendarError::Configuration` if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CalendarResult<Self> {
        if end < start {
            return Err(CalendarError::Configuration(format!(
                "date range ends ({}) before it starts ({})",
                iso_key(end),
                iso_key(start)
            )));
        }
        Ok(Self { start, end })
    }

    /// ## Summary
    /// Creates a range from two `YYYY-MM-DD` keys.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidDate` for a malformed key and
    /// `CalendarError::Configuration` for an inverted range.
    pub fn from_iso(start: &str, end: &str) -> CalendarResult<Self> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Iterates every date in the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

/// Dates that fall within a school holiday. Membership only, no labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolHolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl SchoolHolidaySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Expands inclusive ranges into individual dates. Overlapping ranges are merged.
    #[must_use]
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = DateRange>,
    {
        ranges.into_iter().flat_map(|range| range.days()).collect()
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterates member dates in order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.dates.iter().copied()
    }

    /// Counts the member dates that fall in `year`.
    #[must_use]
    pub fn days_in_year(&self, year: i32) -> usize {
        self.iter().filter(|date| date.year() == year).count()
    }
}

impl FromIterator<NaiveDate> for SchoolHolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_holiday_set_from_iso_entries() {
        let set = HolidaySet::from_iso_entries([
            ("2026-12-25", "Christmas Day"),
            ("2026-01-01", "New Year's Day"),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.label(date(2026, 12, 25)), Some("Christmas Day"));
        assert_eq!(set.label_for_key("2026-01-01"), Some("New Year's Day"));
        assert_eq!(set.label_for_key("2026-01-02"), None);
        assert_eq!(set.label_for_key("not a date"), None);

        let ordered: Vec<_> = set.iter().map(|(d, _)| d).collect();
        assert_eq!(ordered, vec![date(2026, 1, 1), date(2026, 12, 25)]);
    }

    #[test]
    fn test_holiday_set_rejects_bad_key() {
        let err = HolidaySet::from_iso_entries([("2026-02-30", "Nope")]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate(key) if key == "2026-02-30"));
    }

    #[test]
    fn test_holiday_set_rejects_duplicate_date() {
        let err = HolidaySet::from_iso_entries([("2026-05-01", "Labour Day"), ("2026-05-01", "Again")])
            .unwrap_err();
        assert!(matches!(err, CalendarError::Configuration(_)));
    }

    #[test]
    fn test_holiday_set_in_year() {
        let set = HolidaySet::from_iso_entries([
            ("2025-12-25", "Christmas Day"),
            ("2026-12-25", "Christmas Day"),
        ])
        .unwrap();
        assert_eq!(set.in_year(2026).count(), 1);
        assert_eq!(set.in_year(2024).count(), 0);
    }

    #[test]
    fn test_date_range_expansion_is_inclusive() {
        let range = DateRange::from_iso("2026-05-30", "2026-06-02").unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(
            days,
            vec![
                date(2026, 5, 30),
                date(2026, 5, 31),
                date(2026, 6, 1),
                date(2026, 6, 2)
            ]
        );
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::from_iso("2026-03-20", "2026-03-20").unwrap();
        assert_eq!(range.days().count(), 1);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(matches!(
            DateRange::from_iso("2026-06-07", "2026-05-23"),
            Err(CalendarError::Configuration(_))
        ));
    }

    #[test]
    fn test_school_holiday_set_across_year_boundary() {
        let set = SchoolHolidaySet::from_ranges([
            DateRange::from_iso("2025-12-20", "2026-01-11").unwrap(),
            DateRange::from_iso("2026-01-05", "2026-01-06").unwrap(),
        ]);
        assert_eq!(set.len(), 23);
        assert_eq!(set.days_in_year(2025), 12);
        assert_eq!(set.days_in_year(2026), 11);
        assert!(set.contains(date(2025, 12, 31)));
        assert!(!set.contains(date(2026, 1, 12)));
    }

    #[test]
    fn test_iso_key_zero_pads() {
        assert_eq!(iso_key(date(2026, 3, 5)), "2026-03-05");
    }
}
