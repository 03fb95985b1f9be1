//! Holiday data sources feeding the layout engine.

use std::collections::BTreeMap;
use std::path::Path;

use config::Config;
use serde::Deserialize;

use super::data;
use super::holiday::{DateRange, HolidaySet, SchoolHolidaySet};
use crate::error::CalendarResult;

/// ## Summary
/// Supplies the two holiday lookup tables an engine is built from.
pub trait HolidaySource: Send + Sync {
    /// ## Errors
    /// Returns an error if the source data cannot be read or contains a bad date.
    fn public_holidays(&self) -> CalendarResult<HolidaySet>;

    /// ## Errors
    /// Returns an error if the source data cannot be read or contains a bad range.
    fn school_holidays(&self) -> CalendarResult<SchoolHolidaySet>;
}

/// The compiled-in Malaysian tables from [`data`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinHolidays;

impl HolidaySource for BuiltinHolidays {
    fn public_holidays(&self) -> CalendarResult<HolidaySet> {
        HolidaySet::from_iso_entries(data::PUBLIC_HOLIDAYS.iter().copied())
    }

    fn school_holidays(&self) -> CalendarResult<SchoolHolidaySet> {
        let ranges = data::SCHOOL_HOLIDAY_RANGES
            .iter()
            .map(|(start, end, _name)| DateRange::from_iso(start, end))
            .collect::<CalendarResult<Vec<_>>>()?;
        Ok(SchoolHolidaySet::from_ranges(ranges))
    }
}

/// A school holiday range as written in a holiday file.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolHolidayEntry {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// ## Summary
/// Holiday tables read from a TOML, JSON or YAML file:
///
/// ```toml
/// [public]
/// "2026-12-25" = "Christmas Day"
///
/// [[school]]
/// start = "2026-05-23"
/// end = "2026-06-07"
/// name = "Mid-year break"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileHolidays {
    #[serde(default)]
    pub public: BTreeMap<String, String>,
    #[serde(default)]
    pub school: Vec<SchoolHolidayEntry>,
}

impl FileHolidays {
    /// ## Summary
    /// Reads a holiday file; the format follows the file extension.
    ///
    /// ## Errors
    /// Returns `CalendarError::DataSource` if the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> CalendarResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading holiday file");
        Self::from_source(config::File::from(path))
    }

    /// ## Summary
    /// Parses holiday tables from an in-memory document.
    ///
    /// ## Errors
    /// Returns `CalendarError::DataSource` if the document is malformed.
    pub fn parse(contents: &str, format: config::FileFormat) -> CalendarResult<Self> {
        Self::from_source(config::File::from_str(contents, format))
    }

    fn from_source<S>(source: S) -> CalendarResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let table = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize::<Self>()?;
        tracing::debug!(
            public = table.public.len(),
            school_ranges = table.school.len(),
            "Holiday tables parsed"
        );
        Ok(table)
    }
}

impl HolidaySource for FileHolidays {
    fn public_holidays(&self) -> CalendarResult<HolidaySet> {
        HolidaySet::from_iso_entries(
            self.public
                .iter()
                .map(|(date, label)| (date.as_str(), label.as_str())),
        )
    }

    fn school_holidays(&self) -> CalendarResult<SchoolHolidaySet> {
        let ranges = self
            .school
            .iter()
            .map(|entry| DateRange::from_iso(&entry.start, &entry.end))
            .collect::<CalendarResult<Vec<_>>>()?;
        Ok(SchoolHolidaySet::from_ranges(ranges))
    }
}
