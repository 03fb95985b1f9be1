//! The calendar layout engine.

use chrono::NaiveDate;

use super::gregorian::{DAYS_PER_WEEK, days_in_month, first_weekday_offset, week_count};
use super::grid::{DayCell, MonthGrid};
use super::holiday::{HolidaySet, SchoolHolidaySet};
use super::source::HolidaySource;
use super::style::is_weekend_column;
use crate::error::{CalendarError, CalendarResult};

/// ## Summary
/// Lays out a year as twelve month grids against read-only holiday tables.
///
/// The engine holds no mutable state, so one instance can serve concurrent
/// callers; every call to [`CalendarLayoutEngine::generate`] builds fresh grids.
#[derive(Debug, Clone)]
pub struct CalendarLayoutEngine {
    holidays: HolidaySet,
    school_holidays: SchoolHolidaySet,
}

impl CalendarLayoutEngine {
    /// Creates an engine from both lookup tables. Pass an empty
    /// [`SchoolHolidaySet`] to leave school holidays unshaded.
    #[must_use]
    pub const fn new(holidays: HolidaySet, school_holidays: SchoolHolidaySet) -> Self {
        Self {
            holidays,
            school_holidays,
        }
    }

    #[must_use]
    pub fn builder() -> CalendarLayoutEngineBuilder {
        CalendarLayoutEngineBuilder::default()
    }

    /// ## Summary
    /// Builds an engine from a holiday source.
    ///
    /// When `include_school_holidays` is false the source's school table is not
    /// read and the engine gets an empty set.
    ///
    /// ## Errors
    /// Returns any error the source reports while producing its tables.
    pub fn from_source(
        source: &dyn HolidaySource,
        include_school_holidays: bool,
    ) -> CalendarResult<Self> {
        let holidays = source.public_holidays()?;
        let school_holidays = if include_school_holidays {
            source.school_holidays()?
        } else {
            SchoolHolidaySet::new()
        };

        tracing::info!(
            public_holidays = holidays.len(),
            school_holiday_days = school_holidays.len(),
            "Calendar layout engine initialized"
        );

        Ok(Self::new(holidays, school_holidays))
    }

    #[must_use]
    pub const fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    #[must_use]
    pub const fn school_holidays(&self) -> &SchoolHolidaySet {
        &self.school_holidays
    }

    /// ## Summary
    /// Produces the grids for January through December of `year`, in month order.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidYear` if the year lies outside the range of
    /// representable dates.
    #[tracing::instrument(skip(self))]
    pub fn generate(&self, year: i32) -> CalendarResult<Vec<MonthGrid>> {
        let grids = (1..=12)
            .map(|month| self.layout_month(year, month))
            .collect::<CalendarResult<Vec<_>>>()?;

        tracing::debug!(
            year,
            holidays = grids.iter().map(|grid| grid.holidays().count()).sum::<usize>(),
            "Calendar layout generated"
        );

        Ok(grids)
    }

    /// ## Summary
    /// Lays out a single month.
    ///
    /// Cells are filled row by row. Columns before day 1 in the first week and
    /// columns after the last day in the final week are padding.
    ///
    /// ## Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside 1..=12 and
    /// `CalendarError::InvalidYear` if a date in the month cannot be represented.
    pub fn layout_month(&self, year: i32, month: u32) -> CalendarResult<MonthGrid> {
        let days = days_in_month(year, month).ok_or(CalendarError::InvalidMonth { month })?;
        let offset = first_weekday_offset(year, month)?;
        let weeks = week_count(offset, days);

        let mut cells = Vec::with_capacity((weeks * DAYS_PER_WEEK) as usize);
        let mut day = 1;

        for week in 0..weeks {
            for column in 0..DAYS_PER_WEEK {
                let holds_day = (week > 0 || column >= offset) && day <= days;
                let date = if holds_day {
                    let date = NaiveDate::from_ymd_opt(year, month, day)
                        .ok_or(CalendarError::InvalidYear { year })?;
                    day += 1;
                    Some(date)
                } else {
                    None
                };
                cells.push(self.cell(date, column));
            }
        }

        tracing::trace!(year, month, offset, days, weeks, "Month laid out");

        Ok(MonthGrid {
            year,
            month,
            first_weekday_offset: offset,
            days_in_month: days,
            week_count: weeks,
            cells,
        })
    }

    /// ## Summary
    /// Lists the public holidays of `year` in date order.
    #[must_use]
    pub fn holidays_in_year(&self, year: i32) -> Vec<(NaiveDate, &str)> {
        self.holidays.in_year(year).collect()
    }

    fn cell(&self, date: Option<NaiveDate>, column: u32) -> DayCell {
        DayCell {
            date,
            column,
            is_weekend: is_weekend_column(column),
            holiday_label: date
                .and_then(|date| self.holidays.label(date))
                .map(str::to_string),
            is_school_holiday: date.is_some_and(|date| self.school_holidays.contains(date)),
        }
    }
}

/// ## Summary
/// Collects the lookup tables for a [`CalendarLayoutEngine`]. Both tables are required.
#[derive(Debug, Default)]
pub struct CalendarLayoutEngineBuilder {
    holidays: Option<HolidaySet>,
    school_holidays: Option<SchoolHolidaySet>,
}

impl CalendarLayoutEngineBuilder {
    #[must_use]
    pub fn holidays(mut self, holidays: HolidaySet) -> Self {
        self.holidays = Some(holidays);
        self
    }

    #[must_use]
    pub fn school_holidays(mut self, school_holidays: SchoolHolidaySet) -> Self {
        self.school_holidays = Some(school_holidays);
        self
    }

    /// ## Errors
    /// Returns `CalendarError::Configuration` if either table was not supplied.
    pub fn build(self) -> CalendarResult<CalendarLayoutEngine> {
        let holidays = self.holidays.ok_or_else(|| {
            CalendarError::Configuration("public holiday table is required".to_string())
        })?;
        let school_holidays = self.school_holidays.ok_or_else(|| {
            CalendarError::Configuration("school holiday table is required".to_string())
        })?;
        Ok(CalendarLayoutEngine::new(holidays, school_holidays))
    }
}
