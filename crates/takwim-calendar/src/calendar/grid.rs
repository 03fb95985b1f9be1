//! Month grids handed to the workbook renderer.

use chrono::{Datelike, NaiveDate};

use super::gregorian::DAYS_PER_WEEK;
use super::style::VisualCategory;

/// One position in a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// The date shown in this cell; `None` for padding.
    pub date: Option<NaiveDate>,
    /// Weekday column, 0 = Monday through 6 = Sunday.
    pub column: u32,
    /// Saturday or Sunday column. Padding cells keep their column's value.
    pub is_weekend: bool,
    /// Label of the public holiday on this date.
    pub holiday_label: Option<String>,
    pub is_school_holiday: bool,
}

impl DayCell {
    /// Day of month, when the cell holds a date.
    #[must_use]
    pub fn date_number(&self) -> Option<u32> {
        self.date.map(|date| date.day())
    }

    #[must_use]
    pub const fn is_padding(&self) -> bool {
        self.date.is_none()
    }

    #[must_use]
    pub const fn is_public_holiday(&self) -> bool {
        self.holiday_label.is_some()
    }

    /// ## Summary
    /// Resolves the cell's styling bucket from its current flags.
    #[must_use]
    pub const fn visual_category(&self) -> VisualCategory {
        VisualCategory::resolve(
            self.is_public_holiday(),
            self.is_school_holiday,
            self.is_weekend,
        )
    }

    /// Text for the activity area: the holiday label, otherwise empty.
    #[must_use]
    pub fn label_text(&self) -> &str {
        self.holiday_label.as_deref().unwrap_or_default()
    }
}

/// One month laid out as week rows of seven weekday columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    /// Column of day 1, 0 = Monday.
    pub first_weekday_offset: u32,
    pub days_in_month: u32,
    pub week_count: u32,
    /// Row-major cells, `week_count * 7` of them.
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Upper-case month name, e.g. `JANUARY`.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        takwim_core::constants::month_name(self.month).unwrap_or_default()
    }

    /// Iterates the week rows, each a slice of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK as usize)
    }

    /// Returns the cell at a week row and weekday column.
    #[must_use]
    pub fn cell(&self, week: u32, column: u32) -> Option<&DayCell> {
        if column >= DAYS_PER_WEEK || week >= self.week_count {
            return None;
        }
        let index = usize::try_from(week * DAYS_PER_WEEK + column).ok()?;
        self.cells.get(index)
    }

    /// Returns the cell holding a day of the month.
    #[must_use]
    pub fn cell_for_day(&self, day: u32) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date_number() == Some(day))
    }

    /// Iterates the dated cells that carry a public holiday label.
    pub fn holidays(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|cell| cell.is_public_holiday())
    }
}
