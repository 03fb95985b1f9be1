//! Calendar layout engine for the Takwim workbook generator.
//!
//! Maps a year onto twelve week-by-weekday grids, marking public holidays,
//! school holidays and weekends on every cell.

pub mod calendar;
pub mod error;

pub use calendar::{
    CalendarLayoutEngine, CalendarLayoutEngineBuilder, DateRange, DayCell, HeaderTone,
    HolidaySet, MonthGrid, SchoolHolidaySet, VisualCategory,
};
pub use error::{CalendarError, CalendarResult};
