pub mod data;
pub mod gregorian;
pub mod grid;
pub mod holiday;
pub mod layout;
pub mod source;
pub mod style;

pub use grid::{DayCell, MonthGrid};
pub use holiday::{DateRange, HolidaySet, SchoolHolidaySet};
pub use layout::{CalendarLayoutEngine, CalendarLayoutEngineBuilder};
pub use source::{BuiltinHolidays, FileHolidays, HolidaySource};
pub use style::{HeaderTone, VisualCategory};
