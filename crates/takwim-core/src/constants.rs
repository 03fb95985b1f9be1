/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const HOLIDAYS_ROUTE_COMPONENT: &str = "holidays";
pub const HOLIDAYS_ROUTE_PREFIX: &str =
    const_str::concat!(APP_ROUTE_PREFIX, "/", HOLIDAYS_ROUTE_COMPONENT);

/// Upper-case month names, January first. Used as sheet names and month headers.
pub const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Day-of-week column headers, Monday first.
pub const DAY_HEADERS: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const XLSX_EXTENSION: &str = "xlsx";
pub const DOWNLOAD_FILENAME_PREFIX: &str = "Calendar_";

/// ## Summary
/// Builds the download filename for a year, e.g. `Calendar_2026.xlsx`.
#[must_use]
pub fn download_filename(year: i32) -> String {
    format!("{DOWNLOAD_FILENAME_PREFIX}{year}.{XLSX_EXTENSION}")
}

/// ## Summary
/// Returns the upper-case name of a 1-based month, or `None` outside 1..=12.
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}
