use thiserror::Error;

/// Calendar layout errors
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid year {year}: no Gregorian calendar can be built for it")]
    InvalidYear { year: i32 },

    #[error("Invalid month {month}: expected 1 to 12")]
    InvalidMonth { month: u32 },

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Holiday data source error: {0}")]
    DataSource(#[from] config::ConfigError),
}

pub type CalendarResult<T> = std::result::Result<T, CalendarError>;
