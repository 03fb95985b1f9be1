//! Takwim calendar generator - integration test support.
//!
//! Builds the same router the server binary runs, wired to either the
//! built-in holiday tables or an in-memory holiday document.

use std::sync::Arc;

use salvo::Router;
use takwim_calendar::calendar::{BuiltinHolidays, FileHolidays};
use takwim_calendar::{CalendarLayoutEngine, CalendarResult};
use takwim_core::config::{CalendarConfig, LoggingConfig, ServerConfig, Settings};

pub use takwim_app as app;
pub use takwim_calendar as calendar;
pub use takwim_core as core;
pub use takwim_render as render;

pub const TEST_ORIGIN: &str = "http://127.0.0.1:5800";

/// Settings matching the shipped defaults, with a fixed default year.
#[must_use]
pub fn test_settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5800,
            serve_origin: None,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        calendar: CalendarConfig {
            min_year: 2020,
            max_year: 2100,
            default_year: Some(2026),
            year_choices: 5,
            school_holidays: true,
            holidays_file: None,
        },
    }
}

/// ## Summary
/// Engine over the built-in Malaysian tables.
///
/// ## Errors
/// Returns an error if the built-in tables fail to parse.
pub fn builtin_engine(include_school_holidays: bool) -> CalendarResult<CalendarLayoutEngine> {
    CalendarLayoutEngine::from_source(&BuiltinHolidays, include_school_holidays)
}

/// ## Summary
/// Engine over a TOML holiday document.
///
/// ## Errors
/// Returns an error if the document is malformed.
pub fn toml_engine(document: &str) -> CalendarResult<CalendarLayoutEngine> {
    let source = FileHolidays::parse(document, config::FileFormat::Toml)?;
    CalendarLayoutEngine::from_source(&source, true)
}

/// Router identical to the server's, minus request logging.
#[must_use]
pub fn test_router(settings: Settings, engine: CalendarLayoutEngine) -> Router {
    takwim_app::app::service_router(Arc::new(settings), Arc::new(engine))
}

/// Absolute URL for a path on the test origin.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{TEST_ORIGIN}{path}")
}
