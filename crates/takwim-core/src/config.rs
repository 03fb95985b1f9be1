use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the server address as a string in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Calendar generation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// Smallest year accepted from the form (inclusive).
    pub min_year: i32,
    /// Largest year accepted from the form (inclusive).
    pub max_year: i32,
    /// Year pre-selected on the form; the current year when unset.
    pub default_year: Option<i32>,
    /// How many years after the current one the form offers.
    pub year_choices: u8,
    /// Whether school holiday ranges are shaded.
    pub school_holidays: bool,
    /// Optional holiday table replacing the built-in one.
    pub holidays_file: Option<String>,
}

impl CalendarConfig {
    /// ## Summary
    /// Returns `true` if `year` lies within the configured inclusive bound.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    /// ## Summary
    /// Returns the years offered by the form, starting at `current_year` and
    /// clamped to the configured bound.
    #[must_use]
    pub fn year_options(&self, current_year: i32) -> Vec<i32> {
        let start = current_year.clamp(self.min_year, self.max_year);
        let end = start
            .saturating_add(i32::from(self.year_choices))
            .min(self.max_year);
        (start..=end).collect()
    }

    /// ## Summary
    /// Returns the year the form pre-selects.
    #[must_use]
    pub fn selected_year(&self, current_year: i32) -> i32 {
        self.default_year
            .unwrap_or(current_year)
            .clamp(self.min_year, self.max_year)
    }

    /// ## Summary
    /// Checks that the configured bound is not inverted.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `min_year > max_year`.
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_year > self.max_year {
            return Err(CoreError::InvalidConfiguration(format!(
                "calendar.min_year ({}) is greater than calendar.max_year ({})",
                self.min_year, self.max_year
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file, environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `TAKWIM_` prefix and `__` between nested keys,
    /// e.g. `TAKWIM_CALENDAR__MAX_YEAR=2050`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "info")?
            .set_default("calendar.min_year", 2020)?
            .set_default("calendar.max_year", 2100)?
            .set_default("calendar.year_choices", 5)?
            .set_default("calendar.school_holidays", true)?
            // Environment variables
            .add_source(
                config::Environment::with_prefix("TAKWIM")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.calendar.validate()?;

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

/// ## Summary
/// Returns the current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    use chrono::Datelike;

    chrono::Local::now().year()
}
