use chrono::Datelike;
use salvo::{Depot, Request, Response, Router, handler, writing::Json};
use serde::Serialize;
use tracing::{error, warn};

use crate::app::api::HOLIDAYS_ROUTE_COMPONENT;
use crate::app::year::parse_year;
use crate::config::get_config_from_depot;
use crate::engine_handler::get_engine_from_depot;
use crate::error::AppResult;
use takwim_core::constants::DAY_HEADERS;

/// ## Summary
/// One public holiday in a year listing
#[derive(Debug, Serialize)]
pub struct HolidayEntry {
    pub date: String,
    pub weekday: String,
    pub label: String,
}

/// ## Summary
/// Holidays response payload
#[derive(Debug, Serialize)]
pub struct HolidaysResponse {
    pub year: i32,
    pub public_holidays: Vec<HolidayEntry>,
    pub school_holiday_days: usize,
}

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// GET /api/app/holidays/{year} - Lists the public holidays of a year and the
/// number of school holiday days that will be shaded.
///
/// ## Errors
/// Returns HTTP 400 if the year is not a number or is out of bounds.
/// Returns HTTP 500 if the depot is missing its settings or engine.
#[handler]
async fn holidays(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let raw = req.param::<String>("year");

    match list_holidays(raw.as_deref(), depot) {
        Ok(body) => res.render(Json(body)),
        Err(e) => {
            if e.status_code().is_client_error() {
                warn!(error = %e, "Rejected holiday listing request");
            } else {
                error!(error = ?e, "Failed to list holidays");
            }
            res.status_code(e.status_code());
            res.render(Json(ErrorResponse {
                error: e.to_string(),
            }));
        }
    }
}

fn list_holidays(raw: Option<&str>, depot: &Depot) -> AppResult<HolidaysResponse> {
    let settings = get_config_from_depot(depot)?;
    let year = parse_year(raw, &settings.calendar)?;
    let engine = get_engine_from_depot(depot)?;

    let public_holidays = engine
        .holidays_in_year(year)
        .into_iter()
        .map(|(date, label)| HolidayEntry {
            date: date.to_string(),
            weekday: DAY_HEADERS
                .get(date.weekday().num_days_from_monday() as usize)
                .copied()
                .unwrap_or_default()
                .to_string(),
            label: label.to_string(),
        })
        .collect();

    Ok(HolidaysResponse {
        year,
        public_holidays,
        school_holiday_days: engine.school_holidays().days_in_year(year),
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HOLIDAYS_ROUTE_COMPONENT).push(Router::with_path("{year}").get(holidays))
}
