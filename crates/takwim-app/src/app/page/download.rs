use salvo::http::HeaderValue;
use salvo::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::{Depot, Request, Response, handler, writing::Text};
use tracing::{error, warn};

use takwim_calendar::CalendarLayoutEngine;
use takwim_core::constants::{XLSX_CONTENT_TYPE, download_filename};
use takwim_render::render_workbook;

use crate::app::year::{INVALID_YEAR_MESSAGE, parse_year};
use crate::config::get_config_from_depot;
use crate::engine_handler::get_engine_from_depot;
use crate::error::AppResult;

/// ## Summary
/// Lays out `year` and renders it as an `.xlsx` document.
///
/// ## Errors
/// Returns an error if layout or rendering fails.
pub fn build_workbook(engine: &CalendarLayoutEngine, year: i32) -> AppResult<Vec<u8>> {
    let grids = engine.generate(year)?;
    Ok(render_workbook(year, &grids)?)
}

/// ## Summary
/// POST / - Generates the calendar workbook for the submitted `year` form field
/// and sends it as an attachment named `Calendar_<year>.xlsx`.
///
/// ## Errors
/// Returns HTTP 400 with `Invalid year selected` for a missing, malformed or
/// out-of-range year.
/// Returns HTTP 500 with a plain message if generation fails; no partial
/// workbook is sent.
#[handler]
pub async fn download(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let raw = req.form::<String>("year").await;

    let year = match validated_year(raw.as_deref(), depot) {
        Ok(year) => year,
        Err(e) => {
            if e.status_code().is_client_error() {
                warn!(error = %e, "Rejected calendar request");
                res.status_code(e.status_code());
                res.render(Text::Plain(INVALID_YEAR_MESSAGE));
            } else {
                error!(error = ?e, "Failed to read configuration");
                res.status_code(e.status_code());
                res.render(Text::Plain("Internal Server Error"));
            }
            return;
        }
    };

    tracing::info!(year, "Generating calendar workbook");

    if let Err(e) = generate_download(year, depot, res) {
        error!(error = ?e, year, "Failed to generate calendar workbook");
        res.status_code(e.status_code());
        res.render(Text::Plain("Failed to generate calendar"));
    }
}

fn validated_year(raw: Option<&str>, depot: &Depot) -> AppResult<i32> {
    let settings = get_config_from_depot(depot)?;
    parse_year(raw, &settings.calendar)
}

fn generate_download(year: i32, depot: &Depot, res: &mut Response) -> AppResult<()> {
    let engine = get_engine_from_depot(depot)?;
    let bytes = build_workbook(&engine, year)?;
    let disposition = attachment_header(year)?;

    let headers = res.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE));
    headers.insert(CONTENT_DISPOSITION, disposition);
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));

    tracing::debug!(year, bytes = bytes.len(), "Sending calendar workbook");
    res.body(bytes);

    Ok(())
}

fn attachment_header(year: i32) -> AppResult<HeaderValue> {
    let value = format!("attachment; filename=\"{}\"", download_filename(year));
    Ok(HeaderValue::from_str(&value)?)
}
