use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use takwim_calendar::CalendarLayoutEngine;
use takwim_calendar::calendar::{BuiltinHolidays, FileHolidays};
use takwim_core::config::CalendarConfig;
use takwim_core::error::CoreError;

pub struct EngineHandler {
    pub engine: Arc<CalendarLayoutEngine>,
}

#[async_trait]
impl salvo::Handler for EngineHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.engine));
    }
}

/// ## Summary
/// Retrieves the calendar layout engine from the depot.
///
/// ## Errors
/// Returns an error if the engine is not found in the depot.
pub fn get_engine_from_depot(depot: &salvo::Depot) -> AppResult<Arc<CalendarLayoutEngine>> {
    depot
        .obtain::<Arc<CalendarLayoutEngine>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Calendar engine not found in depot").into())
}

/// ## Summary
/// Builds the layout engine from the configured holiday source: the file named by
/// `calendar.holidays_file`, or the built-in tables.
///
/// ## Errors
/// Returns an error if the holiday file cannot be read or holds invalid dates.
pub fn build_engine(calendar: &CalendarConfig) -> AppResult<CalendarLayoutEngine> {
    let engine = if let Some(path) = &calendar.holidays_file {
        tracing::info!(path = %path, "Using holiday file");
        let source = FileHolidays::load(path)?;
        CalendarLayoutEngine::from_source(&source, calendar.school_holidays)?
    } else {
        tracing::info!("Using built-in holiday tables");
        CalendarLayoutEngine::from_source(&BuiltinHolidays, calendar.school_holidays)?
    };
    Ok(engine)
}
