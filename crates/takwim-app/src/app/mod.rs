pub mod api;
pub mod page;
pub mod year;

use std::sync::Arc;

use salvo::Router;
use takwim_calendar::CalendarLayoutEngine;

use crate::config::{ConfigHandler, Settings};
use crate::engine_handler::EngineHandler;

/// ## Summary
/// Constructs the full application router: the form page at `/` and the JSON
/// API under `/api`, with settings and engine injected into every request.
#[must_use]
pub fn service_router(settings: Arc<Settings>, engine: Arc<CalendarLayoutEngine>) -> Router {
    Router::new()
        .hoop(ConfigHandler { settings })
        .hoop(EngineHandler { engine })
        .push(api::routes())
        .push(page::routes())
}
