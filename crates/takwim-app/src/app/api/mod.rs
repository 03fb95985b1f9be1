mod app_specific;

use salvo::Router;

pub use takwim_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_COMPONENT, APP_ROUTE_PREFIX,
    HOLIDAYS_ROUTE_COMPONENT, HOLIDAYS_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the JSON API router.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT).push(app_specific::routes())
}
