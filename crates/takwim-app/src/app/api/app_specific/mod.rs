use salvo::Router;

use super::APP_ROUTE_COMPONENT;

mod healthcheck;
mod holidays;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(APP_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(holidays::routes())
}
