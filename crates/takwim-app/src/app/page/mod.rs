//! The browser-facing form page and the workbook download it submits to.

mod download;
mod form;


use salvo::Router;

pub use download::build_workbook;
pub use form::render_form_page;

/// ## Summary
/// `GET /` shows the year form, `POST /` returns the generated workbook.
#[must_use]
pub fn routes() -> Router {
    Router::new().get(form::form_page).post(download::download)
}
