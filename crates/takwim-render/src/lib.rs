//! Spreadsheet rendering of Takwim month grids.

pub mod error;
pub mod workbook;

pub use error::{RenderError, RenderResult};
pub use workbook::render_workbook;
