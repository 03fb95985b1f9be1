//! Workbook assembly.

pub mod palette;
pub mod sheet;

use rust_xlsxwriter::Workbook;
use takwim_calendar::MonthGrid;
use takwim_calendar::calendar::gregorian::DAYS_PER_WEEK;

use crate::error::{RenderError, RenderResult};

/// ## Summary
/// Renders twelve month grids of `year` into an in-memory `.xlsx` document,
/// one worksheet per month with January active.
///
/// ## Errors
/// Returns `RenderError::InvalidGrid` unless `grids` holds the twelve months of
/// `year` in order, each with a complete cell list, and `RenderError::Xlsx` if
/// the writer fails.
#[tracing::instrument(skip(grids), fields(months = grids.len()))]
pub fn render_workbook(year: i32, grids: &[MonthGrid]) -> RenderResult<Vec<u8>> {
    validate(year, grids)?;

    let mut workbook = Workbook::new();
    for grid in grids {
        let worksheet = workbook.add_worksheet();
        sheet::write_month(worksheet, grid)?;
        if grid.month == 1 {
            worksheet.set_active(true);
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(bytes = bytes.len(), "Workbook rendered");

    Ok(bytes)
}

fn validate(year: i32, grids: &[MonthGrid]) -> RenderResult<()> {
    if grids.len() != 12 {
        return Err(RenderError::InvalidGrid(format!(
            "expected 12 months, got {}",
            grids.len()
        )));
    }

    for (expected_month, grid) in (1..=12).zip(grids) {
        if grid.year != year || grid.month != expected_month {
            return Err(RenderError::InvalidGrid(format!(
                "expected {year}-{expected_month:02}, got {}-{:02}",
                grid.year, grid.month
            )));
        }
        if grid.cells.len() != (grid.week_count * DAYS_PER_WEEK) as usize {
            return Err(RenderError::InvalidGrid(format!(
                "{} has {} cells for {} weeks",
                grid.month_name(),
                grid.cells.len(),
                grid.week_count
            )));
        }
    }

    Ok(())
}
