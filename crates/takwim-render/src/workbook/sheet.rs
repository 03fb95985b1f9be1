//! One worksheet per month: title banners, day headers and the week grid.
//!
//! Each week occupies two rows, a short date row above a tall activity row
//! that holds the holiday label and leaves room for handwritten notes.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Worksheet};
use takwim_calendar::{DayCell, HeaderTone, MonthGrid};
use takwim_core::constants::DAY_HEADERS;

use super::palette;
use crate::error::{RenderError, RenderResult};

pub const COLUMN_COUNT: u16 = 7;
const LAST_COLUMN: u16 = COLUMN_COUNT - 1;
const COLUMN_WIDTH: f64 = 22.0;

const YEAR_ROW: u32 = 0;
const MONTH_ROW: u32 = 1;
const DAY_HEADER_ROW: u32 = 2;
const FIRST_WEEK_ROW: u32 = 3;

const HEIGHT_YEAR_ROW: f64 = 35.0;
const HEIGHT_MONTH_ROW: f64 = 30.0;
const HEIGHT_DAY_HEADER_ROW: f64 = 25.0;
const HEIGHT_DATE_ROW: f64 = 20.0;
const HEIGHT_ACTIVITY_ROW: f64 = 50.0;

/// Zero-based row holding the date numbers of a week.
#[must_use]
pub const fn date_row(week: u32) -> u32 {
    FIRST_WEEK_ROW + 2 * week
}

/// Zero-based row holding the labels of a week.
#[must_use]
pub const fn activity_row(week: u32) -> u32 {
    date_row(week) + 1
}

/// Zero-based last row of a sheet with `week_count` weeks.
#[must_use]
pub const fn last_row(week_count: u32) -> u32 {
    if week_count == 0 {
        DAY_HEADER_ROW
    } else {
        activity_row(week_count - 1)
    }
}

/// Border weight on one side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Line {
    #[default]
    None,
    Thin,
    Thick,
}

impl Line {
    const fn border(self) -> FormatBorder {
        match self {
            Self::None => FormatBorder::None,
            Self::Thin => FormatBorder::Thin,
            Self::Thick => FormatBorder::Thick,
        }
    }
}

/// Borders of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: Line,
    pub bottom: Line,
    pub left: Line,
    pub right: Line,
}

impl Edges {
    /// ## Summary
    /// Thickens the sides that lie on the sheet's outer outline or under the
    /// day-header row.
    #[must_use]
    pub const fn framed(mut self, row: u32, col: u16, last_row: u32) -> Self {
        if row == YEAR_ROW {
            self.top = Line::Thick;
        }
        if row == last_row || row == DAY_HEADER_ROW {
            self.bottom = Line::Thick;
        }
        if col == 0 {
            self.left = Line::Thick;
        }
        if col == LAST_COLUMN {
            self.right = Line::Thick;
        }
        self
    }

    fn apply(self, format: Format) -> Format {
        let format = format
            .set_border_top(self.top.border())
            .set_border_bottom(self.bottom.border())
            .set_border_left(self.left.border())
            .set_border_right(self.right.border());
        if self == Self::default() {
            format
        } else {
            format.set_border_color(palette::BORDER)
        }
    }
}

enum Banner<'a> {
    Number(f64),
    Text(&'a str),
}

/// ## Summary
/// Writes a month grid into `worksheet`.
///
/// ## Errors
/// Returns `RenderError::Xlsx` if the writer rejects a value and
/// `RenderError::InvalidGrid` if a cell's column is out of range.
pub fn write_month(worksheet: &mut Worksheet, grid: &MonthGrid) -> RenderResult<()> {
    worksheet.set_name(grid.month_name())?;
    for col in 0..COLUMN_COUNT {
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    let last = last_row(grid.week_count);

    write_banner(
        worksheet,
        YEAR_ROW,
        HEIGHT_YEAR_ROW,
        24.0,
        palette::YEAR_HEADER,
        last,
        &Banner::Number(f64::from(grid.year)),
    )?;
    write_banner(
        worksheet,
        MONTH_ROW,
        HEIGHT_MONTH_ROW,
        20.0,
        palette::MONTH_HEADER,
        last,
        &Banner::Text(grid.month_name()),
    )?;
    write_day_headers(worksheet, last)?;

    for (week, cells) in grid.weeks().enumerate() {
        let week = u32::try_from(week)
            .map_err(|_err| RenderError::InvalidGrid(format!("week index {week} overflows")))?;
        worksheet.set_row_height(date_row(week), HEIGHT_DATE_ROW)?;
        worksheet.set_row_height(activity_row(week), HEIGHT_ACTIVITY_ROW)?;
        for cell in cells {
            write_day(worksheet, week, cell, last)?;
        }
    }

    Ok(())
}

fn banner_format(font_size: f64, fill: u32) -> Format {
    Format::new()
        .set_bold()
        .set_font_size(font_size)
        .set_font_color(palette::HEADER_TEXT)
        .set_background_color(fill)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// A full-width merged title row.
fn write_banner(
    worksheet: &mut Worksheet,
    row: u32,
    height: f64,
    font_size: f64,
    fill: u32,
    last: u32,
    content: &Banner<'_>,
) -> RenderResult<()> {
    worksheet.set_row_height(row, height)?;

    let inner = Edges::default().framed(row, 1, last).apply(banner_format(font_size, fill));
    worksheet.merge_range(row, 0, row, LAST_COLUMN, "", &inner)?;

    let first = Edges::default().framed(row, 0, last).apply(banner_format(font_size, fill));
    match content {
        Banner::Number(value) => worksheet.write_number_with_format(row, 0, *value, &first)?,
        Banner::Text(text) => worksheet.write_string_with_format(row, 0, *text, &first)?,
    };

    let end = Edges::default()
        .framed(row, LAST_COLUMN, last)
        .apply(banner_format(font_size, fill));
    worksheet.write_blank(row, LAST_COLUMN, &end)?;

    Ok(())
}

fn write_day_headers(worksheet: &mut Worksheet, last: u32) -> RenderResult<()> {
    worksheet.set_row_height(DAY_HEADER_ROW, HEIGHT_DAY_HEADER_ROW)?;

    for (col, name) in (0..COLUMN_COUNT).zip(DAY_HEADERS) {
        let tone = HeaderTone::for_column(u32::from(col));
        let format = Edges::default().framed(DAY_HEADER_ROW, col, last).apply(
            Format::new()
                .set_bold()
                .set_font_size(14)
                .set_font_color(palette::HEADER_TEXT)
                .set_background_color(palette::header_fill(tone))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
        );
        worksheet.write_string_with_format(DAY_HEADER_ROW, col, name, &format)?;
    }

    Ok(())
}

fn write_day(worksheet: &mut Worksheet, week: u32, cell: &DayCell, last: u32) -> RenderResult<()> {
    let col = u16::try_from(cell.column)
        .ok()
        .filter(|col| *col < COLUMN_COUNT)
        .ok_or_else(|| RenderError::InvalidGrid(format!("column {} out of range", cell.column)))?;
    let fill = palette::cell_fill(cell.visual_category());

    let date_row = date_row(week);
    let date_edges = Edges {
        top: Line::Thin,
        left: Line::Thin,
        right: Line::Thin,
        ..Edges::default()
    };
    let date_format = date_edges.framed(date_row, col, last).apply(
        Format::new()
            .set_bold()
            .set_font_size(11)
            .set_background_color(fill)
            .set_align(FormatAlign::Right)
            .set_align(FormatAlign::Top),
    );

    let activity_row = activity_row(week);
    let activity_edges = Edges {
        bottom: Line::Thin,
        left: Line::Thin,
        right: Line::Thin,
        ..Edges::default()
    };
    let mut activity_format = Format::new()
        .set_font_size(10)
        .set_background_color(fill)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::Top)
        .set_text_wrap();
    if cell.is_public_holiday() {
        activity_format = activity_format
            .set_bold()
            .set_font_color(palette::HOLIDAY_TEXT);
    }
    let activity_format = activity_edges
        .framed(activity_row, col, last)
        .apply(activity_format);

    match cell.date_number() {
        Some(day) => worksheet.write_number_with_format(date_row, col, day, &date_format)?,
        None => worksheet.write_blank(date_row, col, &date_format)?,
    };

    if cell.is_public_holiday() {
        worksheet.write_string_with_format(activity_row, col, cell.label_text(), &activity_format)?;
    } else {
        worksheet.write_blank(activity_row, col, &activity_format)?;
    }

    Ok(())
}
