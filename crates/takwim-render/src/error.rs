use thiserror::Error;

/// Workbook rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Spreadsheet writer error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

pub type RenderResult<T> = std::result::Result<T, RenderError>;
