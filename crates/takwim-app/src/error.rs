use salvo::http::StatusCode;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CalendarError(#[from] takwim_calendar::CalendarError),

    #[error(transparent)]
    RenderError(#[from] takwim_render::RenderError),

    #[error(transparent)]
    CoreError(#[from] takwim_core::error::CoreError),

    #[error("Invalid header value: {0}")]
    HeaderError(#[from] salvo::http::header::InvalidHeaderValue),
}

impl AppError {
    /// ## Summary
    /// Maps the error to the status code returned to the client. Only input
    /// validation failures are the client's fault.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::CoreError(takwim_core::error::CoreError::ValidationError(_)) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
