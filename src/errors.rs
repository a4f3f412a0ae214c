// errors.rs
use crate::importer::ImportError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, form validation) or downstream layers (DB, import).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
