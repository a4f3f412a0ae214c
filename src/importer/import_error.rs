use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Cannot read listing page: {0}")]
    Io(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
}
