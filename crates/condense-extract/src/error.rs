use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read document: {0}")]
    DocumentRead(String),
}

impl From<docx_rs::ReaderError> for ExtractError {
    fn from(e: docx_rs::ReaderError) -> Self {
        ExtractError::DocumentRead(e.to_string())
    }
}
