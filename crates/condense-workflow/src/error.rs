use thiserror::Error;

use condense_core::models::display::{Severity, SubmitOutcome};
use condense_extract::error::ExtractError;
use condense_model::error::SummarizeError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("no file or message provided")]
    NoInputProvided,

    #[error("document text too short: {length} characters, need at least {minimum}")]
    InputTooShort { length: usize, minimum: usize },

    #[error("{0}")]
    DocumentRead(String),

    #[error("summarization model returned no records")]
    EmptyModelResponse,

    #[error("{0}")]
    Summarization(String),
}

impl WorkflowError {
    pub fn severity(&self) -> Severity {
        match self {
            WorkflowError::InputTooShort { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// The message shown on the form.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::NoInputProvided => {
                "Please provide either a message or upload a file.".to_string()
            }
            WorkflowError::InputTooShort { .. } => {
                "The document is too short for meaningful summarization.".to_string()
            }
            WorkflowError::EmptyModelResponse => {
                "No valid response received from the summarization model.".to_string()
            }
            WorkflowError::DocumentRead(msg) | WorkflowError::Summarization(msg) => {
                format!("An error occurred: {msg}")
            }
        }
    }
}

impl From<ExtractError> for WorkflowError {
    fn from(e: ExtractError) -> Self {
        WorkflowError::DocumentRead(e.to_string())
    }
}

impl From<SummarizeError> for WorkflowError {
    fn from(e: SummarizeError) -> Self {
        WorkflowError::Summarization(e.to_string())
    }
}

impl From<WorkflowError> for SubmitOutcome {
    fn from(e: WorkflowError) -> Self {
        match e.severity() {
            Severity::Warning => SubmitOutcome::Warning(e.user_message()),
            Severity::Error => SubmitOutcome::Error(e.user_message()),
        }
    }
}
