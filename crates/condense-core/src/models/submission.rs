use serde::{Deserialize, Serialize};

/// A document uploaded through the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The raw inputs of one submit.
///
/// `location` and `project_id` are collected by the form but never
/// interpreted; they only show up in logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub location: String,
    pub project_id: String,
    pub file: Option<UploadedFile>,
    pub message: String,
}

impl Submission {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_file(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file: Some(UploadedFile {
                filename: filename.into(),
                bytes,
            }),
            ..Self::default()
        }
    }
}
