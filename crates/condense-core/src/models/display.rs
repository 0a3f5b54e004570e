use serde::{Deserialize, Serialize};

/// Where the summarized text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLabel {
    File,
    Message,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::File => "file",
            SourceLabel::Message => "message",
        }
    }

    /// Heading shown above the original text.
    pub fn source_heading(&self) -> &'static str {
        match self {
            SourceLabel::File => "Original Text from DOCX:",
            SourceLabel::Message => "User Message:",
        }
    }

    /// Heading shown above the generated summary.
    pub fn summary_heading(&self) -> &'static str {
        match self {
            SourceLabel::File => "Summary from LLM:",
            SourceLabel::Message => "Response from LLM:",
        }
    }
}

impl std::fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Original text and summary, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPayload {
    pub source: SourceLabel,
    pub source_heading: String,
    pub source_text: String,
    pub summary_heading: String,
    pub summary_text: String,
}

impl DisplayPayload {
    pub fn new(source: SourceLabel, source_text: String, summary_text: String) -> Self {
        Self {
            source,
            source_heading: source.source_heading().to_string(),
            source_text,
            summary_heading: source.summary_heading().to_string(),
            summary_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// Terminal result of one submit: a payload or exactly one diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Success(DisplayPayload),
    Warning(String),
    Error(String),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }

    /// `None` for a successful outcome.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            SubmitOutcome::Success(_) => None,
            SubmitOutcome::Warning(_) => Some(Severity::Warning),
            SubmitOutcome::Error(_) => Some(Severity::Error),
        }
    }

    pub fn payload(&self) -> Option<&DisplayPayload> {
        match self {
            SubmitOutcome::Success(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Success(_) => None,
            SubmitOutcome::Warning(msg) | SubmitOutcome::Error(msg) => Some(msg),
        }
    }
}
