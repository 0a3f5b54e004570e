use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use condense_core::MIN_DOCUMENT_CHARS;
use condense_core::models::display::{DisplayPayload, SourceLabel, SubmitOutcome};
use condense_core::models::generation::GenerationParams;
use condense_core::models::submission::{Submission, UploadedFile};
use condense_model::Summarizer;

use crate::error::WorkflowError;

/// The input a submission resolves to. A file always wins over a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    File(&'a UploadedFile),
    Message(&'a str),
}

pub fn resolve_source(submission: &Submission) -> Result<InputSource<'_>, WorkflowError> {
    if let Some(file) = &submission.file {
        Ok(InputSource::File(file))
    } else if !submission.message.is_empty() {
        Ok(InputSource::Message(&submission.message))
    } else {
        Err(WorkflowError::NoInputProvided)
    }
}

/// Extract a document and apply the minimum length gate.
///
/// Only documents are gated; typed messages go to the model at any length.
pub fn document_text(file: &UploadedFile) -> Result<String, WorkflowError> {
    let text = condense_extract::extract_text(&file.bytes)?;

    let length = text.chars().count();
    if length < MIN_DOCUMENT_CHARS {
        return Err(WorkflowError::InputTooShort {
            length,
            minimum: MIN_DOCUMENT_CHARS,
        });
    }

    Ok(text)
}

/// Run one submission to a payload or a workflow error.
pub async fn run<S>(summarizer: &S, submission: &Submission) -> Result<DisplayPayload, WorkflowError>
where
    S: Summarizer + Sync,
{
    let (source, text) = match resolve_source(submission)? {
        InputSource::File(file) => {
            info!(filename = %file.filename, bytes = file.bytes.len(), "summarizing uploaded document");
            (SourceLabel::File, document_text(file)?)
        }
        InputSource::Message(message) => (SourceLabel::Message, message.to_string()),
    };

    let records = summarizer
        .summarize(&text, &GenerationParams::SUMMARY)
        .await?;

    let summary = records
        .first()
        .ok_or(WorkflowError::EmptyModelResponse)?
        .summary()
        .to_string();

    info!(
        source = %source,
        text_len = text.len(),
        summary_len = summary.len(),
        records = records.len(),
        "summary generated"
    );

    Ok(DisplayPayload::new(source, text, summary))
}

/// Handle one submit of the form. Never fails: every error becomes the
/// single warning or error message the user sees.
pub async fn submit<S>(summarizer: &S, submission: &Submission) -> SubmitOutcome
where
    S: Summarizer + Sync,
{
    let span = info_span!(
        "submit",
        invocation_id = %Uuid::new_v4(),
        location = %submission.location,
        project_id = %submission.project_id,
    );

    async {
        match run(summarizer, submission).await {
            Ok(payload) => SubmitOutcome::Success(payload),
            Err(e) => {
                warn!(error = %e, severity = ?e.severity(), "submission not summarized");
                SubmitOutcome::from(e)
            }
        }
    }
    .instrument(span)
    .await
}
