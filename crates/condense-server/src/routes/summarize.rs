use axum::Json;
use axum::extract::{Multipart, State};
use tracing::debug;

use condense_core::models::display::SubmitOutcome;
use condense_core::models::submission::{Submission, UploadedFile};
use condense_model::Summarizer;
use condense_model::registry::ModelLoader;
use condense_workflow::error::WorkflowError;

use crate::error::ApiError;
use crate::state::AppState;

/// Fields of the summarization form.
#[derive(Debug, Default)]
pub struct SummarizeForm {
    pub location: String,
    pub model: Option<String>,
    pub project_id: String,
    pub file: Option<UploadedFile>,
    pub message: String,
}

impl SummarizeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = SummarizeForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "location" => form.location = field.text().await?,
                "project_id" => form.project_id = field.text().await?,
                "message" => form.message = field.text().await?,
                "model" => {
                    let model = field.text().await?;
                    let model = model.trim();
                    if !model.is_empty() {
                        form.model = Some(model.to_string());
                    }
                }
                "file" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    // A file input left empty still sends a part with no name and no content.
                    if filename.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    if !is_docx(&filename) {
                        return Err(ApiError::UnsupportedUpload(filename));
                    }
                    form.file = Some(UploadedFile {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
                other => debug!(field = other, "ignoring unknown form field"),
            }
        }

        Ok(form)
    }

    pub fn into_submission(self) -> Submission {
        Submission {
            location: self.location,
            project_id: self.project_id,
            file: self.file,
            message: self.message,
        }
    }
}

fn is_docx(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".docx")
}

/// Summarize an uploaded document or a typed message.
///
/// Always answers 200 with a `SubmitOutcome` once the form is well-formed;
/// warnings and errors are part of the outcome.
pub async fn summarize<L>(
    State(state): State<AppState<L>>,
    multipart: Multipart,
) -> Result<Json<SubmitOutcome>, ApiError>
where
    L: ModelLoader + 'static,
    L::Model: Summarizer,
{
    let mut form = SummarizeForm::from_multipart(multipart).await?;

    let model_id = match form.model.take() {
        Some(id) => state
            .catalog
            .find(&id)
            .map(|m| m.model_id.clone())
            .ok_or(ApiError::UnknownModel(id))?,
        None => state.catalog.default_model().model_id.clone(),
    };

    let submission = form.into_submission();

    let outcome = match state.registry.get_or_load(&model_id).await {
        Ok(model) => condense_workflow::submit(model.as_ref(), &submission).await,
        Err(e) => {
            tracing::warn!(model_id = %model_id, error = %e, "model failed to load");
            SubmitOutcome::from(WorkflowError::from(e))
        }
    };

    Ok(Json(outcome))
}
