//! Team form: one state object holding the draft and the editing/preview mode,
//! the submission gate, and the `TeamApi` seam submissions go through.

use crate::models::{NewTeam, TeamDraft, TeamField};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Message shown when a failed submission carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// A rejected team creation request. `message` is whatever the server said, if anything.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApiFailure {
    pub message: Option<String>,
}

impl ApiFailure {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Server message, or the generic fallback.
    pub fn into_message(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
    }
}

/// Where a normalized team is sent. Returns the server's success message.
#[async_trait]
pub trait TeamApi: Send + Sync {
    async fn create_team(&self, team: &NewTeam) -> Result<String, ApiFailure>;
}

/// Whether the form is being edited or shown read-only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    #[default]
    Editing,
    Previewing,
}

/// Result of [`TeamForm::submit`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// A tracked field was empty; nothing was sent.
    Skipped,
    /// The draft could not be normalized; nothing was sent.
    Invalid(String),
    /// The team was created; carries the server message. The form has been reset.
    Created(String),
    /// The request failed; carries the server or fallback message. The draft is untouched.
    Failed(String),
}

/// One line of the preview.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PreviewRow {
    pub field: TeamField,
    pub label: &'static str,
    pub value: String,
}

/// Read-only rendering of the draft.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PreviewModel {
    pub rows: Vec<PreviewRow>,
}

impl PreviewModel {
    pub fn value(&self, field: TeamField) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.field == field)
            .map(|r| r.value.as_str())
    }
}

/// Each field's value, or its placeholder when empty.
pub fn render_preview(draft: &TeamDraft) -> PreviewModel {
    let rows = TeamField::ALL
        .iter()
        .map(|&field| {
            let value = draft.get(field);
            PreviewRow {
                field,
                label: field.label(),
                value: if value.is_empty() {
                    field.preview_placeholder().to_string()
                } else {
                    value.to_string()
                },
            }
        })
        .collect();
    PreviewModel { rows }
}

/// Team form state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamForm {
    draft: TeamDraft,
    mode: FormMode,
}

impl TeamForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_draft(draft: TeamDraft) -> Self {
        Self {
            draft,
            mode: FormMode::Editing,
        }
    }

    pub fn draft(&self) -> &TeamDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn value(&self, field: TeamField) -> &str {
        self.draft.get(field)
    }

    pub fn set_field(&mut self, field: TeamField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.draft.image = image;
    }

    /// Replace every field at once (a full form post).
    pub fn update(&mut self, draft: TeamDraft) {
        self.draft = draft;
    }

    pub fn open_preview(&mut self) {
        self.mode = FormMode::Previewing;
    }

    pub fn close_preview(&mut self) {
        self.mode = FormMode::Editing;
    }

    pub fn preview(&self) -> PreviewModel {
        render_preview(&self.draft)
    }

    /// Clear the draft and go back to editing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Send the draft if every tracked field is filled in.
    ///
    /// At most one request is made. On success the form is reset; on any
    /// other outcome the draft is left as it was.
    pub async fn submit<A>(&mut self, api: &A) -> SubmitOutcome
    where
        A: TeamApi + ?Sized,
    {
        if !self.draft.is_complete() {
            log::debug!("Team form incomplete, submission skipped");
            return SubmitOutcome::Skipped;
        }
        let payload = match self.draft.normalize() {
            Ok(p) => p,
            Err(e) => return SubmitOutcome::Invalid(e.to_string()),
        };
        match api.create_team(&payload).await {
            Ok(message) => {
                self.reset();
                SubmitOutcome::Created(message)
            }
            Err(failure) => {
                log::error!("Error during create-team: {:?}", failure);
                SubmitOutcome::Failed(failure.into_message())
            }
        }
    }
}
