use serde::{Deserialize, Serialize};

use super::BookingDraft;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// The single message shown to the patient after an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub message: String,
}

impl SubmissionStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Mobile,
    Date,
    Time,
}

/// Booking form state: `Idle -> Submitting -> {Succeeded, Failed}`, back to
/// `Idle` on the next edit. Moved by value through each transition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentForm {
    pub phase: FormPhase,
    pub status: Option<SubmissionStatus>,
    pub draft: BookingDraft,
}

impl AppointmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draft(draft: BookingDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Updates one field. The last status stays visible until the next
    /// attempt; edits made while a submission is in flight do not leave
    /// `Submitting`.
    pub fn edit(mut self, field: DraftField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DraftField::Name => self.draft.name = value,
            DraftField::Mobile => self.draft.mobile = value,
            DraftField::Date => self.draft.date = value,
            DraftField::Time => self.draft.time = value,
        }
        if !self.is_submitting() {
            self.phase = FormPhase::Idle;
        }
        self
    }

    /// Enters `Submitting` and clears the previous status. A form that is
    /// already submitting comes back unchanged as `Err`.
    pub fn begin_submit(mut self) -> Result<Self, Self> {
        if self.is_submitting() {
            return Err(self);
        }
        self.phase = FormPhase::Submitting;
        self.status = None;
        Ok(self)
    }

    /// Success resets the draft; failure keeps it so the patient can fix it.
    pub fn succeed(mut self, message: impl Into<String>) -> Self {
        self.phase = FormPhase::Succeeded;
        self.status = Some(SubmissionStatus::success(message));
        self.draft = BookingDraft::default();
        self
    }

    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.phase = FormPhase::Failed;
        self.status = Some(SubmissionStatus::error(message));
        self
    }
}
