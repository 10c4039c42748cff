use std::time::Duration;

use crate::{
    foundation::core::SceneTime,
    form::validate::{FormField, FormValidationError, ValidationKind, validate_field},
};

/// How long the acknowledgement stays up before the form resets.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Current text of every field.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormFields {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl FormFields {
    /// Value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Per-field error slots. `None` means no error is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors {
    /// Name error.
    pub name: Option<ValidationKind>,
    /// Email error.
    pub email: Option<ValidationKind>,
    /// Message error.
    pub message: Option<ValidationKind>,
}

impl FieldErrors {
    /// Error for `field`, if any.
    pub fn get(&self, field: FormField) -> Option<FormValidationError> {
        let kind = match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Message => self.message,
        };
        kind.map(|kind| FormValidationError { field, kind })
    }

    fn slot(&mut self, field: FormField) -> &mut Option<ValidationKind> {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// All present errors in field order.
    pub fn all(&self) -> Vec<FormValidationError> {
        FormField::ALL.iter().filter_map(|f| self.get(*f)).collect()
    }

    /// Whether no field has an error.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Lifecycle phase of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FormPhase {
    /// Accepting input.
    Editing,
    /// Acknowledged; resets once `reset_at` passes.
    Submitted {
        /// Deadline of the pending reset, `None` once cancelled by teardown.
        reset_at: Option<SceneTime>,
    },
}

/// Result of a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields passed; the form is now acknowledged.
    Accepted {
        /// When the form will reset.
        reset_at: SceneTime,
    },
    /// At least one field failed; the errors are now shown.
    Rejected(Vec<FormValidationError>),
    /// The form was already acknowledged; nothing changed.
    Ignored,
}

/// Snapshot handed to the rendering layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FormState {
    /// Field values.
    pub fields: FormFields,
    /// Field errors.
    pub errors: FieldErrors,
    /// User-visible error messages in field order.
    pub messages: Vec<String>,
    /// Whether the acknowledgement is showing.
    pub submitted: bool,
}

/// Contact form state machine: `Editing -> Submitted -> Editing`.
///
/// Validation is synchronous and local; nothing is transmitted. The reset after acceptance is a
/// deadline the owner drives with [`ContactFormController::poll`].
#[derive(Clone, Debug)]
pub struct ContactFormController {
    fields: FormFields,
    errors: FieldErrors,
    phase: FormPhase,
    reset_delay: Duration,
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_DELAY)
    }
}

impl ContactFormController {
    /// Empty form in `Editing` with the given acknowledgement delay.
    pub fn new(reset_delay: Duration) -> Self {
        Self {
            fields: FormFields::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::Editing,
            reset_delay,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Field values.
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether the acknowledgement is showing.
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted { .. })
    }

    /// Keystroke on `field`. Replaces the value and clears only that field's error.
    ///
    /// Returns `false` (and changes nothing) while the acknowledgement is showing, since the
    /// inputs are not on screen then.
    pub fn change(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_submitted() {
            return false;
        }
        *self.fields.slot(field) = value.into();
        let err = self.errors.slot(field);
        if err.is_some() {
            tracing::trace!(%field, "clearing field error on edit");
            *err = None;
        }
        true
    }

    /// Submit at `now`: validate every field, then either show errors or acknowledge and arm the
    /// reset deadline.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn submit(&mut self, now: SceneTime) -> SubmitOutcome {
        if self.is_submitted() {
            return SubmitOutcome::Ignored;
        }

        let mut errors = FieldErrors::default();
        for field in FormField::ALL {
            *errors.slot(field) = validate_field(field, self.fields.get(field)).map(|e| e.kind);
        }
        self.errors = errors;

        if !errors.is_empty() {
            let all = errors.all();
            tracing::debug!(count = all.len(), "submit rejected");
            return SubmitOutcome::Rejected(all);
        }

        let reset_at = now.after(self.reset_delay);
        self.phase = FormPhase::Submitted {
            reset_at: Some(reset_at),
        };
        tracing::debug!(?reset_at, "submit accepted");
        SubmitOutcome::Accepted { reset_at }
    }

    /// Fire the reset if its deadline has passed. Returns `true` when the form was reset.
    pub fn poll(&mut self, now: SceneTime) -> bool {
        match self.phase {
            FormPhase::Submitted {
                reset_at: Some(deadline),
            } if now >= deadline => {
                self.fields = FormFields::default();
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Editing;
                tracing::debug!("form reset after acknowledgement");
                true
            }
            _ => false,
        }
    }

    /// Disarm a pending reset so it can never fire. Used on teardown.
    pub fn cancel_reset(&mut self) {
        if let FormPhase::Submitted { reset_at: Some(_) } = self.phase {
            self.phase = FormPhase::Submitted { reset_at: None };
            tracing::debug!("pending form reset cancelled");
        }
    }

    /// Snapshot for rendering.
    pub fn state(&self) -> FormState {
        FormState {
            fields: self.fields.clone(),
            errors: self.errors,
            messages: self
                .errors
                .all()
                .iter()
                .map(|e| e.message().to_owned())
                .collect(),
            submitted: self.is_submitted(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/form/controller.rs"]
mod tests;
