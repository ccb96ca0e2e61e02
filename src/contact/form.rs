use std::collections::HashMap;

use futures::future::LocalBoxFuture;

use super::mailer::{MailError, Mailer, TemplateParams};
use super::validation::{validate_field, FieldName, FieldStatus};

pub const SENDING_LABEL: &str = "ENVIANDO...";
pub const SENT_LABEL: &str = "MENSAJE ENVIADO";

const INVALID_FORM_TEXT: &str = "Por favor corrige los errores en el formulario.";
const SENT_TEXT: &str = "¡Mensaje enviado con éxito! 🚀";
const SEND_FAILED_TEXT: &str = "Hubo un error al enviar. Revisa tu conexión.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Outcome the page should surface to the visitor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonPhase {
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// At least one field failed validation; nothing was sent.
    Invalid(Notice),
    /// A previous submission has not settled yet.
    InFlight,
}

/// A submission that passed validation and must now be delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub params: TemplateParams,
}

/// A submission handed to the mailer. `outcome` resolves once the mail
/// service answers and goes back in through [`ContactForm::finish`].
pub struct Delivery {
    pub generation: u64,
    pub outcome: LocalBoxFuture<'static, Result<(), MailError>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Field {
    value: String,
    status: Option<FieldStatus>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    fields: HashMap<FieldName, Field>,
    phase: ButtonPhase,
    idle_label: String,
    generation: u64,
    resets: u64,
}

impl ContactForm {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            fields: FieldName::ALL.iter().map(|f| (*f, Field::default())).collect(),
            phase: ButtonPhase::Idle,
            idle_label: idle_label.into(),
            generation: 0,
            resets: 0,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut Field {
        self.fields.entry(name).or_default()
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.fields.get(&name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn status(&self, name: FieldName) -> Option<&FieldStatus> {
        self.fields.get(&name).and_then(|f| f.status.as_ref())
    }

    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).value = value.into();
    }

    /// Revalidates `name` and replaces its decoration.
    pub fn validate(&mut self, name: FieldName) -> bool {
        let field = self.field_mut(name);
        let status = validate_field(name, &field.value);
        let valid = status.is_valid();
        field.status = Some(status);
        valid
    }

    pub fn on_blur(&mut self, name: FieldName) -> bool {
        self.validate(name)
    }

    /// Stores the typed value. Fields already showing an error are
    /// rechecked on every keystroke, and the message field always is so
    /// its character count stays live. Returns whether validation ran.
    pub fn on_input(&mut self, name: FieldName, value: impl Into<String>) -> bool {
        self.set_value(name, value);
        let in_error = matches!(self.status(name), Some(FieldStatus::Error(_)));
        if in_error || name == FieldName::Message {
            self.validate(name);
            true
        } else {
            false
        }
    }

    /// Validates every field, without stopping at the first failure.
    pub fn validate_all(&mut self) -> bool {
        FieldName::ALL
            .iter()
            .fold(true, |all_valid, name| self.validate(*name) && all_valid)
    }

    pub fn payload(&self) -> TemplateParams {
        TemplateParams {
            nombre: self.value(FieldName::Name).to_string(),
            email: self.value(FieldName::Email).to_string(),
            empresa: self.value(FieldName::Company).to_string(),
            servicio: self.value(FieldName::Service).to_string(),
            mensaje: self.value(FieldName::Message).to_string(),
        }
    }

    fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.phase != ButtonPhase::Idle {
            return Err(SubmitRejected::InFlight);
        }
        if !self.validate_all() {
            return Err(SubmitRejected::Invalid(Notice::error(INVALID_FORM_TEXT)));
        }
        self.generation += 1;
        self.phase = ButtonPhase::Sending;
        Ok(Submission {
            generation: self.generation,
            params: self.payload(),
        })
    }

    /// Validates and, when everything passes, starts exactly one send.
    pub fn submit(&mut self, mailer: &dyn Mailer) -> Result<Delivery, SubmitRejected> {
        let submission = self.begin_submit()?;
        Ok(Delivery {
            generation: submission.generation,
            outcome: mailer.send(&submission.params),
        })
    }

    /// Applies the delivery result of submission `generation`. Results for
    /// anything but the pending submission are dropped.
    pub fn finish(&mut self, generation: u64, result: Result<(), MailError>) -> Option<Notice> {
        if generation != self.generation || self.phase != ButtonPhase::Sending {
            return None;
        }
        match result {
            Ok(()) => {
                self.clear();
                self.phase = ButtonPhase::Sent;
                Some(Notice::success(SENT_TEXT))
            }
            Err(_) => {
                self.phase = ButtonPhase::Idle;
                Some(Notice::error(SEND_FAILED_TEXT))
            }
        }
    }

    /// Ends the "sent" confirmation started by submission `generation`.
    pub fn restore(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.phase == ButtonPhase::Sent {
            self.phase = ButtonPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Empties every value and drops all decorations.
    pub fn clear(&mut self) {
        for field in self.fields.values_mut() {
            *field = Field::default();
        }
        self.resets += 1;
    }

    /// Bumped by every [`clear`](Self::clear). Controls that keep their own
    /// DOM state (the service select) are remounted when it changes.
    pub fn reset_count(&self) -> u64 {
        self.resets
    }

    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    pub fn button_disabled(&self) -> bool {
        self.phase != ButtonPhase::Idle
    }

    pub fn button_label(&self) -> &str {
        match self.phase {
            ButtonPhase::Idle => &self.idle_label,
            ButtonPhase::Sending => SENDING_LABEL,
            ButtonPhase::Sent => SENT_LABEL,
        }
    }
}
