//! Contact form: live formatting, validation, simulated submission.

use std::time::{Duration, Instant};

use vitrina_dom::{Document, NodeId};
use vitrina_types::{escape_markup, phone};

use crate::gate::SubmitGate;
use crate::notices::{Notice, NoticeQueue};
use crate::selectors::selector;
use crate::timers::{TimerKind, TimerQueue};
use crate::transport::{Lead, TransportError};

/// Simulated delivery latency; the only suspension point on the page.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

const SENDING_LABEL: &str = "Отправка...";

const ERR_NAME: &str = "Введите корректное имя (минимум 2 символа)";
const ERR_PHONE: &str = "Введите корректный номер телефона";
const ERR_QUESTION: &str = "Введите вопрос (минимум 10 символов)";

#[derive(Debug)]
enum FormState {
    Idle,
    /// Delivery scheduled; the submit control is disabled until it lands.
    Submitting { restore_label: String },
}

/// Controller for the contact form.
#[derive(Debug)]
pub struct FormController {
    form: NodeId,
    name_field: NodeId,
    phone_field: NodeId,
    question_field: NodeId,
    submit_btn: NodeId,
    state: FormState,
    gate: SubmitGate,
}

impl FormController {
    /// Wire the controller, or `None` when the form or any of its controls
    /// is missing (the whole feature then no-ops).
    pub fn bind(doc: &Document) -> Option<Self> {
        let form = doc.element_by_id("contact-form")?;
        Some(Self {
            form,
            name_field: doc.query_within(form, &selector(r#"[name="name"]"#))?,
            phone_field: doc.query_within(form, &selector(r#"[name="phone"]"#))?,
            question_field: doc.query_within(form, &selector(r#"[name="question"]"#))?,
            submit_btn: doc.query_within(form, &selector(r#"button[type="submit"]"#))?,
            state: FormState::Idle,
            gate: SubmitGate::new(),
        })
    }

    #[must_use]
    pub fn form(&self) -> NodeId {
        self.form
    }

    #[must_use]
    pub fn phone_field(&self) -> NodeId {
        self.phone_field
    }

    /// Re-render the phone field through the as-typed formatter. Runs on
    /// every keystroke, whatever state the form is in.
    pub fn reformat_phone(&self, doc: &mut Document) {
        let formatted = phone::format_as_typed(doc.value(self.phone_field));
        // A value with no digits at all is left as typed.
        if !formatted.is_empty() {
            doc.set_value(self.phone_field, &formatted);
        }
    }

    /// Handle a submit request.
    ///
    /// Order is deliberate: the rate gate is consulted (and consumed) before
    /// validation, so a rejected attempt still costs its slot.
    pub fn handle_submit(
        &mut self,
        doc: &mut Document,
        notices: &mut NoticeQueue,
        timers: &mut TimerQueue,
        now: Instant,
    ) {
        if matches!(self.state, FormState::Submitting { .. }) {
            // The button is disabled while submitting; ignore stray events.
            return;
        }

        if !self.gate.check(now) {
            notices.push(Notice::RateLimited);
            return;
        }

        let name = escape_markup(doc.value(self.name_field).trim()).into_owned();
        let raw_phone = escape_markup(doc.value(self.phone_field).trim()).into_owned();
        let question = escape_markup(doc.value(self.question_field).trim()).into_owned();

        let mut errors = Vec::new();
        if name.chars().count() < 2 {
            errors.push(ERR_NAME.to_string());
        }
        if !phone::is_valid(&raw_phone) {
            errors.push(ERR_PHONE.to_string());
        }
        if question.chars().count() < 10 {
            errors.push(ERR_QUESTION.to_string());
        }
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "submission rejected by validation");
            notices.push(Notice::ValidationFailed { errors });
            return;
        }

        let restore_label = doc.text_content(self.submit_btn);
        doc.set_text_content(self.submit_btn, SENDING_LABEL);
        doc.set_disabled(self.submit_btn, true);
        self.state = FormState::Submitting { restore_label };

        timers.schedule(
            now + SUBMIT_DELAY,
            TimerKind::Delivery {
                lead: Lead {
                    name,
                    phone: raw_phone,
                    question,
                },
            },
        );
        tracing::debug!("submission accepted, delivery scheduled");
    }

    /// Complete the submission once the transport has run.
    ///
    /// The submit control is restored on both paths; only the success path
    /// clears the entered values.
    pub fn finish_submission(
        &mut self,
        doc: &mut Document,
        notices: &mut NoticeQueue,
        lead: &Lead,
        outcome: Result<(), TransportError>,
    ) {
        match outcome {
            Ok(()) => {
                tracing::info!(
                    name = %lead.name,
                    phone = %phone::canonical(&lead.phone),
                    question = %lead.question,
                    "lead delivered"
                );
                notices.push(Notice::SubmissionDelivered);
                doc.set_value(self.name_field, "");
                doc.set_value(self.phone_field, "");
                doc.set_value(self.question_field, "");
            }
            Err(error) => {
                tracing::error!(error = %error, "lead delivery failed");
                notices.push(Notice::SubmissionFailed);
            }
        }

        if let FormState::Submitting { restore_label } =
            std::mem::replace(&mut self.state, FormState::Idle)
        {
            doc.set_text_content(self.submit_btn, &restore_label);
        }
        doc.set_disabled(self.submit_btn, false);
    }
}
