//! User-facing notices surfaced by the controllers.
//!
//! Controllers never render anything themselves; they queue notices and the
//! embedder drains the queue and presents them (the demo binary logs them,
//! a shell around a real page would alert them). The set of notices is a
//! closed enum: only engine code can construct them, and each maps to one
//! fixed single-locale message.

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submission denied by the rate gate.
    RateLimited,
    /// One or more form rules failed; all violations are carried together.
    ValidationFailed { errors: Vec<String> },
    /// The simulated delivery completed.
    SubmissionDelivered,
    /// The simulated delivery failed.
    SubmissionFailed,
    /// The privacy policy was accepted from the modal.
    PrivacyAccepted,
}

impl Notice {
    /// The user-visible message text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::RateLimited => {
                "Пожалуйста, подождите 30 секунд перед повторной отправкой.".to_string()
            }
            Self::ValidationFailed { errors } => {
                format!("Пожалуйста, исправьте ошибки:\n\n{}", errors.join("\n"))
            }
            Self::SubmissionDelivered => {
                "✅ Ваш вопрос успешно отправлен!\n\nМы свяжемся с вами в ближайшее время по указанному номеру телефона."
                    .to_string()
            }
            Self::SubmissionFailed => {
                "❌ Произошла ошибка при отправке формы. Пожалуйста, попробуйте еще раз или свяжитесь с нами по телефону."
                    .to_string()
            }
            Self::PrivacyAccepted => "Вы приняли политику конфиденциальности.".to_string(),
        }
    }
}

/// FIFO queue of pending notices.
///
/// Unlike a deduplicating notification channel, repeated notices are kept:
/// submitting twice too fast should alert twice.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: Vec<Notice>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.pending.push(notice);
    }

    /// Take all pending notices in arrival order, clearing the queue.
    pub fn take(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
