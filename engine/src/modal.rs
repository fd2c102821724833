//! Privacy policy modal.

use vitrina_dom::{Document, NodeId, Overflow};

use crate::notices::{Notice, NoticeQueue};
use crate::selectors::{MODAL_TRIGGERS, selector};

/// Controller for the single privacy-policy dialog.
///
/// Two states, `Closed` (initial) and `Open`, mirrored onto the `active`
/// class and the `aria-hidden` attribute of the dialog container.
#[derive(Debug)]
pub struct ModalController {
    modal: NodeId,
    close_btn: Option<NodeId>,
    accept_btn: Option<NodeId>,
    triggers: Vec<NodeId>,
    open: bool,
}

impl ModalController {
    /// Wire the controller, or `None` when the dialog element is missing
    /// (trigger links are then inert).
    pub fn bind(doc: &Document) -> Option<Self> {
        let modal = doc.element_by_id("privacy-modal")?;
        Some(Self {
            modal,
            close_btn: doc.query_within(modal, &selector(".modal-close")),
            accept_btn: doc.query_within(modal, &selector(".accept-btn")),
            triggers: doc.query_all(&selector(MODAL_TRIGGERS)),
            open: false,
        })
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// React to a click anywhere on the page.
    ///
    /// Trigger clicks open the dialog; while open, the close control, the
    /// accept control, and the backdrop (a click on the dialog container
    /// itself, not a descendant) close it. Clicks keep propagating either
    /// way, as they would from element-level handlers.
    pub fn handle_click(&mut self, doc: &mut Document, notices: &mut NoticeQueue, target: NodeId) {
        if self
            .triggers
            .iter()
            .any(|trigger| doc.contains(*trigger, target))
        {
            self.open(doc);
            return;
        }

        if !self.open {
            return;
        }
        if self
            .close_btn
            .is_some_and(|btn| doc.contains(btn, target))
        {
            self.close(doc);
        } else if self
            .accept_btn
            .is_some_and(|btn| doc.contains(btn, target))
        {
            self.close(doc);
            notices.push(Notice::PrivacyAccepted);
        } else if target == self.modal {
            // Backdrop: the container itself, not dialog content.
            self.close(doc);
        }
    }

    /// Escape closes the dialog while open.
    pub fn handle_escape(&mut self, doc: &mut Document) {
        if self.open {
            self.close(doc);
        }
    }

    fn open(&mut self, doc: &mut Document) {
        self.open = true;
        doc.add_class(self.modal, "active");
        doc.set_body_overflow(Overflow::Hidden);
        doc.set_attr(self.modal, "aria-hidden", "false");
        tracing::debug!("privacy modal opened");
    }

    fn close(&mut self, doc: &mut Document) {
        self.open = false;
        doc.remove_class(self.modal, "active");
        doc.set_body_overflow(Overflow::Auto);
        doc.set_attr(self.modal, "aria-hidden", "true");
        tracing::debug!("privacy modal closed");
    }
}
