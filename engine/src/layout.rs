//! Viewport-driven header layout.

use vitrina_dom::{Document, NodeId, Overflow};

use crate::nav::NavController;
use crate::selectors::selector;

/// Width below which the header switches to its mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Re-derives the header's mobile/desktop state from the viewport width.
#[derive(Debug)]
pub struct LayoutResponder {
    header: Option<NodeId>,
}

impl LayoutResponder {
    pub fn bind(doc: &Document) -> Self {
        Self {
            header: doc.query(&selector(".header")),
        }
    }

    /// Apply the layout for the current viewport width.
    ///
    /// Going desktop force-collapses the mobile menu and unlocks page
    /// scroll; a missing header skips the class mirroring but the menu
    /// collapse still runs.
    pub fn apply(&self, doc: &mut Document, nav: Option<&mut NavController>) {
        let mobile = doc.viewport().width < MOBILE_BREAKPOINT;
        if mobile {
            if let Some(header) = self.header {
                doc.add_class(header, "mobile");
            }
        } else {
            if let Some(header) = self.header {
                doc.remove_class(header, "mobile");
            }
            if let Some(nav) = nav {
                nav.collapse(doc);
            }
            doc.set_body_overflow(Overflow::Unset);
        }
        tracing::debug!(width = doc.viewport().width, mobile, "layout applied");
    }
}
