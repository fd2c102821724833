//! Mobile navigation menu.

use vitrina_dom::{Document, NodeId, Overflow};

use crate::selectors::selector;

/// Controller for the collapsible mobile menu.
///
/// State lives here; the `active` classes on the button and panel are
/// presentation mirrors of it.
#[derive(Debug)]
pub struct NavController {
    button: NodeId,
    menu: NodeId,
    expanded: bool,
}

impl NavController {
    /// Wire the controller, or `None` when the button or panel is missing
    /// from the markup (the feature then no-ops).
    pub fn bind(doc: &Document) -> Option<Self> {
        let button = doc.query(&selector(".menu-btn"))?;
        let menu = doc.query(&selector(".nav-menu"))?;
        Some(Self {
            button,
            menu,
            expanded: false,
        })
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether `target` lies on the menu button.
    #[must_use]
    pub fn is_button(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.button, target)
    }

    /// Whether `target` lies inside the menu panel.
    #[must_use]
    pub fn is_inside_menu(&self, doc: &Document, target: NodeId) -> bool {
        doc.contains(self.menu, target)
    }

    /// Whether `target` is (or is inside) a link within the panel.
    #[must_use]
    pub fn is_menu_link(&self, doc: &Document, target: NodeId) -> bool {
        doc.query_all_within(self.menu, &selector("a"))
            .into_iter()
            .any(|link| doc.contains(link, target))
    }

    /// Toggle on menu-button click. The caller must not propagate the click
    /// to the document-level outside-click handling.
    pub fn toggle(&mut self, doc: &mut Document) {
        if self.expanded {
            self.collapse(doc);
        } else {
            self.expanded = true;
            doc.add_class(self.menu, "active");
            doc.add_class(self.button, "active");
            doc.set_body_overflow(Overflow::Hidden);
            tracing::debug!("menu expanded");
        }
    }

    /// Collapse and unlock page scroll. Safe to call when already collapsed.
    pub fn collapse(&mut self, doc: &mut Document) {
        self.expanded = false;
        doc.remove_class(self.menu, "active");
        doc.remove_class(self.button, "active");
        doc.set_body_overflow(Overflow::Unset);
        tracing::debug!("menu collapsed");
    }
}
