//! Smooth in-page anchor scrolling.

use vitrina_dom::{Document, NodeId};

use crate::selectors::selector;

/// Scrolls the page to the section a fragment link points at, keeping the
/// target clear of the fixed header.
#[derive(Debug)]
pub struct AnchorScroller {
    anchors: Vec<NodeId>,
    header: Option<NodeId>,
}

impl AnchorScroller {
    pub fn bind(doc: &Document) -> Self {
        Self {
            anchors: doc.query_all(&selector(r##"a[href^="#"]"##)),
            header: doc.query(&selector(".header")),
        }
    }

    /// React to a click; returns `true` when the page scrolled.
    ///
    /// The bare `#` fragment and the modal trigger fragment are left to
    /// their own handlers. An unknown fragment consumes the navigation but
    /// scrolls nowhere.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> bool {
        let Some(anchor) = self
            .anchors
            .iter()
            .copied()
            .find(|anchor| doc.contains(*anchor, target))
        else {
            return false;
        };
        let Some(href) = doc.attr(anchor, "href") else {
            return false;
        };
        if href == "#" || href == "#privacy-modal" {
            return false;
        }

        let fragment = href[1..].to_string();
        let Some(section) = doc.element_by_id(&fragment) else {
            tracing::debug!(fragment = %fragment, "anchor target missing");
            return false;
        };
        let Some(rect) = doc.rect(section) else {
            return false;
        };
        let header_height = self
            .header
            .and_then(|header| doc.rect(header))
            .map_or(0.0, |rect| rect.height);
        doc.scroll_to(rect.y - header_height);
        tracing::debug!(fragment = %fragment, y = doc.scroll_y(), "scrolled to section");
        true
    }
}
