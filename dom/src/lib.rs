//! Simulated document tree.
//!
//! The page controllers in `vitrina-engine` never touch a live browser
//! document. They receive handles (`NodeId`) into this tree, which models the
//! slice of a document they care about: element tags, attributes, classes,
//! text content, form control values, layout rectangles, the viewport, the
//! scroll position, and the body scroll-lock. Tests build small trees by
//! hand; the demo binary builds the full sample page.
//!
//! Geometry is static: layout rectangles are document-space boxes assigned by
//! the embedder, not computed from styles. That is all the intersection and
//! anchor-scroll logic needs.

mod selector;

pub use selector::{Selector, SelectorError, SelectorList};

pub use indextree::NodeId;

use indextree::Arena;
use smallvec::SmallVec;

/// Node payload: element, text, or the document root.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    #[default]
    Document,
    Element {
        tag: String,
    },
    Text {
        text: String,
    },
}

/// Per-node data stored in the arena.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub kind: NodeKind,
    attrs: SmallVec<[(String, String); 4]>,
    /// Live value of a form control. Distinct from the `value` attribute,
    /// like a real control's value property.
    value: String,
    disabled: bool,
    rect: Option<Rect>,
}

/// Document-space box assigned to an element by the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Visible window dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Body overflow style controlling page scroll.
///
/// `Unset` is the stylesheet default (empty style string); the menu restores
/// `Unset` on collapse while the modal restores `Auto`, mirroring what the
/// page shell expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Unset,
    Hidden,
    Auto,
}

/// The simulated document: an arena of nodes plus page-level state.
#[derive(Debug)]
pub struct Document {
    arena: Arena<NodeData>,
    root: NodeId,
    body: NodeId,
    viewport: Viewport,
    scroll_y: f32,
    body_overflow: Overflow,
}

impl Document {
    /// Create an empty document with a `body` element under the root.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(NodeData::default());
        let body = arena.new_node(NodeData {
            kind: NodeKind::Element {
                tag: "body".to_string(),
            },
            ..NodeData::default()
        });
        root.append(body, &mut arena);
        Self {
            arena,
            root,
            body,
            viewport,
            scroll_y: 0.0,
            body_overflow: Overflow::Unset,
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(NodeData {
            kind: NodeKind::Element {
                tag: tag.to_string(),
            },
            ..NodeData::default()
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(NodeData {
            kind: NodeKind::Text {
                text: text.to_string(),
            },
            ..NodeData::default()
        })
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.append(child, &mut self.arena);
    }

    // ------------------------------------------------------------------
    // Node accessors
    // ------------------------------------------------------------------

    fn data(&self, node: NodeId) -> &NodeData {
        self.arena[node].get()
    }

    fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        self.arena[node].get_mut()
    }

    /// Element tag, or `None` for text and root nodes.
    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        match &self.data(node).kind {
            NodeKind::Element { tag } => Some(tag),
            _ => None,
        }
    }

    #[must_use]
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.data(node)
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        let attrs = &mut self.data_mut(node).attrs;
        if let Some(entry) = attrs.iter_mut().find(|(key, _)| key == name) {
            entry.1 = value.to_string();
        } else {
            attrs.push((name.to_string(), value.to_string()));
        }
    }

    // ------------------------------------------------------------------
    // Classes (stored in the `class` attribute, space separated)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.attr(node, "class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.has_class(node, class) {
            return;
        }
        let updated = match self.attr(node, "class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr(node, "class", &updated);
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(existing) = self.attr(node, "class") {
            let updated = existing
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ");
            self.set_attr(node, "class", &updated);
        }
    }

    // ------------------------------------------------------------------
    // Text content
    // ------------------------------------------------------------------

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in node.descendants(&self.arena) {
            if let NodeKind::Text { text } = &self.data(id).kind {
                out.push_str(text);
            }
        }
        out
    }

    /// Replace the node's children with a single text node.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let children: Vec<NodeId> = node.children(&self.arena).collect();
        for child in children {
            child.remove_subtree(&mut self.arena);
        }
        let text_node = self.create_text(text);
        self.append_child(node, text_node);
    }

    // ------------------------------------------------------------------
    // Form control state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn value(&self, node: NodeId) -> &str {
        &self.data(node).value
    }

    pub fn set_value(&mut self, node: NodeId, value: &str) {
        self.data_mut(node).value = value.to_string();
    }

    #[must_use]
    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.data(node).disabled
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        self.data_mut(node).disabled = disabled;
    }

    // ------------------------------------------------------------------
    // Geometry and page state
    // ------------------------------------------------------------------

    #[must_use]
    pub fn rect(&self, node: NodeId) -> Option<Rect> {
        self.data(node).rect
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        self.data_mut(node).rect = Some(rect);
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Scroll the page to `y`, clamped at the top.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    #[must_use]
    pub fn body_overflow(&self) -> Overflow {
        self.body_overflow
    }

    pub fn set_body_overflow(&mut self, overflow: Overflow) {
        self.body_overflow = overflow;
    }

    // ------------------------------------------------------------------
    // Structure queries
    // ------------------------------------------------------------------

    /// Whether `node` is `ancestor` or lies in its subtree.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node.ancestors(&self.arena).any(|id| id == ancestor)
    }

    // ------------------------------------------------------------------
    // Selector queries
    // ------------------------------------------------------------------

    /// First element in document order matching `selectors`.
    #[must_use]
    pub fn query(&self, selectors: &SelectorList) -> Option<NodeId> {
        self.matching(self.root, selectors).next()
    }

    /// All elements in document order matching `selectors`.
    #[must_use]
    pub fn query_all(&self, selectors: &SelectorList) -> Vec<NodeId> {
        self.matching(self.root, selectors).collect()
    }

    /// First matching descendant of `scope` (excluding `scope` itself).
    #[must_use]
    pub fn query_within(&self, scope: NodeId, selectors: &SelectorList) -> Option<NodeId> {
        self.matching(scope, selectors).next()
    }

    /// All matching descendants of `scope` (excluding `scope` itself).
    #[must_use]
    pub fn query_all_within(&self, scope: NodeId, selectors: &SelectorList) -> Vec<NodeId> {
        self.matching(scope, selectors).collect()
    }

    /// Element with the given `id` attribute.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.root
            .descendants(&self.arena)
            .find(|node| self.attr(*node, "id") == Some(id))
    }

    fn matching<'a>(
        &'a self,
        scope: NodeId,
        selectors: &'a SelectorList,
    ) -> impl Iterator<Item = NodeId> + 'a {
        scope
            .descendants(&self.arena)
            .filter(move |node| *node != scope && selectors.matches(self, *node))
    }
}
