//! The document surface widgets are wired against.
//!
//! Widgets never see a concrete DOM. They resolve elements into opaque
//! [`NodeId`] handles through a [`Document`] and mutate them through the
//! same trait, so the browser binding and the in-memory document are
//! interchangeable.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Opaque handle to an element owned by a [`Document`].
///
/// Handles are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A DOM-like element tree.
///
/// Lookups take `&mut self` because backends may allocate handles lazily.
pub trait Document {
    /// Look up an element by its `id` attribute.
    fn element_by_id(&mut self, id: &str) -> Option<NodeId>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&mut self, class: &str) -> Vec<NodeId>;

    /// First descendant of `node` matching `h2[tabindex="-1"]`.
    fn focusable_heading(&mut self, node: NodeId) -> Option<NodeId>;

    /// The element's `id` attribute, if set and non-empty.
    fn element_id(&self, node: NodeId) -> Option<String>;

    /// The value of `data-<key>` on the element.
    fn data_attribute(&self, node: NodeId, key: &str) -> Option<String>;

    fn add_classes(&mut self, node: NodeId, classes: &[String]) -> Result<()>;

    fn remove_classes(&mut self, node: NodeId, classes: &[String]) -> Result<()>;

    /// Replace the element's text content.
    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    /// Set the `disabled` property of a form control.
    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<()>;

    /// Set an inline style property, e.g. `font-size`.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()>;

    /// Move input focus to the element.
    fn focus(&mut self, node: NodeId) -> Result<()>;
}

/// Render a boolean the way ARIA state attributes expect it.
pub fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
