//! In-memory document implementation.
//!
//! Useful for unit tests and the headless driver. Elements live in a flat
//! `Vec` indexed by [`NodeId`]; insertion order doubles as document order.

use std::collections::BTreeMap;

use crate::dom::{Document, NodeId};
use crate::error::{PatternsError, Result};

/// A single element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    /// Class list in first-insertion order, without duplicates.
    pub classes: Vec<String>,
    pub text: String,
    pub attributes: BTreeMap<String, String>,
    /// `data-*` attributes, keyed without the `data-` prefix.
    pub data: BTreeMap<String, String>,
    pub disabled: bool,
    pub styles: BTreeMap<String, String>,
    pub parent: Option<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for c in classes.split_whitespace() {
            if !self.classes.iter().any(|x| x == c) {
                self.classes.push(c.to_string());
            }
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn child_of(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A fully in-memory document.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Vec<Element>,
    focused: Option<NodeId>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    ///
    /// A parent must already be in the document, so the parent chain never
    /// loops.
    pub fn insert(&mut self, element: Element) -> Result<NodeId> {
        let index = u32::try_from(self.nodes.len())
            .map_err(|_| PatternsError::Backend("memory document is full".into()))?;
        if let Some(parent) = element.parent {
            if parent.0 >= index {
                return Err(PatternsError::UnknownNode(parent));
            }
        }
        self.nodes.push(element);
        Ok(NodeId(index))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0 as usize)
    }

    fn element_mut(&mut self, node: NodeId) -> Result<&mut Element> {
        self.nodes
            .get_mut(node.0 as usize)
            .ok_or(PatternsError::UnknownNode(node))
    }

    /// Handle of the element with `id`, without going through the trait.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(|i| NodeId(i as u32))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|e| e.has_class(class))
    }

    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.text.as_str())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)
            .and_then(|e| e.attributes.get(name))
            .map(String::as_str)
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.element(node).is_some_and(|e| e.disabled)
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node)
            .and_then(|e| e.styles.get(property))
            .map(String::as_str)
    }

    /// Element that last received focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    // Parents always precede their children, so the walk strictly
    // decreases and is bounded by the document size.
    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cur = self.element(node).and_then(|e| e.parent);
        for _ in 0..self.nodes.len() {
            match cur {
                Some(p) if p == ancestor => return true,
                Some(p) => cur = self.element(p).and_then(|e| e.parent),
                None => return false,
            }
        }
        false
    }
}

impl Document for MemoryDocument {
    fn element_by_id(&mut self, id: &str) -> Option<NodeId> {
        self.find(id)
    }

    fn elements_by_class(&mut self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_class(class))
            .map(|(i, _)| NodeId(i as u32))
            .collect()
    }

    fn focusable_heading(&mut self, node: NodeId) -> Option<NodeId> {
        (0..self.nodes.len() as u32).map(NodeId).find(|&n| {
            self.element(n).is_some_and(|e| {
                e.tag.eq_ignore_ascii_case("h2")
                    && e.attributes.get("tabindex").map(String::as_str) == Some("-1")
            }) && self.is_descendant(n, node)
        })
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        self.element(node)
            .and_then(|e| e.id.clone())
            .filter(|id| !id.is_empty())
    }

    fn data_attribute(&self, node: NodeId, key: &str) -> Option<String> {
        self.element(node).and_then(|e| e.data.get(key).cloned())
    }

    fn add_classes(&mut self, node: NodeId, classes: &[String]) -> Result<()> {
        let el = self.element_mut(node)?;
        for c in classes {
            if !el.has_class(c) {
                el.classes.push(c.clone());
            }
        }
        Ok(())
    }

    fn remove_classes(&mut self, node: NodeId, classes: &[String]) -> Result<()> {
        let el = self.element_mut(node)?;
        el.classes.retain(|c| !classes.contains(c));
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.element_mut(node)?.text = text.to_string();
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.element_mut(node)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<()> {
        self.element_mut(node)?.disabled = disabled;
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        self.element_mut(node)?
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn focus(&mut self, node: NodeId) -> Result<()> {
        self.element_mut(node)?;
        self.focused = Some(node);
        Ok(())
    }
}
