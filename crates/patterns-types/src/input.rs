//! Platform-agnostic input events.
//!
//! Hosts translate native activations (DOM clicks, scripted replays) into
//! these values before handing them to the page.

use crate::dom::NodeId;

/// An activation delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user activated an element.
    Click(NodeId),
    /// The page activated an element programmatically.
    SyntheticClick(NodeId),
}

impl InputEvent {
    /// Element the activation is aimed at.
    pub fn target(&self) -> NodeId {
        match *self {
            InputEvent::Click(node) | InputEvent::SyntheticClick(node) => node,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, InputEvent::SyntheticClick(_))
    }
}
