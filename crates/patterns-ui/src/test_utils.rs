//! Shared test utilities for patterns-ui widget tests.
//!
//! Wraps the reference layout in a [`MemoryDocument`] and provides
//! shorthands for addressing elements by id.

use patterns_types::config::SiteConfig;
use patterns_types::dom::NodeId;
use patterns_types::input::InputEvent;
use patterns_types::memory::MemoryDocument;

use crate::layout::{self, LayoutOptions};

/// The full reference page with stock configuration.
pub fn demo_document() -> MemoryDocument {
    document_with(LayoutOptions::default())
}

/// The reference page built from custom options.
pub fn document_with(options: LayoutOptions) -> MemoryDocument {
    layout::build(&options, &SiteConfig::default()).expect("reference layout builds")
}

/// Handle of the element with `id`; panics if absent.
pub fn node(doc: &MemoryDocument, id: &str) -> NodeId {
    doc.find(id)
        .unwrap_or_else(|| panic!("fixture has no element #{id}"))
}

/// A user click on the element with `id`.
pub fn click(doc: &MemoryDocument, id: &str) -> InputEvent {
    InputEvent::Click(node(doc, id))
}

/// Class list of the element with `id`.
pub fn classes<'a>(doc: &'a MemoryDocument, id: &str) -> &'a [String] {
    &doc.element(node(doc, id))
        .unwrap_or_else(|| panic!("fixture has no element #{id}"))
        .classes
}
