//! Widget trait definition.

use patterns_types::dom::{Document, NodeId};
use patterns_types::error::Result;
use patterns_types::input::InputEvent;

/// Outcome of attaching a widget to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// All elements were found and the widget is live.
    Bound,
    /// Optional elements are missing; the widget stays inert.
    Skipped,
}

/// Minimum interface for an interactive page element.
pub trait Widget {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Resolve elements and apply any startup rendering.
    ///
    /// Missing required elements are an error; missing optional ones yield
    /// [`Binding::Skipped`].
    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding>;

    /// Handle an activation. Returns `true` if the event targeted one of
    /// this widget's controls.
    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool>;

    /// Nodes the host must forward clicks from.
    fn controls(&self) -> Vec<NodeId>;
}
