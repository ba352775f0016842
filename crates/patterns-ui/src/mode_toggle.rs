//! Input mode toggle.
//!
//! Flips between "hold required" and "toggle enabled" input and mirrors the
//! mode into a status label and the button's color scheme.

use serde::Serialize;

use patterns_types::config::{Labels, SiteConfig, Styles};
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::Result;
use patterns_types::input::InputEvent;

use crate::widget::{Binding, Widget};

/// How the demo expects press-and-hold input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    #[default]
    HoldRequired,
    Toggle,
}

impl InputMode {
    pub fn flipped(self) -> Self {
        match self {
            InputMode::HoldRequired => InputMode::Toggle,
            InputMode::Toggle => InputMode::HoldRequired,
        }
    }

    pub fn is_toggle(self) -> bool {
        self == InputMode::Toggle
    }

    /// Status label text for this mode.
    pub fn label(self, labels: &Labels) -> &str {
        match self {
            InputMode::Toggle => &labels.toggle_enabled,
            InputMode::HoldRequired => &labels.hold_required,
        }
    }

    /// `(added, removed)` class lists for the toggle button.
    pub fn classes(self, styles: &Styles) -> (&[String], &[String]) {
        match self {
            InputMode::Toggle => (styles.toggle_enabled.as_slice(), styles.toggle_hold.as_slice()),
            InputMode::HoldRequired => (styles.toggle_hold.as_slice(), styles.toggle_enabled.as_slice()),
        }
    }
}

/// Button that flips the [`InputMode`].
pub struct ModeToggle {
    mode: InputMode,
    labels: Labels,
    styles: Styles,
    button_id: String,
    label_id: String,
    button: Option<NodeId>,
    label: Option<NodeId>,
}

impl ModeToggle {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            mode: InputMode::default(),
            labels: config.labels.clone(),
            styles: config.styles.clone(),
            button_id: config.selectors.input_toggle_id.clone(),
            label_id: config.selectors.input_state_id.clone(),
            button: None,
            label: None,
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Invert the mode and return the new one.
    pub fn flip(&mut self) -> InputMode {
        self.mode = self.mode.flipped();
        self.mode
    }

    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        if let Some(label) = self.label {
            doc.set_text(label, self.mode.label(&self.labels))?;
        }
        if let Some(button) = self.button {
            let (add, remove) = self.mode.classes(&self.styles);
            doc.remove_classes(button, remove)?;
            doc.add_classes(button, add)?;
        }
        Ok(())
    }
}

impl Widget for ModeToggle {
    fn name(&self) -> &'static str {
        "mode toggle"
    }

    // Markup already reflects the default mode, so nothing is rendered here.
    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding> {
        let Some(button) = doc.element_by_id(&self.button_id) else {
            log::warn!("mode toggle: #{} not found, skipping", self.button_id);
            return Ok(Binding::Skipped);
        };
        self.button = Some(button);
        self.label = doc.element_by_id(&self.label_id);
        if self.label.is_none() {
            log::warn!("mode toggle: #{} not found, label will not update", self.label_id);
        }
        Ok(Binding::Bound)
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        if self.button != Some(event.target()) {
            return Ok(false);
        }
        let mode = self.flip();
        log::debug!("mode toggle: {mode:?}");
        self.render(doc)?;
        Ok(true)
    }

    fn controls(&self) -> Vec<NodeId> {
        self.button.into_iter().collect()
    }
}
