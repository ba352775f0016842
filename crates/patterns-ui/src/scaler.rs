//! Bounded text scaler.
//!
//! Grows or shrinks the demo text in fixed steps inside a closed pixel
//! range and disables whichever control sits at its bound.

use patterns_types::config::{ScalerConfig, SiteConfig};
use patterns_types::dom::{Document, NodeId, aria_bool};
use patterns_types::error::{PatternsError, Result};
use patterns_types::input::InputEvent;

use crate::widget::{Binding, Widget};

/// Current font size clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale {
    size: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl FontScale {
    pub fn new(config: &ScalerConfig) -> Self {
        let mut scale = Self {
            size: config.initial,
            min: config.min,
            max: config.max,
            step: config.step,
        };
        scale.set(config.initial);
        scale
    }

    /// Clamp `size` into bounds and store it. Inverted bounds pin the size
    /// to `max`.
    pub fn set(&mut self, size: i32) -> i32 {
        self.size = size.max(self.min).min(self.max);
        self.size
    }

    pub fn increase(&mut self) -> i32 {
        self.set(self.size.saturating_add(self.step))
    }

    pub fn decrease(&mut self) -> i32 {
        self.set(self.size.saturating_sub(self.step))
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn at_max(&self) -> bool {
        self.size == self.max
    }

    pub fn at_min(&self) -> bool {
        self.size == self.min
    }

    /// CSS value for the `font-size` property.
    pub fn css_value(&self) -> String {
        format!("{}px", self.size)
    }
}

/// One of the two edge controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleControl {
    Increase,
    Decrease,
}

impl ScaleControl {
    /// Whether this control is disabled at `scale`.
    pub fn disabled(self, scale: &FontScale) -> bool {
        match self {
            ScaleControl::Increase => scale.at_max(),
            ScaleControl::Decrease => scale.at_min(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ScalerNodes {
    text: NodeId,
    increase: NodeId,
    decrease: NodeId,
}

/// Widget binding a [`FontScale`] to the demo text and its two controls.
pub struct TextScaler {
    scale: FontScale,
    text_id: String,
    increase_id: String,
    decrease_id: String,
    nodes: Option<ScalerNodes>,
}

impl TextScaler {
    pub fn new(config: &SiteConfig) -> Self {
        let sel = &config.selectors;
        Self {
            scale: FontScale::new(&config.scaler),
            text_id: sel.demo_text_id.clone(),
            increase_id: sel.increase_id.clone(),
            decrease_id: sel.decrease_id.clone(),
            nodes: None,
        }
    }

    pub fn scale(&self) -> &FontScale {
        &self.scale
    }

    /// Clamp and apply `size`, then refresh the controls.
    pub fn update_font_size(&mut self, doc: &mut dyn Document, size: i32) -> Result<i32> {
        let applied = self.scale.set(size);
        self.render(doc)?;
        Ok(applied)
    }

    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        let Some(nodes) = self.nodes else {
            return Ok(());
        };
        doc.set_style(nodes.text, "font-size", &self.scale.css_value())?;
        for (control, node) in [
            (ScaleControl::Increase, nodes.increase),
            (ScaleControl::Decrease, nodes.decrease),
        ] {
            let disabled = control.disabled(&self.scale);
            doc.set_disabled(node, disabled)?;
            doc.set_attribute(node, "aria-disabled", aria_bool(disabled))?;
        }
        Ok(())
    }
}

fn require(doc: &mut dyn Document, id: &str) -> Result<NodeId> {
    doc.element_by_id(id)
        .ok_or_else(|| PatternsError::MissingElement(format!("#{id}")))
}

impl Widget for TextScaler {
    fn name(&self) -> &'static str {
        "text scaler"
    }

    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding> {
        self.nodes = Some(ScalerNodes {
            text: require(doc, &self.text_id)?,
            increase: require(doc, &self.increase_id)?,
            decrease: require(doc, &self.decrease_id)?,
        });
        let initial = self.scale.size();
        self.update_font_size(doc, initial)?;
        Ok(Binding::Bound)
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        let Some(nodes) = self.nodes else {
            return Ok(false);
        };
        let target = event.target();
        let size = if target == nodes.increase {
            self.scale.increase()
        } else if target == nodes.decrease {
            self.scale.decrease()
        } else {
            return Ok(false);
        };
        log::debug!("text scaler: font size {size}px");
        self.render(doc)?;
        Ok(true)
    }

    fn controls(&self) -> Vec<NodeId> {
        self.nodes
            .map(|n| vec![n.increase, n.decrease])
            .unwrap_or_default()
    }
}
