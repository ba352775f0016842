//! Exclusive choice group (pacing speed buttons).
//!
//! Exactly one member carries the selected style once a choice is made.
//! The first and last members keep their end rounding whatever is chosen.

use patterns_types::config::{SiteConfig, Styles};
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::Result;
use patterns_types::input::InputEvent;

use crate::widget::{Binding, Widget};

/// Visual state of a group member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceState {
    Selected,
    Idle,
}

impl ChoiceState {
    /// `(added, removed)` class lists for this state.
    pub fn classes(self, styles: &Styles) -> (&[String], &[String]) {
        match self {
            ChoiceState::Selected => (styles.speed_selected.as_slice(), styles.speed_idle.as_slice()),
            ChoiceState::Idle => (styles.speed_idle.as_slice(), styles.speed_selected.as_slice()),
        }
    }
}

#[derive(Debug, Clone)]
struct Choice {
    node: NodeId,
    value: Option<String>,
}

/// A fixed set of buttons with at most one selected.
pub struct ChoiceGroup {
    member_class: String,
    value_attribute: String,
    styles: Styles,
    members: Vec<Choice>,
    selected: Option<usize>,
}

impl ChoiceGroup {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            member_class: config.selectors.speed_button_class.clone(),
            value_attribute: config.selectors.speed_attribute.clone(),
            styles: config.styles.clone(),
            members: Vec::new(),
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Index of the selected member.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// `data-speed` value of the selected member.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.members[i].value.as_deref())
    }

    /// Select member `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.members.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn state_of(&self, index: usize) -> ChoiceState {
        if self.selected == Some(index) {
            ChoiceState::Selected
        } else {
            ChoiceState::Idle
        }
    }

    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        for (i, member) in self.members.iter().enumerate() {
            let (add, remove) = self.state_of(i).classes(&self.styles);
            doc.remove_classes(member.node, remove)?;
            doc.add_classes(member.node, add)?;
        }

        let first_rounding = [self.styles.first_rounding.clone()];
        let last_rounding = [self.styles.last_rounding.clone()];
        if let Some(first) = self.members.first() {
            doc.remove_classes(first.node, &last_rounding)?;
            doc.add_classes(first.node, &first_rounding)?;
        }
        if let Some(last) = self.members.last() {
            doc.remove_classes(last.node, &first_rounding)?;
            doc.add_classes(last.node, &last_rounding)?;
        }
        Ok(())
    }
}

impl Widget for ChoiceGroup {
    fn name(&self) -> &'static str {
        "choice group"
    }

    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding> {
        self.members = doc
            .elements_by_class(&self.member_class)
            .into_iter()
            .map(|node| Choice {
                node,
                value: doc.data_attribute(node, &self.value_attribute),
            })
            .collect();
        if self.members.is_empty() {
            log::warn!("choice group: no .{} members, skipping", self.member_class);
            return Ok(Binding::Skipped);
        }
        Ok(Binding::Bound)
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        let target = event.target();
        let Some(index) = self.members.iter().position(|m| m.node == target) else {
            return Ok(false);
        };
        self.select(index);
        log::debug!(
            "choice group: selected {}",
            self.selected_value().unwrap_or("<unnamed>")
        );
        self.render(doc)?;
        Ok(true)
    }

    fn controls(&self) -> Vec<NodeId> {
        self.members.iter().map(|m| m.node).collect()
    }
}
