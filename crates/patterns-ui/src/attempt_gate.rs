//! Attempt gate (progress failsafe).
//!
//! Each press of the fail control counts one failed attempt, saturating at
//! the configured maximum. Reaching the maximum unlocks the skip control
//! for good.

use serde::Serialize;

use patterns_types::config::{Labels, SiteConfig, Styles};
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::Result;
use patterns_types::input::InputEvent;

use crate::widget::{Binding, Widget};

/// Whether the skip control is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Saturating failure counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptCounter {
    attempts: u32,
    max: u32,
}

impl AttemptCounter {
    pub fn new(max: u32) -> Self {
        Self { attempts: 0, max }
    }

    /// Count one failure and return the resulting gate state.
    pub fn record_failure(&mut self) -> GateState {
        if self.attempts < self.max {
            self.attempts += 1;
        }
        self.state()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn state(&self) -> GateState {
        if self.attempts >= self.max {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }

    /// Fail control label, e.g. `Fail Attempt (2/3)`.
    pub fn label(&self, prefix: &str) -> String {
        format!("{prefix} ({}/{})", self.attempts, self.max)
    }
}

#[derive(Debug, Clone, Copy)]
struct GateNodes {
    fail: NodeId,
    skip: NodeId,
}

/// Fail/skip control pair.
pub struct AttemptGate {
    counter: AttemptCounter,
    labels: Labels,
    styles: Styles,
    fail_id: String,
    skip_id: String,
    nodes: Option<GateNodes>,
}

impl AttemptGate {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            counter: AttemptCounter::new(config.gate.max_attempts),
            labels: config.labels.clone(),
            styles: config.styles.clone(),
            fail_id: config.selectors.fail_button_id.clone(),
            skip_id: config.selectors.skip_button_id.clone(),
            nodes: None,
        }
    }

    pub fn counter(&self) -> &AttemptCounter {
        &self.counter
    }

    // Unlocked rendering is reapplied on every press at the cap; it is
    // idempotent.
    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        let Some(nodes) = self.nodes else {
            return Ok(());
        };
        doc.set_text(nodes.fail, &self.counter.label(&self.labels.fail_attempt))?;
        if self.counter.state() == GateState::Unlocked {
            doc.set_disabled(nodes.skip, false)?;
            doc.set_attribute(nodes.skip, "aria-disabled", "false")?;
            doc.set_text(nodes.skip, &self.labels.skip_available)?;
            doc.remove_classes(nodes.skip, &self.styles.skip_blocked)?;
            doc.add_classes(nodes.skip, &self.styles.skip_available)?;
        }
        Ok(())
    }
}

impl Widget for AttemptGate {
    fn name(&self) -> &'static str {
        "attempt gate"
    }

    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding> {
        match (doc.element_by_id(&self.fail_id), doc.element_by_id(&self.skip_id)) {
            (Some(fail), Some(skip)) => {
                self.nodes = Some(GateNodes { fail, skip });
                Ok(Binding::Bound)
            },
            _ => {
                log::warn!(
                    "attempt gate: #{} / #{} pair not found, skipping",
                    self.fail_id,
                    self.skip_id
                );
                Ok(Binding::Skipped)
            },
        }
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        let Some(nodes) = self.nodes else {
            return Ok(false);
        };
        if event.target() != nodes.fail {
            return Ok(false);
        }
        let before = self.counter.state();
        let after = self.counter.record_failure();
        if before == GateState::Locked && after == GateState::Unlocked {
            log::info!(
                "attempt gate: unlocked after {} attempts",
                self.counter.attempts()
            );
        } else {
            log::debug!("attempt gate: {}/{}", self.counter.attempts(), self.counter.max());
        }
        self.render(doc)?;
        Ok(true)
    }

    // The skip control has no behavior of its own.
    fn controls(&self) -> Vec<NodeId> {
        self.nodes.map(|n| vec![n.fail]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutOptions;
    use crate::test_utils::{classes, click, demo_document, document_with, node};
    use patterns_types::memory::MemoryDocument;

    fn mounted() -> (MemoryDocument, AttemptGate) {
        let mut doc = demo_document();
        let mut gate = AttemptGate::new(&SiteConfig::default());
        assert_eq!(gate.attach(&mut doc).unwrap(), Binding::Bound);
        (doc, gate)
    }

    fn fail(doc: &mut MemoryDocument, gate: &mut AttemptGate, times: usize) {
        let ev = click(doc, "fail-attempt-button");
        for _ in 0..times {
            assert!(gate.handle(doc, &ev).unwrap());
        }
    }

    #[test]
    fn counter_saturates() {
        let mut c = AttemptCounter::new(3);
        assert_eq!(c.record_failure(), GateState::Locked);
        assert_eq!(c.record_failure(), GateState::Locked);
        assert_eq!(c.record_failure(), GateState::Unlocked);
        assert_eq!(c.record_failure(), GateState::Unlocked);
        assert_eq!(c.attempts(), 3);
        assert_eq!(c.label("Fail Attempt"), "Fail Attempt (3/3)");
    }

    #[test]
    fn new_counter_is_locked() {
        let c = AttemptCounter::new(3);
        assert_eq!(c.attempts(), 0);
        assert_eq!(c.state(), GateState::Locked);
    }

    #[test]
    fn two_failures_keep_skip_disabled() {
        let (mut doc, mut gate) = mounted();
        fail(&mut doc, &mut gate, 2);
        let skip = node(&doc, "skip-challenge-button");
        assert_eq!(doc.text(node(&doc, "fail-attempt-button")), Some("Fail Attempt (2/3)"));
        assert!(doc.is_disabled(skip));
        assert_eq!(doc.attribute(skip, "aria-disabled"), Some("true"));
        assert!(classes(&doc, "skip-challenge-button").iter().any(|c| c == "bg-red-500"));
    }

    #[test]
    fn three_failures_unlock_skip() {
        let (mut doc, mut gate) = mounted();
        fail(&mut doc, &mut gate, 3);
        let skip = node(&doc, "skip-challenge-button");
        assert!(!doc.is_disabled(skip));
        assert_eq!(doc.attribute(skip, "aria-disabled"), Some("false"));
        assert_eq!(doc.text(skip), Some("Skip Difficult Section (Available)"));
        let cls = classes(&doc, "skip-challenge-button");
        for c in ["bg-green-500", "hover:bg-green-600"] {
            assert!(cls.iter().any(|x| x == c), "missing {c}");
        }
        for c in ["bg-red-500", "hover:bg-red-600", "disabled:opacity-50"] {
            assert!(!cls.iter().any(|x| x == c), "still has {c}");
        }
    }

    #[test]
    fn presses_past_cap_are_idempotent() {
        let (mut doc, mut gate) = mounted();
        fail(&mut doc, &mut gate, 3);
        let snapshot = doc.element(node(&doc, "skip-challenge-button")).cloned();
        fail(&mut doc, &mut gate, 4);
        assert_eq!(gate.counter().attempts(), 3);
        assert_eq!(doc.text(node(&doc, "fail-attempt-button")), Some("Fail Attempt (3/3)"));
        assert_eq!(doc.element(node(&doc, "skip-challenge-button")).cloned(), snapshot);
    }

    #[test]
    fn skip_click_is_not_consumed() {
        let (mut doc, mut gate) = mounted();
        let ev = click(&doc, "skip-challenge-button");
        assert!(!gate.handle(&mut doc, &ev).unwrap());
        assert_eq!(gate.counter().attempts(), 0);
    }

    #[test]
    fn missing_pair_skips_wiring() {
        let mut doc = document_with(LayoutOptions {
            with_gate: false,
            ..LayoutOptions::default()
        });
        let mut gate = AttemptGate::new(&SiteConfig::default());
        assert_eq!(gate.attach(&mut doc).unwrap(), Binding::Skipped);
        assert!(gate.controls().is_empty());
    }

    #[test]
    fn custom_threshold() {
        let mut config = SiteConfig::default();
        config.gate.max_attempts = 1;
        let mut doc = demo_document();
        let mut gate = AttemptGate::new(&config);
        gate.attach(&mut doc).unwrap();
        fail(&mut doc, &mut gate, 1);
        assert_eq!(gate.counter().state(), GateState::Unlocked);
        assert_eq!(doc.text(node(&doc, "fail-attempt-button")), Some("Fail Attempt (1/1)"));
    }
}
