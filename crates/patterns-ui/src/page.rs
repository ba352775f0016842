//! The demo page: every widget mounted on one document.

use serde::Serialize;

use patterns_types::config::SiteConfig;
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::Result;
use patterns_types::input::InputEvent;

use crate::attempt_gate::{AttemptGate, GateState};
use crate::choice_group::ChoiceGroup;
use crate::media_switch::{MediaSwitch, Playback};
use crate::mode_toggle::{InputMode, ModeToggle};
use crate::router::PageRouter;
use crate::scaler::TextScaler;
use crate::widget::{Binding, Widget};

/// Serializable view of all widget state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub active_page: Option<String>,
    pub font_size: i32,
    pub input_mode: InputMode,
    pub selected_speed: Option<String>,
    pub attempts: u32,
    pub max_attempts: u32,
    pub gate: GateState,
    pub playback: Playback,
}

/// All widgets of the demo page.
pub struct DemoPage {
    pub router: PageRouter,
    pub scaler: TextScaler,
    pub toggle: ModeToggle,
    pub speeds: ChoiceGroup,
    pub gate: AttemptGate,
    pub media: MediaSwitch,
}

impl DemoPage {
    /// Unattached widgets built from `config`.
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            router: PageRouter::new(config),
            scaler: TextScaler::new(config),
            toggle: ModeToggle::new(config),
            speeds: ChoiceGroup::new(config),
            gate: AttemptGate::new(config),
            media: MediaSwitch::new(config),
        }
    }

    /// Validate `config`, then attach every widget in startup order.
    pub fn mount(doc: &mut dyn Document, config: &SiteConfig) -> Result<Self> {
        config.validate()?;
        let mut page = Self::new(config);
        let mut bound = 0;
        for widget in page.widgets_mut() {
            match widget.attach(doc)? {
                Binding::Bound => bound += 1,
                Binding::Skipped => log::debug!("{} not wired", widget.name()),
            }
        }
        log::info!("Mounted demo page: {bound}/6 widgets bound");
        Ok(page)
    }

    // Startup order.
    fn widgets_mut(&mut self) -> [&mut dyn Widget; 6] {
        [
            &mut self.router,
            &mut self.scaler,
            &mut self.toggle,
            &mut self.speeds,
            &mut self.gate,
            &mut self.media,
        ]
    }

    fn widgets(&self) -> [&dyn Widget; 6] {
        [
            &self.router,
            &self.scaler,
            &self.toggle,
            &self.speeds,
            &self.gate,
            &self.media,
        ]
    }

    /// Offer `event` to each widget until one handles it.
    pub fn dispatch(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        for widget in self.widgets_mut() {
            if widget.handle(doc, event)? {
                return Ok(true);
            }
        }
        log::warn!("Unhandled click on {}", event.target());
        Ok(false)
    }

    /// Every node a host must forward clicks from.
    pub fn controls(&self) -> Vec<NodeId> {
        self.widgets()
            .iter()
            .flat_map(|w| w.controls())
            .collect()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let counter = self.gate.counter();
        PageSnapshot {
            active_page: self.router.active_page().map(str::to_string),
            font_size: self.scaler.scale().size(),
            input_mode: self.toggle.mode(),
            selected_speed: self.speeds.selected_value().map(str::to_string),
            attempts: counter.attempts(),
            max_attempts: counter.max(),
            gate: counter.state(),
            playback: self.media.playback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutOptions;
    use crate::test_utils::{click, demo_document, document_with, node};
    use patterns_types::error::PatternsError;

    #[test]
    fn mount_initial_snapshot() {
        let mut doc = demo_document();
        let page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        assert_eq!(
            page.snapshot(),
            PageSnapshot {
                active_page: Some("home".into()),
                font_size: 16,
                input_mode: InputMode::HoldRequired,
                selected_speed: None,
                attempts: 0,
                max_attempts: 3,
                gate: GateState::Locked,
                playback: Playback::Paused,
            }
        );
    }

    #[test]
    fn dispatch_routes_to_owner() {
        let mut doc = demo_document();
        let mut page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        for id in [
            "nav-patterns",
            "increase-text",
            "input-toggle-button",
            "speed-fast",
            "fail-attempt-button",
            "fail-attempt-button",
            "fail-attempt-button",
            "media-play-button",
        ] {
            let ev = click(&doc, id);
            assert!(page.dispatch(&mut doc, &ev).unwrap(), "#{id} not handled");
        }
        let snap = page.snapshot();
        assert_eq!(snap.active_page.as_deref(), Some("patterns"));
        assert_eq!(snap.font_size, 18);
        assert_eq!(snap.input_mode, InputMode::Toggle);
        assert_eq!(snap.selected_speed.as_deref(), Some("fast"));
        assert_eq!(snap.attempts, 3);
        assert_eq!(snap.gate, GateState::Unlocked);
        assert_eq!(snap.playback, Playback::Playing);
    }

    #[test]
    fn dispatch_unknown_target_returns_false() {
        let mut doc = demo_document();
        let mut page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        let ev = click(&doc, "demo-text");
        assert!(!page.dispatch(&mut doc, &ev).unwrap());
    }

    #[test]
    fn controls_cover_all_bound_widgets() {
        let mut doc = demo_document();
        let page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        let controls = page.controls();
        // 3 nav + 2 scaler + 1 toggle + 3 speeds + 1 fail + 2 media
        assert_eq!(controls.len(), 12);
        assert!(controls.contains(&node(&doc, "media-pause-button")));
        assert!(!controls.contains(&node(&doc, "skip-challenge-button")));
    }

    #[test]
    fn mount_without_optional_widgets() {
        let mut doc = document_with(LayoutOptions {
            with_toggle: false,
            with_gate: false,
            with_media: false,
            speeds: Vec::new(),
            ..LayoutOptions::default()
        });
        let page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        assert_eq!(page.controls().len(), 5);
        assert!(page.toggle.controls().is_empty());
        assert!(page.speeds.is_empty());
        assert!(page.gate.controls().is_empty());
        assert!(page.media.controls().is_empty());
        assert_eq!(page.router.controls().len(), 3);
        assert_eq!(page.scaler.controls().len(), 2);
    }

    #[test]
    fn mount_wires_media_switch() {
        let mut doc = demo_document();
        let page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        assert_eq!(
            page.media.controls(),
            vec![node(&doc, "media-play-button"), node(&doc, "media-pause-button")]
        );
        let pause = doc.element(node(&doc, "media-pause-button")).unwrap();
        assert!(pause.has_class("bg-red-500"));
        assert!(!pause.has_class("bg-gray-200"));
    }

    #[test]
    fn mount_rejects_invalid_config() {
        let mut config = SiteConfig::default();
        config.scaler.step = -2;
        let mut doc = demo_document();
        let err = DemoPage::mount(&mut doc, &config).err().unwrap();
        assert!(matches!(err, PatternsError::Config(_)));
    }

    #[test]
    fn rejected_config_still_builds_widgets() {
        let mut config = SiteConfig::default();
        config.scaler.min = 40;
        assert!(config.validate().is_err());
        let page = DemoPage::new(&config);
        assert_eq!(page.snapshot().font_size, 32);
        let mut doc = demo_document();
        let err = DemoPage::mount(&mut doc, &config).err().unwrap();
        assert!(matches!(err, PatternsError::Config(_)));
    }

    #[test]
    fn mount_fails_without_required_elements() {
        let mut doc = patterns_types::memory::MemoryDocument::new();
        let err = DemoPage::mount(&mut doc, &SiteConfig::default()).err().unwrap();
        assert!(matches!(err, PatternsError::MissingElement(_)));
    }

    #[test]
    fn snapshot_serializes_snake_case() {
        let mut doc = demo_document();
        let page = DemoPage::mount(&mut doc, &SiteConfig::default()).unwrap();
        let json = serde_json::to_value(page.snapshot()).unwrap();
        assert_eq!(json["input_mode"], "hold_required");
        assert_eq!(json["gate"], "locked");
        assert_eq!(json["playback"], "paused");
        assert_eq!(json["font_size"], 16);
    }
}
