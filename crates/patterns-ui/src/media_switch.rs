//! Play/pause switch.

use serde::Serialize;

use patterns_types::config::{SiteConfig, Styles};
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::Result;
use patterns_types::input::InputEvent;

use crate::widget::{Binding, Widget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Playback {
    Playing,
    #[default]
    Paused,
}

#[derive(Debug, Clone, Copy)]
struct MediaNodes {
    play: NodeId,
    pause: NodeId,
}

/// Two mutually exclusive controls; the pressed one shows as active.
pub struct MediaSwitch {
    playback: Playback,
    styles: Styles,
    play_id: String,
    pause_id: String,
    nodes: Option<MediaNodes>,
}

impl MediaSwitch {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            playback: Playback::default(),
            styles: config.styles.clone(),
            play_id: config.selectors.play_button_id.clone(),
            pause_id: config.selectors.pause_button_id.clone(),
            nodes: None,
        }
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        let Some(nodes) = self.nodes else {
            return Ok(());
        };
        let s = &self.styles;
        match self.playback {
            Playback::Playing => {
                doc.remove_classes(nodes.play, &s.play_inactive)?;
                doc.add_classes(nodes.play, &s.play_active)?;
                doc.remove_classes(nodes.pause, &s.pause_active)?;
                doc.add_classes(nodes.pause, &s.pause_inactive)?;
            },
            Playback::Paused => {
                doc.remove_classes(nodes.pause, &s.pause_inactive)?;
                doc.add_classes(nodes.pause, &s.pause_active)?;
                doc.remove_classes(nodes.play, &s.play_active)?;
                doc.add_classes(nodes.play, &s.play_inactive)?;
            },
        }
        Ok(())
    }
}

impl Widget for MediaSwitch {
    fn name(&self) -> &'static str {
        "media switch"
    }

    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding> {
        let (Some(play), Some(pause)) = (
            doc.element_by_id(&self.play_id),
            doc.element_by_id(&self.pause_id),
        ) else {
            log::warn!(
                "media switch: #{} / #{} pair not found, skipping",
                self.play_id,
                self.pause_id
            );
            return Ok(Binding::Skipped);
        };
        self.nodes = Some(MediaNodes { play, pause });
        // Start in the paused visual state via the pause path.
        self.handle(doc, &InputEvent::SyntheticClick(pause))?;
        Ok(Binding::Bound)
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        let Some(nodes) = self.nodes else {
            return Ok(false);
        };
        let target = event.target();
        self.playback = if target == nodes.play {
            Playback::Playing
        } else if target == nodes.pause {
            Playback::Paused
        } else {
            return Ok(false);
        };
        log::debug!(
            "media switch: {:?}{}",
            self.playback,
            if event.is_synthetic() { " (synthetic)" } else { "" }
        );
        self.render(doc)?;
        Ok(true)
    }

    fn controls(&self) -> Vec<NodeId> {
        self.nodes
            .map(|n| vec![n.play, n.pause])
            .unwrap_or_default()
    }
}
