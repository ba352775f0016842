//! Click replay against the reference layout.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use patterns_types::config::SiteConfig;
use patterns_types::input::InputEvent;
use patterns_types::memory::MemoryDocument;
use patterns_ui::layout::{self, LayoutOptions};
use patterns_ui::{DemoPage, PageSnapshot};

/// Parsed command line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    /// Element ids to click, in order.
    pub clicks: Vec<String>,
}

impl Args {
    /// Parse `[--config <path>] <element-id>...`.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = iter.next().context("--config needs a path")?;
                    parsed.config = Some(PathBuf::from(path));
                },
                flag if flag.starts_with('-') => bail!("unknown flag '{flag}'"),
                _ => parsed.clicks.push(arg),
            }
        }
        Ok(parsed)
    }
}

/// A mounted page on an in-memory document.
pub struct Session {
    doc: MemoryDocument,
    page: DemoPage,
}

impl Session {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut doc = layout::build(&LayoutOptions::default(), config).context("building layout")?;
        let page = DemoPage::mount(&mut doc, config).context("mounting demo page")?;
        Ok(Self { doc, page })
    }

    /// Click the element with `id`. Returns whether a widget handled it.
    pub fn click(&mut self, id: &str) -> Result<bool> {
        let node = self
            .doc
            .find(id)
            .with_context(|| format!("no element with id '{id}'"))?;
        let handled = self.page.dispatch(&mut self.doc, &InputEvent::Click(node))?;
        Ok(handled)
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.page.snapshot()
    }
}
