//! Reference layout of the demo page.
//!
//! Builds the markup the widgets expect into a [`MemoryDocument`]. The
//! headless driver mounts the page on this layout, and widget tests use
//! it as their fixture. Element ids and classes come from the
//! [`SiteConfig`] so custom selectors stay consistent.

use patterns_types::config::SiteConfig;
use patterns_types::error::Result;
use patterns_types::memory::{Element, MemoryDocument};

/// What to put on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Page names, in navigation order.
    pub pages: Vec<String>,
    /// Pages whose section starts with a focusable heading.
    pub headed_pages: Vec<String>,
    /// `data-speed` values of the pacing buttons.
    pub speeds: Vec<String>,
    pub with_toggle: bool,
    pub with_gate: bool,
    pub with_media: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        let owned = |v: &[&str]| v.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();
        Self {
            pages: owned(&["home", "patterns", "resources"]),
            headed_pages: owned(&["home", "patterns"]),
            speeds: owned(&["slow", "normal", "fast"]),
            with_toggle: true,
            with_gate: true,
            with_media: true,
        }
    }
}

/// Id given to the nav button for `page`.
pub fn nav_button_id(page: &str) -> String {
    format!("nav-{page}")
}

/// Id given to the pacing button for `speed`.
pub fn speed_button_id(speed: &str) -> String {
    format!("speed-{speed}")
}

/// Build the page described by `options`.
pub fn build(options: &LayoutOptions, config: &SiteConfig) -> Result<MemoryDocument> {
    let sel = &config.selectors;
    let styles = &config.styles;
    let mut doc = MemoryDocument::new();

    let nav = doc.insert(Element::new("nav").attr("aria-label", "Main"))?;
    for page in &options.pages {
        doc.insert(
            Element::new("button")
                .id(nav_button_id(page))
                .class(&sel.nav_item_class)
                .class("px-3 py-2 rounded-md")
                .data(&sel.nav_page_attribute, page)
                .attr("aria-current", "false")
                .text(page)
                .child_of(nav),
        )?;
    }

    let main = doc.insert(
        Element::new("main")
            .id(&sel.main_content_id)
            .attr("tabindex", "-1"),
    )?;

    let mut controls_parent = main;
    for page in &options.pages {
        let section = doc.insert(
            Element::new("section")
                .id(format!("{page}{}", sel.page_id_suffix))
                .class(&sel.page_class)
                .child_of(main),
        )?;
        if options.headed_pages.contains(page) {
            doc.insert(
                Element::new("h2")
                    .attr("tabindex", "-1")
                    .text(page)
                    .child_of(section),
            )?;
        }
        if page == "patterns" {
            controls_parent = section;
        }
    }

    doc.insert(
        Element::new("p")
            .id(&sel.demo_text_id)
            .text("The quick brown fox jumps over the lazy dog.")
            .child_of(controls_parent),
    )?;
    doc.insert(
        Element::new("button")
            .id(&sel.decrease_id)
            .attr("aria-label", "Decrease text size")
            .text("A-")
            .child_of(controls_parent),
    )?;
    doc.insert(
        Element::new("button")
            .id(&sel.increase_id)
            .attr("aria-label", "Increase text size")
            .text("A+")
            .child_of(controls_parent),
    )?;

    if options.with_toggle {
        let button = doc.insert(
            Element::new("button")
                .id(&sel.input_toggle_id)
                .class(&styles.toggle_hold.join(" "))
                .child_of(controls_parent),
        )?;
        doc.insert(
            Element::new("span")
                .id(&sel.input_state_id)
                .text(&config.labels.hold_required)
                .child_of(button),
        )?;
    }

    let group = doc.insert(Element::new("div").attr("role", "group").child_of(controls_parent))?;
    let last = options.speeds.len().saturating_sub(1);
    for (i, speed) in options.speeds.iter().enumerate() {
        let mut el = Element::new("button")
            .id(speed_button_id(speed))
            .class(&sel.speed_button_class)
            .class("px-4 py-2")
            .class(&styles.speed_idle.join(" "))
            .data(&sel.speed_attribute, speed)
            .text(speed)
            .child_of(group);
        if i == 0 {
            el = el.class(&styles.first_rounding);
        }
        if i == last {
            el = el.class(&styles.last_rounding);
        }
        doc.insert(el)?;
    }

    if options.with_gate {
        doc.insert(
            Element::new("button")
                .id(&sel.fail_button_id)
                .text(format!(
                    "{} (0/{})",
                    config.labels.fail_attempt, config.gate.max_attempts
                ))
                .child_of(controls_parent),
        )?;
        doc.insert(
            Element::new("button")
                .id(&sel.skip_button_id)
                .class(&styles.skip_blocked.join(" "))
                .attr("aria-disabled", "true")
                .disabled(true)
                .text("Skip Difficult Section (Locked)")
                .child_of(controls_parent),
        )?;
    }

    if options.with_media {
        doc.insert(
            Element::new("button")
                .id(&sel.play_button_id)
                .class(&styles.play_inactive.join(" "))
                .attr("aria-label", "Play")
                .child_of(controls_parent),
        )?;
        doc.insert(
            Element::new("button")
                .id(&sel.pause_button_id)
                .class(&styles.pause_inactive.join(" "))
                .attr("aria-label", "Pause")
                .child_of(controls_parent),
        )?;
    }

    Ok(doc)
}
