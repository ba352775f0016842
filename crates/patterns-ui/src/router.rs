//! Page router.
//!
//! Shows exactly one content section at a time, keeps the nav controls'
//! `aria-current` state and highlight classes paired with it, and moves
//! focus to the shown section's heading (or the main content area).

use patterns_types::config::SiteConfig;
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::{PatternsError, Result};
use patterns_types::input::InputEvent;

use crate::widget::{Binding, Widget};

/// Visual state of a nav control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Points at the shown page.
    Current,
    Idle,
}

impl NavState {
    fn of(current: bool) -> Self {
        if current {
            NavState::Current
        } else {
            NavState::Idle
        }
    }

    /// Value of the `aria-current` attribute.
    pub fn aria_current(self) -> &'static str {
        match self {
            NavState::Current => "page",
            NavState::Idle => "false",
        }
    }
}

#[derive(Debug, Clone)]
struct Page {
    name: String,
    node: NodeId,
}

#[derive(Debug, Clone)]
struct NavLink {
    node: NodeId,
    /// Page named by the control's data attribute.
    target: Option<String>,
}

/// Single-page navigation between named sections.
pub struct PageRouter {
    default_page: String,
    page_class: String,
    page_id_suffix: String,
    nav_item_class: String,
    nav_page_attribute: String,
    active_page_class: Vec<String>,
    nav_current: Vec<String>,
    main_content_id: String,
    pages: Vec<Page>,
    nav: Vec<NavLink>,
    main: Option<NodeId>,
    active: Option<usize>,
}

impl PageRouter {
    pub fn new(config: &SiteConfig) -> Self {
        let sel = &config.selectors;
        Self {
            default_page: config.default_page.clone(),
            page_class: sel.page_class.clone(),
            page_id_suffix: sel.page_id_suffix.clone(),
            nav_item_class: sel.nav_item_class.clone(),
            nav_page_attribute: sel.nav_page_attribute.clone(),
            active_page_class: vec![sel.active_page_class.clone()],
            nav_current: config.styles.nav_current.clone(),
            main_content_id: sel.main_content_id.clone(),
            pages: Vec::new(),
            nav: Vec::new(),
            main: None,
            active: None,
        }
    }

    /// Name of the shown page.
    pub fn active_page(&self) -> Option<&str> {
        self.active.map(|i| self.pages[i].name.as_str())
    }

    /// Names of all known pages, in document order.
    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.name.as_str())
    }

    /// Make `page` the active page. Unknown names leave the state untouched
    /// and return `false`.
    pub fn select(&mut self, page: &str) -> bool {
        match self.pages.iter().position(|p| p.name == page) {
            Some(i) => {
                self.active = Some(i);
                true
            },
            None => false,
        }
    }

    /// Nav state for a control pointing at `target`.
    pub fn nav_state(&self, target: Option<&str>) -> NavState {
        NavState::of(target.is_some() && target == self.active_page())
    }

    /// Show `page` and sync nav state and focus. Unknown names are a
    /// no-op; returns whether the page was shown.
    pub fn show_page(&mut self, doc: &mut dyn Document, page: &str) -> Result<bool> {
        if !self.select(page) {
            log::debug!("router: ignoring unknown page '{page}'");
            return Ok(false);
        }
        self.render(doc)?;
        Ok(true)
    }

    fn render(&self, doc: &mut dyn Document) -> Result<()> {
        let Some(active) = self.active else {
            return Ok(());
        };

        for (i, page) in self.pages.iter().enumerate() {
            if i == active {
                doc.add_classes(page.node, &self.active_page_class)?;
            } else {
                doc.remove_classes(page.node, &self.active_page_class)?;
            }
        }

        for link in &self.nav {
            let state = self.nav_state(link.target.as_deref());
            doc.set_attribute(link.node, "aria-current", state.aria_current())?;
            match state {
                NavState::Current => doc.add_classes(link.node, &self.nav_current)?,
                NavState::Idle => doc.remove_classes(link.node, &self.nav_current)?,
            }
        }

        let page_node = self.pages[active].node;
        match doc.focusable_heading(page_node) {
            Some(heading) => doc.focus(heading)?,
            None => {
                if let Some(main) = self.main {
                    doc.focus(main)?;
                }
            },
        }
        Ok(())
    }
}

impl Widget for PageRouter {
    fn name(&self) -> &'static str {
        "router"
    }

    fn attach(&mut self, doc: &mut dyn Document) -> Result<Binding> {
        self.main = Some(
            doc.element_by_id(&self.main_content_id)
                .ok_or_else(|| PatternsError::MissingElement(format!("#{}", self.main_content_id)))?,
        );

        self.pages = doc
            .elements_by_class(&self.page_class)
            .into_iter()
            .filter_map(|node| {
                let id = doc.element_id(node)?;
                let name = id.strip_suffix(self.page_id_suffix.as_str())?;
                Some(Page {
                    name: name.to_string(),
                    node,
                })
            })
            .collect();
        if self.pages.is_empty() {
            return Err(PatternsError::MissingElement(format!(
                ".{} with id '<name>{}'",
                self.page_class, self.page_id_suffix
            )));
        }

        self.nav = doc
            .elements_by_class(&self.nav_item_class)
            .into_iter()
            .map(|node| NavLink {
                node,
                target: doc.data_attribute(node, &self.nav_page_attribute),
            })
            .collect();
        if self.nav.is_empty() {
            return Err(PatternsError::MissingElement(format!(".{}", self.nav_item_class)));
        }

        let default_page = self.default_page.clone();
        if !self.show_page(doc, &default_page)? {
            log::warn!("router: default page '{default_page}' not found");
        }
        Ok(Binding::Bound)
    }

    fn handle(&mut self, doc: &mut dyn Document, event: &InputEvent) -> Result<bool> {
        let target = event.target();
        let Some(link) = self.nav.iter().find(|l| l.node == target) else {
            return Ok(false);
        };
        match link.target.clone() {
            Some(page) => {
                self.show_page(doc, &page)?;
            },
            None => log::debug!("router: nav control {target} has no page"),
        }
        Ok(true)
    }

    fn controls(&self) -> Vec<NodeId> {
        self.nav.iter().map(|l| l.node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutOptions;
    use crate::test_utils::{click, demo_document, document_with, node};
    use patterns_types::memory::{Element, MemoryDocument};
    use proptest::prelude::*;

    fn mounted() -> (MemoryDocument, PageRouter) {
        let mut doc = demo_document();
        let mut router = PageRouter::new(&SiteConfig::default());
        assert_eq!(router.attach(&mut doc).unwrap(), Binding::Bound);
        (doc, router)
    }

    fn active_pages(doc: &MemoryDocument) -> Vec<&'static str> {
        ["home", "patterns", "resources"]
            .into_iter()
            .filter(|p| doc.has_class(node(doc, &format!("{p}-page")), "active-page"))
            .collect()
    }

    fn current_navs(doc: &MemoryDocument) -> Vec<&'static str> {
        ["home", "patterns", "resources"]
            .into_iter()
            .filter(|p| doc.attribute(node(doc, &format!("nav-{p}")), "aria-current") == Some("page"))
            .collect()
    }

    #[test]
    fn attach_shows_default_page() {
        let (doc, router) = mounted();
        assert_eq!(router.active_page(), Some("home"));
        assert_eq!(active_pages(&doc), vec!["home"]);
        assert_eq!(current_navs(&doc), vec!["home"]);
        let home_nav = node(&doc, "nav-home");
        assert!(doc.has_class(home_nav, "bg-gray-100"));
        assert!(doc.has_class(home_nav, "text-gray-900"));
    }

    #[test]
    fn page_names_follow_document_order() {
        let (_, router) = mounted();
        let names: Vec<_> = router.page_names().collect();
        assert_eq!(names, vec!["home", "patterns", "resources"]);
    }

    #[test]
    fn nav_click_switches_page() {
        let (mut doc, mut router) = mounted();
        let ev = click(&doc, "nav-patterns");
        assert!(router.handle(&mut doc, &ev).unwrap());
        assert_eq!(router.active_page(), Some("patterns"));
        assert_eq!(active_pages(&doc), vec!["patterns"]);
        assert_eq!(current_navs(&doc), vec!["patterns"]);
        let home_nav = node(&doc, "nav-home");
        assert_eq!(doc.attribute(home_nav, "aria-current"), Some("false"));
        assert!(!doc.has_class(home_nav, "bg-gray-100"));
    }

    #[test]
    fn focus_moves_to_page_heading() {
        let (mut doc, mut router) = mounted();
        router.show_page(&mut doc, "patterns").unwrap();
        let page = node(&doc, "patterns-page");
        let heading = doc.focusable_heading(page).unwrap();
        assert_eq!(doc.focused(), Some(heading));
    }

    #[test]
    fn focus_falls_back_to_main_content() {
        let (mut doc, mut router) = mounted();
        router.show_page(&mut doc, "resources").unwrap();
        assert_eq!(doc.focused(), Some(node(&doc, "main-content")));
    }

    #[test]
    fn unknown_page_is_noop() {
        let (mut doc, mut router) = mounted();
        router.show_page(&mut doc, "patterns").unwrap();
        let focused = doc.focused();
        assert!(!router.show_page(&mut doc, "missing").unwrap());
        assert_eq!(router.active_page(), Some("patterns"));
        assert_eq!(active_pages(&doc), vec!["patterns"]);
        assert_eq!(current_navs(&doc), vec!["patterns"]);
        assert_eq!(doc.focused(), focused);
    }

    #[test]
    fn select_is_pure() {
        let mut router = PageRouter::new(&SiteConfig::default());
        assert!(!router.select("home"));
        assert_eq!(router.active_page(), None);
    }

    #[test]
    fn nav_without_target_is_consumed_noop() {
        let mut doc = demo_document();
        doc.insert(Element::new("button").id("nav-orphan").class("nav-item"))
            .unwrap();
        let mut router = PageRouter::new(&SiteConfig::default());
        router.attach(&mut doc).unwrap();
        router.show_page(&mut doc, "patterns").unwrap();
        let orphan = node(&doc, "nav-orphan");
        let focused = doc.focused();
        let before = doc.element(orphan).cloned();

        let ev = click(&doc, "nav-orphan");
        assert!(router.handle(&mut doc, &ev).unwrap());
        assert_eq!(router.active_page(), Some("patterns"));
        assert_eq!(active_pages(&doc), vec!["patterns"]);
        assert_eq!(current_navs(&doc), vec!["patterns"]);
        assert_eq!(doc.focused(), focused);
        assert_eq!(doc.element(orphan).cloned(), before);
        assert!(router.controls().contains(&orphan));
    }

    #[test]
    fn click_elsewhere_is_not_consumed() {
        let (mut doc, mut router) = mounted();
        let ev = click(&doc, "demo-text");
        assert!(!router.handle(&mut doc, &ev).unwrap());
    }

    #[test]
    fn controls_are_nav_buttons() {
        let (doc, router) = mounted();
        assert_eq!(
            router.controls(),
            vec![node(&doc, "nav-home"), node(&doc, "nav-patterns"), node(&doc, "nav-resources")]
        );
    }

    #[test]
    fn missing_main_content_is_fatal() {
        let mut config = SiteConfig::default();
        config.selectors.main_content_id = "nowhere".into();
        let mut doc = demo_document();
        let err = PageRouter::new(&config).attach(&mut doc).unwrap_err();
        assert!(matches!(err, PatternsError::MissingElement(_)));
    }

    #[test]
    fn missing_pages_is_fatal() {
        let mut doc = document_with(LayoutOptions {
            pages: Vec::new(),
            ..LayoutOptions::default()
        });
        let err = PageRouter::new(&SiteConfig::default())
            .attach(&mut doc)
            .unwrap_err();
        assert!(matches!(err, PatternsError::MissingElement(_)));
    }

    #[test]
    fn unknown_default_page_leaves_nothing_active() {
        let mut config = SiteConfig::default();
        config.default_page = "landing".into();
        let mut doc = demo_document();
        let mut router = PageRouter::new(&config);
        assert_eq!(router.attach(&mut doc).unwrap(), Binding::Bound);
        assert_eq!(router.active_page(), None);
        assert!(active_pages(&doc).is_empty());
    }

    proptest! {
        #[test]
        fn valid_ids_pair_page_and_nav(seq in proptest::collection::vec(0usize..3, 1..20)) {
            let (mut doc, mut router) = mounted();
            let names = ["home", "patterns", "resources"];
            for i in seq {
                router.show_page(&mut doc, names[i]).unwrap();
                prop_assert_eq!(active_pages(&doc), vec![names[i]]);
                prop_assert_eq!(current_navs(&doc), vec![names[i]]);
            }
        }

        #[test]
        fn invalid_ids_change_nothing(name in "[a-z]{1,12}") {
            prop_assume!(!["home", "patterns", "resources"].contains(&name.as_str()));
            let (mut doc, mut router) = mounted();
            prop_assert!(!router.show_page(&mut doc, &name).unwrap());
            prop_assert_eq!(router.active_page(), Some("home"));
            prop_assert_eq!(active_pages(&doc), vec!["home"]);
        }
    }
}
