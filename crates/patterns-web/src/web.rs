use std::cell::RefCell;
use std::rc::Rc;

use log::{Level, LevelFilter, Metadata, Record};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlButtonElement, HtmlElement};

use patterns_types::config::SiteConfig;
use patterns_types::dom::{Document, NodeId};
use patterns_types::error::{PatternsError, Result};
use patterns_types::input::InputEvent;
use patterns_ui::DemoPage;

fn js_err(context: &str, err: JsValue) -> PatternsError {
    PatternsError::Backend(format!("{context}: {err:?}"))
}

/// [`Document`] over the live DOM.
///
/// Elements are registered on first lookup; looking up the same element
/// again yields the same handle.
pub struct WebDocument {
    document: web_sys::Document,
    nodes: Vec<Element>,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self {
            document,
            nodes: Vec::new(),
        }
    }

    fn register(&mut self, element: Element) -> NodeId {
        if let Some(i) = self.nodes.iter().position(|n| *n == element) {
            return NodeId(i as u32);
        }
        self.nodes.push(element);
        NodeId(self.nodes.len() as u32 - 1)
    }

    pub fn element(&self, node: NodeId) -> Result<&Element> {
        self.nodes
            .get(node.0 as usize)
            .ok_or(PatternsError::UnknownNode(node))
    }

    fn html_element(&self, node: NodeId) -> Result<&HtmlElement> {
        self.element(node)?
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PatternsError::Backend(format!("{node} is not an HTML element")))
    }
}

impl Document for WebDocument {
    fn element_by_id(&mut self, id: &str) -> Option<NodeId> {
        let element = self.document.get_element_by_id(id)?;
        Some(self.register(element))
    }

    fn elements_by_class(&mut self, class: &str) -> Vec<NodeId> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .map(|element| self.register(element))
            .collect()
    }

    fn focusable_heading(&mut self, node: NodeId) -> Option<NodeId> {
        let heading = self
            .element(node)
            .ok()?
            .query_selector("h2[tabindex=\"-1\"]")
            .ok()
            .flatten()?;
        Some(self.register(heading))
    }

    fn element_id(&self, node: NodeId) -> Option<String> {
        let id = self.element(node).ok()?.id();
        (!id.is_empty()).then_some(id)
    }

    fn data_attribute(&self, node: NodeId, key: &str) -> Option<String> {
        self.element(node)
            .ok()?
            .get_attribute(&format!("data-{key}"))
    }

    fn add_classes(&mut self, node: NodeId, classes: &[String]) -> Result<()> {
        let list = self.element(node)?.class_list();
        for class in classes {
            list.add_1(class).map_err(|e| js_err("classList.add", e))?;
        }
        Ok(())
    }

    fn remove_classes(&mut self, node: NodeId, classes: &[String]) -> Result<()> {
        let list = self.element(node)?.class_list();
        for class in classes {
            list.remove_1(class)
                .map_err(|e| js_err("classList.remove", e))?;
        }
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        self.element(node)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        self.element(node)?
            .set_attribute(name, value)
            .map_err(|e| js_err("setAttribute", e))
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) -> Result<()> {
        let element = self.element(node)?;
        match element.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.set_disabled(disabled),
            None => {
                element
                    .toggle_attribute_with_force("disabled", disabled)
                    .map_err(|e| js_err("toggleAttribute", e))?;
            },
        }
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) -> Result<()> {
        self.html_element(node)?
            .style()
            .set_property(property, value)
            .map_err(|e| js_err("style.setProperty", e))
    }

    fn focus(&mut self, node: NodeId) -> Result<()> {
        self.html_element(node)?
            .focus()
            .map_err(|e| js_err("focus", e))
    }
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
    if let Err(e) = mount() {
        log::error!("failed to mount demo page: {e}");
    }
}

fn mount() -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PatternsError::Backend("no document".into()))?;
    let mut doc = WebDocument::new(document);
    let page = DemoPage::mount(&mut doc, &SiteConfig::default())?;
    let controls = page.controls();
    let state = Rc::new(RefCell::new((doc, page)));

    for node in controls {
        let element = state.borrow().0.element(node)?.clone();
        let state = Rc::clone(&state);
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            let mut guard = state.borrow_mut();
            let (doc, page) = &mut *guard;
            if let Err(e) = page.dispatch(doc, &InputEvent::Click(node)) {
                log::error!("click on {node} failed: {e}");
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        element
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| js_err("addEventListener", e))?;
        cb.forget();
    }
    Ok(())
}
