//! `RenderTarget` backed by real DOM elements.
//!
//! Each reel gets a `div#door-<index>` appended to the host element, with a
//! `.boxcontainer` stack inside holding one fixed-height `.box` per symbol.
//! Offsets are CSS `translateY` transforms; instant moves disable the
//! transition around the write and force a style flush.

use crate::dom;
use slotdoors_engine::{DoorId, Motion, RenderTarget, Symbol};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

const BLUR_FILTER: &str = "blur(1.25px)";

pub struct DomRenderTarget {
    root: Element,
    containers: Vec<HtmlElement>,
    box_height_px: String,
}

impl DomRenderTarget {
    /// Wrap the host element (the `#doors` container) that door elements
    /// will be appended into.
    #[must_use]
    pub fn mount(root: Element, box_height: f64) -> Self {
        Self {
            root,
            containers: Vec::new(),
            box_height_px: format!("{box_height}px"),
        }
    }

    fn try_create_door(&mut self, index: usize) -> Result<(), JsValue> {
        let document = dom::document();
        let door = document.create_element("div")?;
        door.set_id(&format!("door-{index}"));
        door.set_class_name("door");
        let container: HtmlElement = document.create_element("div")?.dyn_into()?;
        container.set_class_name("boxcontainer");
        door.append_child(&container)?;
        self.root.append_child(&door)?;
        self.containers.push(container);
        Ok(())
    }

    fn create_box(&self, document: &Document, label: &str) -> Result<HtmlElement, JsValue> {
        let boxed: HtmlElement = document.create_element("div")?.dyn_into()?;
        boxed.set_class_name("box");
        boxed.style().set_property("width", "100%")?;
        boxed.style().set_property("height", &self.box_height_px)?;
        boxed.set_text_content(Some(label));
        Ok(boxed)
    }

    fn try_set_boxes(&self, door: DoorId, symbols: &[Symbol]) -> Result<(), JsValue> {
        let container = self.container(door)?;
        container.set_inner_html("");
        let document = dom::document();
        for symbol in symbols {
            let boxed = self.create_box(&document, symbol)?;
            container.append_child(&boxed)?;
        }
        Ok(())
    }

    fn try_set_offset(&self, door: DoorId, y_px: f64, motion: Motion) -> Result<(), JsValue> {
        let container = self.container(door)?;
        let style = container.style();
        let transform = format!("translateY({y_px}px)");
        match motion {
            Motion::Instant => {
                style.set_property("transition", "none")?;
                style.set_property("transform", &transform)?;
                // Reading offsetHeight forces the browser to flush the
                // pending style change before the transition is restored.
                let _ = container.offset_height();
                style.remove_property("transition")?;
            }
            Motion::Animate { duration_ms } => {
                style.set_property("transition-duration", &format!("{duration_ms}ms"))?;
                style.set_property("transform", &transform)?;
            }
        }
        Ok(())
    }

    fn try_set_blur(&self, door: DoorId, blurred: bool) -> Result<(), JsValue> {
        let container = self.container(door)?;
        let children = container.children();
        for index in 0..children.length() {
            let Some(child) = children.item(index) else {
                continue;
            };
            let Ok(child) = child.dyn_into::<HtmlElement>() else {
                continue;
            };
            if blurred {
                child.style().set_property("filter", BLUR_FILTER)?;
            } else {
                child.style().remove_property("filter")?;
            }
        }
        Ok(())
    }

    fn container(&self, door: DoorId) -> Result<&HtmlElement, JsValue> {
        self.containers
            .get(door.0)
            .ok_or_else(|| JsValue::from_str("unknown door id"))
    }

    fn report(context: &str, result: Result<(), JsValue>) {
        if let Err(err) = result {
            dom::console_error(&format!("{context}: {}", dom::js_error_message(&err)));
        }
    }
}

impl RenderTarget for DomRenderTarget {
    fn create_door(&mut self, index: usize) -> DoorId {
        Self::report("create_door", self.try_create_door(index));
        DoorId(index)
    }

    fn set_boxes(&mut self, door: DoorId, symbols: &[Symbol]) {
        Self::report("set_boxes", self.try_set_boxes(door, symbols));
    }

    fn set_offset(&mut self, door: DoorId, y_px: f64, motion: Motion) {
        Self::report("set_offset", self.try_set_offset(door, y_px, motion));
    }

    fn set_blur(&mut self, door: DoorId, blurred: bool) {
        Self::report("set_blur", self.try_set_blur(door, blurred));
    }
}
