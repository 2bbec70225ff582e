#![cfg(target_arch = "wasm32")]

use timeline_core::{ElementNode, RenderTarget, SelectionDispatcher, StylesheetRegistration};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Đích render là một phần tử DOM thật.
///
/// Callback của lần render hiện tại sống cùng target và bị hủy khi `clear`.
pub struct DomTarget {
    document: Document,
    container: Element,
    listeners: Vec<Closure<dyn FnMut()>>,
}

impl DomTarget {
    pub fn new(container: Element, _styles: StylesheetRegistration) -> Result<Self, JsValue> {
        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("Container không thuộc document nào"))?;

        Ok(Self {
            document,
            container,
            listeners: Vec::new(),
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    fn build(
        &mut self,
        node: &ElementNode,
        dispatcher: &SelectionDispatcher,
    ) -> Result<Element, JsValue> {
        let element = self.document.create_element(node.tag)?;
        if let Some(class) = &node.class {
            element.set_class_name(class);
        }
        if let Some(text) = &node.text {
            element.set_text_content(Some(text));
        }

        for child in &node.children {
            let child_el = self.build(child, dispatcher)?;
            element.append_child(&child_el)?;
        }

        if let Some(index) = node.selects {
            element.set_attribute("data-index", &index.to_string())?;
            let dispatcher = dispatcher.clone();
            let callback = Closure::<dyn FnMut()>::new(move || dispatcher.dispatch(index));
            element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
            self.listeners.push(callback);
        }

        Ok(element)
    }
}

impl RenderTarget for DomTarget {
    type Error = JsValue;

    fn container_id(&self) -> String {
        self.container.id()
    }

    fn clear(&mut self) -> Result<(), JsValue> {
        while let Some(child) = self.container.first_child() {
            self.container.remove_child(&child)?;
        }
        self.listeners.clear();
        Ok(())
    }

    fn mount(
        &mut self,
        tree: &ElementNode,
        dispatcher: &SelectionDispatcher,
    ) -> Result<(), JsValue> {
        let list = self.build(tree, dispatcher)?;
        self.container.append_child(&list)?;
        Ok(())
    }
}
