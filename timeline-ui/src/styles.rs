#![cfg(target_arch = "wasm32")]

use timeline_core::style::{self, StyleHost, StylesheetRegistration};
use wasm_bindgen::JsValue;
use web_sys::Document;

struct DocumentHead<'a> {
    document: &'a Document,
}

impl StyleHost for DocumentHead<'_> {
    type Error = JsValue;

    fn has_style(&self, id: &str) -> Result<bool, JsValue> {
        Ok(self.document.get_element_by_id(id).is_some())
    }

    fn insert_style(&mut self, id: &str, css: &str) -> Result<(), JsValue> {
        let head = self
            .document
            .head()
            .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

        let style_el = self.document.create_element("style")?;
        style_el.set_id(id);
        style_el.set_text_content(Some(css));
        head.append_child(&style_el)?;
        Ok(())
    }
}

/// Đăng ký stylesheet timeline cho trang; gọi lại nhiều lần không chèn thêm thẻ.
pub fn register(document: &Document) -> Result<StylesheetRegistration, JsValue> {
    style::register(&mut DocumentHead { document })
}
