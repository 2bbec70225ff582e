#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use timeline_core::{ResolvingSink, SelectionSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::console;

/// Sink của htmlwidget: kiểm tra chế độ Shiny tại mỗi lần bấm.
pub fn host_sink() -> ResolvingSink<fn() -> Option<HostSink>> {
    ResolvingSink::new(HostSink::detect as fn() -> Option<HostSink>)
}

/// Sink gửi lựa chọn về Shiny qua `Shiny.setInputValue`.
pub struct HostSink {
    shiny: JsValue,
    set_input_value: Function,
}

impl HostSink {
    /// Chỉ trả về sink khi trang chạy trong chế độ Shiny và có `setInputValue`.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let global: &JsValue = window.as_ref();

        let widgets = Reflect::get(global, &JsValue::from_str("HTMLWidgets")).ok()?;
        if widgets.is_undefined() || widgets.is_null() {
            return None;
        }
        let shiny_mode = Reflect::get(&widgets, &JsValue::from_str("shinyMode")).ok()?;
        if !shiny_mode.is_truthy() {
            return None;
        }

        let shiny = Reflect::get(global, &JsValue::from_str("Shiny")).ok()?;
        if shiny.is_undefined() || shiny.is_null() {
            return None;
        }
        let set_input_value = Reflect::get(&shiny, &JsValue::from_str("setInputValue"))
            .ok()?
            .dyn_into::<Function>()
            .ok()?;

        Some(Self {
            shiny,
            set_input_value,
        })
    }
}

impl SelectionSink for HostSink {
    fn select(&self, key: &str, index: usize) {
        let result = self.set_input_value.call2(
            &self.shiny,
            &JsValue::from_str(key),
            &JsValue::from_f64(index as f64),
        );
        if let Err(err) = result {
            console::error_1(&err);
        }
    }
}
