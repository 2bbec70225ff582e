#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use serde_wasm_bindgen::from_value;
use timeline_core::{SelectionSink, TimelineConfig, TimelineRenderer};
use timeline_payload::parse_payload_value;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::DomTarget;
use crate::host;
use crate::styles;

/// Factory của htmlwidget `daisyTimeline`: một instance cho mỗi phần tử output.
#[wasm_bindgen]
pub struct DaisyTimeline {
    target: DomTarget,
    renderer: TimelineRenderer,
    width: Option<f64>,
    height: Option<f64>,
}

#[wasm_bindgen]
impl DaisyTimeline {
    #[wasm_bindgen(constructor)]
    pub fn new(
        el: Element,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<DaisyTimeline, JsValue> {
        console_error_panic_hook::set_once();

        let document = el
            .owner_document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;
        let registration = styles::register(&document)?;

        let sink: Rc<dyn SelectionSink> = Rc::new(host::host_sink());

        Ok(Self {
            target: DomTarget::new(el, registration)?,
            renderer: TimelineRenderer::new(TimelineConfig::default(), sink, registration),
            width,
            height,
        })
    }

    /// Dựng lại toàn bộ timeline từ giá trị `{ events, options }` của host.
    #[wasm_bindgen(js_name = renderValue)]
    pub fn render_value(&mut self, x: JsValue) -> Result<(), JsValue> {
        let value = from_value::<serde_json::Value>(x)
            .map_err(|err| JsValue::from_str(&format!("Không đọc được dữ liệu widget: {err}")))?;
        let payload = parse_payload_value(&value)
            .map_err(|err| JsValue::from_str(&format!("Timeline error: {err}")))?;

        self.renderer.set_config(payload.config());
        self.renderer.render(&mut self.target, &payload.events)
    }

    /// Bố cục cố định nên kích thước chỉ được ghi nhận.
    pub fn resize(&mut self, width: Option<f64>, height: Option<f64>) {
        self.width = width;
        self.height = height;
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    #[wasm_bindgen(getter, js_name = containerId)]
    pub fn container_id(&self) -> String {
        self.target.container().id()
    }
}
