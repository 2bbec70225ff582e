//! Bridge WASM <-> JavaScript trung lập framework.

use std::rc::Rc;

use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use timeline_core::markup;
use timeline_core::style::{self, STYLESHEET};
use timeline_core::{
    MemoryHead, MemoryTarget, NoopSink, TimelineConfig, TimelineError, TimelineLayout,
    TimelineOptions, TimelinePayload, TimelineRenderer,
};
use timeline_payload::parse_payload_value;
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsTimelineConfig {
    #[serde(default)]
    interactive: Option<bool>,
    #[serde(default)]
    list_class: Option<String>,
    #[serde(default)]
    selection_suffix: Option<String>,
}

impl JsTimelineConfig {
    fn apply(self, base: TimelineConfig) -> TimelineConfig {
        TimelineOptions {
            interactive: self.interactive,
            list_class: self.list_class,
            selection_suffix: self.selection_suffix,
        }
        .apply(base)
    }
}

/// HTML tĩnh của timeline (không gắn callback), bọc trong `<div id=container_id>`.
#[wasm_bindgen]
pub fn render_markup(
    payload: JsValue,
    container_id: &str,
    config: Option<JsValue>,
) -> Result<String, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let payload = read_payload(payload)?;
    let cfg = resolve_config(&payload, config)?;
    Ok(markup_for(&payload, cfg, container_id))
}

/// Mô tả bố cục (các mục và đường nối) dưới dạng object JS.
#[wasm_bindgen]
pub fn describe_layout(payload: JsValue, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let payload = read_payload(payload)?;
    let cfg = resolve_config(&payload, config)?;
    let layout = TimelineLayout::build(&payload.events, &cfg);

    to_value(&layout).map_err(|err| JsValue::from_str(&format!("Không serialize bố cục: {err}")))
}

/// CSS dùng chung của widget.
#[wasm_bindgen]
pub fn stylesheet() -> String {
    STYLESHEET.to_string()
}

fn read_payload(payload: JsValue) -> Result<TimelinePayload, JsValue> {
    let value = from_value::<serde_json::Value>(payload)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON payload: {err}")))?;
    parse_payload_value(&value).map_err(|err| JsValue::from_str(&format_timeline_error(err)))
}

fn resolve_config(
    payload: &TimelinePayload,
    config: Option<JsValue>,
) -> Result<TimelineConfig, JsValue> {
    let base = payload.config();
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsTimelineConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(cfg.apply(base))
        }
        _ => Ok(base),
    }
}

fn markup_for(payload: &TimelinePayload, cfg: TimelineConfig, container_id: &str) -> String {
    let mut head = MemoryHead::new();
    let styles = match style::register(&mut head) {
        Ok(registration) => registration,
        Err(never) => match never {},
    };
    let renderer = TimelineRenderer::new(cfg, Rc::new(NoopSink), styles);
    let mut target = MemoryTarget::new(container_id);
    match renderer.render(&mut target, &payload.events) {
        Ok(()) => markup::container(container_id, &target.to_html()),
        Err(never) => match never {},
    }
}

fn format_timeline_error(err: TimelineError) -> String {
    format!("Timeline error: {err}")
}
