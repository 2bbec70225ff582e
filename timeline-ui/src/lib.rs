//! Widget timeline cho môi trường WebAssembly: renderer DOM, htmlwidget và component Yew.

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
pub mod styles;
#[cfg(target_arch = "wasm32")]
mod view;
#[cfg(target_arch = "wasm32")]
mod widget;

#[cfg(target_arch = "wasm32")]
pub use dom::DomTarget;
#[cfg(target_arch = "wasm32")]
pub use host::{host_sink, HostSink};
#[cfg(target_arch = "wasm32")]
pub use view::{mount_timeline_view, TimelineView, TimelineViewProps};
#[cfg(target_arch = "wasm32")]
pub use widget::DaisyTimeline;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_timeline_view(_: &str, _: wasm_bindgen::JsValue) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "timeline-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
