#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use serde_wasm_bindgen::from_value;
use timeline_core::{
    ElementNode, SelectionDispatcher, TimelineConfig, TimelineEvent, TimelineLayout,
    TimelineRenderer,
};
use timeline_payload::parse_payload_value;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, Window};
use yew::prelude::*;

use crate::host;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct TimelineViewProps {
    pub events: Vec<TimelineEvent>,
    #[prop_or_default]
    pub config: TimelineConfig,
    /// Nhận mọi lần bấm box; sink phía sau do nơi mount quyết định.
    pub dispatcher: SelectionDispatcher,
}

/// Timeline dạng component Yew, dùng chung bố cục và dispatcher với renderer DOM.
#[function_component(TimelineView)]
pub fn timeline_view(props: &TimelineViewProps) -> Html {
    let tree = TimelineLayout::build(&props.events, &props.config).to_tree();
    render_node(&tree, &props.dispatcher)
}

fn render_node(node: &ElementNode, dispatcher: &SelectionDispatcher) -> Html {
    let class = classes!(node.class.clone());
    let data_index = node.selects.map(|index| index.to_string());
    let onclick = node.selects.map(|index| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(index))
    });

    if node.children.is_empty() && node.text.is_none() {
        return html! { <@{node.tag} {class} data-index={data_index} {onclick} /> };
    }

    html! {
        <@{node.tag} {class} data-index={data_index} {onclick}>
            { node.text.clone().unwrap_or_default() }
            { for node.children.iter().map(|child| render_node(child, dispatcher)) }
        </@>
    }
}

/// Gắn `TimelineView` vào phần tử theo `selector` với payload `{ events, options }`.
#[wasm_bindgen]
pub fn mount_timeline_view(selector: &str, payload: JsValue) -> Result<(), JsValue> {
    let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
    let document: Document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

    let target: Element = document
        .query_selector(selector)
        .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
        .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

    let registration = styles::register(&document)?;

    let value = from_value::<serde_json::Value>(payload)?;
    let payload = parse_payload_value(&value)
        .map_err(|err| JsValue::from_str(&format!("Timeline error: {err}")))?;

    let renderer = TimelineRenderer::new(
        payload.config(),
        Rc::new(host::host_sink()),
        registration,
    );
    let dispatcher = renderer.dispatcher_for(&target.id());

    target.set_inner_html("");
    yew::Renderer::<TimelineView>::with_root_and_props(
        target,
        TimelineViewProps {
            events: payload.events,
            config: renderer.config().clone(),
            dispatcher,
        },
    )
    .render();
    Ok(())
}
