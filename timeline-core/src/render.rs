//! Renderer dựng lại toàn bộ timeline vào một đích render.

use std::convert::Infallible;
use std::rc::Rc;

use crate::layout::{ElementNode, TimelineLayout};
use crate::markup;
use crate::selection::{selection_key, SelectionDispatcher, SelectionSink};
use crate::style::StylesheetRegistration;
use crate::{TimelineConfig, TimelineEvent};

/// Container nhận cây phần tử của timeline.
pub trait RenderTarget {
    type Error;

    /// Id của container, dùng để tạo khóa input.
    fn container_id(&self) -> String;

    /// Gỡ toàn bộ phần tử con cùng các callback của lần render trước.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Gắn cây mới; phần tử có `selects` gọi `dispatcher` khi được bấm.
    fn mount(
        &mut self,
        tree: &ElementNode,
        dispatcher: &SelectionDispatcher,
    ) -> Result<(), Self::Error>;
}

/// Renderer không giữ trạng thái giữa các lần gọi.
pub struct TimelineRenderer {
    config: TimelineConfig,
    sink: Rc<dyn SelectionSink>,
    styles: StylesheetRegistration,
}

impl TimelineRenderer {
    pub fn new(
        config: TimelineConfig,
        sink: Rc<dyn SelectionSink>,
        styles: StylesheetRegistration,
    ) -> Self {
        Self {
            config,
            sink,
            styles,
        }
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TimelineConfig) {
        self.config = config;
    }

    pub fn styles(&self) -> StylesheetRegistration {
        self.styles
    }

    /// Dispatcher gửi lựa chọn của container `container_id` về sink.
    pub fn dispatcher_for(&self, container_id: &str) -> SelectionDispatcher {
        SelectionDispatcher::new(
            selection_key(container_id, &self.config.selection_suffix),
            self.config.interactive,
            Rc::clone(&self.sink),
        )
    }

    /// Xóa nội dung cũ của `target` rồi dựng một mục cho mỗi sự kiện.
    pub fn render<T: RenderTarget>(
        &self,
        target: &mut T,
        events: &[TimelineEvent],
    ) -> Result<(), T::Error> {
        target.clear()?;

        let container_id = target.container_id();
        let layout = TimelineLayout::build(events, &self.config);
        let dispatcher = self.dispatcher_for(&container_id);

        tracing::debug!(
            container = %container_id,
            items = layout.len(),
            "dựng lại timeline"
        );
        target.mount(&layout.to_tree(), &dispatcher)
    }
}

/// Container trong bộ nhớ: dùng cho HTML tĩnh và kiểm thử.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    id: String,
    children: Vec<ElementNode>,
    dispatcher: Option<SelectionDispatcher>,
    renders: usize,
}

impl MemoryTarget {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn children(&self) -> &[ElementNode] {
        &self.children
    }

    /// Số lần đã mount.
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Mô phỏng người dùng bấm vào box thứ `index`; trả về `false` nếu không có box đó.
    pub fn click(&self, index: usize) -> bool {
        let Some(dispatcher) = &self.dispatcher else {
            return false;
        };
        let found = self
            .children
            .iter()
            .any(|child| child.find_selectable(index).is_some());
        if found {
            dispatcher.dispatch(index);
        }
        found
    }

    pub fn to_html(&self) -> String {
        self.children.iter().map(markup::to_html).collect()
    }
}

impl RenderTarget for MemoryTarget {
    type Error = Infallible;

    fn container_id(&self) -> String {
        self.id.clone()
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.children.clear();
        self.dispatcher = None;
        Ok(())
    }

    fn mount(
        &mut self,
        tree: &ElementNode,
        dispatcher: &SelectionDispatcher,
    ) -> Result<(), Self::Error> {
        self.children.push(tree.clone());
        self.dispatcher = Some(dispatcher.clone());
        self.renders += 1;
        Ok(())
    }
}
