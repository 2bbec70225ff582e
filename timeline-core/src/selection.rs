//! Kênh báo sự kiện được chọn về host.

use std::rc::Rc;

/// Nơi nhận chỉ số sự kiện người dùng vừa chọn.
///
/// Renderer luôn gọi sink; việc nối tới host thật hay bỏ qua do nơi khởi tạo quyết định.
pub trait SelectionSink {
    fn select(&self, key: &str, index: usize);
}

/// Sink bỏ qua mọi lựa chọn, dùng khi không có host.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl SelectionSink for NoopSink {
    fn select(&self, _key: &str, _index: usize) {}
}

impl<S: SelectionSink + ?Sized> SelectionSink for Rc<S> {
    fn select(&self, key: &str, index: usize) {
        (**self).select(key, index)
    }
}

/// Sink tìm đích thật ở mỗi lần chọn; bỏ qua khi `resolve` chưa trả về gì.
pub struct ResolvingSink<F> {
    resolve: F,
}

impl<F> ResolvingSink<F> {
    pub fn new(resolve: F) -> Self {
        Self { resolve }
    }
}

impl<F, S> SelectionSink for ResolvingSink<F>
where
    F: Fn() -> Option<S>,
    S: SelectionSink,
{
    fn select(&self, key: &str, index: usize) {
        match (self.resolve)() {
            Some(sink) => sink.select(key, index),
            None => tracing::trace!(key, index, "chưa có host, bỏ qua lựa chọn"),
        }
    }
}

/// Khóa input dạng `<container_id><suffix>`.
pub fn selection_key(container_id: &str, suffix: &str) -> String {
    format!("{container_id}{suffix}")
}

/// Gắn khóa của một container với sink để các box gọi lại.
#[derive(Clone)]
pub struct SelectionDispatcher {
    key: String,
    enabled: bool,
    sink: Rc<dyn SelectionSink>,
}

impl SelectionDispatcher {
    pub fn new(key: impl Into<String>, enabled: bool, sink: Rc<dyn SelectionSink>) -> Self {
        Self {
            key: key.into(),
            enabled,
            sink,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn dispatch(&self, index: usize) {
        if !self.enabled {
            return;
        }
        tracing::trace!(key = %self.key, index, "chọn sự kiện");
        self.sink.select(&self.key, index);
    }
}

impl PartialEq for SelectionDispatcher {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.enabled == other.enabled
            && std::ptr::addr_eq(Rc::as_ptr(&self.sink), Rc::as_ptr(&other.sink))
    }
}

impl std::fmt::Debug for SelectionDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionDispatcher")
            .field("key", &self.key)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
