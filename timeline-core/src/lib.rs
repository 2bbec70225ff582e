//! Logic lõi dựng timeline: mô hình dữ liệu, bố cục và renderer trung lập nền tảng.

use serde::{Deserialize, Serialize};

pub mod layout;
pub mod markup;
pub mod render;
pub mod selection;
pub mod style;

pub use layout::{ElementNode, TimelineItem, TimelineLayout};
pub use render::{MemoryTarget, RenderTarget, TimelineRenderer};
pub use selection::{
    selection_key, NoopSink, ResolvingSink, SelectionDispatcher, SelectionSink,
};
pub use style::{MemoryHead, StyleHost, StylesheetRegistration};

/// Class mặc định của thẻ `ul`, chuyển sang ngang ở breakpoint `lg`.
pub const DEFAULT_LIST_CLASS: &str = "timeline timeline-vertical lg:timeline-horizontal";

/// Hậu tố khóa input gửi về host khi chọn một sự kiện.
pub const DEFAULT_SELECTION_SUFFIX: &str = "_selected";

/// Cấu hình hiển thị và tương tác của widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Gắn callback chọn sự kiện cho từng box hay không.
    pub interactive: bool,
    /// Class của danh sách gốc.
    pub list_class: String,
    /// Hậu tố nối sau id container để tạo khóa input.
    pub selection_suffix: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            interactive: true,
            list_class: DEFAULT_LIST_CLASS.to_string(),
            selection_suffix: DEFAULT_SELECTION_SUFFIX.to_string(),
        }
    }
}

/// Một sự kiện trong timeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TimelineEvent {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub content: String,
}

impl TimelineEvent {
    pub fn new(date: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            content: content.into(),
        }
    }
}

/// Tùy chọn ghi đè cấu hình, mọi trường đều không bắt buộc.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TimelineOptions {
    #[serde(default)]
    pub interactive: Option<bool>,
    #[serde(default)]
    pub list_class: Option<String>,
    #[serde(default)]
    pub selection_suffix: Option<String>,
}

impl TimelineOptions {
    /// Áp các giá trị đã khai báo lên cấu hình nền.
    pub fn apply(self, mut base: TimelineConfig) -> TimelineConfig {
        if let Some(interactive) = self.interactive {
            base.interactive = interactive;
        }
        if let Some(list_class) = self.list_class {
            base.list_class = list_class;
        }
        if let Some(suffix) = self.selection_suffix {
            base.selection_suffix = suffix;
        }
        base
    }
}

impl From<TimelineOptions> for TimelineConfig {
    fn from(options: TimelineOptions) -> Self {
        options.apply(TimelineConfig::default())
    }
}

/// Giá trị host truyền vào mỗi lần render.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TimelinePayload {
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
    #[serde(default)]
    pub options: TimelineOptions,
}

impl TimelinePayload {
    pub fn new(events: Vec<TimelineEvent>) -> Self {
        Self {
            events,
            options: TimelineOptions::default(),
        }
    }

    /// Cấu hình hiệu lực sau khi áp tùy chọn của payload.
    pub fn config(&self) -> TimelineConfig {
        TimelineConfig::from(self.options.clone())
    }
}

/// Lỗi chung khi đọc dữ liệu timeline.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_override_only_declared_fields() {
        let options = TimelineOptions {
            interactive: Some(false),
            ..TimelineOptions::default()
        };
        let config = options.apply(TimelineConfig::default());

        assert!(!config.interactive);
        assert_eq!(config.list_class, DEFAULT_LIST_CLASS);
        assert_eq!(config.selection_suffix, "_selected");
    }

    #[test]
    fn event_fields_default_to_empty() {
        let event: TimelineEvent = serde_json::from_str(r#"{"date":"2021"}"#).unwrap();
        assert_eq!(event, TimelineEvent::new("2021", ""));
    }
}
