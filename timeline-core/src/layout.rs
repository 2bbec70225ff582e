//! Bố cục timeline và cây phần tử trung lập nền tảng (DOM, HTML tĩnh, Yew).

use serde::Serialize;

use crate::{TimelineConfig, TimelineEvent};

pub const START_CLASS: &str = "timeline-start";
pub const MIDDLE_CLASS: &str = "timeline-middle";
pub const END_CLASS: &str = "timeline-end";
pub const BOX_CLASS: &str = "timeline-box";
pub const SEPARATOR_CLASS: &str = "timeline-hr";

/// Một mục của timeline cùng cờ đường nối hai phía.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineItem<'a> {
    pub index: usize,
    pub date: &'a str,
    pub content: &'a str,
    /// Đường nối phía trước, chỉ có từ mục thứ hai trở đi.
    pub leading_separator: bool,
    /// Đường nối phía sau, không có ở mục cuối.
    pub trailing_separator: bool,
}

/// Bố cục đầy đủ của một lần render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimelineLayout<'a> {
    pub list_class: &'a str,
    pub interactive: bool,
    pub items: Vec<TimelineItem<'a>>,
}

impl<'a> TimelineLayout<'a> {
    /// Dựng bố cục theo đúng thứ tự đầu vào.
    pub fn build(events: &'a [TimelineEvent], config: &'a TimelineConfig) -> Self {
        let count = events.len();
        let items = events
            .iter()
            .enumerate()
            .map(|(index, event)| TimelineItem {
                index,
                date: &event.date,
                content: &event.content,
                leading_separator: index > 0,
                trailing_separator: index + 1 < count,
            })
            .collect();

        Self {
            list_class: &config.list_class,
            interactive: config.interactive,
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn leading_separators(&self) -> usize {
        self.items.iter().filter(|item| item.leading_separator).count()
    }

    pub fn trailing_separators(&self) -> usize {
        self.items.iter().filter(|item| item.trailing_separator).count()
    }

    /// Chuyển bố cục thành cây `ul > li*`.
    pub fn to_tree(&self) -> ElementNode {
        let mut list = ElementNode::new("ul").with_class(self.list_class);
        for item in &self.items {
            list.children.push(self.item_node(item));
        }
        list
    }

    fn item_node(&self, item: &TimelineItem<'_>) -> ElementNode {
        let mut entry = ElementNode::new("li");

        if item.leading_separator {
            entry
                .children
                .push(ElementNode::new("hr").with_class(SEPARATOR_CLASS));
        }

        entry.children.push(
            ElementNode::new("div")
                .with_class(START_CLASS)
                .with_text(item.date),
        );
        entry
            .children
            .push(ElementNode::new("div").with_class(MIDDLE_CLASS));

        let mut content_box = ElementNode::new("div")
            .with_class(BOX_CLASS)
            .with_text(item.content);
        if self.interactive {
            content_box.selects = Some(item.index);
        }
        entry.children.push(
            ElementNode::new("div")
                .with_class(END_CLASS)
                .with_child(content_box),
        );

        if item.trailing_separator {
            entry.children.push(ElementNode::new("hr"));
        }

        entry
    }
}

/// Phần tử trong cây render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ElementNode {
    pub tag: &'static str,
    pub class: Option<String>,
    pub text: Option<String>,
    pub children: Vec<ElementNode>,
    /// Chỉ số sự kiện được báo về host khi bấm vào phần tử.
    pub selects: Option<usize>,
}

impl ElementNode {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            text: None,
            children: Vec::new(),
            selects: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|value| value.split_whitespace().any(|name| name == class))
    }

    /// Duyệt tiền thứ tự, bao gồm chính phần tử này.
    pub fn descendants(&self) -> Vec<&ElementNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children.iter().rev());
        }
        out
    }

    /// Phần tử đầu tiên báo chỉ số `index` khi được bấm.
    pub fn find_selectable(&self, index: usize) -> Option<&ElementNode> {
        self.descendants()
            .into_iter()
            .find(|node| node.selects == Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(dates: &[&str]) -> Vec<TimelineEvent> {
        dates
            .iter()
            .map(|date| TimelineEvent::new(*date, format!("event {date}")))
            .collect()
    }

    #[test]
    fn single_item_has_no_separators() {
        let events = events(&["2020"]);
        let config = TimelineConfig::default();
        let layout = TimelineLayout::build(&events, &config);

        assert_eq!(layout.len(), 1);
        assert!(!layout.items[0].leading_separator);
        assert!(!layout.items[0].trailing_separator);
    }

    #[test]
    fn separators_skip_outer_boundaries() {
        let events = events(&["2019", "2020", "2021", "2022"]);
        let config = TimelineConfig::default();
        let layout = TimelineLayout::build(&events, &config);

        assert_eq!(layout.leading_separators(), 3);
        assert_eq!(layout.trailing_separators(), 3);
        assert!(!layout.items[0].leading_separator);
        assert!(!layout.items[3].trailing_separator);
    }

    #[test]
    fn item_children_follow_display_order() {
        let events = events(&["2021", "2022"]);
        let config = TimelineConfig::default();
        let tree = TimelineLayout::build(&events, &config).to_tree();

        let first: Vec<_> = tree.children[0]
            .children
            .iter()
            .map(|node| (node.tag, node.class.as_deref()))
            .collect();
        assert_eq!(
            first,
            vec![
                ("div", Some(START_CLASS)),
                ("div", Some(MIDDLE_CLASS)),
                ("div", Some(END_CLASS)),
                ("hr", None),
            ]
        );

        let second: Vec<_> = tree.children[1]
            .children
            .iter()
            .map(|node| (node.tag, node.class.as_deref()))
            .collect();
        assert_eq!(
            second,
            vec![
                ("hr", Some(SEPARATOR_CLASS)),
                ("div", Some(START_CLASS)),
                ("div", Some(MIDDLE_CLASS)),
                ("div", Some(END_CLASS)),
            ]
        );
    }

    #[test]
    fn non_interactive_boxes_select_nothing() {
        let events = events(&["2021", "2022"]);
        let config = TimelineConfig {
            interactive: false,
            ..TimelineConfig::default()
        };
        let tree = TimelineLayout::build(&events, &config).to_tree();

        assert!(tree.descendants().iter().all(|node| node.selects.is_none()));
    }

    #[test]
    fn list_class_comes_from_config() {
        let config = TimelineConfig::default();
        let tree = TimelineLayout::build(&[], &config).to_tree();

        assert_eq!(tree.tag, "ul");
        assert!(tree.has_class("timeline"));
        assert!(tree.has_class("lg:timeline-horizontal"));
        assert!(tree.children.is_empty());
    }
}
