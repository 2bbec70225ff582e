//! Xuất cây phần tử ra HTML tĩnh.

use crate::layout::ElementNode;
use crate::style::MemoryHead;

const VOID_TAGS: &[&str] = &["hr", "br", "img", "input", "meta", "link"];

/// Thay các ký tự đặc biệt của HTML.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn to_html(node: &ElementNode) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &ElementNode, out: &mut String) {
    out.push('<');
    out.push_str(node.tag);
    if let Some(class) = &node.class {
        out.push_str(" class=\"");
        out.push_str(&escape(class));
        out.push('"');
    }
    if let Some(index) = node.selects {
        out.push_str(&format!(" data-index=\"{index}\""));
    }
    out.push('>');

    if VOID_TAGS.contains(&node.tag) {
        return;
    }

    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in &node.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(node.tag);
    out.push('>');
}

/// Bọc `body` trong container `<div id=..>` mà widget được gắn vào.
pub fn container(container_id: &str, body: &str) -> String {
    format!("<div id=\"{}\">{body}</div>", escape(container_id))
}

/// Trang HTML độc lập: các thẻ style trong `head` và một container chứa `body`.
pub fn standalone_page(title: &str, container_id: &str, head: &MemoryHead, body: &str) -> String {
    let styles: String = head
        .styles()
        .iter()
        .map(|(id, css)| format!("<style id=\"{}\">{css}</style>\n", escape(id)))
        .collect();

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n{styles}</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        container(container_id, body),
    )
}
