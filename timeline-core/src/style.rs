//! Stylesheet dùng chung và cơ chế đăng ký một lần cho mỗi trang.

/// Id đánh dấu thẻ `<style>` của widget trong trang.
pub const STYLE_MARKER_ID: &str = "daisyui-timeline-css";

/// CSS mặc định, bám theo bố cục timeline của daisyUI.
pub const STYLESHEET: &str = r#"
.timeline {
  position: relative;
  display: flex;
  margin: 0;
  padding: 0;
  list-style: none;
}
.timeline-vertical {
  flex-direction: column;
}
.timeline li {
  position: relative;
  display: grid;
  flex-shrink: 0;
  align-items: center;
  grid-template-columns: minmax(0, 1fr) auto minmax(0, 1fr);
  grid-template-rows: minmax(0, 1fr) auto minmax(0, 1fr);
}
.timeline-vertical li {
  justify-items: center;
  min-height: 3rem;
}
.timeline li > hr {
  width: 100%;
  border: none;
  margin: 0;
  height: 0.25rem;
  background-color: #e5e7eb;
}
.timeline-vertical li > hr {
  width: 0.25rem;
  height: 100%;
}
.timeline-vertical li > hr:first-child {
  grid-column-start: 2;
  grid-row-start: 1;
}
.timeline-vertical li > hr:last-child {
  grid-column-start: 2;
  grid-row-start: 3;
  grid-row-end: none;
}
.timeline-start {
  grid-column-start: 1;
  grid-column-end: 2;
  grid-row-start: 2;
  grid-row-end: 3;
  margin: 0.25rem;
  align-self: center;
  justify-self: end;
}
.timeline-middle {
  grid-column-start: 2;
  grid-row-start: 2;
  left: 0.75rem;
  width: 0.75rem;
  height: 0.75rem;
  background-color: #2563eb;
  border-radius: 9999px;
  border: 2px solid white;
  box-shadow: 0 0 0 2px #2563eb;
  top: 0.25rem;
}
.timeline-end {
  grid-column-start: 3;
  grid-column-end: 4;
  grid-row-start: 2;
  grid-row-end: 3;
  margin: 0.25rem;
  align-self: center;
  justify-self: start;
}
.timeline-box {
  border: 1px solid #e5e7eb;
  border-radius: 0.5rem;
  background-color: #ffffff;
  padding: 0.5rem 1rem;
  box-shadow: 0 1px 2px rgba(15, 23, 42, 0.08);
}
.timeline-box[data-index] {
  cursor: pointer;
}
.timeline li > hr.timeline-hr {
  border-top: 1px solid #000000;
}
@media (min-width: 1024px) {
  .lg\:timeline-horizontal {
    flex-direction: row;
  }
  .lg\:timeline-horizontal li {
    justify-items: stretch;
    min-height: auto;
  }
  .lg\:timeline-horizontal li > hr {
    width: 100%;
    height: 0.25rem;
  }
  .lg\:timeline-horizontal li > hr:first-child {
    grid-column-start: 1;
    grid-row-start: 2;
  }
  .lg\:timeline-horizontal li > hr:last-child {
    grid-column-start: 3;
    grid-column-end: none;
    grid-row-start: 2;
    grid-row-end: auto;
  }
  .lg\:timeline-horizontal .timeline-start {
    grid-column-start: 1;
    grid-column-end: 4;
    grid-row-start: 1;
    grid-row-end: 2;
    align-self: end;
    justify-self: center;
  }
  .lg\:timeline-horizontal .timeline-end {
    grid-column-start: 1;
    grid-column-end: 4;
    grid-row-start: 3;
    grid-row-end: 4;
    align-self: start;
    justify-self: center;
  }
}
"#;

/// Nơi có thể chứa thẻ style của trang (DOM `<head>`, trang HTML tĩnh...).
pub trait StyleHost {
    type Error;

    fn has_style(&self, id: &str) -> Result<bool, Self::Error>;

    fn insert_style(&mut self, id: &str, css: &str) -> Result<(), Self::Error>;
}

/// Bằng chứng stylesheet đã được đăng ký; renderer yêu cầu token này khi khởi tạo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylesheetRegistration {
    newly_inserted: bool,
}

impl StylesheetRegistration {
    /// `true` nếu lần đăng ký này là lần chèn thẻ style đầu tiên.
    pub fn newly_inserted(&self) -> bool {
        self.newly_inserted
    }
}

/// Đảm bảo stylesheet có mặt đúng một lần trong `host`.
pub fn register<H: StyleHost>(host: &mut H) -> Result<StylesheetRegistration, H::Error> {
    if host.has_style(STYLE_MARKER_ID)? {
        return Ok(StylesheetRegistration {
            newly_inserted: false,
        });
    }

    host.insert_style(STYLE_MARKER_ID, STYLESHEET)?;
    tracing::debug!(id = STYLE_MARKER_ID, "đã chèn stylesheet timeline");
    Ok(StylesheetRegistration {
        newly_inserted: true,
    })
}

/// Phần `<head>` trong bộ nhớ, dùng cho trang tĩnh và kiểm thử.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHead {
    styles: Vec<(String, String)>,
}

impl MemoryHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    pub fn count(&self, id: &str) -> usize {
        self.styles.iter().filter(|(style_id, _)| style_id == id).count()
    }
}

impl StyleHost for MemoryHead {
    type Error = std::convert::Infallible;

    fn has_style(&self, id: &str) -> Result<bool, Self::Error> {
        Ok(self.count(id) > 0)
    }

    fn insert_style(&mut self, id: &str, css: &str) -> Result<(), Self::Error> {
        self.styles.push((id.to_string(), css.to_string()));
        Ok(())
    }
}
