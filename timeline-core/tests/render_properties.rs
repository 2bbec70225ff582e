use std::cell::RefCell;
use std::rc::Rc;

use timeline_core::layout::{BOX_CLASS, END_CLASS, SEPARATOR_CLASS, START_CLASS};
use timeline_core::style::{self, STYLE_MARKER_ID};
use timeline_core::{
    ElementNode, MemoryHead, MemoryTarget, NoopSink, SelectionSink, TimelineConfig,
    TimelineEvent, TimelineRenderer,
};

#[derive(Default)]
struct RecordingSink {
    selections: RefCell<Vec<(String, usize)>>,
}

impl SelectionSink for RecordingSink {
    fn select(&self, key: &str, index: usize) {
        self.selections.borrow_mut().push((key.to_string(), index));
    }
}

fn renderer_with(sink: Rc<dyn SelectionSink>) -> TimelineRenderer {
    let mut head = MemoryHead::new();
    let styles = style::register(&mut head).unwrap();
    TimelineRenderer::new(TimelineConfig::default(), sink, styles)
}

fn sample_events(count: usize) -> Vec<TimelineEvent> {
    (0..count)
        .map(|i| TimelineEvent::new(format!("{}", 2000 + i), format!("event {i}")))
        .collect()
}

fn list(target: &MemoryTarget) -> &ElementNode {
    assert_eq!(target.children().len(), 1, "container chỉ chứa một danh sách");
    &target.children()[0]
}

fn leading_positions(list: &ElementNode) -> Vec<usize> {
    list.children
        .iter()
        .enumerate()
        .filter(|(_, item)| item.children.first().is_some_and(|n| n.tag == "hr"))
        .map(|(i, _)| i)
        .collect()
}

fn trailing_positions(list: &ElementNode) -> Vec<usize> {
    list.children
        .iter()
        .enumerate()
        .filter(|(_, item)| item.children.last().is_some_and(|n| n.tag == "hr"))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn item_count_matches_event_count() {
    let renderer = renderer_with(Rc::new(NoopSink));
    for count in [0, 1, 2, 7] {
        let mut target = MemoryTarget::new("tl");
        renderer.render(&mut target, &sample_events(count)).unwrap();

        let list = list(&target);
        assert_eq!(list.children.len(), count);
        assert!(list.children.iter().all(|item| item.tag == "li"));
    }
}

#[test]
fn empty_event_list_renders_bare_list() {
    let renderer = renderer_with(Rc::new(NoopSink));
    let mut target = MemoryTarget::new("tl");
    renderer.render(&mut target, &[]).unwrap();

    let list = list(&target);
    assert_eq!(list.tag, "ul");
    assert!(list.children.is_empty());
    assert!(list.descendants().iter().all(|node| node.tag != "hr"));
}

#[test]
fn separators_only_between_items() {
    let renderer = renderer_with(Rc::new(NoopSink));
    for count in [2, 3, 10] {
        let mut target = MemoryTarget::new("tl");
        renderer.render(&mut target, &sample_events(count)).unwrap();
        let list = list(&target);

        let leading = leading_positions(list);
        let trailing = trailing_positions(list);
        assert_eq!(leading, (1..count).collect::<Vec<_>>());
        assert_eq!(trailing, (0..count - 1).collect::<Vec<_>>());
    }
}

#[test]
fn two_event_example_layout() {
    let events = vec![
        TimelineEvent::new("2021", "A"),
        TimelineEvent::new("2022", "B"),
    ];
    let renderer = renderer_with(Rc::new(NoopSink));
    let mut target = MemoryTarget::new("tl");
    renderer.render(&mut target, &events).unwrap();
    let list = list(&target);

    assert_eq!(list.children.len(), 2);
    assert_eq!(leading_positions(list), vec![1]);
    assert_eq!(trailing_positions(list), vec![0]);
    assert!(list.children[1].children[0].has_class(SEPARATOR_CLASS));
    assert_eq!(list.children[0].children[3].class, None);

    let labels: Vec<_> = list
        .descendants()
        .into_iter()
        .filter(|node| node.has_class(START_CLASS) || node.has_class(BOX_CLASS))
        .filter_map(|node| node.text.as_deref())
        .collect();
    assert_eq!(labels, vec!["2021", "A", "2022", "B"]);

    let first_end = &list.children[0].children[2];
    assert!(first_end.has_class(END_CLASS));
    assert!(first_end.children[0].has_class(BOX_CLASS));
}

#[test]
fn rerender_replaces_previous_output() {
    let renderer = renderer_with(Rc::new(NoopSink));
    let mut target = MemoryTarget::new("tl");

    renderer.render(&mut target, &sample_events(5)).unwrap();
    renderer
        .render(&mut target, &[TimelineEvent::new("1999", "only")])
        .unwrap();

    let list = list(&target);
    assert_eq!(target.renders(), 2);
    assert_eq!(list.children.len(), 1);
    assert!(!target.to_html().contains("event 4"));
    assert!(target.to_html().contains("only"));
}

#[test]
fn rendering_is_structurally_idempotent() {
    let renderer = renderer_with(Rc::new(NoopSink));
    let events = sample_events(4);

    let mut first = MemoryTarget::new("tl");
    renderer.render(&mut first, &events).unwrap();
    let mut second = MemoryTarget::new("tl");
    renderer.render(&mut second, &events).unwrap();
    renderer.render(&mut second, &events).unwrap();

    assert_eq!(first.children(), second.children());
}

#[test]
fn clicking_box_reports_its_index() {
    let sink = Rc::new(RecordingSink::default());
    let renderer = renderer_with(sink.clone());
    let mut target = MemoryTarget::new("plot-1");
    renderer.render(&mut target, &sample_events(4)).unwrap();

    for index in 0..4 {
        assert!(target.click(index));
    }
    assert!(!target.click(4));

    let expected: Vec<_> = (0..4).map(|i| ("plot-1_selected".to_string(), i)).collect();
    assert_eq!(*sink.selections.borrow(), expected);
}

#[test]
fn non_interactive_render_reports_nothing() {
    let sink = Rc::new(RecordingSink::default());
    let mut renderer = renderer_with(sink.clone());
    renderer.set_config(TimelineConfig {
        interactive: false,
        ..TimelineConfig::default()
    });
    let mut target = MemoryTarget::new("plot-1");
    renderer.render(&mut target, &sample_events(3)).unwrap();

    assert!(!target.click(0));
    assert!(sink.selections.borrow().is_empty());
}

#[test]
fn stylesheet_registered_once_across_renders() {
    let mut head = MemoryHead::new();
    let mut renderers = Vec::new();
    for _ in 0..100 {
        let styles = style::register(&mut head).unwrap();
        renderers.push(TimelineRenderer::new(
            TimelineConfig::default(),
            Rc::new(NoopSink),
            styles,
        ));
    }

    let mut target = MemoryTarget::new("tl");
    for renderer in &renderers {
        renderer.render(&mut target, &sample_events(2)).unwrap();
    }

    assert_eq!(head.count(STYLE_MARKER_ID), 1);
    assert!(renderers[0].styles().newly_inserted());
    assert!(!renderers[99].styles().newly_inserted());
}

#[test]
fn callbacks_from_replaced_render_cannot_fire() {
    let sink = Rc::new(RecordingSink::default());
    let renderer = renderer_with(sink.clone());
    let mut target = MemoryTarget::new("plot-1");

    renderer.render(&mut target, &sample_events(5)).unwrap();
    renderer.render(&mut target, &sample_events(1)).unwrap();

    assert!(!target.click(3));
    assert!(!target.click(4));
    assert!(sink.selections.borrow().is_empty());

    assert!(target.click(0));
    assert_eq!(
        *sink.selections.borrow(),
        vec![("plot-1_selected".to_string(), 0)]
    );
}

#[test]
fn dispatcher_matches_the_one_used_for_rendering() {
    let sink = Rc::new(RecordingSink::default());
    let renderer = renderer_with(sink.clone());

    let dispatcher = renderer.dispatcher_for("plot-2");
    assert_eq!(dispatcher.key(), "plot-2_selected");

    dispatcher.dispatch(1);
    assert_eq!(
        *sink.selections.borrow(),
        vec![("plot-2_selected".to_string(), 1)]
    );
}
