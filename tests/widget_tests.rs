//! Widget lifecycle, layout and painting through the renderer.

use cortex_render::{
    Container, InputEvent, KeyCode, Label, MemorySurface, Rect, Renderer, Surface, Theme, Widget,
    WidgetRef, shared,
};

fn renderer(width: u16, height: u16) -> Renderer<MemorySurface> {
    Renderer::new(MemorySurface::new(width, height), Theme::default())
}

fn id(widget: &WidgetRef) -> cortex_render::WidgetId {
    widget.borrow().id()
}

#[test]
fn test_focus_follows_add_and_remove() {
    let mut r = renderer(10, 3);
    let a = shared(Label::new("a"));
    let b = shared(Label::new("b"));
    let c = shared(Label::new("c"));
    r.add_widget(&a);
    r.add_widget(&b);
    r.add_widget(&c);
    assert_eq!(r.focused(), Some(id(&a)));

    r.remove_widget(&a);
    assert_eq!(r.focused(), Some(id(&b)));
    let focused: Vec<bool> = r.widgets().iter().map(|w| w.borrow().is_focused()).collect();
    assert_eq!(focused, vec![true, false]);
}

#[test]
fn test_tab_cycles_and_wraps() {
    let mut r = renderer(10, 3);
    let widgets: Vec<WidgetRef> = ["a", "b"].into_iter().map(|t| shared(Label::new(t))).collect();
    for w in &widgets {
        r.add_widget(w);
    }
    r.handle_input(&InputEvent::key(KeyCode::Tab));
    assert_eq!(r.focused(), Some(id(&widgets[1])));
    r.handle_input(&InputEvent::key(KeyCode::Tab));
    assert_eq!(r.focused(), Some(id(&widgets[0])));
}

#[test]
fn test_container_layout_through_renderer() {
    let mut r = renderer(10, 21);
    let top = shared(Label::new("top"));
    let bottom = shared(Label::new("bottom"));
    let mut column = Container::vertical().with_spacing(1);
    column.add_child(&top);
    column.add_child(&bottom);
    column.layout(Rect::new(0, 0, 10, 21));
    let column = shared(column);

    r.add_widget(&column);
    r.add_widget(&top);
    r.add_widget(&bottom);
    assert!(r.render_widgets().unwrap());

    assert_eq!(top.borrow().bounds(), Rect::new(0, 0, 10, 10));
    assert_eq!(bottom.borrow().bounds(), Rect::new(0, 11, 10, 10));
    assert!(r.surface().row_text(0).starts_with("top"));
    assert!(r.surface().row_text(11).starts_with("bottom"));
    assert_eq!(r.surface().size().height, 21);
}

#[test]
fn test_dropped_children_are_skipped() {
    let mut column = Container::vertical();
    let kept = shared(Label::new("kept"));
    {
        let gone = shared(Label::new("gone"));
        column.add_child(&gone);
    }
    column.add_child(&kept);
    column.layout(Rect::new(0, 0, 4, 6));
    assert_eq!(column.children().len(), 1);
    assert_eq!(kept.borrow().bounds(), Rect::new(0, 0, 4, 6));
}
