//! The widget trait and shared widget state.

use crate::canvas::Canvas;
use crate::event::{EventResult, InputEvent};
use cortex_render_core::geometry::{Rect, Size};
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Generates a new unique widget ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Widget({})", self.0)
    }
}

/// Size limits passed to [`Widget::measure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Smallest acceptable size.
    pub min: Size,
    /// Largest acceptable size.
    pub max: Size,
}

impl Constraints {
    /// Constraints with no lower bound.
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// Constraints that force exactly `size`.
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Clamps `size` into `[min, max]`.
    pub fn constrain(&self, size: Size) -> Size {
        size.clamp(self.min, self.max)
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::loose(Size::new(u16::MAX, u16::MAX))
    }
}

/// State every widget carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetBase {
    /// Identity.
    pub id: WidgetId,
    /// Area assigned by the last layout pass.
    pub bounds: Rect,
    /// Hidden widgets are neither laid out nor painted.
    pub visible: bool,
    /// Whether this widget holds input focus.
    pub focused: bool,
    /// Paint order; higher values paint later.
    pub z_index: i32,
}

impl WidgetBase {
    /// A visible, unfocused widget at z-index 0 with empty bounds.
    pub fn new() -> Self {
        Self {
            id: WidgetId::new(),
            bounds: Rect::ZERO,
            visible: true,
            focused: false,
            z_index: 0,
        }
    }
}

impl Default for WidgetBase {
    fn default() -> Self {
        Self::new()
    }
}

/// A renderable, interactive unit.
///
/// Implementors provide access to their [`WidgetBase`] and a paint routine;
/// everything else has a default.
pub trait Widget: Any {
    /// Shared widget state.
    fn base(&self) -> &WidgetBase;

    /// Mutable shared widget state.
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// Static name of the widget type, used in logs.
    fn type_name(&self) -> &'static str;

    /// Paints the widget into its bounds.
    fn render(&self, canvas: &mut Canvas<'_>);

    /// Handles an input event.
    fn handle_input(&mut self, _event: &InputEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Preferred size within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.min
    }

    /// Assigns the widget's area. Containers also position their children here.
    fn layout(&mut self, area: Rect) {
        self.base_mut().bounds = area;
    }

    /// Returns the widget's identity.
    fn id(&self) -> WidgetId {
        self.base().id
    }

    /// Returns the area from the last layout pass.
    fn bounds(&self) -> Rect {
        self.base().bounds
    }

    /// Returns `true` if the widget should be laid out and painted.
    fn is_visible(&self) -> bool {
        self.base().visible
    }

    /// Shows or hides the widget.
    fn set_visible(&mut self, visible: bool) {
        self.base_mut().visible = visible;
    }

    /// Returns `true` if the widget holds focus.
    fn is_focused(&self) -> bool {
        self.base().focused
    }

    /// Grants or revokes focus.
    fn set_focused(&mut self, focused: bool) {
        self.base_mut().focused = focused;
    }

    /// Paint order; higher values paint later.
    fn z_index(&self) -> i32 {
        self.base().z_index
    }

    /// Upcasts for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable variant of [`Widget::as_any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Shared handle to a widget.
///
/// The renderer's widget list holds the only strong handles; containers keep
/// [`std::rc::Weak`] references.
pub type WidgetRef = Rc<RefCell<dyn Widget>>;

/// Wraps a widget in a [`WidgetRef`].
pub fn shared<W: Widget>(widget: W) -> WidgetRef {
    Rc::new(RefCell::new(widget))
}

/// Downcasting helpers for `dyn Widget`.
pub trait WidgetExt {
    /// Returns the concrete widget if it is a `W`.
    fn downcast_ref<W: Widget>(&self) -> Option<&W>;

    /// Mutable variant of [`WidgetExt::downcast_ref`].
    fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W>;
}

impl WidgetExt for dyn Widget {
    fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.as_any().downcast_ref()
    }

    fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.as_any_mut().downcast_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Dot {
        base: WidgetBase,
    }

    impl Widget for Dot {
        fn base(&self) -> &WidgetBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn type_name(&self) -> &'static str {
            "Dot"
        }

        fn render(&self, _canvas: &mut Canvas<'_>) {}

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = WidgetId::new();
        let b = WidgetId::new();
        assert_ne!(a, b);
        assert!(b.raw() > a.raw());
    }

    #[test]
    fn test_defaults_read_base() {
        let mut dot = Dot {
            base: WidgetBase::new(),
        };
        assert!(dot.is_visible());
        assert!(!dot.is_focused());
        dot.layout(Rect::new(1, 2, 3, 4));
        dot.set_focused(true);
        assert_eq!(dot.bounds(), Rect::new(1, 2, 3, 4));
        assert!(dot.is_focused());
        assert_eq!(dot.measure(Constraints::tight(Size::new(2, 1))), Size::new(2, 1));
    }

    #[test]
    fn test_downcast_through_handle() {
        let handle = shared(Dot {
            base: WidgetBase::new(),
        });
        let widget = handle.borrow();
        assert!(widget.downcast_ref::<Dot>().is_some());
        assert_eq!(widget.type_name(), "Dot");
    }

    #[test]
    fn test_constraints_clamp() {
        let c = Constraints {
            min: Size::new(2, 2),
            max: Size::new(5, 5),
        };
        assert_eq!(c.constrain(Size::new(9, 1)), Size::new(5, 2));
    }
}
