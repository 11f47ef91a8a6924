//! Linear layout container.
//!
//! A [`Container`] positions its children along one axis. It holds weak
//! references only: the renderer owns the widgets, and a child dropped from
//! the renderer silently disappears from the layout.

use crate::canvas::Canvas;
use crate::widget::{Constraints, Widget, WidgetBase, WidgetId, WidgetRef};
use cortex_render_core::geometry::{Rect, Size};
use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Axis along which children are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// Stacks children along one axis with equal shares.
pub struct Container {
    base: WidgetBase,
    children: Vec<Weak<RefCell<dyn Widget>>>,
    orientation: Orientation,
    spacing: u16,
    padding: u16,
    distribute_remainder: bool,
}

impl Container {
    /// Creates an empty container.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            base: WidgetBase::new(),
            children: Vec::new(),
            orientation,
            spacing: 0,
            padding: 0,
            distribute_remainder: false,
        }
    }

    /// Creates a top-to-bottom container.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Creates a left-to-right container.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Sets the gap between adjacent children.
    #[must_use]
    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the inset applied on every side.
    #[must_use]
    pub fn with_padding(mut self, padding: u16) -> Self {
        self.padding = padding;
        self
    }

    /// Gives the integer-division remainder to the last child instead of dropping it.
    #[must_use]
    pub fn with_distribute_remainder(mut self, enabled: bool) -> Self {
        self.distribute_remainder = enabled;
        self
    }

    /// Returns the stacking axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Appends a child without taking ownership.
    pub fn add_child(&mut self, child: &WidgetRef) {
        self.children.push(Rc::downgrade(child));
    }

    /// Removes a child by identity. Returns `true` if it was present.
    pub fn remove_child(&mut self, child: &WidgetRef) -> bool {
        let before = self.children.len();
        self.children
            .retain(|weak| weak.upgrade().is_some_and(|live| !Rc::ptr_eq(&live, child)));
        before != self.children.len()
    }

    /// Returns the children that are still alive, in insertion order.
    pub fn children(&self) -> Vec<WidgetRef> {
        self.children.iter().filter_map(Weak::upgrade).collect()
    }

    /// Forgets children whose widgets have been dropped.
    pub fn prune(&mut self) {
        self.children.retain(|weak| weak.strong_count() > 0);
    }

    fn gaps(&self, count: usize) -> u32 {
        u32::from(self.spacing) * u32::try_from(count.saturating_sub(1)).unwrap_or(u32::MAX)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::vertical()
    }
}

impl Widget for Container {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Container"
    }

    fn render(&self, _canvas: &mut Canvas<'_>) {}

    /// Sums children along the axis plus spacing and padding, takes the
    /// maximum across it, and clamps into `constraints`.
    fn measure(&self, constraints: Constraints) -> Size {
        let children = self.children();
        let inner = Constraints::loose(constraints.max);
        let (mut along, mut across) = (0u32, 0u32);
        for child in &children {
            let Ok(child) = child.try_borrow() else {
                continue;
            };
            let size = child.measure(inner);
            let (a, c) = match self.orientation {
                Orientation::Vertical => (size.height, size.width),
                Orientation::Horizontal => (size.width, size.height),
            };
            along += u32::from(a);
            across = across.max(u32::from(c));
        }
        let pad = 2 * u32::from(self.padding);
        along += self.gaps(children.len()) + pad;
        across += pad;

        let clamp = |v: u32| u16::try_from(v).unwrap_or(u16::MAX);
        let size = match self.orientation {
            Orientation::Vertical => Size::new(clamp(across), clamp(along)),
            Orientation::Horizontal => Size::new(clamp(along), clamp(across)),
        };
        constraints.constrain(size)
    }

    /// Splits the padded area into equal shares; children's own measurements
    /// do not influence the split.
    fn layout(&mut self, area: Rect) {
        self.base.bounds = area;
        let content = area.inset(self.padding);
        let children = self.children();
        let Ok(count) = u32::try_from(children.len()) else {
            return;
        };
        if count == 0 {
            return;
        }

        let axis = match self.orientation {
            Orientation::Vertical => u32::from(content.height),
            Orientation::Horizontal => u32::from(content.width),
        };
        let available = axis.saturating_sub(self.gaps(children.len()));
        let share = available / count;
        let remainder = available % count;

        let mut cursor = match self.orientation {
            Orientation::Vertical => content.y,
            Orientation::Horizontal => content.x,
        };
        for (index, child) in children.iter().enumerate() {
            let last = index + 1 == children.len();
            let extent = if last && self.distribute_remainder {
                share + remainder
            } else {
                share
            };
            let extent = u16::try_from(extent).unwrap_or(u16::MAX);
            let rect = match self.orientation {
                Orientation::Vertical => Rect::new(content.x, cursor, content.width, extent),
                Orientation::Horizontal => Rect::new(cursor, content.y, extent, content.height),
            };
            match child.try_borrow_mut() {
                Ok(mut child) => child.layout(rect),
                Err(_) => tracing::warn!(container = %self.base.id, "Child busy during layout"),
            }
            cursor += i32::from(extent) + i32::from(self.spacing);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Container {
    /// Returns the identity of every live child.
    pub fn child_ids(&self) -> Vec<WidgetId> {
        self.children()
            .iter()
            .filter_map(|child| child.try_borrow().ok().map(|w| w.id()))
            .collect()
    }
}
