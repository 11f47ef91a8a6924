//! Bordered box with an optional title.

use crate::border::BorderStyle;
use crate::canvas::{BoxStyle, Canvas, DrawContext};
use crate::widget::{Constraints, Widget, WidgetBase};
use cortex_render_core::color::Color;
use cortex_render_core::geometry::{Rect, Size};
use cortex_render_core::style::Style;
use std::any::Any;
use unicode_width::UnicodeWidthStr;

/// A framed region.
///
/// The border uses the theme's `border` color, or `accent` while focused.
pub struct Panel {
    base: WidgetBase,
    title: Option<String>,
    border: BorderStyle,
    fill: Option<Color>,
}

impl Panel {
    /// Creates an untitled panel with single-line borders.
    pub fn new() -> Self {
        Self {
            base: WidgetBase::new(),
            title: None,
            border: BorderStyle::Single,
            fill: None,
        }
    }

    /// Sets the title shown in the top edge.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the border glyph set.
    #[must_use]
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Fills the interior with `color`.
    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Sets the paint order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.base.z_index = z_index;
        self
    }

    /// Area inside the border.
    pub fn inner(&self) -> Rect {
        self.base.bounds.inset(1)
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Panel {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Panel"
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let theme = canvas.theme();
        let edge = if self.base.focused {
            theme.accent
        } else {
            theme.border
        };
        let title_style = Style::with_fg(theme.foreground).bold();

        let bounds = self.base.bounds;
        let style = BoxStyle {
            border: self.border,
            fill: self.fill,
        };
        canvas.draw_box(&DrawContext::new(bounds).with_style(Style::with_fg(edge)), &style);

        if let Some(title) = &self.title {
            if bounds.width > 4 && bounds.height > 0 {
                let area = Rect::new(bounds.x + 2, bounds.y, bounds.width - 4, 1);
                let ctx = DrawContext::new(area).with_style(title_style);
                canvas.draw_text(&ctx, &format!(" {title} "));
            }
        }
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let title = self.title.as_deref().map_or(0, UnicodeWidthStr::width);
        let width = u16::try_from(title + 4).unwrap_or(u16::MAX);
        constraints.constrain(Size::new(width, 2))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
