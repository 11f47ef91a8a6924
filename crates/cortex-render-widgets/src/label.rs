//! Static text widget.

use crate::canvas::{Canvas, DrawContext};
use crate::event::{EventResult, InputEvent, KeyCode};
use crate::widget::{Constraints, Widget, WidgetBase};
use cortex_render_core::geometry::Size;
use cortex_render_core::style::Style;
use std::any::Any;
use unicode_width::UnicodeWidthStr;

/// Styled, possibly multi-line text.
///
/// Without an explicit style the theme foreground is used. A focused label
/// is underlined and consumes `Enter`, counting activations.
pub struct Label {
    base: WidgetBase,
    text: String,
    style: Option<Style>,
    activations: u32,
}

impl Label {
    /// Creates a label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.into(),
            style: None,
            activations: 0,
        }
    }

    /// Overrides the theme-derived style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the paint order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.base.z_index = z_index;
        self
    }

    /// Returns the text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number of times `Enter` was pressed while focused.
    pub fn activations(&self) -> u32 {
        self.activations
    }
}

impl Widget for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn type_name(&self) -> &'static str {
        "Label"
    }

    fn render(&self, canvas: &mut Canvas<'_>) {
        let mut style = self
            .style
            .unwrap_or_else(|| Style::with_fg(canvas.theme().foreground));
        if self.base.focused {
            style = style.underline();
        }
        let ctx = DrawContext::new(self.base.bounds).with_style(style);
        canvas.draw_text(&ctx, &self.text);
    }

    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) if self.base.focused && key.code == KeyCode::Enter => {
                self.activations += 1;
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let width = self.text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        let height = self.text.lines().count().max(1);
        constraints.constrain(Size::new(
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        ))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cortex_render_core::geometry::Rect;
    use cortex_render_terminal::{MemorySurface, QualityTier, Surface};
    use cortex_render_theme::Theme;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_measure_multiline() {
        let label = Label::new("ab\n日本語");
        assert_eq!(label.measure(Constraints::default()), Size::new(6, 2));
        assert_eq!(Label::new("").measure(Constraints::default()), Size::new(0, 1));
    }

    #[test]
    fn test_render_uses_theme_foreground() {
        let theme = Theme::default();
        let mut surface = MemorySurface::new(6, 1);
        let mut label = Label::new("hey");
        label.layout(Rect::new(1, 0, 5, 1));
        label.render(&mut Canvas::new(&mut surface, &theme, QualityTier::Rich));

        assert_eq!(surface.snapshot(), " hey  ");
        assert_eq!(surface.cell(1, 0).and_then(|c| c.style.fg), Some(theme.foreground));
    }

    #[test]
    fn test_enter_only_counts_when_focused() {
        let mut label = Label::new("ok");
        let enter = InputEvent::key(KeyCode::Enter);
        assert_eq!(label.handle_input(&enter), EventResult::Ignored);
        label.set_focused(true);
        assert_eq!(label.handle_input(&enter), EventResult::Consumed);
        assert_eq!(label.activations(), 1);
    }
}
