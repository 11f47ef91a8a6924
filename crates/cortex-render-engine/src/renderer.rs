//! The renderer: surface, theme, capabilities, widgets and cached content.

use crate::cache::{DEFAULT_CACHE_CAPACITY, RenderCache, content_hash};
use cortex_render_core::{Color, Point, Rect, Result};
use cortex_render_markdown::{MarkdownOptions, render_markdown};
use cortex_render_syntax::{HighlightOptions, highlight};
use cortex_render_terminal::{Capabilities, QualityTier, Surface};
use cortex_render_theme::Theme;
use cortex_render_widgets::{
    BoxStyle, Canvas, DrawContext, EventResult, InputEvent, WidgetId, WidgetRef,
};
use std::cmp::Reverse;
use std::rc::Rc;

/// Layout settings for markdown and code rendered through the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSettings {
    /// Width of horizontal rules.
    pub width: usize,
    /// Spaces per list level.
    pub indent_size: usize,
    /// Number the lines of highlighted code.
    pub code_line_numbers: bool,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            width: cortex_render_markdown::options::DEFAULT_WIDTH,
            indent_size: cortex_render_markdown::options::DEFAULT_INDENT,
            code_line_numbers: false,
        }
    }
}

/// Draws widgets and content onto a surface at the tier its capabilities allow.
///
/// The renderer owns the surface and an ordered list of widgets. At most one
/// widget is focused. Widget painting is deferred until
/// [`render_widgets`](Self::render_widgets) and only happens when something
/// marked the renderer dirty.
pub struct Renderer<S: Surface> {
    surface: S,
    theme: Theme,
    capabilities: Capabilities,
    tier: QualityTier,
    tier_override: Option<QualityTier>,
    content: ContentSettings,
    cache: RenderCache,
    widgets: Vec<WidgetRef>,
    focused: Option<WidgetId>,
    needs_redraw: bool,
}

impl<S: Surface> Renderer<S> {
    /// Creates a renderer with conservative default capabilities.
    pub fn new(surface: S, theme: Theme) -> Self {
        let capabilities = Capabilities::default();
        let tier = QualityTier::from_capabilities(&capabilities);
        Self {
            surface,
            theme,
            capabilities,
            tier,
            tier_override: None,
            content: ContentSettings::default(),
            cache: RenderCache::new(DEFAULT_CACHE_CAPACITY),
            widgets: Vec::new(),
            focused: None,
            needs_redraw: true,
        }
    }

    /// Replaces the content cache with one of `capacity` entries.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = RenderCache::new(capacity);
        self
    }

    /// Sets the markdown and code layout settings.
    #[must_use]
    pub fn with_content_settings(mut self, content: ContentSettings) -> Self {
        self.content = content;
        self
    }

    // ------------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------------

    /// The surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the renderer and returns the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the theme, dropping cached content rendered with the old one.
    pub fn set_theme(&mut self, theme: Theme) {
        tracing::debug!(theme = %theme.name, "Theme changed");
        self.theme = theme;
        self.cache.clear();
        self.needs_redraw = true;
    }

    /// The capability snapshot.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Replaces the capability snapshot and recomputes the tier.
    pub fn set_capabilities(&mut self, capabilities: Capabilities) {
        self.capabilities = capabilities;
        self.update_tier();
    }

    /// Pins the tier regardless of capabilities, or clears the pin.
    pub fn set_tier_override(&mut self, tier: Option<QualityTier>) {
        self.tier_override = tier;
        self.update_tier();
    }

    fn update_tier(&mut self) {
        let tier = self
            .tier_override
            .unwrap_or_else(|| QualityTier::from_capabilities(&self.capabilities));
        if tier != self.tier {
            tracing::debug!(from = %self.tier, to = %tier, "Quality tier changed");
        }
        self.tier = tier;
        self.needs_redraw = true;
    }

    /// The current quality tier.
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Markdown and code layout settings.
    pub fn content_settings(&self) -> ContentSettings {
        self.content
    }

    /// The content cache.
    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }

    /// Returns `true` if the next [`render_widgets`](Self::render_widgets) will paint.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Marks the widgets dirty.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    // ------------------------------------------------------------------------
    // Drawing primitives
    // ------------------------------------------------------------------------

    /// A canvas over the surface with the current theme and tier.
    pub fn canvas(&mut self) -> Canvas<'_> {
        Canvas::new(&mut self.surface, &self.theme, self.tier)
    }

    /// Draws clipped text. Returns the number of cells written.
    pub fn draw_text(&mut self, ctx: &DrawContext, text: &str) -> usize {
        self.canvas().draw_text(ctx, text)
    }

    /// Draws a bordered, optionally filled box.
    pub fn draw_box(&mut self, ctx: &DrawContext, style: &BoxStyle) {
        self.canvas().draw_box(ctx, style);
    }

    /// Draws a line of solid blocks. Returns the number of cells written.
    pub fn draw_line(&mut self, ctx: &DrawContext, from: Point, to: Point) -> usize {
        self.canvas().draw_line(ctx, from, to)
    }

    /// Fills the context bounds with solid blocks of `color`.
    pub fn fill_rect(&mut self, ctx: &DrawContext, color: Color) {
        self.canvas().fill_rect(ctx, color);
    }

    // ------------------------------------------------------------------------
    // Widgets
    // ------------------------------------------------------------------------

    /// Registered widgets in insertion order.
    pub fn widgets(&self) -> &[WidgetRef] {
        &self.widgets
    }

    /// The focused widget, if any.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Registers a widget. The first widget added takes focus.
    pub fn add_widget(&mut self, widget: &WidgetRef) {
        let id = widget.borrow().id();
        self.widgets.push(Rc::clone(widget));
        tracing::trace!(widget = %id, count = self.widgets.len(), "Widget added");
        if self.focused.is_none() {
            self.set_focus(Some(id));
        }
        self.needs_redraw = true;
    }

    /// Unregisters a widget by identity.
    ///
    /// If it held focus, focus moves to the first remaining widget.
    pub fn remove_widget(&mut self, widget: &WidgetRef) -> bool {
        let Some(index) = self.widgets.iter().position(|w| Rc::ptr_eq(w, widget)) else {
            return false;
        };
        let removed = self.widgets.remove(index);
        let id = widget_id(&removed);
        if let Ok(mut removed) = removed.try_borrow_mut() {
            removed.set_focused(false);
        }
        tracing::trace!(widget = ?id, count = self.widgets.len(), "Widget removed");

        if id.is_some() && id == self.focused {
            let next = self.widgets.first().and_then(widget_id);
            self.focused = None;
            self.set_focus(next);
        }
        self.needs_redraw = true;
        true
    }

    /// Focuses the widget with `id`, or clears focus with `None`.
    ///
    /// Returns `false` if no registered widget has that id; focus is unchanged.
    pub fn set_focus(&mut self, id: Option<WidgetId>) -> bool {
        if let Some(id) = id {
            if !self.widgets.iter().any(|w| widget_id(w) == Some(id)) {
                return false;
            }
        }
        for widget in &self.widgets {
            match widget.try_borrow_mut() {
                Ok(mut widget) => {
                    let focused = Some(widget.id()) == id;
                    widget.set_focused(focused);
                }
                Err(_) => tracing::warn!("Widget busy while moving focus"),
            }
        }
        if self.focused != id {
            tracing::trace!(from = ?self.focused, to = ?id, "Focus moved");
        }
        self.focused = id;
        self.needs_redraw = true;
        true
    }

    /// Moves focus to the next or previous widget, wrapping.
    fn cycle_focus(&mut self, forward: bool) {
        let count = self.widgets.len();
        if count == 0 {
            return;
        }
        let current = self
            .focused
            .and_then(|id| self.widgets.iter().position(|w| widget_id(w) == Some(id)));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        let id = widget_id(&self.widgets[next]);
        self.set_focus(id);
    }

    /// Widgets in dispatch order: the focused one, then the rest top-most first.
    fn dispatch_order(&self) -> Vec<WidgetRef> {
        let mut rest: Vec<(i32, WidgetRef)> = self
            .widgets
            .iter()
            .rev()
            .filter(|w| widget_id(w) != self.focused)
            .filter_map(|w| w.try_borrow().ok().map(|b| (b.z_index(), Rc::clone(w))))
            .collect();
        rest.sort_by_key(|(z, _)| Reverse(*z));

        let focused = self
            .widgets
            .iter()
            .find(|w| self.focused.is_some() && widget_id(w) == self.focused)
            .cloned();
        focused
            .into_iter()
            .chain(rest.into_iter().map(|(_, w)| w))
            .collect()
    }

    /// Routes an input event.
    ///
    /// The focused widget sees the event first, then the remaining visible
    /// widgets from top-most to bottom-most. If nobody consumes it, a resize
    /// marks the renderer dirty and Tab / BackTab cycle focus.
    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        for widget in self.dispatch_order() {
            let Ok(mut widget) = widget.try_borrow_mut() else {
                continue;
            };
            if !widget.is_visible() {
                continue;
            }
            if widget.handle_input(event).is_consumed() {
                tracing::trace!(widget = %widget.id(), "Input consumed");
                self.needs_redraw = true;
                return EventResult::Consumed;
            }
        }

        match event {
            InputEvent::Resize(size) => {
                tracing::debug!(width = size.width, height = size.height, "Resize");
                self.needs_redraw = true;
                EventResult::Consumed
            }
            InputEvent::Key(key) if key.is_focus_prev() => {
                self.cycle_focus(false);
                EventResult::Consumed
            }
            InputEvent::Key(key) if key.is_focus_next() => {
                self.cycle_focus(true);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    /// Lays out and paints every visible widget if anything changed.
    ///
    /// Widgets are painted in ascending z-index; equal z keeps insertion
    /// order. Returns `Ok(false)` when there was nothing to do.
    pub fn render_widgets(&mut self) -> Result<bool> {
        if !self.needs_redraw {
            return Ok(false);
        }
        let size = self.surface.size();
        let full = Rect::from_size(size);
        let sync = self.tier == QualityTier::Ultra;

        if sync {
            self.surface.begin_sync();
        }
        self.surface.clear();

        for widget in &self.widgets {
            match widget.try_borrow_mut() {
                Ok(mut widget) => {
                    let bounds = widget.bounds();
                    widget.layout(if bounds.is_empty() { full } else { bounds });
                }
                Err(_) => tracing::warn!("Widget busy during layout"),
            }
        }

        let mut visible: Vec<&WidgetRef> = self
            .widgets
            .iter()
            .filter(|w| w.try_borrow().is_ok_and(|w| w.is_visible()))
            .collect();
        visible.sort_by_key(|w| w.try_borrow().map_or(0, |w| w.z_index()));

        let mut canvas = Canvas::new(&mut self.surface, &self.theme, self.tier);
        for widget in &visible {
            if let Ok(widget) = widget.try_borrow() {
                widget.render(&mut canvas);
            }
        }

        if sync {
            self.surface.end_sync();
        }
        self.surface.flush()?;
        self.needs_redraw = false;
        tracing::trace!(painted = visible.len(), tier = %self.tier, "Rendered widgets");
        Ok(true)
    }

    // ------------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------------

    /// Markdown options for the current tier, theme and settings.
    pub fn markdown_options(&self) -> MarkdownOptions {
        MarkdownOptions::new(self.tier, &self.theme)
            .with_width(self.content.width)
            .with_indent_size(self.content.indent_size)
            .with_code_line_numbers(self.content.code_line_numbers)
    }

    /// Renders markdown for the current tier, through the cache.
    pub fn render_markdown(&mut self, text: &str) -> String {
        let discriminator = format!(
            "markdown:{}:{}:{}",
            self.content.width, self.content.indent_size, self.content.code_line_numbers
        );
        let options = self.markdown_options();
        self.cached(text, &discriminator, |text| render_markdown(text, &options))
    }

    /// Highlights code for the current tier, through the cache.
    pub fn highlight(&mut self, code: &str, language: &str) -> String {
        let discriminator = format!("code:{language}:{}", self.content.code_line_numbers);
        let options = HighlightOptions::new(self.tier, &self.theme)
            .with_line_numbers(self.content.code_line_numbers);
        self.cached(code, &discriminator, |code| highlight(code, language, &options))
    }

    fn cached(
        &mut self,
        content: &str,
        discriminator: &str,
        render: impl FnOnce(&str) -> String,
    ) -> String {
        let hash = content_hash(content, discriminator);
        if let Some(hit) = self.cache.get(hash, self.tier) {
            tracing::trace!(hash, "Render cache hit");
            return hit.to_string();
        }
        let rendered = render(content);
        self.cache.put(hash, self.tier, rendered.clone());
        rendered
    }
}

fn widget_id(widget: &WidgetRef) -> Option<WidgetId> {
    widget.try_borrow().ok().map(|w| w.id())
}
