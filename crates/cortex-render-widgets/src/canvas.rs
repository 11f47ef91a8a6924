//! Drawing primitives over a [`Surface`].
//!
//! A [`Canvas`] borrows the surface, theme and tier for the duration of one
//! paint pass. Every primitive clips to the intersection of its context bounds
//! and the surface; writes outside that region are dropped silently.

use crate::border::{BorderChars, BorderStyle};
use cortex_render_core::color::Color;
use cortex_render_core::geometry::{Point, Rect, Size};
use cortex_render_core::style::Style;
use cortex_render_terminal::{QualityTier, Surface};
use cortex_render_theme::Theme;
use unicode_width::UnicodeWidthChar;

/// Glyph used by lines and filled rectangles.
pub const BLOCK: char = '█';

/// Region and pen for a single primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawContext {
    /// Clip region; text starts at its origin.
    pub bounds: Rect,
    /// Style applied to written cells.
    pub style: Style,
}

impl DrawContext {
    /// Creates an unstyled context.
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            style: Style::new(),
        }
    }

    /// Replaces the style.
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// How [`Canvas::draw_box`] decorates a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxStyle {
    /// Edge and corner glyphs.
    pub border: BorderStyle,
    /// Interior background, if any.
    pub fill: Option<Color>,
}

impl BoxStyle {
    /// A box with the given border and no fill.
    pub const fn bordered(border: BorderStyle) -> Self {
        Self { border, fill: None }
    }

    /// Sets the interior fill.
    #[must_use]
    pub const fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }
}

/// Cells visited by a line from `from` to `to`, inclusive.
///
/// Steps one cell at a time along the longer axis and rounds the other
/// coordinate, so it yields `max(|dx|, |dy|) + 1` points and both endpoints
/// appear exactly once. Any pair of `i32` endpoints is valid; nothing is
/// allocated up front.
pub fn line_points(from: Point, to: Point) -> LinePoints {
    LinePoints::new(from, to)
}

/// Iterator over the cells of a line. See [`line_points`].
#[derive(Debug, Clone)]
pub struct LinePoints {
    from: Point,
    x_major: bool,
    steps: i64,
    minor_span: i64,
    major_sign: i64,
    minor_sign: i64,
    next: i64,
    last: i64,
}

impl LinePoints {
    fn new(from: Point, to: Point) -> Self {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        let x_major = dx.abs() >= dy.abs();
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
        Self {
            from,
            x_major,
            steps: major.abs(),
            minor_span: minor.abs(),
            major_sign: major.signum(),
            minor_sign: minor.signum(),
            next: 0,
            last: major.abs(),
        }
    }

    /// Restricts the remaining steps to those whose long-axis coordinate
    /// falls inside `clip`. Cells may still lie outside `clip` on the other axis.
    #[must_use]
    pub fn clipped(mut self, clip: Rect) -> Self {
        let (origin, lo, hi) = if self.x_major {
            (self.from.x, clip.x, clip.right())
        } else {
            (self.from.y, clip.y, clip.bottom())
        };
        let (origin, lo, hi) = (i64::from(origin), i64::from(lo), i64::from(hi) - 1);
        let (first, last) = match self.major_sign {
            1 => (lo - origin, hi - origin),
            -1 => (origin - hi, origin - lo),
            _ if (lo..=hi).contains(&origin) => (0, 0),
            _ => (1, 0),
        };
        self.next = self.next.max(first);
        self.last = self.last.min(last);
        self
    }

    fn point_at(&self, step: i64) -> Point {
        let minor = if self.steps == 0 {
            0
        } else {
            let twice_steps = 2 * i128::from(self.steps);
            let rounded = (2 * i128::from(step) * i128::from(self.minor_span)
                + i128::from(self.steps))
                / twice_steps;
            // Bounded by minor_span, which fits in i64.
            rounded as i64
        };
        let major = self.major_sign * step;
        let minor = self.minor_sign * minor;
        let (dx, dy) = if self.x_major { (major, minor) } else { (minor, major) };
        // Every point lies between the endpoints, so it fits in i32.
        Point::new(
            (i64::from(self.from.x) + dx) as i32,
            (i64::from(self.from.y) + dy) as i32,
        )
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next > self.last {
            return None;
        }
        let point = self.point_at(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.last - self.next + 1).unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LinePoints {}

/// A paint target bound to a theme and quality tier.
pub struct Canvas<'a> {
    surface: &'a mut dyn Surface,
    theme: &'a Theme,
    tier: QualityTier,
}

impl<'a> Canvas<'a> {
    /// Wraps a surface for one paint pass.
    pub fn new(surface: &'a mut dyn Surface, theme: &'a Theme, tier: QualityTier) -> Self {
        Self {
            surface,
            theme,
            tier,
        }
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        self.theme
    }

    /// The active quality tier.
    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Size of the underlying surface.
    pub fn size(&self) -> Size {
        self.surface.size()
    }

    /// Direct access to the surface for custom drawing.
    pub fn surface(&mut self) -> &mut dyn Surface {
        self.surface
    }

    fn clip(&self, bounds: Rect) -> Rect {
        bounds.intersection(Rect::from_size(self.surface.size()))
    }

    /// Writes `ch` at `(x, y)` if the point lies inside `clip`.
    fn put(&mut self, clip: Rect, x: i32, y: i32, ch: char) -> bool {
        if !clip.contains(Point::new(x, y)) {
            return false;
        }
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => {
                self.surface.put_char(x, y, ch);
                true
            }
            _ => false,
        }
    }

    /// Draws text starting at the origin of `ctx.bounds`.
    ///
    /// Wide glyphs take two cells, `\n` moves to the next row, and anything past
    /// the bounds is dropped. The style is reset afterwards even when nothing was
    /// written. Returns the number of glyphs written.
    pub fn draw_text(&mut self, ctx: &DrawContext, text: &str) -> usize {
        let clip = self.clip(ctx.bounds);
        self.surface.set_style(ctx.style);

        let mut written = 0;
        let mut x = ctx.bounds.x;
        let mut y = ctx.bounds.y;
        for ch in text.chars() {
            if ch == '\n' {
                x = ctx.bounds.x;
                y += 1;
                if y >= ctx.bounds.bottom() {
                    break;
                }
                continue;
            }
            let width = match ch.width() {
                Some(0) | None => continue,
                Some(1) => 1,
                Some(_) => 2,
            };
            if x + width <= clip.right() && self.put(clip, x, y, ch) {
                if width == 2 {
                    if let (Ok(cx), Ok(cy)) = (u16::try_from(x + 1), u16::try_from(y)) {
                        self.surface.put_continuation(cx, cy);
                    }
                }
                written += 1;
            }
            x += width;
        }

        self.surface.reset_style();
        written
    }

    /// Draws a border around `ctx.bounds`, optionally filling the interior.
    ///
    /// A single row or column degrades to a straight run of edge glyphs. At
    /// the minimal tier every style falls back to ASCII.
    pub fn draw_box(&mut self, ctx: &DrawContext, style: &BoxStyle) {
        let bounds = ctx.bounds;
        if bounds.is_empty() {
            return;
        }
        let clip = self.clip(bounds);
        let glyphs = self.border_chars(style.border);

        if let Some(fill) = style.fill {
            if bounds.width > 2 && bounds.height > 2 {
                let interior = bounds.inset(1);
                self.surface.set_style(ctx.style.bg(fill));
                for y in interior.rows() {
                    for x in interior.columns() {
                        self.put(clip, x, y, ' ');
                    }
                }
            }
        }

        self.surface.set_style(ctx.style);
        let (left, top) = (bounds.x, bounds.y);
        let (right, bottom) = (bounds.right() - 1, bounds.bottom() - 1);
        if bounds.height == 1 {
            for x in bounds.columns() {
                self.put(clip, x, top, glyphs.horizontal);
            }
        } else if bounds.width == 1 {
            for y in bounds.rows() {
                self.put(clip, left, y, glyphs.vertical);
            }
        } else {
            for x in left + 1..right {
                self.put(clip, x, top, glyphs.horizontal);
                self.put(clip, x, bottom, glyphs.horizontal);
            }
            for y in top + 1..bottom {
                self.put(clip, left, y, glyphs.vertical);
                self.put(clip, right, y, glyphs.vertical);
            }
            self.put(clip, left, top, glyphs.top_left);
            self.put(clip, right, top, glyphs.top_right);
            self.put(clip, left, bottom, glyphs.bottom_left);
            self.put(clip, right, bottom, glyphs.bottom_right);
        }
        self.surface.reset_style();
    }

    fn border_chars(&self, border: BorderStyle) -> BorderChars {
        if self.tier == QualityTier::Minimal {
            BorderChars::ASCII
        } else {
            border.chars()
        }
    }

    /// Draws a solid line from `from` to `to`, clipped to `ctx.bounds`.
    ///
    /// Returns the number of cells written.
    pub fn draw_line(&mut self, ctx: &DrawContext, from: Point, to: Point) -> usize {
        let clip = self.clip(ctx.bounds);
        self.surface.set_style(ctx.style);
        let written = line_points(from, to)
            .clipped(clip)
            .filter(|p| self.put(clip, p.x, p.y, BLOCK))
            .count();
        self.surface.reset_style();
        written
    }

    /// Overwrites every cell of `ctx.bounds` with a solid block in `color`.
    pub fn fill_rect(&mut self, ctx: &DrawContext, color: Color) {
        let clip = self.clip(ctx.bounds);
        self.surface.set_style(ctx.style.fg(color));
        for y in clip.rows() {
            for x in clip.columns() {
                self.put(clip, x, y, BLOCK);
            }
        }
        self.surface.reset_style();
    }
}
