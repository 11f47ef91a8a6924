//! Output surfaces.
//!
//! A [`Surface`] is a rectangle of character cells the renderer draws into.
//! [`MemorySurface`] keeps the cells in a grid (for tests, snapshots and frame
//! diffing); [`TtySurface`] writes every cell straight to a terminal backend.

use crate::backend::TerminalBackend;
use crate::env::EnvReader;
use cortex_render_core::error::{Error, Result};
use cortex_render_core::geometry::Size;
use cortex_render_core::style::Style;

/// Marker stored in the cell covered by the right half of a wide glyph.
pub const WIDE_CONTINUATION: char = '\0';

/// Snapshot text returned by surfaces that keep no grid.
pub const UNSUPPORTED_SNAPSHOT: &str = "<tty surface: snapshot unsupported>";

/// A drawable character grid.
///
/// Writes outside the surface are silently ignored.
pub trait Surface {
    /// Returns the surface dimensions.
    fn size(&self) -> Size;

    /// Writes a character at column `x`, row `y` using the current pen style.
    fn put_char(&mut self, x: u16, y: u16, ch: char);

    /// Writes a raw codepoint. Invalid scalar values are written as `?`.
    fn put_codepoint(&mut self, x: u16, y: u16, codepoint: u32) {
        self.put_char(x, y, char::from_u32(codepoint).unwrap_or('?'));
    }

    /// Marks the cell as covered by the wide glyph to its left.
    fn put_continuation(&mut self, _x: u16, _y: u16) {}

    /// Sets the pen style for subsequent writes.
    fn set_style(&mut self, _style: Style) {}

    /// Resets the pen to the default style.
    fn reset_style(&mut self) {}

    /// Blanks every cell.
    fn clear(&mut self) {
        self.reset_style();
        let size = self.size();
        for y in 0..size.height {
            for x in 0..size.width {
                self.put_char(x, y, ' ');
            }
        }
    }

    /// Starts an atomic frame on terminals that support it.
    fn begin_sync(&mut self) {}

    /// Ends an atomic frame.
    fn end_sync(&mut self) {}

    /// Pushes buffered output to the device.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Returns the surface contents as text, one line per row.
    fn snapshot(&self) -> String;

    /// Releases the surface. Further writes are ignored.
    fn dispose(&mut self) {}
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The character shown.
    pub ch: char,
    /// The pen style active when the character was written.
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::new(),
        }
    }
}

/// A horizontal run of cells that changed since the last committed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirtySpan {
    /// First column of the run.
    pub x: u16,
    /// Row of the run.
    pub y: u16,
    /// Number of cells in the run.
    pub width: u16,
}

// ============================================================================
// Memory surface
// ============================================================================

/// A surface backed by an in-memory cell grid.
///
/// Besides the live grid it keeps the last committed frame so callers can ask
/// which spans changed.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    size: Size,
    cells: Vec<Cell>,
    committed: Vec<Cell>,
    pen: Style,
    full_repaint: bool,
    disposed: bool,
}

impl MemorySurface {
    /// Creates a blank surface.
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            size: Size::new(width, height),
            cells: vec![Cell::default(); len],
            committed: vec![Cell::default(); len],
            pen: Style::new(),
            full_repaint: true,
            disposed: false,
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.size.width && y < self.size.height)
            .then(|| y as usize * self.size.width as usize + x as usize)
    }

    /// Returns the cell at `(x, y)`.
    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Returns the current pen style.
    pub fn pen(&self) -> Style {
        self.pen
    }

    /// Returns one row as text, wide-glyph continuations skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.size.height {
            return String::new();
        }
        let start = y as usize * self.size.width as usize;
        self.cells[start..start + self.size.width as usize]
            .iter()
            .filter(|cell| cell.ch != WIDE_CONTINUATION)
            .map(|cell| cell.ch)
            .collect()
    }

    /// Resizes the grid, blanking it. The next diff reports every row.
    pub fn resize(&mut self, width: u16, height: u16) {
        *self = Self {
            pen: self.pen,
            ..Self::new(width, height)
        };
    }

    /// Returns the runs of cells that differ from the last committed frame.
    ///
    /// After creation or a resize every row is reported in full.
    pub fn dirty_spans(&self) -> Vec<DirtySpan> {
        let width = self.size.width as usize;
        if width == 0 {
            return Vec::new();
        }

        if self.full_repaint {
            return (0..self.size.height)
                .map(|y| DirtySpan {
                    x: 0,
                    y,
                    width: self.size.width,
                })
                .collect();
        }

        let mut spans = Vec::new();
        for (y, (row, old)) in self
            .cells
            .chunks(width)
            .zip(self.committed.chunks(width))
            .enumerate()
        {
            let mut run: Option<DirtySpan> = None;
            for (x, (cell, prev)) in row.iter().zip(old).enumerate() {
                if cell != prev {
                    match run.as_mut() {
                        Some(span) => span.width += 1,
                        None => {
                            run = Some(DirtySpan {
                                x: x as u16,
                                y: y as u16,
                                width: 1,
                            });
                        }
                    }
                } else if let Some(span) = run.take() {
                    spans.push(span);
                }
            }
            spans.extend(run);
        }
        spans
    }

    /// Records the current grid as the committed frame.
    pub fn commit(&mut self) {
        self.committed.clone_from(&self.cells);
        self.full_repaint = false;
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> Size {
        self.size
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if self.disposed {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style: self.pen };
        }
    }

    fn put_continuation(&mut self, x: u16, y: u16) {
        self.put_char(x, y, WIDE_CONTINUATION);
    }

    fn set_style(&mut self, style: Style) {
        self.pen = style;
    }

    fn reset_style(&mut self) {
        self.pen = Style::new();
    }

    fn clear(&mut self) {
        self.pen = Style::new();
        self.cells.fill(Cell::default());
    }

    fn snapshot(&self) -> String {
        (0..self.size.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dispose(&mut self) {
        self.disposed = true;
    }
}

// ============================================================================
// TTY surface
// ============================================================================

/// Default size when neither the caller nor the environment provides one.
pub const DEFAULT_TTY_SIZE: Size = Size::new(80, 24);

/// A surface that positions the cursor and writes each cell directly.
///
/// Keeps no grid, so [`Surface::snapshot`] returns [`UNSUPPORTED_SNAPSHOT`].
/// Transport errors are held until the next [`Surface::flush`].
pub struct TtySurface<B: TerminalBackend> {
    backend: B,
    size: Size,
    pen: Style,
    sync_enabled: bool,
    error: Option<Error>,
    disposed: bool,
}

impl<B: TerminalBackend> TtySurface<B> {
    /// Creates a TTY surface.
    ///
    /// The size comes from `size_override`, then `COLUMNS`/`LINES`, then 80x24.
    pub fn new(backend: B, env: &impl EnvReader, size_override: Option<Size>) -> Self {
        let size = size_override
            .or_else(|| Self::size_from_env(env))
            .unwrap_or(DEFAULT_TTY_SIZE);
        tracing::debug!(width = size.width, height = size.height, "Opened TTY surface");
        Self {
            backend,
            size,
            pen: Style::new(),
            sync_enabled: true,
            error: None,
            disposed: false,
        }
    }

    fn size_from_env(env: &impl EnvReader) -> Option<Size> {
        let read = |key: &str| env.var(key).and_then(|v| v.trim().parse::<u16>().ok());
        match (read("COLUMNS"), read("LINES")) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(Size::new(w, h)),
            _ => None,
        }
    }

    /// Enables or disables synchronized output sequences.
    pub fn set_sync_enabled(&mut self, enabled: bool) {
        self.sync_enabled = enabled;
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consumes the surface and returns the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Changes the reported size, e.g. after a terminal resize.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Takes the first transport error recorded since the last flush.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(err) = result {
            if self.error.is_none() {
                tracing::warn!(error = %err, "TTY write failed");
                self.error = Some(err);
            }
        }
    }

    /// Applies the pen through the backend.
    fn apply_pen(&mut self) {
        let style = self.pen;
        let result = self
            .backend
            .reset_style()
            .and_then(|()| self.backend.set_style(&style));
        self.record(result);
    }
}

impl<B: TerminalBackend> Surface for TtySurface<B> {
    fn size(&self) -> Size {
        self.size
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if self.disposed || x >= self.size.width || y >= self.size.height {
            return;
        }
        let mut buf = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut buf);
        let result = self
            .backend
            .move_cursor(x, y)
            .and_then(|()| self.backend.write_str(text));
        self.record(result);
    }

    fn set_style(&mut self, style: Style) {
        if self.disposed || style == self.pen {
            return;
        }
        self.pen = style;
        self.apply_pen();
    }

    fn reset_style(&mut self) {
        if self.disposed {
            return;
        }
        self.pen = Style::new();
        let result = self.backend.reset_style();
        self.record(result);
    }

    fn clear(&mut self) {
        if self.disposed {
            return;
        }
        self.pen = Style::new();
        let result = self
            .backend
            .reset_style()
            .and_then(|()| self.backend.clear());
        self.record(result);
    }

    fn begin_sync(&mut self) {
        if self.sync_enabled && !self.disposed {
            let result = self.backend.begin_sync_update();
            self.record(result);
        }
    }

    fn end_sync(&mut self) {
        if self.sync_enabled && !self.disposed {
            let result = self.backend.end_sync_update();
            self.record(result);
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.backend.flush()
    }

    fn snapshot(&self) -> String {
        UNSUPPORTED_SNAPSHOT.to_string()
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let result = self.backend.reset_style().and_then(|()| self.backend.flush());
        self.record(result);
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::AnsiBackend;
    use crate::env::MapEnv;
    use cortex_render_core::color::Color;
    use pretty_assertions::assert_eq;

    mod memory {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_surface_is_blank() {
            let surface = MemorySurface::new(3, 2);
            assert_eq!(surface.snapshot(), "   \n   ");
        }

        #[test]
        fn test_put_char_and_snapshot() {
            let mut surface = MemorySurface::new(4, 2);
            surface.put_char(0, 0, 'h');
            surface.put_char(1, 0, 'i');
            surface.put_char(3, 1, '!');
            assert_eq!(surface.snapshot(), "hi  \n   !");
        }

        #[test]
        fn test_out_of_bounds_writes_are_ignored() {
            let mut surface = MemorySurface::new(2, 2);
            surface.put_char(2, 0, 'x');
            surface.put_char(0, 2, 'x');
            surface.put_char(u16::MAX, u16::MAX, 'x');
            assert_eq!(surface.snapshot(), "  \n  ");
        }

        #[test]
        fn test_invalid_codepoint_becomes_question_mark() {
            let mut surface = MemorySurface::new(2, 1);
            surface.put_codepoint(0, 0, 0xD800);
            surface.put_codepoint(1, 0, 0x41);
            assert_eq!(surface.snapshot(), "?A");
        }

        #[test]
        fn test_cells_capture_pen() {
            let mut surface = MemorySurface::new(2, 1);
            let style = Style::new().fg(Color::RED).bold();
            surface.set_style(style);
            surface.put_char(0, 0, 'a');
            surface.reset_style();
            surface.put_char(1, 0, 'b');
            assert_eq!(surface.cell(0, 0).unwrap().style, style);
            assert_eq!(surface.cell(1, 0).unwrap().style, Style::new());
        }

        #[test]
        fn test_wide_continuation_skipped_in_snapshot() {
            let mut surface = MemorySurface::new(3, 1);
            surface.put_char(0, 0, '日');
            surface.put_continuation(1, 0);
            surface.put_char(2, 0, 'x');
            assert_eq!(surface.snapshot(), "日x");
        }

        #[test]
        fn test_dirty_spans_after_commit() {
            let mut surface = MemorySurface::new(6, 2);
            assert_eq!(surface.dirty_spans().len(), 2);
            surface.commit();
            assert!(surface.dirty_spans().is_empty());

            surface.put_char(1, 0, 'a');
            surface.put_char(2, 0, 'b');
            surface.put_char(5, 1, 'c');
            assert_eq!(
                surface.dirty_spans(),
                vec![
                    DirtySpan { x: 1, y: 0, width: 2 },
                    DirtySpan { x: 5, y: 1, width: 1 },
                ]
            );
        }

        #[test]
        fn test_resize_forces_full_repaint() {
            let mut surface = MemorySurface::new(2, 2);
            surface.commit();
            surface.resize(3, 1);
            assert_eq!(surface.size(), Size::new(3, 1));
            assert_eq!(surface.dirty_spans(), vec![DirtySpan { x: 0, y: 0, width: 3 }]);
        }

        #[test]
        fn test_dispose_stops_writes() {
            let mut surface = MemorySurface::new(1, 1);
            surface.dispose();
            surface.put_char(0, 0, 'x');
            assert_eq!(surface.snapshot(), " ");
        }
    }

    mod tty {
        use super::*;
        use pretty_assertions::assert_eq;

        fn tty(size: Option<Size>) -> TtySurface<AnsiBackend<Vec<u8>>> {
            TtySurface::new(AnsiBackend::new(Vec::new()), &MapEnv::new(), size)
        }

        fn written(surface: TtySurface<AnsiBackend<Vec<u8>>>) -> String {
            String::from_utf8(surface.into_backend().into_inner()).unwrap()
        }

        #[test]
        fn test_put_char_positions_cursor() {
            let mut surface = tty(None);
            surface.put_char(0, 0, 'a');
            surface.put_char(4, 2, 'é');
            assert_eq!(written(surface), "\x1b[1;1Ha\x1b[3;5Hé");
        }

        #[test]
        fn test_size_resolution_order() {
            assert_eq!(tty(None).size(), DEFAULT_TTY_SIZE);

            let env = MapEnv::new().with("COLUMNS", "120").with("LINES", "40");
            let surface = TtySurface::new(AnsiBackend::new(Vec::new()), &env, None);
            assert_eq!(surface.size(), Size::new(120, 40));

            let surface =
                TtySurface::new(AnsiBackend::new(Vec::new()), &env, Some(Size::new(10, 5)));
            assert_eq!(surface.size(), Size::new(10, 5));
        }

        #[test]
        fn test_snapshot_unsupported() {
            assert_eq!(tty(None).snapshot(), UNSUPPORTED_SNAPSHOT);
        }

        #[test]
        fn test_style_is_emitted_once_per_change() {
            let mut surface = tty(None);
            let style = Style::new().bold();
            surface.set_style(style);
            surface.set_style(style);
            surface.reset_style();
            assert_eq!(written(surface), "\x1b[0m\x1b[1m\x1b[0m");
        }

        #[test]
        fn test_out_of_bounds_ignored() {
            let mut surface = tty(Some(Size::new(2, 2)));
            surface.put_char(2, 0, 'x');
            assert_eq!(written(surface), "");
        }

        #[test]
        fn test_sync_can_be_disabled() {
            let mut surface = tty(None);
            surface.set_sync_enabled(false);
            surface.begin_sync();
            surface.end_sync();
            assert_eq!(written(surface), "");
        }
    }
}
