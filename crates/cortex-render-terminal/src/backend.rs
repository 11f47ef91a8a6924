//! Terminal transport abstraction.
//!
//! [`TerminalBackend`] is the byte-level boundary of the renderer: cursor
//! movement, SGR styling, synchronized output and flushing. Raw mode and event
//! reading belong to the caller.

use cortex_render_core::color::{Color, ColorDepth};
use cortex_render_core::error::{Error, Result};
use cortex_render_core::style::{Style, TextAttributes};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{
        Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{Clear, ClearType, size},
};
use std::io::{self, Stdout, Write};

/// Byte-level terminal operations used by the TTY surface.
pub trait TerminalBackend {
    /// Moves the cursor to the zero-based column `x` and row `y`.
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Writes UTF-8 text at the cursor.
    fn write_str(&mut self, s: &str) -> Result<()>;

    /// Sets the foreground color.
    fn set_foreground(&mut self, color: Color) -> Result<()>;

    /// Sets the background color.
    fn set_background(&mut self, color: Color) -> Result<()>;

    /// Enables the given attributes.
    fn set_attributes(&mut self, attrs: TextAttributes) -> Result<()>;

    /// Resets colors and attributes.
    fn reset_style(&mut self) -> Result<()>;

    /// Clears the whole screen.
    fn clear(&mut self) -> Result<()>;

    /// Begins a synchronized update (DEC mode 2026).
    fn begin_sync_update(&mut self) -> Result<()>;

    /// Ends a synchronized update.
    fn end_sync_update(&mut self) -> Result<()>;

    /// Queries the terminal size as `(columns, rows)`.
    fn size(&self) -> Result<(u16, u16)>;

    /// Flushes buffered output.
    fn flush(&mut self) -> Result<()>;

    /// Applies a complete style.
    fn set_style(&mut self, style: &Style) -> Result<()> {
        if !style.attributes.is_empty() {
            self.set_attributes(style.attributes)?;
        }
        if let Some(fg) = style.fg {
            self.set_foreground(fg)?;
        }
        if let Some(bg) = style.bg {
            self.set_background(bg)?;
        }
        Ok(())
    }
}

// ============================================================================
// Raw ANSI backend
// ============================================================================

/// Writes raw escape sequences to any [`Write`] sink.
///
/// Colors are encoded at the configured depth.
#[derive(Debug)]
pub struct AnsiBackend<W: Write> {
    writer: W,
    depth: ColorDepth,
}

impl<W: Write> AnsiBackend<W> {
    /// Creates a backend writing truecolor escapes.
    pub fn new(writer: W) -> Self {
        Self::with_depth(writer, ColorDepth::TrueColor)
    }

    /// Creates a backend writing escapes at `depth`.
    pub fn with_depth(writer: W, depth: ColorDepth) -> Self {
        Self { writer, depth }
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Returns the underlying writer mutably.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the backend and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes).map_err(Error::Io)
    }
}

impl<W: Write> TerminalBackend for AnsiBackend<W> {
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        let seq = format!("\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
        self.emit(seq.as_bytes())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.emit(s.as_bytes())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        let seq = color.to_ansi_fg(self.depth);
        self.emit(seq.as_bytes())
    }

    fn set_background(&mut self, color: Color) -> Result<()> {
        let seq = color.to_ansi_bg(self.depth);
        self.emit(seq.as_bytes())
    }

    fn set_attributes(&mut self, attrs: TextAttributes) -> Result<()> {
        for code in attrs.to_ansi_codes() {
            let seq = format!("\x1b[{}m", code);
            self.emit(seq.as_bytes())?;
        }
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        self.emit(b"\x1b[0m")
    }

    fn clear(&mut self) -> Result<()> {
        self.emit(b"\x1b[2J")
    }

    fn begin_sync_update(&mut self) -> Result<()> {
        self.emit(b"\x1b[?2026h")
    }

    fn end_sync_update(&mut self) -> Result<()> {
        self.emit(b"\x1b[?2026l")
    }

    fn size(&self) -> Result<(u16, u16)> {
        Err(Error::Unsupported("size query on a raw writer".to_string()))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::Io)
    }
}

// ============================================================================
// Crossterm backend
// ============================================================================

/// Crossterm-based backend writing to stdout.
pub struct CrosstermBackend {
    stdout: Stdout,
    depth: ColorDepth,
}

impl CrosstermBackend {
    /// Creates a backend on stdout emitting colors at `depth`.
    pub fn new(depth: ColorDepth) -> Self {
        Self {
            stdout: io::stdout(),
            depth,
        }
    }

    /// Converts a color to crossterm's type, downsampling to the backend depth.
    fn to_crossterm_color(&self, color: Color) -> CrosstermColor {
        match (self.depth, color) {
            (ColorDepth::TrueColor, Color::Rgb { r, g, b }) => CrosstermColor::Rgb { r, g, b },
            (ColorDepth::Ansi16, _) | (_, Color::Ansi16(_)) => {
                CrosstermColor::AnsiValue(color.to_ansi16())
            }
            (_, _) => CrosstermColor::AnsiValue(color.to_ansi256()),
        }
    }
}

impl TerminalBackend for CrosstermBackend {
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.stdout, MoveTo(x, y)).map_err(Error::Io)
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(self.stdout, Print(s)).map_err(Error::Io)
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        let color = self.to_crossterm_color(color);
        queue!(self.stdout, SetForegroundColor(color)).map_err(Error::Io)
    }

    fn set_background(&mut self, color: Color) -> Result<()> {
        let color = self.to_crossterm_color(color);
        queue!(self.stdout, SetBackgroundColor(color)).map_err(Error::Io)
    }

    fn set_attributes(&mut self, attrs: TextAttributes) -> Result<()> {
        let table = [
            (TextAttributes::BOLD, Attribute::Bold),
            (TextAttributes::DIM, Attribute::Dim),
            (TextAttributes::ITALIC, Attribute::Italic),
            (TextAttributes::UNDERLINE, Attribute::Underlined),
            (TextAttributes::BLINK, Attribute::SlowBlink),
            (TextAttributes::REVERSE, Attribute::Reverse),
            (TextAttributes::HIDDEN, Attribute::Hidden),
            (TextAttributes::STRIKETHROUGH, Attribute::CrossedOut),
        ];
        for (flag, attribute) in table {
            if attrs.contains(flag) {
                queue!(self.stdout, SetAttribute(attribute)).map_err(Error::Io)?;
            }
        }
        Ok(())
    }

    fn reset_style(&mut self) -> Result<()> {
        queue!(self.stdout, ResetColor, SetAttribute(Attribute::Reset)).map_err(Error::Io)
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.stdout, Clear(ClearType::All)).map_err(Error::Io)
    }

    fn begin_sync_update(&mut self) -> Result<()> {
        self.stdout.write_all(b"\x1b[?2026h").map_err(Error::Io)
    }

    fn end_sync_update(&mut self) -> Result<()> {
        self.stdout.write_all(b"\x1b[?2026l").map_err(Error::Io)
    }

    fn size(&self) -> Result<(u16, u16)> {
        size().map_err(Error::Io)
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush().map_err(Error::Io)
    }
}
