//! Colored status lines on the terminal.

use std::fmt;
use std::io::{self, Write};

/// ANSI escape sequences for each status color.
mod codes {
    pub const HEADER: &str = "\x1b[95m"; // Bright magenta
    pub const INFO: &str = "\x1b[94m"; // Bright blue
    pub const SUCCESS: &str = "\x1b[92m"; // Bright green
    pub const WARNING: &str = "\x1b[93m"; // Bright yellow
    pub const FAILURE: &str = "\x1b[91m"; // Bright red
    pub const RESET: &str = "\x1b[0m";
}

/// Named color tag for a status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Header,
    Info,
    Success,
    Warning,
    Failure,
}

impl Color {
    /// Every color tag, in display order.
    pub const ALL: [Color; 5] = [
        Color::Header,
        Color::Info,
        Color::Success,
        Color::Warning,
        Color::Failure,
    ];

    /// Terminal escape sequence that starts this color.
    pub const fn escape(self) -> &'static str {
        match self {
            Color::Header => codes::HEADER,
            Color::Info => codes::INFO,
            Color::Success => codes::SUCCESS,
            Color::Warning => codes::WARNING,
            Color::Failure => codes::FAILURE,
        }
    }

    /// Escape sequence restoring the default color.
    pub const fn reset() -> &'static str {
        codes::RESET
    }

    /// Lowercase tag name.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Header => "header",
            Color::Info => "info",
            Color::Success => "success",
            Color::Warning => "warning",
            Color::Failure => "failure",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Writes colored status lines to any writer.
pub struct ConsolePrinter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> ConsolePrinter<W> {
    /// Create a printer with an explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        ConsolePrinter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Whether escape sequences are emitted.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Write `msg` as one line, wrapped in `color` and a reset sequence.
    pub fn print(&mut self, msg: impl fmt::Display, color: Color) -> io::Result<()> {
        if self.colors {
            writeln!(self.writer, "{}{msg}{}", color.escape(), Color::reset())
        } else {
            writeln!(self.writer, "{msg}")
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the printer and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsolePrinter<io::Stdout> {
    /// Printer for stdout.
    pub fn stdout(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stdout(), mode, is_tty)
    }
}

/// Print a colored status line to stdout.
///
/// Write failures on stdout are ignored, like `println!` in a pipeline that
/// closed its reader.
pub fn printcol(msg: impl fmt::Display, color: Color) {
    let mut printer = ConsolePrinter::stdout(ColorMode::Always, true);
    let _ = printer.print(msg, color);
}
