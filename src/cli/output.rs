//! Colored operator output.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Writes operator-facing messages to the terminal.
///
/// Colors are used only when the stream is a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn stdout() -> StandardStream {
        let choice = if io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        StandardStream::stdout(choice)
    }

    fn stderr() -> StandardStream {
        let choice = if io::stderr().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        StandardStream::stderr(choice)
    }

    fn write_line(
        mut stream: StandardStream,
        color: Option<Color>,
        bold: bool,
        prefix: &str,
        message: &str,
    ) -> io::Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_fg(color).set_bold(bold);
        stream.set_color(&spec)?;
        write!(stream, "{prefix}")?;
        stream.reset()?;
        writeln!(stream, "{message}")?;
        stream.flush()
    }

    /// Detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), Some(Color::Cyan), false, "  ", message)
    }

    /// Progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), Some(Color::Blue), true, "-> ", message)
    }

    /// Success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), Some(Color::Green), true, "✓ ", message)
    }

    /// Warning line, on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stderr(), Some(Color::Yellow), true, "warning: ", message)
    }

    /// Error line, on stderr. Never suppressed.
    pub fn error(&self, message: &str) -> io::Result<()> {
        Self::write_line(Self::stderr(), Some(Color::Red), true, "Error: ", message)
    }

    /// Section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        Self::write_line(Self::stdout(), None, true, "", &format!("\n== {title} =="))
    }

    /// Indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "    {message}")
    }
}
