//! Interactive session loop
//!
//! A [`Session`] reads lines from any [`BufRead`], feeds each non-blank line
//! to its [`Calculator`], and writes the resulting notices and stack line to
//! any [`Write`]. Standard input and output in the binary, in-memory buffers
//! in tests.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::processor::notice::Notice;
use crate::processor::{Calculator, LineOutcome};
use crate::theme::{Theme, DEFAULT_THEME};

/// Printed once when a session starts
pub const BANNER: &str = "RPN Calculator";

/// Why a session stopped reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

pub struct Session {
    calculator: Calculator,
    config: SessionConfig,
    theme: &'static Theme,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            calculator: Calculator::new(),
            config,
            theme: &DEFAULT_THEME,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Process `input` line by line until it runs out or `quit` is entered.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so they end up
    /// as unsupported tokens instead of ending the session.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> io::Result<SessionEnd> {
        info!(banner = self.config.banner, styled = self.config.styled, "session started");
        if self.config.banner {
            let banner = self.style(BANNER, self.theme.banner);
            writeln!(output, "{}", banner)?;
            output.flush()?;
        }

        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if input.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }

            let decoded = String::from_utf8_lossy(&buffer);
            if let Cow::Owned(_) = decoded {
                warn!("input line is not valid UTF-8");
            }
            let line = decoded.trim_end_matches(['\n', '\r']);

            if self.feed_line(line, output)? == LineOutcome::Quit {
                info!(depth = self.calculator.stack().len(), "quit requested");
                return Ok(SessionEnd::Quit);
            }
        }

        info!(depth = self.calculator.stack().len(), "end of input");
        Ok(SessionEnd::EndOfInput)
    }

    /// Process one line and write its notices followed by the stack line.
    /// Blank lines produce no output.
    pub fn feed_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<LineOutcome> {
        if line.trim().is_empty() {
            return Ok(LineOutcome::Continue);
        }

        let report = self.calculator.process_line(line);
        for notice in &report.notices {
            writeln!(output, "{}", self.style_notice(notice))?;
        }
        writeln!(output, "{}", self.calculator.render())?;
        output.flush()?;

        Ok(report.outcome)
    }

    fn style_notice(&self, notice: &Notice) -> String {
        let text = notice.to_string();
        self.style(&text, self.theme.color_for(notice.severity()))
    }

    fn style(&self, text: &str, color: crossterm::style::Color) -> String {
        if self.config.styled {
            self.theme.paint(text, color)
        } else {
            text.to_string()
        }
    }
}
