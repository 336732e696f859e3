//! Line-oriented prompt I/O over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crate::config::ConsoleConfig;

/// Answer to a prompt that the user may back out of.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// A valid answer.
    Value(T),
    /// The user typed the cancel sentinel.
    Cancelled,
    /// Input ended before an answer was given.
    Closed,
}

/// Prompting wrapper around an input and an output stream.
///
/// Generic so the menus can be driven by `stdin`/`stdout` or by in-memory
/// buffers in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Write one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Write an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Write a line of `mark` repeated to the configured width.
    pub fn divider(&mut self, mark: char) -> io::Result<()> {
        let line = mark.to_string().repeat(self.config.divider_width);
        writeln!(self.output, "{line}")
    }

    /// Write `text` without a newline and flush so it shows before input is read.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Read one line without its line terminator. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prompt, then read a line.
    pub fn ask(&mut self, text: &str) -> io::Result<Option<String>> {
        self.prompt(text)?;
        self.read_line()
    }
}
