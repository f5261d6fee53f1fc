#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Failure while talking to the player.
#[derive(Debug)]
pub enum InputError {
    /// The input stream ended before an answer arrived.
    Closed,
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Closed => write!(f, "input stream closed"),
            InputError::Io(e) => write!(f, "console I/O error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Closed => None,
            InputError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

/// Prompting console over any buffered reader and writer.
///
/// Answers are read as whitespace separated tokens, so several answers may
/// arrive on one line. Blank lines are skipped and bytes that are not UTF-8
/// come through as replacement characters, which no prompt accepts.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    buf: Vec<u8>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            buf: Vec::new(),
        }
    }

    /// Writer for game output.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and return the next input token.
    pub fn prompt_token(&mut self, prompt: &str) -> Result<String, InputError> {
        self.show_prompt(prompt)?;
        if self.pending.is_empty() {
            self.fill()?;
        }
        self.pending.pop_front().ok_or(InputError::Closed)
    }

    /// Print `prompt` and return the rest of the current input line, or the
    /// next non-blank line when nothing is buffered.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.show_prompt(prompt)?;
        if self.pending.is_empty() {
            self.fill()?;
        }
        let words: Vec<String> = self.pending.drain(..).collect();
        Ok(words.join(" "))
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn show_prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()
    }

    /// Read lines until one carries at least one token.
    fn fill(&mut self) -> Result<(), InputError> {
        loop {
            self.buf.clear();
            if self.input.read_until(b'\n', &mut self.buf)? == 0 {
                writeln!(self.output)?;
                return Err(InputError::Closed);
            }
            let line = String::from_utf8_lossy(&self.buf);
            self.pending.extend(line.split_whitespace().map(String::from));
            if !self.pending.is_empty() {
                return Ok(());
            }
        }
    }
}
