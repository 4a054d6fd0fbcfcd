use std::io::{self, BufRead, Write};

use crate::get_result;

/// The greeting printed when an interactive session starts.
pub const BANNER: &str = concat!("Clips v", env!("CARGO_PKG_VERSION"));
/// The prompt printed before each line is read.
pub const DEFAULT_PROMPT: &str = "clips> ";

/// An append-only record of every line read.
///
/// Lines are kept in order, duplicates included. Empty lines and lines that
/// fail to parse are recorded too.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a line.
    pub fn add(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
    }

    /// All recorded lines, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The most recently recorded line.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// The number of recorded lines.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no line has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the outcome of one line exactly as the loop prints it.
///
/// A line that parses is evaluated and its value rendered; a line that does
/// not parse renders as the parser's diagnostic.
///
/// # Example
/// ```
/// use clips::repl::run_line;
///
/// assert_eq!(run_line("(- 10 2 3)"), "5");
/// assert_eq!(run_line(""), "()");
/// assert_eq!(run_line("(+ 1 (/ 10 0) 2)"), "Error: Division by zero!");
/// assert!(run_line("(+ 1 2").starts_with("Parse error"));
/// ```
#[must_use]
pub fn run_line(line: &str) -> String {
    match get_result(line) {
        Ok(value) => value.to_string(),
        Err(e) => {
            log::debug!("parse failed: {e}");
            e.to_string()
        },
    }
}

/// The read-eval-print loop.
///
/// Generic over its input and output so that it can drive a terminal, a
/// file, or an in-memory buffer alike.
///
/// # Example
/// ```
/// use clips::repl::Repl;
///
/// let input = "(+ 1 2)\n(* 2 (- 5))\n";
/// let mut output = Vec::new();
///
/// let mut repl = Repl::new(input.as_bytes(), &mut output).quiet(true);
/// repl.run().unwrap();
/// assert_eq!(repl.history().len(), 2);
///
/// drop(repl);
/// assert_eq!(String::from_utf8(output).unwrap(), "3\n-10\n");
/// ```
pub struct Repl<R, W> {
    input:   R,
    output:  W,
    prompt:  String,
    quiet:   bool,
    history: History,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    /// Creates a loop with the default prompt and the banner enabled.
    pub fn new(input: R, output: W) -> Self {
        Self { input,
               output,
               prompt: DEFAULT_PROMPT.to_string(),
               quiet: false,
               history: History::new() }
    }

    /// Replaces the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Suppresses the banner and the prompt, leaving only results.
    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The lines read so far.
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Runs until the input is exhausted.
    ///
    /// # Returns
    /// The number of lines processed.
    ///
    /// # Errors
    /// Returns an I/O error if reading the input or writing the output
    /// fails. Parse and evaluation failures are printed and never end the
    /// loop.
    pub fn run(&mut self) -> io::Result<usize> {
        if !self.quiet {
            writeln!(self.output, "{BANNER}")?;
            writeln!(self.output, "Press Ctrl+C to Exit\n")?;
        }

        let mut count = 0;

        loop {
            if !self.quiet {
                write!(self.output, "{}", self.prompt)?;
                self.output.flush()?;
            }

            let Some(line) = self.read_line()? else {
                if !self.quiet {
                    writeln!(self.output)?;
                }
                break;
            };

            self.history.add(line.as_str());
            writeln!(self.output, "{}", run_line(&line))?;
            count += 1;
        }

        log::info!("session ended after {count} line(s)");
        Ok(count)
    }

    /// Reads one line without its line terminator, or `None` at end of
    /// input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, which the
    /// parser then rejects like any other unknown character.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();

        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}
