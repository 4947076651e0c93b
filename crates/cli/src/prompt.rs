//! Line-based terminal prompts.
//!
//! The workflow talks to the operator only through [`Prompter`]. The
//! binary uses [`TerminalPrompter::stdio`]; tests feed a
//! [`TerminalPrompter`] from an in-memory buffer and inspect what it wrote.

use std::io::{self, BufRead, Write};

/// Operator-facing input and output.
pub trait Prompter {
    /// Print a line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Print `question` and read one line of free text, trimmed.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedEof` if input is closed before an answer is given.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// Print `question` and read a yes/no answer.
    ///
    /// An answer starting with `y` or `Y` is yes. An empty answer, or closed
    /// input, returns `default`. Anything else is no.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read or written.
    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool>;
}

/// [`Prompter`] over any line reader and writer.
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Create a prompter reading answers from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompter and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Print the question without a newline and read the raw answer line.
    /// `None` at end of input.
    fn read_answer(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the transcript on separate lines when input runs out
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.read_answer(question)?.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer given to {:?}", question.trim_end()),
            )
        })
    }

    fn confirm(&mut self, question: &str, default: bool) -> io::Result<bool> {
        let answer = self.read_answer(question)?.unwrap_or_default();
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.starts_with(['y', 'Y']))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_writer()).unwrap()
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  new@example.com \n");
        assert_eq!(p.ask("Email : ").unwrap(), "new@example.com");
        assert_eq!(transcript(p), "Email : ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompter("");
        let err = p.ask("Email : ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_confirm_yes_variants() {
        for answer in ["y\n", "Y\n", "yes\n", "Yep\n"] {
            let mut p = prompter(answer);
            assert!(p.confirm("Continue? ", false).unwrap(), "{answer:?}");
        }
    }

    #[test]
    fn test_confirm_no_variants() {
        for answer in ["n\n", "no\n", "sure\n", "1\n"] {
            let mut p = prompter(answer);
            assert!(!p.confirm("Continue? ", true).unwrap(), "{answer:?}");
        }
    }

    #[test]
    fn test_confirm_empty_takes_default() {
        let mut p = prompter("\n\n");
        assert!(!p.confirm("Continue? ", false).unwrap());
        assert!(p.confirm("Continue? ", true).unwrap());
    }

    #[test]
    fn test_confirm_end_of_input_takes_default() {
        let mut p = prompter("");
        assert!(!p.confirm("Continue? ", false).unwrap());
    }

    #[test]
    fn test_say_writes_line() {
        let mut p = prompter("");
        p.say("Cancelled").unwrap();
        assert_eq!(transcript(p), "Cancelled\n");
    }
}
