//! Line input: one typed line per turn.

use std::io::{self, BufRead, Write};

/// A source of typed lines, one per game turn.
pub trait LineSource {
    /// Show `prompt` and read one line. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads lines from any buffered reader, echoing prompts to a writer.
pub struct LineReader<R, W> {
    input: R,
    prompt_out: W,
    buf: String,
}

impl<R: BufRead, W: Write> LineReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self {
            input,
            prompt_out,
            buf: String::new(),
        }
    }
}

impl<R: BufRead, W: Write> LineSource for LineReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompt_out.write_all(prompt.as_bytes())?;
        self.prompt_out.flush()?;

        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }
}

/// Stdin/stdout line source used by the game binary.
pub type StdinLines = LineReader<io::StdinLock<'static>, io::Stdout>;

pub fn stdin_lines() -> StdinLines {
    LineReader::new(io::stdin().lock(), io::stdout())
}

/// Replays a fixed script of lines (tests, demos).
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
