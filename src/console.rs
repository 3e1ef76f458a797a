use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, Write};

use crossterm::style::{style, Stylize};

use crate::error::{QuizError, Result};

/// How a line of output should look on a colour terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Failure,
    Summary,
}

/// Source of user input, one line at a time.
pub trait LineSource {
    /// Next line without its line ending, or `None` once input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Destination for everything the quiz prints.
pub trait OutputSink {
    /// Print text the user answers on the same line. Must be flushed.
    fn print_prompt(&mut self, prompt: &str) -> Result<()>;

    fn print_line(&mut self, tone: Tone, line: &str) -> Result<()>;
}

/// Production line source over any buffered reader (stdin by default)
pub struct LineReader<R: BufRead> {
    reader: R,
}

impl LineReader<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

/// Canned input for tests and scripted sessions
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Terminal output with optional colour
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
}

impl TerminalSink<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn print_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(())
    }

    fn print_line(&mut self, tone: Tone, line: &str) -> Result<()> {
        if !self.color {
            writeln!(self.out, "{line}")?;
            return Ok(());
        }
        let content = style(line);
        let styled = match tone {
            Tone::Plain => content,
            Tone::Heading => content.yellow(),
            Tone::Success => content.green(),
            Tone::Failure => content.red(),
            Tone::Summary => content.cyan(),
        };
        writeln!(self.out, "{styled}")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Captured {
    Prompt(String),
    Line(Tone, String),
}

/// Records output in memory so tests can inspect the transcript
#[derive(Debug, Default)]
pub struct CaptureSink {
    pub entries: Vec<Captured>,
}

impl CaptureSink {
    pub fn lines(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Captured::Line(_, line) => Some(line.as_str()),
                Captured::Prompt(_) => None,
            })
            .collect()
    }

    pub fn prompts(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Captured::Prompt(p) => Some(p.as_str()),
                Captured::Line(..) => None,
            })
            .collect()
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

impl OutputSink for CaptureSink {
    fn print_prompt(&mut self, prompt: &str) -> Result<()> {
        self.entries.push(Captured::Prompt(prompt.to_string()));
        Ok(())
    }

    fn print_line(&mut self, tone: Tone, line: &str) -> Result<()> {
        self.entries.push(Captured::Line(tone, line.to_string()));
        Ok(())
    }
}

/// The quiz's single I/O handle: where prompts go and answers come from.
pub struct Console<I: LineSource, O: OutputSink> {
    input: I,
    output: O,
}

impl<I: LineSource, O: OutputSink> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, tone: Tone, line: &str) -> Result<()> {
        self.output.print_line(tone, line)
    }

    pub fn blank(&mut self) -> Result<()> {
        self.output.print_line(Tone::Plain, "")
    }

    /// Show `prompt` and block for one line of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.output.print_prompt(prompt)?;
        self.input.read_line()?.ok_or(QuizError::InputClosed)
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}
