use std::fmt;
use std::ops::RangeInclusive;

use itertools::Itertools;

use crate::console::{Console, LineSource, OutputSink, Tone};
use crate::error::Result;

/// The values a prompt accepts once the raw line has been coerced.
#[derive(Debug, Clone, PartialEq)]
pub enum Choices<T> {
    Any,
    OneOf(Vec<T>),
    Range(RangeInclusive<T>),
}

impl<T: PartialOrd> Choices<T> {
    pub fn allows(&self, value: &T) -> bool {
        match self {
            Choices::Any => true,
            Choices::OneOf(values) => values.contains(value),
            Choices::Range(range) => range.contains(value),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choices<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choices::Any => write!(f, "any value"),
            Choices::OneOf(values) => write!(f, "[{}]", values.iter().join(", ")),
            Choices::Range(range) => write!(f, "{}-{}", range.start(), range.end()),
        }
    }
}

/// Prompt until the user enters something that coerces and is allowed.
///
/// `kind` names the expected type in the retry message. There is no retry
/// limit; the only way out besides a valid answer is the input closing.
pub fn collect<T, I, O, F>(
    console: &mut Console<I, O>,
    prompt: &str,
    choices: &Choices<T>,
    kind: &str,
    coerce: F,
) -> Result<T>
where
    T: PartialOrd + fmt::Display,
    I: LineSource,
    O: OutputSink,
    F: Fn(&str) -> Option<T>,
{
    loop {
        let raw = console.ask(prompt)?;
        let Some(value) = coerce(raw.trim()) else {
            tracing::debug!(input = %raw, kind, "rejected input that does not coerce");
            console.say(Tone::Failure, &format!("Please enter a valid {kind}."))?;
            continue;
        };
        if choices.allows(&value) {
            return Ok(value);
        }
        tracing::debug!(%value, %choices, "rejected input outside the allowed values");
        console.say(
            Tone::Failure,
            &format!("Invalid input! Please enter one of {choices}."),
        )?;
    }
}

pub fn collect_number<I, O>(
    console: &mut Console<I, O>,
    prompt: &str,
    choices: &Choices<usize>,
) -> Result<usize>
where
    I: LineSource,
    O: OutputSink,
{
    collect(console, prompt, choices, "number", |raw| raw.parse().ok())
}

pub fn collect_text<I, O>(
    console: &mut Console<I, O>,
    prompt: &str,
    choices: &Choices<String>,
) -> Result<String>
where
    I: LineSource,
    O: OutputSink,
{
    collect(console, prompt, choices, "text", |raw| Some(raw.to_string()))
}
