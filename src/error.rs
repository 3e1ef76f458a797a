use thiserror::Error;

/// Errors that end a quiz session.
///
/// Bad answers at a prompt are never errors; the input collector re-prompts
/// for those. Everything here is fatal and propagates to `main`.
#[derive(Debug, Error)]
pub enum QuizError {
    /// More rounds were requested than the word list holds.
    #[error("cannot play {requested} rounds: the word list only has {available} pairs")]
    NotEnoughWords { requested: usize, available: usize },

    /// Too few distinct wrong answers exist to fill the option set.
    #[error("cannot build options for '{answer}': need {needed} other answers, found {available}")]
    NotEnoughDistractors {
        answer: String,
        needed: usize,
        available: usize,
    },

    /// The line source hit end of input while a prompt was waiting.
    #[error("input closed before the quiz finished")]
    InputClosed,

    #[error("word bank: {0}")]
    WordBank(String),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
