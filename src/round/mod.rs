pub mod player;
pub mod selector;

pub use player::{play_round, RoundOutcome};
pub use selector::{select_rounds, DISTRACTOR_COUNT};

use crate::bank::{WordBank, WordList, WordPair};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameMode {
    #[strum(serialize = "English-Icelandic Translation Quiz")]
    Translation,
    #[strum(serialize = "Synonyms Game")]
    Synonym,
}

impl GameMode {
    /// The word list this mode draws from
    pub fn word_list(self, bank: &WordBank) -> &WordList {
        match self {
            GameMode::Translation => &bank.translations,
            GameMode::Synonym => &bank.synonyms,
        }
    }

    /// What the answer side of a pair is called in prompts and tables
    pub fn answer_noun(self) -> &'static str {
        match self {
            GameMode::Translation => "translation",
            GameMode::Synonym => "synonym",
        }
    }
}

/// Which side of a translation pair is shown and which is guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum Direction {
    #[default]
    #[strum(serialize = "English to Icelandic")]
    AToB,
    #[strum(serialize = "Icelandic to English")]
    BToA,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Only meaningful for translations; synonyms always show `term_a`.
    pub direction: Option<Direction>,
    pub round_count: usize,
}

impl GameConfig {
    /// Split a pair into (prompt term, correct answer) for this game.
    pub fn orient<'a>(&self, pair: &'a WordPair) -> (&'a str, &'a str) {
        match (self.mode, self.direction.unwrap_or_default()) {
            (GameMode::Translation, Direction::BToA) => {
                (pair.term_b.as_str(), pair.term_a.as_str())
            }
            _ => (pair.term_a.as_str(), pair.term_b.as_str()),
        }
    }

    pub fn answer_side<'a>(&self, pair: &'a WordPair) -> &'a str {
        self.orient(pair).1
    }
}

/// One question: the word shown, its answer, and the options offered.
///
/// `options` holds each distractor once and the correct answer once, in
/// selection order. The player shuffles them when the round is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSpec {
    pub prompt_term: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}
