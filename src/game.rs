use rand::Rng;

use crate::bank::WordBank;
use crate::console::{Console, LineSource, OutputSink, Tone};
use crate::error::Result;
use crate::input::{collect_number, Choices};
use crate::report::print_report;
use crate::round::{play_round, select_rounds, Direction, GameConfig, GameMode};
use crate::scoreboard::{ResultRecord, Scoreboard};

pub const WELCOME: &str = "Welcome to the English-Icelandic vocabulary quiz!";

/// Where a game is. Stages only ever move forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    ChooseMode,
    ChooseDirection,
    ChooseRoundCount {
        mode: GameMode,
        direction: Option<Direction>,
    },
    PlayingRounds(GameConfig),
    Reporting(GameConfig, Scoreboard),
    Done(GameSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub config: GameConfig,
    pub scoreboard: Scoreboard,
}

/// Drives one game from the welcome banner to the results tables.
pub struct Quiz<'a, R: Rng, I: LineSource, O: OutputSink> {
    bank: &'a WordBank,
    rng: R,
    console: Console<I, O>,
}

impl<'a, R: Rng, I: LineSource, O: OutputSink> Quiz<'a, R, I, O> {
    pub fn new(bank: &'a WordBank, rng: R, console: Console<I, O>) -> Self {
        Self { bank, rng, console }
    }

    pub fn run(&mut self) -> Result<GameSummary> {
        self.console.say(Tone::Heading, WELCOME)?;

        let mut stage = Stage::ChooseMode;
        loop {
            tracing::debug!(?stage, "advancing");
            stage = match stage {
                Stage::ChooseMode => match self.choose_mode()? {
                    GameMode::Translation => Stage::ChooseDirection,
                    mode => Stage::ChooseRoundCount {
                        mode,
                        direction: None,
                    },
                },
                Stage::ChooseDirection => Stage::ChooseRoundCount {
                    mode: GameMode::Translation,
                    direction: Some(self.choose_direction()?),
                },
                Stage::ChooseRoundCount { mode, direction } => {
                    let round_count = self.choose_round_count(mode)?;
                    Stage::PlayingRounds(GameConfig {
                        mode,
                        direction,
                        round_count,
                    })
                }
                Stage::PlayingRounds(config) => {
                    let scoreboard = self.play(&config)?;
                    Stage::Reporting(config, scoreboard)
                }
                Stage::Reporting(config, scoreboard) => {
                    print_report(&mut self.console, &scoreboard, config.mode)?;
                    Stage::Done(GameSummary { config, scoreboard })
                }
                Stage::Done(summary) => {
                    tracing::info!(
                        correct = summary.scoreboard.correct().len(),
                        incorrect = summary.scoreboard.incorrect().len(),
                        "game finished"
                    );
                    return Ok(summary);
                }
            };
        }
    }

    fn choose_mode(&mut self) -> Result<GameMode> {
        self.console.say(Tone::Heading, "Choose a game to play:")?;
        for (i, mode) in [GameMode::Translation, GameMode::Synonym].iter().enumerate() {
            self.console.say(Tone::Plain, &format!("{}. {mode}", i + 1))?;
        }
        let choice = collect_number(
            &mut self.console,
            "Enter the number of your choice: ",
            &Choices::OneOf(vec![1, 2]),
        )?;
        Ok(if choice == 1 {
            GameMode::Translation
        } else {
            GameMode::Synonym
        })
    }

    fn choose_direction(&mut self) -> Result<Direction> {
        self.console
            .say(Tone::Plain, "Choose the translation direction:")?;
        let prompt = format!(
            "Enter 1 for {} or 2 for {}: ",
            Direction::AToB,
            Direction::BToA
        );
        let choice = collect_number(&mut self.console, &prompt, &Choices::OneOf(vec![1, 2]))?;
        Ok(if choice == 1 {
            Direction::AToB
        } else {
            Direction::BToA
        })
    }

    /// Only counts the word list can cover are accepted, so selection
    /// never runs short of pairs in an interactive game.
    fn choose_round_count(&mut self, mode: GameMode) -> Result<usize> {
        let available = mode.word_list(self.bank).len();
        collect_number(
            &mut self.console,
            "How many words would you like to play? ",
            &Choices::Range(0..=available),
        )
    }

    fn play(&mut self, config: &GameConfig) -> Result<Scoreboard> {
        let list = config.mode.word_list(self.bank);
        let rounds = select_rounds(list, config, &mut self.rng)?;

        let mut scoreboard = Scoreboard::default();
        for mut round in rounds {
            let outcome = play_round(&mut self.console, &mut self.rng, config.mode, &mut round)?;
            scoreboard.record(ResultRecord::from_round(&round, outcome));
        }
        Ok(scoreboard)
    }

    pub fn console(&self) -> &Console<I, O> {
        &self.console
    }

    pub fn into_console(self) -> Console<I, O> {
        self.console
    }
}
