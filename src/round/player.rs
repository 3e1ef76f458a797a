use rand::seq::SliceRandom;
use rand::Rng;

use super::{GameMode, RoundSpec};
use crate::console::{Console, LineSource, OutputSink, Tone};
use crate::error::Result;
use crate::input::{collect_number, Choices};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub is_correct: bool,
    pub selected: String,
}

/// Show one round, read the user's pick and say whether it was right.
///
/// Options are shuffled in place before they are numbered. The pick is
/// compared to the correct answer exactly, case included.
pub fn play_round<R, I, O>(
    console: &mut Console<I, O>,
    rng: &mut R,
    mode: GameMode,
    round: &mut RoundSpec,
) -> Result<RoundOutcome>
where
    R: Rng + ?Sized,
    I: LineSource,
    O: OutputSink,
{
    round.options.shuffle(rng);

    console.blank()?;
    let heading = match mode {
        GameMode::Translation => format!("Translate the word: {}", round.prompt_term),
        GameMode::Synonym => format!("Find a synonym for: {}", round.prompt_term),
    };
    console.say(Tone::Heading, &heading)?;
    for (i, option) in round.options.iter().enumerate() {
        console.say(Tone::Plain, &format!("{}. {option}", i + 1))?;
    }

    let count = round.options.len();
    let prompt = format!("Choose the correct {} (1-{count}): ", mode.answer_noun());
    let choice = collect_number(console, &prompt, &Choices::Range(1..=count))?;
    let selected = round.options[choice - 1].clone();
    let is_correct = selected == round.correct_answer;

    if is_correct {
        console.say(Tone::Success, "Correct!")?;
    } else {
        console.say(
            Tone::Failure,
            &format!("Incorrect. The correct answer is {}.", round.correct_answer),
        )?;
    }
    tracing::info!(
        word = %round.prompt_term,
        %selected,
        is_correct,
        "round played"
    );

    Ok(RoundOutcome {
        is_correct,
        selected,
    })
}
