use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use super::{GameConfig, RoundSpec};
use crate::bank::WordList;
use crate::error::{QuizError, Result};

/// Wrong answers offered next to the correct one in every round
pub const DISTRACTOR_COUNT: usize = 2;

/// Draw `config.round_count` distinct pairs and build a round for each.
///
/// Every round is built before any is returned, so a word list too small
/// for the request fails here rather than halfway through a game.
pub fn select_rounds<R: Rng + ?Sized>(
    list: &WordList,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<RoundSpec>> {
    if config.round_count > list.len() {
        return Err(QuizError::NotEnoughWords {
            requested: config.round_count,
            available: list.len(),
        });
    }

    // Distinct answer-side terms of the whole list, in list order.
    let vocabulary: Vec<&str> = list
        .pairs
        .iter()
        .map(|pair| config.answer_side(pair))
        .unique()
        .collect();

    let rounds = list
        .pairs
        .choose_multiple(rng, config.round_count)
        .map(|pair| {
            let (prompt_term, correct_answer) = config.orient(pair);
            let pool: Vec<&str> = vocabulary
                .iter()
                .copied()
                .filter(|term| *term != correct_answer)
                .collect();
            if pool.len() < DISTRACTOR_COUNT {
                return Err(QuizError::NotEnoughDistractors {
                    answer: correct_answer.to_string(),
                    needed: DISTRACTOR_COUNT,
                    available: pool.len(),
                });
            }

            let mut options: Vec<String> = pool
                .choose_multiple(rng, DISTRACTOR_COUNT)
                .map(|term| term.to_string())
                .collect();
            options.push(correct_answer.to_string());

            Ok(RoundSpec {
                prompt_term: prompt_term.to_string(),
                correct_answer: correct_answer.to_string(),
                options,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        list = %list.name,
        mode = ?config.mode,
        direction = ?config.direction,
        rounds = rounds.len(),
        "selected rounds"
    );
    Ok(rounds)
}
