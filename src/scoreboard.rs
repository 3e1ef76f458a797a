use crate::round::{RoundOutcome, RoundSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectAnswer {
    pub prompt_term: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectAnswer {
    pub prompt_term: String,
    pub user_answer: String,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRecord {
    Correct(CorrectAnswer),
    Incorrect(IncorrectAnswer),
}

impl ResultRecord {
    pub fn from_round(round: &RoundSpec, outcome: RoundOutcome) -> Self {
        if outcome.is_correct {
            ResultRecord::Correct(CorrectAnswer {
                prompt_term: round.prompt_term.clone(),
                correct_answer: round.correct_answer.clone(),
            })
        } else {
            ResultRecord::Incorrect(IncorrectAnswer {
                prompt_term: round.prompt_term.clone(),
                user_answer: outcome.selected,
                correct_answer: round.correct_answer.clone(),
            })
        }
    }
}

/// Results of one game, in the order rounds were played.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    correct: Vec<CorrectAnswer>,
    incorrect: Vec<IncorrectAnswer>,
}

impl Scoreboard {
    pub fn record(&mut self, record: ResultRecord) {
        match record {
            ResultRecord::Correct(answer) => self.correct.push(answer),
            ResultRecord::Incorrect(answer) => self.incorrect.push(answer),
        }
    }

    pub fn correct(&self) -> &[CorrectAnswer] {
        &self.correct
    }

    pub fn incorrect(&self) -> &[IncorrectAnswer] {
        &self.incorrect
    }

    pub fn total(&self) -> usize {
        self.correct.len() + self.incorrect.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round() -> RoundSpec {
        RoundSpec {
            prompt_term: "dog".to_string(),
            correct_answer: "hundur".to_string(),
            options: vec![
                "köttur".to_string(),
                "fiskur".to_string(),
                "hundur".to_string(),
            ],
        }
    }

    #[test]
    fn test_correct_outcome_goes_to_correct_list() {
        let mut board = Scoreboard::default();
        let outcome = RoundOutcome {
            is_correct: true,
            selected: "hundur".to_string(),
        };
        board.record(ResultRecord::from_round(&round(), outcome));

        assert_eq!(
            board.correct(),
            &[CorrectAnswer {
                prompt_term: "dog".to_string(),
                correct_answer: "hundur".to_string()
            }]
        );
        assert!(board.incorrect().is_empty());
    }

    #[test]
    fn test_incorrect_outcome_keeps_user_answer() {
        let mut board = Scoreboard::default();
        let outcome = RoundOutcome {
            is_correct: false,
            selected: "fiskur".to_string(),
        };
        board.record(ResultRecord::from_round(&round(), outcome));

        assert_eq!(board.incorrect()[0].user_answer, "fiskur");
        assert_eq!(board.incorrect()[0].correct_answer, "hundur");
        assert_eq!(board.total(), 1);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut board = Scoreboard::default();
        for word in ["a", "b", "c"] {
            board.record(ResultRecord::Correct(CorrectAnswer {
                prompt_term: word.to_string(),
                correct_answer: word.to_uppercase(),
            }));
        }
        let words: Vec<_> = board.correct().iter().map(|c| c.prompt_term.as_str()).collect();
        assert_eq!(words, vec!["a", "b", "c"]);
    }
}
