use rand::rngs::StdRng;
use rand::SeedableRng;

use glosa::bank::{WordBank, WordList, WordPair};
use glosa::console::{CaptureSink, Console, ScriptedInput};
use glosa::game::Quiz;
use glosa::round::GameMode;

// Headless games driven through the library with canned answers.

fn play(bank: &WordBank, seed: u64, answers: &[&str]) -> (glosa::game::GameSummary, CaptureSink) {
    let console = Console::new(
        ScriptedInput::new(answers.iter().copied()),
        CaptureSink::default(),
    );
    let mut quiz = Quiz::new(bank, StdRng::seed_from_u64(seed), console);
    let summary = quiz.run().expect("game should finish");
    let (input, output) = quiz.into_console().into_parts();
    assert_eq!(input.remaining(), 0, "every canned answer should be consumed");
    (summary, output)
}

#[test]
fn full_builtin_translation_game_tallies_every_round() {
    let bank = WordBank::builtin().unwrap();
    let (summary, output) = play(&bank, 5, &["1", "1", "5", "1", "2", "3", "1", "2"]);

    let board = &summary.scoreboard;
    assert_eq!(board.correct().len() + board.incorrect().len(), 5);

    let expected = format!(
        "Game Over! Correct answers: {}, Incorrect answers: {}",
        board.correct().len(),
        board.incorrect().len()
    );
    assert!(output.lines().contains(&expected.as_str()));

    let feedback = output
        .lines()
        .into_iter()
        .filter(|l| *l == "Correct!" || l.starts_with("Incorrect. The correct answer is"))
        .count();
    assert_eq!(feedback, 5);
}

#[test]
fn correct_answers_use_the_bank_pairs() {
    let bank = WordBank::builtin().unwrap();
    let (summary, _) = play(&bank, 8, &["1", "1", "4", "3", "3", "3", "3"]);

    let pairs = &bank.translations.pairs;
    for answer in summary.scoreboard.correct() {
        assert!(pairs.contains(&WordPair::new(
            answer.prompt_term.clone(),
            answer.correct_answer.clone()
        )));
    }
    for answer in summary.scoreboard.incorrect() {
        assert!(pairs.contains(&WordPair::new(
            answer.prompt_term.clone(),
            answer.correct_answer.clone()
        )));
        assert_ne!(answer.user_answer, answer.correct_answer);
    }
}

#[test]
fn synonym_game_on_builtin_bank() {
    let bank = WordBank::builtin().unwrap();
    let (summary, output) = play(&bank, 13, &["2", "3", "2", "2", "2"]);

    assert_eq!(summary.config.mode, GameMode::Synonym);
    assert_eq!(summary.scoreboard.total(), 3);
    assert_eq!(
        output
            .lines()
            .iter()
            .filter(|l| l.starts_with("Find a synonym for: "))
            .count(),
        3
    );
}

#[test]
fn same_seed_same_game() {
    let bank = WordBank::builtin().unwrap();
    let answers = ["1", "2", "3", "1", "1", "1"];
    let (first, first_out) = play(&bank, 21, &answers);
    let (second, second_out) = play(&bank, 21, &answers);

    assert_eq!(first, second);
    assert_eq!(first_out.entries, second_out.entries);
}

#[test]
fn three_word_scenario_offers_every_other_term() {
    let bank = WordBank {
        translations: WordList::new(
            "animals",
            vec![
                WordPair::new("cat", "köttur"),
                WordPair::new("dog", "hundur"),
                WordPair::new("fish", "fiskur"),
            ],
        ),
        synonyms: WordList::new("none", vec![]),
    };
    let (summary, output) = play(&bank, 3, &["1", "1", "2", "1", "1"]);

    assert_eq!(summary.scoreboard.total(), 2);
    // With three pairs every round offers all three Icelandic words.
    let options: Vec<_> = output
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("1. ") || l.starts_with("2. ") || l.starts_with("3. "))
        .filter(|l| !l.contains("Quiz") && !l.contains("Game"))
        .map(|l| l[3..].to_string())
        .collect();
    assert_eq!(options.len(), 6);
    for round in options.chunks(3) {
        let mut round = round.to_vec();
        round.sort();
        assert_eq!(round, vec!["fiskur", "hundur", "köttur"]);
    }
}
