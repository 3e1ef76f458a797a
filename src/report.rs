use comfy_table::{presets::ASCII_FULL, Cell, Table};

use crate::console::{Console, LineSource, OutputSink, Tone};
use crate::error::Result;
use crate::round::GameMode;
use crate::scoreboard::Scoreboard;

pub fn summary_line(board: &Scoreboard) -> String {
    format!(
        "Game Over! Correct answers: {}, Incorrect answers: {}",
        board.correct().len(),
        board.incorrect().len()
    )
}

fn grid() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table
}

pub fn correct_table(board: &Scoreboard, mode: GameMode) -> Option<Table> {
    if board.correct().is_empty() {
        return None;
    }
    let mut table = grid();
    table.set_header(vec![
        "Word".to_string(),
        format!("Correct {}", capitalize(mode.answer_noun())),
    ]);
    for answer in board.correct() {
        table.add_row(vec![
            Cell::new(&answer.prompt_term),
            Cell::new(&answer.correct_answer),
        ]);
    }
    Some(table)
}

pub fn incorrect_table(board: &Scoreboard) -> Option<Table> {
    if board.incorrect().is_empty() {
        return None;
    }
    let mut table = grid();
    table.set_header(vec!["Word", "Your Answer", "Correct Answer"]);
    for answer in board.incorrect() {
        table.add_row(vec![
            Cell::new(&answer.prompt_term),
            Cell::new(&answer.user_answer),
            Cell::new(&answer.correct_answer),
        ]);
    }
    Some(table)
}

/// Print the tallies, then a table per non-empty result list.
pub fn print_report<I, O>(
    console: &mut Console<I, O>,
    board: &Scoreboard,
    mode: GameMode,
) -> Result<()>
where
    I: LineSource,
    O: OutputSink,
{
    console.blank()?;
    console.say(Tone::Summary, &summary_line(board))?;

    if let Some(table) = correct_table(board, mode) {
        console.blank()?;
        console.say(Tone::Success, "Words you answered correctly:")?;
        console.say(Tone::Plain, &table.to_string())?;
    }

    if let Some(table) = incorrect_table(board) {
        console.blank()?;
        console.say(Tone::Failure, "Words you answered incorrectly:")?;
        console.say(Tone::Plain, &table.to_string())?;
    }

    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
