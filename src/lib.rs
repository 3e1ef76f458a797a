// Library surface for the binary and for integration tests.
pub mod bank;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod input;
pub mod report;
pub mod round;
pub mod scoreboard;

pub use error::{QuizError, Result};
