pub mod core;

pub use self::core::{WordBank, WordList, WordPair};
