use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::fs;
use std::path::Path;

use crate::error::{QuizError, Result};

static WORDS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/words");

/// One entry of a word list. Deserializes from a two-element JSON array.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub term_a: String,
    pub term_b: String,
}

impl WordPair {
    pub fn new(term_a: impl Into<String>, term_b: impl Into<String>) -> Self {
        Self {
            term_a: term_a.into(),
            term_b: term_b.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordList {
    pub name: String,
    pub pairs: Vec<WordPair>,
}

impl WordList {
    pub fn new(name: impl Into<String>, pairs: Vec<WordPair>) -> Self {
        Self {
            name: name.into(),
            pairs,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// The two word lists the quiz draws from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordBank {
    pub translations: WordList,
    pub synonyms: WordList,
}

impl WordBank {
    /// The lists compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Ok(Self {
            translations: read_list_from_dir("translations.json")?,
            synonyms: read_list_from_dir("synonyms.json")?,
        })
    }

    /// Load a bank from a JSON file with `translations` and `synonyms` lists.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| QuizError::WordBank(format!("{}: {e}", path.display())))?;
        let bank: WordBank = from_str(&contents)
            .map_err(|e| QuizError::WordBank(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            translations = bank.translations.len(),
            synonyms = bank.synonyms.len(),
            "loaded word bank"
        );
        Ok(bank)
    }
}

fn read_list_from_dir(file_name: &str) -> Result<WordList> {
    let file = WORDS_DIR
        .get_file(file_name)
        .ok_or_else(|| QuizError::WordBank(format!("{file_name} not found")))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| QuizError::WordBank(format!("{file_name} is not valid UTF-8")))?;

    from_str(file_as_str).map_err(|e| QuizError::WordBank(format!("{file_name}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashSet;
    use tempfile::tempdir;

    #[test]
    fn test_builtin_bank_loads() {
        let bank = WordBank::builtin().unwrap();

        assert_eq!(bank.translations.name, "english_icelandic");
        assert_eq!(bank.synonyms.name, "english_synonyms");
        assert!(bank.translations.len() >= 3);
        assert!(bank.synonyms.len() >= 3);
    }

    #[test]
    fn test_builtin_terms_are_unique() {
        let bank = WordBank::builtin().unwrap();

        for list in [&bank.translations, &bank.synonyms] {
            let a: HashSet<_> = list.pairs.iter().map(|p| &p.term_a).collect();
            let b: HashSet<_> = list.pairs.iter().map(|p| &p.term_b).collect();
            assert_eq!(a.len(), list.len(), "duplicate term_a in {}", list.name);
            assert_eq!(b.len(), list.len(), "duplicate term_b in {}", list.name);
        }
    }

    #[test]
    fn test_builtin_contains_known_pair() {
        let bank = WordBank::builtin().unwrap();

        assert!(bank
            .translations
            .pairs
            .contains(&WordPair::new("cat", "köttur")));
    }

    #[test]
    fn test_pair_deserializes_from_array() {
        let json_data = r#"{ "name": "test", "pairs": [["hello", "halló"], ["yes", "já"]] }"#;

        let list: WordList = from_str(json_data).expect("Failed to deserialize test list");

        assert_eq!(list.name, "test");
        assert_eq!(list.len(), 2);
        assert_eq!(list.pairs[0], WordPair::new("hello", "halló"));
    }

    #[test]
    fn test_read_missing_list() {
        let result = read_list_from_dir("nonexistent.json");
        assert_matches!(result, Err(QuizError::WordBank(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(
            &path,
            r#"{
                "translations": { "name": "t", "pairs": [["cat", "köttur"], ["dog", "hundur"], ["fish", "fiskur"]] },
                "synonyms": { "name": "s", "pairs": [["big", "large"]] }
            }"#,
        )
        .unwrap();

        let bank = WordBank::from_file(&path).unwrap();
        assert_eq!(bank.translations.len(), 3);
        assert_eq!(bank.synonyms.pairs[0], WordPair::new("big", "large"));
    }

    #[test]
    fn test_from_file_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank.json");
        fs::write(&path, "{ not json").unwrap();

        assert_matches!(WordBank::from_file(&path), Err(QuizError::WordBank(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        let result = WordBank::from_file(dir.path().join("absent.json"));
        assert_matches!(result, Err(QuizError::WordBank(msg)) if msg.contains("absent.json"));
    }
}
