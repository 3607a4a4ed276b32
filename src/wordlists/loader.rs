//! Word list loading utilities
//!
//! Reads a plain-text dictionary, one word per line.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The dictionary file could not be used
#[derive(Debug)]
pub enum DictionaryError {
    Unavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "File not available: {} ({source})", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
        }
    }
}

/// Load words from a file
///
/// The whole file is read and closed before parsing. When `length` is
/// given, only words of that length are kept.
///
/// # Errors
///
/// Returns `DictionaryError::Unavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use reverse_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordBank.txt", Some(5)).unwrap();
/// println!("Loaded {} five-letter words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    length: Option<usize>,
) -> Result<Vec<Word>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines(), length))
}

/// Parse dictionary lines into words
///
/// Lines are trimmed and lowercased. Blank lines, entries with characters
/// outside a-z, and repeats of an earlier word are skipped.
///
/// # Examples
/// ```
/// use reverse_hangman::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines(["cat", "Dog", "", "cat", "horse"], Some(3));
/// let texts: Vec<_> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cat", "dog"]);
/// ```
pub fn words_from_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    length: Option<usize>,
) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| length.is_none_or(|l| line.len() == l))
        .filter_map(|line| Word::new(line).ok())
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Keep only the words of a given length
#[must_use]
pub fn words_of_length(words: &[Word], length: usize) -> Vec<Word> {
    words.iter().filter(|w| w.len() == length).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_dictionary(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "reverse_hangman_loader_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_from_lines_filters_by_length() {
        let words = words_from_lines(["cat", "dog", "horse", "ox"], Some(3));
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn words_from_lines_without_length_keeps_all_valid() {
        let words = words_from_lines(["cat", "horse", "x-ray", "  ox  "], None);
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "horse", "ox"]);
    }

    #[test]
    fn words_from_lines_skips_duplicates_after_lowercasing() {
        let words = words_from_lines(["Bat", "bat", "BAT", "rat"], Some(3));
        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["bat", "rat"]);
    }

    #[test]
    fn words_from_lines_empty() {
        let lines: [&str; 0] = [];
        assert!(words_from_lines(lines, Some(3)).is_empty());
    }

    #[test]
    fn load_from_file_reads_and_filters() {
        let path = temp_dictionary("reads", "cat\ndog\r\nhorse\n\nbat\n");
        let words = load_from_file(&path, Some(3)).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "dog", "bat"]);
    }

    #[test]
    fn load_from_missing_file_is_unavailable() {
        let path = std::env::temp_dir().join("reverse_hangman_definitely_missing.txt");
        let err = load_from_file(&path, Some(3)).unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable { .. }));
        assert!(err.to_string().starts_with("File not available"));
    }

    #[test]
    fn words_of_length_selects_matching() {
        let words = words_from_lines(["cat", "horse", "dog"], None);
        let threes = words_of_length(&words, 3);
        assert_eq!(threes.len(), 2);
    }
}
