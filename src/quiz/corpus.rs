use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::error::{QuizError, QuizResult};

/// The words of a text, in order, exactly as they were split out of it.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    tokens: Vec<String>,
}

impl Corpus {
    /// Reads a text file. A path that cannot be opened, or that is not a
    /// regular file, is reported as `NotFound`.
    pub fn open(path: impl AsRef<Path>) -> QuizResult<Self> {
        let path = path.as_ref();
        let not_found = |source| QuizError::NotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(not_found)?;
        if !file.metadata().map_err(not_found)?.is_file() {
            return Err(not_found(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        log::debug!("Reading text from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> QuizResult<Self> {
        let text = Self::read_text(reader)?;
        Ok(Self::from_text(&text))
    }

    /// Joins every line with " \n" so the first word of the next line
    /// carries the line break when the text is split on spaces.
    pub fn read_text<R: BufRead>(reader: R) -> QuizResult<String> {
        let mut text = String::new();
        for line in reader.lines() {
            text.push_str(&line?);
            text.push_str(" \n");
        }
        Ok(text)
    }

    /// Splits on single spaces. Runs of spaces leave empty words behind,
    /// trailing empty words are dropped.
    pub fn from_text(text: &str) -> Self {
        let mut tokens: Vec<String> = text.split(' ').map(str::to_string).collect();
        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        log::debug!("Split text into {} words", tokens.len());
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn line_breaks_stick_to_the_next_word() {
        let corpus = Corpus::from_reader(Cursor::new("Shall I\ncompare thee")).unwrap();
        assert_eq!(
            corpus.tokens(),
            ["Shall", "I", "\ncompare", "thee", "\n"]
        );
    }

    #[test]
    fn read_text_appends_marker_per_line() {
        let text = Corpus::read_text(Cursor::new("a b\r\nc\n")).unwrap();
        assert_eq!(text, "a b \nc \n");
    }

    #[test]
    fn punctuation_is_kept() {
        let corpus = Corpus::from_text("summer's day? Thou art,");
        assert_eq!(corpus.tokens(), ["summer's", "day?", "Thou", "art,"]);
    }

    #[test]
    fn repeated_spaces_are_not_collapsed() {
        let corpus = Corpus::from_text("a  b\tc");
        assert_eq!(corpus.tokens(), ["a", "", "b\tc"]);
    }

    #[test]
    fn trailing_spaces_are_dropped() {
        let corpus = Corpus::from_text("a b   ");
        assert_eq!(corpus.tokens(), ["a", "b"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(Corpus::from_text("").is_empty());
        assert!(Corpus::from_reader(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Corpus::open(dir.path().join("Sonnet.txt")).unwrap_err();
        assert!(matches!(err, QuizError::NotFound { .. }));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sonnet.txt");
        std::fs::create_dir(&path).unwrap();

        let err = Corpus::open(&path).unwrap_err();
        assert!(matches!(err, QuizError::NotFound { .. }));
    }

    #[test]
    fn opens_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Sonnet.txt");
        std::fs::write(&path, "Shall I compare thee\nto a summer's day?\n").unwrap();

        let corpus = Corpus::open(&path).unwrap();
        assert_eq!(corpus.len(), 9);
        assert_eq!(corpus.tokens()[4], "\nto");
    }

    #[test]
    fn bundled_sonnet_loads() {
        let corpus = Corpus::open(concat!(env!("CARGO_MANIFEST_DIR"), "/Sonnet.txt")).unwrap();
        assert_eq!(corpus.tokens()[0], "Shall");
        assert_eq!(corpus.tokens().last().map(String::as_str), Some("\n"));
        assert_eq!(corpus.tokens().iter().filter(|t| t.starts_with('\n')).count(), 14);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let err = Corpus::from_reader(Cursor::new(vec![0xff, 0xfe, b'\n'])).unwrap_err();
        assert!(matches!(err, QuizError::Io(_)));
    }
}
