//! Error types for the sonnet quiz.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that can occur while loading a text or running a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The source text could not be opened.
    #[error("file not found: {}", path.display())]
    NotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying open failure.
        #[source]
        source: io::Error,
    },

    /// Reading the source or the player's input failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The text holds no words to quiz on.
    #[error("the text has no words to quiz on")]
    EmptyCorpus,

    /// A question was requested for a word past the end of the text.
    #[error("word index {index} is out of range for a text of {len} words")]
    IndexOutOfRange {
        /// Requested word index.
        index: usize,
        /// Number of words in the text.
        len: usize,
    },

    /// The player's input ended before the quiz was over.
    #[error("input closed before the quiz finished")]
    InputClosed,
}
