//! Configuration for a quiz run.

use std::path::PathBuf;

/// File the quiz reads when nothing else is given.
pub const DEFAULT_SOURCE: &str = "Sonnet.txt";

/// Number of correct or incorrect answers that ends a quiz.
pub const SCORE_LIMIT: u32 = 3;

/// Configuration for a quiz run.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Text file to quiz on, relative to the working directory.
    pub source: PathBuf,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl QuizConfig {
    /// Set the text file to quiz on.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }
}
