pub mod corpus;
pub mod engine;
pub mod error;

pub use corpus::Corpus;
pub use engine::QuizEngine;
pub use error::{QuizError, QuizResult};

/// A masked word and the text leading up to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub context: String,
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(context: String, answer: String) -> Self {
        Self { context, answer }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    correct: u32,
    incorrect: u32,
}

impl Score {
    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    pub fn attempts(&self) -> u32 {
        self.correct + self.incorrect
    }

    /// True once either counter has reached `limit`.
    pub fn reached(&self, limit: u32) -> bool {
        self.correct >= limit || self.incorrect >= limit
    }

    fn record(&mut self, is_correct: bool) {
        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_bumps_one_counter() {
        let mut score = Score::default();
        score.record(true);
        score.record(false);
        score.record(false);
        assert_eq!(score.correct(), 1);
        assert_eq!(score.incorrect(), 2);
        assert_eq!(score.attempts(), 3);
    }

    #[test]
    fn reached_on_either_counter() {
        let mut score = Score::default();
        assert!(!score.reached(3));
        score.record(true);
        score.record(true);
        score.record(false);
        assert!(!score.reached(3));
        score.record(true);
        assert!(score.reached(3));
    }
}
