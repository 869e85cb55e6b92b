use std::io::{BufRead, Write};

use rand::rngs::ThreadRng;
use rand::Rng;

use super::error::{QuizError, QuizResult};
use super::{Corpus, QuizQuestion, Score};
use crate::config::SCORE_LIMIT;

/// Characters dropped from a word before it becomes an answer.
const STRIPPED_CHARS: [char; 2] = [',', '\n'];

/// Runs a fill-in-the-next-word quiz over a text.
pub struct QuizEngine<R: Rng = ThreadRng> {
    corpus: Corpus,
    rng: R,
    score: Score,
    limit: u32,
}

impl QuizEngine<ThreadRng> {
    pub fn new(corpus: Corpus) -> QuizResult<Self> {
        Self::with_rng(corpus, rand::thread_rng())
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Builds an engine that draws words from `rng`.
    pub fn with_rng(corpus: Corpus, rng: R) -> QuizResult<Self> {
        if corpus.is_empty() {
            return Err(QuizError::EmptyCorpus);
        }
        Ok(Self {
            corpus,
            rng,
            score: Score::default(),
            limit: SCORE_LIMIT,
        })
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.score.reached(self.limit)
    }

    /// Masks a uniformly drawn word. The corpus is never empty here, the
    /// constructors reject that.
    pub fn generate_question(&mut self) -> QuizResult<QuizQuestion> {
        let index = self.rng.gen_range(0..self.corpus.len());
        log::debug!("Drew word {} of {}", index, self.corpus.len());
        self.question_at(index)
    }

    /// The question that masks the word at `index`.
    pub fn question_at(&self, index: usize) -> QuizResult<QuizQuestion> {
        let tokens = self.corpus.tokens();
        let word = tokens.get(index).ok_or(QuizError::IndexOutOfRange {
            index,
            len: tokens.len(),
        })?;

        let answer = word
            .chars()
            .filter(|c| !STRIPPED_CHARS.contains(c))
            .collect::<String>()
            .to_lowercase();

        let mut context = String::new();
        for token in &tokens[..index] {
            context.push_str(token);
            context.push(' ');
        }
        // One underscore per character of the answer, not of the raw word
        context.extend(answer.chars().map(|_| '_'));

        Ok(QuizQuestion::new(context, answer))
    }

    /// Scores a guess. Surrounding whitespace and case are ignored.
    ///
    /// Must not be called once the quiz is finished; neither counter goes
    /// past the limit.
    pub fn check_answer(&mut self, question: &QuizQuestion, guess: &str) -> bool {
        debug_assert!(!self.is_finished(), "answer checked after the quiz ended");
        let is_correct = guess.trim().to_lowercase() == question.answer;
        self.score.record(is_correct);
        log::debug!(
            "Guess {:?} for {:?}: {} correct, {} incorrect",
            guess,
            question.answer,
            self.score.correct(),
            self.score.incorrect()
        );
        is_correct
    }

    pub fn summary(&self) -> String {
        let score = self.score();
        format!("You got {}/{} correct.", score.correct(), score.attempts())
    }

    /// Asks questions until either counter reaches the limit, one line of
    /// `input` per question.
    pub fn play<I: BufRead, O: Write>(&mut self, input: &mut I, output: &mut O) -> QuizResult<()> {
        log::info!("Starting quiz over {} words", self.corpus.len());
        while !self.is_finished() {
            let question = self.generate_question()?;

            writeln!(output, "{}", question.context)?;
            writeln!(output, "What is the next word?")?;
            output.flush()?;

            let mut guess = String::new();
            if input.read_line(&mut guess)? == 0 {
                return Err(QuizError::InputClosed);
            }

            if self.check_answer(&question, &guess) {
                writeln!(output, "You are correct!")?;
            } else {
                writeln!(
                    output,
                    "You are incorrect. The correct word is {}.",
                    question.answer
                )?;
            }
            writeln!(output)?;
        }
        writeln!(output, "{}", self.summary())?;
        log::info!("Quiz finished: {}", self.summary());
        Ok(())
    }
}
