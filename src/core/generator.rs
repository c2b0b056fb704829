/// Sentence generation — a random walk over a `TransitionTable`.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::chain::{TransitionTable, Window};
use crate::core::tokenizer::contains_punctuation;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("transition table is empty (source has no more tokens than the n-gram order)")]
    EmptyModel,
    #[error("no window starts with an uppercase word")]
    NoEligibleStart,
    #[error("window {0} is missing from the transition table")]
    MissingWindow(Window),
    #[error("no punctuation reached after {0} generated tokens")]
    StepLimit(usize),
}

/// Outcome of looking up the current window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A successor was drawn.
    Next(String),
    /// The window is the final one of the source; the chain ends here.
    End,
}

/// Walks a transition table to produce sentences.
#[derive(Debug, Clone)]
pub struct TextGenerator<'a> {
    table: &'a TransitionTable,
    starts: Vec<&'a Window>,
    step_limit: Option<usize>,
}

impl<'a> TextGenerator<'a> {
    /// Prepare a generator over `table`.
    ///
    /// Eligible starting windows are collected once here. An empty table is
    /// rejected; a table without eligible starts is only rejected when
    /// generation is attempted.
    pub fn new(table: &'a TransitionTable) -> Result<Self, GenerateError> {
        if table.is_empty() {
            return Err(GenerateError::EmptyModel);
        }
        let starts = table.start_windows();
        tracing::debug!(windows = table.len(), starts = starts.len(), "generator ready");
        Ok(Self {
            table,
            starts,
            step_limit: None,
        })
    }

    /// Cap the number of tokens drawn after the start window. `None` means no cap.
    pub fn with_step_limit(mut self, limit: Option<usize>) -> Self {
        self.step_limit = limit;
        self
    }

    pub fn start_count(&self) -> usize {
        self.starts.len()
    }

    /// Uniformly pick one of the uppercase-starting windows.
    pub fn choose_start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&'a Window, GenerateError> {
        self.starts
            .choose(rng)
            .copied()
            .ok_or(GenerateError::NoEligibleStart)
    }

    /// Draw the successor of `window`.
    ///
    /// A window absent from the table is the legitimate end of the chain
    /// only when it is the source's final window.
    pub fn step<R: Rng + ?Sized>(&self, window: &Window, rng: &mut R) -> Result<Step, GenerateError> {
        match self.table.successors(window.tokens()) {
            Some(successors) => successors
                .choose(rng)
                .map(|tok| Step::Next(tok.clone()))
                .ok_or_else(|| GenerateError::MissingWindow(window.clone())),
            None if self.table.tail() == Some(window) => Ok(Step::End),
            None => Err(GenerateError::MissingWindow(window.clone())),
        }
    }

    /// Generate one sentence.
    ///
    /// Emits the start window token by token, then keeps drawing successors
    /// until a token containing punctuation is emitted (it is kept) or the
    /// chain ends. The emitted tokens are joined with single spaces.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GenerateError> {
        let start = self.choose_start(rng)?;

        let mut words: Vec<&str> = Vec::new();
        for tok in start.tokens() {
            words.push(tok);
            if contains_punctuation(tok) {
                return Ok(words.join(" "));
            }
        }

        let mut current = start.clone();
        let mut drawn: Vec<String> = Vec::new();
        loop {
            if self.step_limit.is_some_and(|limit| drawn.len() >= limit) {
                return Err(GenerateError::StepLimit(drawn.len()));
            }
            match self.step(&current, rng)? {
                Step::Next(tok) => {
                    let done = contains_punctuation(&tok);
                    current = current.shift(&tok);
                    drawn.push(tok);
                    if done {
                        break;
                    }
                }
                Step::End => {
                    tracing::debug!(window = %current, "reached end of source");
                    break;
                }
            }
        }

        words.extend(drawn.iter().map(String::as_str));
        Ok(words.join(" "))
    }

    /// Generate `count` independent sentences from the same random source.
    pub fn generate_many<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<String>, GenerateError> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}
