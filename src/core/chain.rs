/// Transition table construction — sliding n-token windows over a token stream.

use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

use crate::core::tokenizer::is_sentence_start;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("n-gram order must be at least 1, got {0}")]
    InvalidOrder(usize),
}

/// A fixed-length run of consecutive tokens, used as the Markov key.
///
/// Two windows are equal when their token sequences are equal, regardless
/// of where in the source they were observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Window(Vec<String>);

impl Window {
    pub fn new(tokens: Vec<String>) -> Self {
        Window(tokens)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// The window that follows this one once `next` has been emitted.
    pub fn shift(&self, next: &str) -> Window {
        let mut tokens = Vec::with_capacity(self.0.len());
        tokens.extend(self.0.iter().skip(1).cloned());
        tokens.push(next.to_owned());
        Window(tokens)
    }

    /// Eligible as a starting point: the first token starts with an uppercase letter.
    pub fn is_start(&self) -> bool {
        self.0.first().is_some_and(|tok| is_sentence_start(tok))
    }
}

impl Borrow<[String]> for Window {
    fn borrow(&self) -> &[String] {
        &self.0
    }
}

impl From<&[&str]> for Window {
    fn from(tokens: &[&str]) -> Self {
        Window(tokens.iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(" | "))
    }
}

/// Mapping from each observed window to the tokens seen right after it.
///
/// Successor lists keep duplicates, so a token seen twice after a window is
/// twice as likely to be drawn. Windows are stored in first-seen order,
/// which keeps sampling reproducible under a fixed seed.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    order: usize,
    entries: Vec<(Window, Vec<String>)>,
    index: FxHashMap<Window, usize>,
    /// The last `order` tokens of the source. They have no successor.
    tail: Option<Window>,
}

impl TransitionTable {
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of distinct windows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successors recorded for a window, if the window was observed with one.
    pub fn successors(&self, window: &[String]) -> Option<&[String]> {
        let &idx = self.index.get(window)?;
        Some(&self.entries[idx].1)
    }

    pub fn contains(&self, window: &[String]) -> bool {
        self.index.contains_key(window)
    }

    /// All windows in first-seen order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.entries.iter().map(|(w, _)| w)
    }

    /// Windows whose first token starts with an uppercase letter, in first-seen order.
    pub fn start_windows(&self) -> Vec<&Window> {
        self.windows().filter(|w| w.is_start()).collect()
    }

    /// Total number of (window, successor) pairs recorded.
    pub fn contributions(&self) -> usize {
        self.entries.iter().map(|(_, s)| s.len()).sum()
    }

    /// The final window of the source, which ends the chain.
    pub fn tail(&self) -> Option<&Window> {
        self.tail.as_ref()
    }

    fn record(&mut self, window: &[String], next: &str) {
        match self.index.get(window) {
            Some(&idx) => self.entries[idx].1.push(next.to_owned()),
            None => {
                let key = Window(window.to_vec());
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![next.to_owned()]));
            }
        }
    }
}

/// Builds a `TransitionTable` of a fixed order from a token sequence.
#[derive(Debug, Clone, Copy)]
pub struct ChainBuilder {
    order: usize,
}

impl ChainBuilder {
    /// Create a builder for windows of `order` tokens. Order 0 is rejected.
    pub fn new(order: usize) -> Result<Self, ChainError> {
        if order == 0 {
            return Err(ChainError::InvalidOrder(order));
        }
        Ok(Self { order })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Slide an `order`-wide frame over `tokens`, recording the token after
    /// each frame position.
    ///
    /// A sequence of `L` tokens contributes exactly `L - order` successors.
    /// When `L <= order` the table is empty.
    pub fn build<S: AsRef<str>>(&self, tokens: &[S]) -> TransitionTable {
        let n = self.order;
        let mut table = TransitionTable {
            order: n,
            entries: Vec::new(),
            index: FxHashMap::default(),
            tail: None,
        };

        if tokens.len() <= n {
            tracing::debug!(tokens = tokens.len(), order = n, "too few tokens, empty table");
            return table;
        }

        let owned: Vec<String> = tokens.iter().map(|t| t.as_ref().to_owned()).collect();
        for frame in owned.windows(n + 1) {
            table.record(&frame[..n], &frame[n]);
        }
        table.tail = Some(Window(owned[owned.len() - n..].to_vec()));

        tracing::debug!(
            tokens = owned.len(),
            order = n,
            windows = table.len(),
            contributions = table.contributions(),
            "built transition table"
        );
        table
    }
}
