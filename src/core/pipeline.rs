/// The generation pipeline: documents → tokens → transition table → text.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::chain::{ChainBuilder, ChainError, TransitionTable};
use crate::core::generator::{GenerateError, TextGenerator};
use crate::core::tokenizer::tokenize;
use crate::source::{read_all, DocumentSource, SourceError, TextSource};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// A built model plus its random source. Built via `TextEngine::builder()`.
pub struct TextEngine {
    table: TransitionTable,
    rng: StdRng,
    seed: Option<u64>,
    step_limit: Option<usize>,
}

/// Builder for constructing a `TextEngine`.
pub struct TextEngineBuilder {
    order: usize,
    seed: Option<u64>,
    step_limit: Option<usize>,
    sources: Vec<Box<dyn DocumentSource>>,
}

impl TextEngine {
    pub fn builder() -> TextEngineBuilder {
        TextEngineBuilder {
            order: 3,
            seed: None,
            step_limit: None,
            sources: Vec::new(),
        }
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate one sentence.
    pub fn generate(&mut self) -> Result<String, PipelineError> {
        let generator = TextGenerator::new(&self.table)?.with_step_limit(self.step_limit);
        Ok(generator.generate(&mut self.rng)?)
    }

    /// Generate `count` sentences, failing on the first error.
    pub fn generate_many(&mut self, count: usize) -> Result<Vec<String>, PipelineError> {
        let generator = TextGenerator::new(&self.table)?.with_step_limit(self.step_limit);
        Ok(generator.generate_many(&mut self.rng, count)?)
    }
}

impl TextEngineBuilder {
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn step_limit(mut self, limit: Option<usize>) -> Self {
        self.step_limit = limit;
        self
    }

    /// Append a document. Documents are read in the order they were added.
    pub fn source(mut self, source: impl DocumentSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn sources<I>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn DocumentSource>>,
    {
        self.sources.extend(sources);
        self
    }

    /// Append in-memory text (for testing without files).
    pub fn text(self, text: &str) -> Self {
        self.source(TextSource::new(text))
    }

    /// Read all sources and build the transition table.
    ///
    /// An order of zero is rejected before any source is read. Too few
    /// tokens still builds (an empty table); generation then fails.
    pub fn build(self) -> Result<TextEngine, PipelineError> {
        let builder = ChainBuilder::new(self.order)?;
        let text = read_all(&self.sources)?;
        let tokens = tokenize(&text);
        let table = builder.build(&tokens);

        if table.is_empty() {
            tracing::warn!(
                tokens = tokens.len(),
                order = self.order,
                "source text too short for the requested order"
            );
        }

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(TextEngine {
            table,
            rng,
            seed: self.seed,
            step_limit: self.step_limit,
        })
    }
}
