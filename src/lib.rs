//! Markov text — word-level n-gram sentence generation.
//!
//! Builds a transition table from plain-text documents and walks it to
//! produce a new sentence that starts on a capitalised word and stops on
//! the first token carrying punctuation.

pub mod config;
pub mod core;
pub mod source;

pub use crate::core::chain::{ChainBuilder, ChainError, TransitionTable, Window};
pub use crate::core::generator::{GenerateError, Step, TextGenerator};
pub use crate::core::pipeline::{PipelineError, TextEngine, TextEngineBuilder};
