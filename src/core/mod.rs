pub mod chain;
pub mod generator;
pub mod pipeline;
pub mod tokenizer;
