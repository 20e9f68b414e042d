//! Token-stream field extraction.
//!
//! The pipeline is deliberately small and pure: `tokenizer` normalizes raw
//! text into tokens, `vocabulary` defines the closed label set, `scanner`
//! walks the token stream collecting value runs, `splitter` segments
//! multi-profile documents, and `engine` wires the stages together.

pub mod engine;
pub mod scanner;
pub mod splitter;
pub mod tokenizer;
pub mod vocabulary;
