//! LLM integration module

pub mod client;
pub mod parser;
pub mod prompts;

pub use client::{CompletionClient, GeminiClient};
pub use parser::parse_evaluation;
pub use prompts::{EvaluationRequest, PromptTemplates};
