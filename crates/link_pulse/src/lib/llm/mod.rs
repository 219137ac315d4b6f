pub mod chain;
pub mod groq;
pub mod prompt;
pub mod summarizer;
