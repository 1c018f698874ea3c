//! Scam classification of post bodies via a hosted LLM completion endpoint.
//!
//! Sends each candidate text to the Groq chat-completions API (OpenAI wire
//! shape) with a fixed analysis prompt, then pulls the expected fenced JSON
//! block out of the free-form reply. Every failure mode degrades to a
//! [`scamwatch_core::Verdict`] carrying an `error` — [`GroqClient::classify`]
//! never fails outright, and no retry is attempted.

mod client;
mod error;
mod extract;
mod prompt;
mod types;

pub use client::GroqClient;
pub use error::ClassifyError;
