//! Google Gemini API integration.
//!
//! A thin client for the Generative Language `generateContent` endpoint.
//! The stylist sends either an inline image plus a fixed instruction, or a
//! rendered text prompt, and reads back plain text.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{Blob, Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};
