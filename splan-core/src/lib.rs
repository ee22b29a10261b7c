//! Study-aid generation library.
//!
//! This crate turns raw study text into study material:
//! - Sentence segmentation on terminal punctuation
//! - Positional summaries
//! - Fill-in-the-blank flashcards
//! - Multiple-choice, true/false and fill-in-the-blank quizzes
//! - A single markdown rendering shared by every caller
//!
//! Every front end (command line, desktop client, HTTP server) goes through
//! [`Generator`], so the output is identical wherever it is produced.

/// Generation settings, generated documents and the generators themselves.
pub mod model;

/// Sentence segmentation and word helpers.
pub mod text;

/// Markdown export (file naming and writing).
pub mod export;

/// Error type shared by the whole crate.
pub mod error;

pub use error::GenerateError;
pub use model::document::{GeneratedDocument, GeneratedItem};
pub use model::generator::{generate, Generator};
pub use model::settings::{Difficulty, QuizType, SummaryLength, Tool, ToolSettings};
