//! Study material generation.
//!
//! - Tool settings and their wire keywords (`ToolSettings`)
//! - Generated items and documents (`GeneratedDocument`)
//! - The generator dispatching to each tool (`Generator`)
//! - The markdown renderer shared by every caller

/// Entry point: validates settings, segments text and dispatches per tool.
pub mod generator;

/// Tools, settings and their accepted values.
pub mod settings;

/// Generated items and the immutable document holding them.
pub mod document;

/// Markdown rendering of a document.
pub mod render;

/// First-N sentence summaries.
mod summary;

/// Key word blanking, shared with fill-in-the-blank quiz questions.
mod flashcards;

/// Multiple-choice, true/false and fill-in-the-blank questions.
mod quiz;
