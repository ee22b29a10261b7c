use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GenerateError;
use crate::model::document::GeneratedDocument;
use crate::model::settings::{Tool, ToolSettings};
use crate::model::{flashcards, quiz, summary};
use crate::text;

/// Turns study text into study material.
///
/// # Responsibilities
/// - Validate the settings
/// - Segment the text into sentences
/// - Dispatch to the summary, flashcard or quiz builder
///
/// The generator owns nothing but its random source, so one generator per
/// request (or per seed) is the intended usage. Summaries never touch the
/// random source.
#[derive(Debug)]
pub struct Generator<R = StdRng> {
	rng: R,
}

impl Generator<StdRng> {
	/// Creates a generator seeded from the operating system.
	pub fn new() -> Self {
		Self { rng: StdRng::from_os_rng() }
	}

	/// Creates a reproducible generator: the same seed, text and settings
	/// always produce the same document.
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}
}

impl Default for Generator<StdRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> Generator<R> {
	/// Creates a generator drawing from the given random source.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}

	/// Generates a document from `text` with the given tool.
	///
	/// # Behavior
	/// - Counts are capped at the number of usable sentences.
	/// - A text without usable sentence gives an empty document, not an error.
	///
	/// # Errors
	/// Returns an error if a count setting is outside its accepted range.
	pub fn generate(&mut self, text: &str, tool: Tool, settings: &ToolSettings) -> Result<GeneratedDocument, GenerateError> {
		settings.validate()?;

		let sentences = text::split_sentences(text.trim());
		let title = title(tool, settings);

		if sentences.is_empty() {
			log::debug!("No usable sentence for {tool} ({} bytes of text)", text.len());
			return Ok(GeneratedDocument::new(tool, title, Vec::new()));
		}

		let items = match tool {
			Tool::Summarize => summary::summarize(&sentences, settings.summary_length),
			Tool::Flashcards => {
				flashcards::flashcards(&sentences, settings.num_flashcards() as usize, &mut self.rng)
			}
			Tool::Quiz => {
				quiz::quiz(&sentences, settings.quiz_type, settings.num_questions() as usize, &mut self.rng)
			}
		};

		log::debug!("Generated {} {tool} item(s) from {} sentence(s)", items.len(), sentences.len());
		Ok(GeneratedDocument::new(tool, title, items))
	}

	/// Generates and renders a document to markdown.
	pub fn generate_text(&mut self, text: &str, tool: Tool, settings: &ToolSettings) -> Result<String, GenerateError> {
		Ok(self.generate(text, tool, settings)?.render())
	}
}

/// Document title for a tool.
///
/// Quizzes are titled `"{Difficulty} {Quiz Type} Quiz"`, e.g. `"Hard True False Quiz"`.
fn title(tool: Tool, settings: &ToolSettings) -> String {
	match tool {
		Tool::Summarize => "Summary".to_owned(),
		Tool::Flashcards => "Study Flashcards".to_owned(),
		Tool::Quiz => format!("{} {} Quiz", settings.difficulty.label(), settings.quiz_type.label()),
	}
}

/// Generates markdown study material with a fresh OS-seeded generator.
///
/// # Errors
/// Returns an error if a count setting is outside its accepted range.
pub fn generate(text: &str, tool: Tool, settings: &ToolSettings) -> Result<String, GenerateError> {
	Generator::new().generate_text(text, tool, settings)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::settings::{Difficulty, QuizType};

	#[test]
	fn quiz_title_uses_difficulty_and_type() {
		let mut settings = ToolSettings::default();
		settings.difficulty = Difficulty::Hard;
		settings.quiz_type = QuizType::FillInBlanks;
		assert_eq!(title(Tool::Quiz, &settings), "Hard Fill In Blanks Quiz");
		assert_eq!(title(Tool::Summarize, &settings), "Summary");
	}

	#[test]
	fn rejects_invalid_settings_before_generating() {
		let settings: ToolSettings = serde_json::from_str(r#"{"numQuestions":25}"#).unwrap();
		let result = Generator::seeded(1).generate("A perfectly fine sentence.", Tool::Summarize, &settings);
		assert!(matches!(result, Err(GenerateError::CountOutOfRange { field: "numQuestions", .. })));
	}

	#[test]
	fn empty_text_gives_an_empty_document() {
		let document = Generator::seeded(1).generate("  ", Tool::Flashcards, &ToolSettings::default()).unwrap();
		assert!(document.is_empty());
		assert_eq!(document.title(), "Study Flashcards");
	}
}
