use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::text::title_case;

/// Declares a closed set of wire keywords.
///
/// Each enum gets `ALL`, `as_str`, `label`, `Display`, and a `FromStr`
/// that rejects unknown values with [`GenerateError::UnknownValue`].
macro_rules! keyword_enum {
	(
		$(#[$meta:meta])*
		$name:ident ($field:literal) { $($variant:ident => $value:literal),+ $(,)? }
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(#[serde(rename = $value)] $variant),+
		}

		impl $name {
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Wire keyword of the value.
			pub fn as_str(&self) -> &'static str {
				match self {
					$($name::$variant => $value),+
				}
			}

			/// Human readable label, each word capitalized.
			pub fn label(&self) -> String {
				title_case(self.as_str())
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl FromStr for $name {
			type Err = GenerateError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s.trim().to_ascii_lowercase().as_str() {
					$($value => Ok($name::$variant),)+
					_ => Err(GenerateError::UnknownValue { field: $field, value: s.to_owned() }),
				}
			}
		}
	};
}

keyword_enum! {
	/// Learning tool selected by the user.
	Tool ("tool") {
		Summarize => "summarize",
		Flashcards => "flashcards",
		Quiz => "quiz",
	}
}

keyword_enum! {
	/// Summary length, mapped to a number of sentences.
	SummaryLength ("summaryLength") {
		Short => "short",
		Medium => "medium",
		Long => "long",
	}
}

keyword_enum! {
	/// Kind of question produced by the quiz generator.
	QuizType ("quizType") {
		MultipleChoice => "multiple-choice",
		TrueFalse => "true-false",
		FillInBlanks => "fill-in-blanks",
	}
}

keyword_enum! {
	/// Quiz difficulty.
	///
	/// Only shows up in the quiz title: questions are built the same way
	/// whatever the difficulty.
	Difficulty ("difficulty") {
		Easy => "easy",
		Medium => "medium",
		Hard => "hard",
	}
}

impl Tool {
	/// Short description shown next to the tool name.
	pub fn description(&self) -> &'static str {
		match self {
			Tool::Summarize => "Generate a concise summary",
			Tool::Flashcards => "Create study flashcards",
			Tool::Quiz => "Generate practice questions",
		}
	}
}

impl SummaryLength {
	/// Maximum number of sentences kept in the summary.
	pub fn sentence_count(&self) -> usize {
		match self {
			SummaryLength::Short => 3,
			SummaryLength::Medium => 5,
			SummaryLength::Long => 7,
		}
	}
}

/// Accepted number of flashcards.
pub const FLASHCARDS_RANGE: RangeInclusive<u32> = 1..=50;

/// Accepted number of quiz questions.
pub const QUESTIONS_RANGE: RangeInclusive<u32> = 1..=20;

/// Settings for every tool.
///
/// Each tool only reads its own fields; the others are carried along so that a
/// caller can switch tools without losing its choices.
///
/// # Invariants
/// - `num_flashcards` within [`FLASHCARDS_RANGE`] when set through the setter
/// - `num_questions` within [`QUESTIONS_RANGE`] when set through the setter
///
/// Deserialized values bypass the setters, hence [`ToolSettings::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToolSettings {
	pub summary_length: SummaryLength,
	num_flashcards: u32,
	pub quiz_type: QuizType,
	pub difficulty: Difficulty,
	num_questions: u32,
}

impl Default for ToolSettings {
	fn default() -> Self {
		Self {
			summary_length: SummaryLength::Medium,
			num_flashcards: 10,
			quiz_type: QuizType::MultipleChoice,
			difficulty: Difficulty::Medium,
			num_questions: 5,
		}
	}
}

impl ToolSettings {
	pub fn num_flashcards(&self) -> u32 {
		self.num_flashcards
	}

	pub fn num_questions(&self) -> u32 {
		self.num_questions
	}

	/// Sets the number of flashcards.
	///
	/// # Errors
	/// Returns an error if the value is outside [`FLASHCARDS_RANGE`].
	pub fn set_num_flashcards(&mut self, count: u32) -> Result<(), GenerateError> {
		check_count("numFlashcards", count, &FLASHCARDS_RANGE)?;
		self.num_flashcards = count;
		Ok(())
	}

	/// Sets the number of quiz questions.
	///
	/// # Errors
	/// Returns an error if the value is outside [`QUESTIONS_RANGE`].
	pub fn set_num_questions(&mut self, count: u32) -> Result<(), GenerateError> {
		check_count("numQuestions", count, &QUESTIONS_RANGE)?;
		self.num_questions = count;
		Ok(())
	}

	/// Checks every count against its accepted range.
	pub fn validate(&self) -> Result<(), GenerateError> {
		check_count("numFlashcards", self.num_flashcards, &FLASHCARDS_RANGE)?;
		check_count("numQuestions", self.num_questions, &QUESTIONS_RANGE)
	}
}

fn check_count(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<(), GenerateError> {
	if range.contains(&value) {
		Ok(())
	} else {
		Err(GenerateError::CountOutOfRange { field, value, min: *range.start(), max: *range.end() })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_wire_keywords() {
		assert_eq!("summarize".parse::<Tool>(), Ok(Tool::Summarize));
		assert_eq!(" Fill-In-Blanks ".parse::<QuizType>(), Ok(QuizType::FillInBlanks));
		assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
		assert_eq!("long".parse::<SummaryLength>(), Ok(SummaryLength::Long));
	}

	#[test]
	fn rejects_unknown_keywords() {
		let err = "essay".parse::<Tool>().unwrap_err();
		assert_eq!(err, GenerateError::UnknownValue { field: "tool", value: "essay".to_owned() });
		assert_eq!(err.to_string(), "unknown tool 'essay'");
		assert!("open-ended".parse::<QuizType>().is_err());
	}

	#[test]
	fn labels_capitalize_words() {
		assert_eq!(QuizType::TrueFalse.label(), "True False");
		assert_eq!(Difficulty::Easy.label(), "Easy");
		assert_eq!(Tool::Flashcards.to_string(), "flashcards");
	}

	#[test]
	fn summary_lengths_map_to_sentence_counts() {
		let counts: Vec<usize> = SummaryLength::ALL.iter().map(SummaryLength::sentence_count).collect();
		assert_eq!(counts, vec![3, 5, 7]);
	}

	#[test]
	fn setters_reject_out_of_range_counts() {
		let mut settings = ToolSettings::default();
		assert!(settings.set_num_flashcards(50).is_ok());
		assert_eq!(settings.num_flashcards(), 50);
		assert!(settings.set_num_flashcards(0).is_err());
		assert!(settings.set_num_flashcards(51).is_err());
		assert_eq!(settings.num_flashcards(), 50);

		assert!(settings.set_num_questions(20).is_ok());
		let err = settings.set_num_questions(21).unwrap_err();
		assert_eq!(err.to_string(), "numQuestions must be between 1 and 20, got 21");
	}

	#[test]
	fn deserializes_camel_case_with_defaults() {
		let settings: ToolSettings =
			serde_json::from_str(r#"{"quizType":"true-false","numQuestions":3}"#).unwrap();
		assert_eq!(settings.quiz_type, QuizType::TrueFalse);
		assert_eq!(settings.num_questions(), 3);
		assert_eq!(settings.summary_length, SummaryLength::Medium);
		assert_eq!(settings.num_flashcards(), 10);
	}

	#[test]
	fn validate_catches_deserialized_out_of_range_counts() {
		let settings: ToolSettings = serde_json::from_str(r#"{"numFlashcards":0}"#).unwrap();
		assert!(matches!(
			settings.validate(),
			Err(GenerateError::CountOutOfRange { field: "numFlashcards", value: 0, .. })
		));
	}

	#[test]
	fn serde_rejects_unknown_enum_values() {
		assert!(serde_json::from_str::<ToolSettings>(r#"{"difficulty":"extreme"}"#).is_err());
	}
}
