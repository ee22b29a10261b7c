/// Marker replacing the key word in blanked questions.
pub const BLANK: &str = "_____";

/// A sentence body must be strictly longer than this (in characters) to be kept.
pub const MIN_SENTENCE_LEN: usize = 10;

/// A token must be strictly longer than this (in characters) to be a key word.
pub const MIN_KEY_WORD_LEN: usize = 3;

/// A sentence unit borrowed from the source text.
///
/// - `body` is the trimmed text between two runs of terminal punctuation
/// - `terminator` is the punctuation run closing it (`"."`, `"?!"`, ...),
///   empty for trailing text that was never terminated
///
/// # Invariants
/// - `body` is trimmed, longer than [`MIN_SENTENCE_LEN`] characters and
///   holds at least one alphabetic character
/// - `body` never contains `.`, `!` or `?`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
	body: &'a str,
	terminator: &'a str,
}

impl<'a> Sentence<'a> {
	pub fn body(&self) -> &'a str {
		self.body
	}

	pub fn terminator(&self) -> &'a str {
		self.terminator
	}

	/// Returns the sentence closed by its own terminator, or by a period
	/// when it had none.
	pub fn terminated(&self) -> String {
		close(self.body, self.terminator)
	}

	/// Whitespace separated tokens, punctuation included.
	pub fn words(&self) -> Vec<&'a str> {
		self.body.split_whitespace().collect()
	}

	/// Tokens long enough to be used as a key word.
	pub fn key_word_candidates(&self) -> Vec<&'a str> {
		self.body
			.split_whitespace()
			.filter(|word| word.chars().count() > MIN_KEY_WORD_LEN)
			.collect()
	}

	/// Replaces the first occurrence of `word` with [`BLANK`] and closes the sentence.
	pub fn blanked(&self, word: &str) -> String {
		self.replaced(word, BLANK)
	}

	/// Replaces the first occurrence of `from` with `to` and closes the sentence.
	pub fn replaced(&self, from: &str, to: &str) -> String {
		close(&self.body.replacen(from, to, 1), self.terminator)
	}
}

fn close(body: &str, terminator: &str) -> String {
	if terminator.is_empty() {
		format!("{body}.")
	} else {
		format!("{body}{terminator}")
	}
}

fn is_terminator(c: char) -> bool {
	matches!(c, '.' | '!' | '?')
}

/// Splits a text into sentence units, in order of appearance.
///
/// - Splits on runs of `.`, `!` and `?`
/// - Trims every unit
/// - Drops units of [`MIN_SENTENCE_LEN`] characters or less, and units
///   without any alphabetic character
///
/// Trailing text without a terminator is kept as a unit too.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
	let mut sentences = Vec::new();
	let mut start = 0;
	let mut chars = text.char_indices().peekable();

	while let Some((i, c)) = chars.next() {
		if !is_terminator(c) {
			continue;
		}
		let mut end = i + c.len_utf8();
		while let Some(&(j, next)) = chars.peek() {
			if !is_terminator(next) {
				break;
			}
			end = j + next.len_utf8();
			chars.next();
		}
		push_sentence(&mut sentences, &text[start..i], &text[i..end]);
		start = end;
	}
	push_sentence(&mut sentences, &text[start..], "");

	sentences
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, body: &'a str, terminator: &'a str) {
	let body = body.trim();
	if body.chars().count() > MIN_SENTENCE_LEN && body.chars().any(char::is_alphabetic) {
		sentences.push(Sentence { body, terminator });
	}
}

/// Capitalizes every `-` separated word and joins them with spaces.
///
/// Example: `"multiple-choice"` → `"Multiple Choice"`
pub fn title_case(value: &str) -> String {
	value
		.split('-')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_on_terminators_and_keeps_them() {
		let sentences = split_sentences("The cat sat down. Is the dog here?! Birds fly high");
		let bodies: Vec<&str> = sentences.iter().map(Sentence::body).collect();
		assert_eq!(bodies, vec!["The cat sat down", "Is the dog here", "Birds fly high"]);
		assert_eq!(sentences[0].terminator(), ".");
		assert_eq!(sentences[1].terminator(), "?!");
		assert_eq!(sentences[2].terminator(), "");
	}

	#[test]
	fn drops_short_and_non_alphabetic_units() {
		let sentences = split_sentences("Too short. 1234567890123. A sentence long enough.");
		assert_eq!(sentences.len(), 1);
		assert_eq!(sentences[0].body(), "A sentence long enough");
	}

	#[test]
	fn length_threshold_is_exclusive() {
		// "abcdefghij" has exactly 10 characters
		assert!(split_sentences("abcdefghij.").is_empty());
		assert_eq!(split_sentences("abcdefghijk.").len(), 1);
	}

	#[test]
	fn empty_and_blank_texts_have_no_sentences() {
		assert!(split_sentences("").is_empty());
		assert!(split_sentences("   \n\t ").is_empty());
		assert!(split_sentences("...!?").is_empty());
	}

	#[test]
	fn handles_multibyte_text() {
		let sentences = split_sentences("Les élèves étudient beaucoup. Ça marche très bien!");
		assert_eq!(sentences.len(), 2);
		assert_eq!(sentences[0].body(), "Les élèves étudient beaucoup");
		assert_eq!(sentences[1].terminated(), "Ça marche très bien!");
	}

	#[test]
	fn terminated_adds_a_period_only_when_missing() {
		let sentences = split_sentences("Where did the river go? It flowed into the sea");
		assert_eq!(sentences[0].terminated(), "Where did the river go?");
		assert_eq!(sentences[1].terminated(), "It flowed into the sea.");
	}

	#[test]
	fn key_word_candidates_are_longer_than_three_chars() {
		let sentences = split_sentences("The big cat sat on a warm mat today.");
		assert_eq!(sentences[0].key_word_candidates(), vec!["warm", "today"]);
		assert_eq!(sentences[0].words().len(), 9);
	}

	#[test]
	fn blanked_replaces_first_occurrence_only() {
		let sentences = split_sentences("Water boils, then water cools.");
		assert_eq!(sentences[0].blanked("water"), "Water boils, then _____ cools.");
		assert_eq!(sentences[0].replaced("then", "and"), "Water boils, and water cools.");
	}

	#[test]
	fn title_case_capitalizes_each_word() {
		assert_eq!(title_case("multiple-choice"), "Multiple Choice");
		assert_eq!(title_case("fill-in-blanks"), "Fill In Blanks");
		assert_eq!(title_case("easy"), "Easy");
	}
}
