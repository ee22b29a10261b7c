use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::document::GeneratedItem;
use crate::text::Sentence;

/// Picks the key word of a sentence.
///
/// Chooses uniformly among tokens longer than three characters, and among
/// all tokens when the sentence has none. Returns `None` only for a sentence
/// without any token.
pub(crate) fn pick_key_word<'a, R: Rng + ?Sized>(sentence: &Sentence<'a>, rng: &mut R) -> Option<&'a str> {
	let candidates = sentence.key_word_candidates();
	if candidates.is_empty() {
		sentence.words().choose(rng).copied()
	} else {
		candidates.choose(rng).copied()
	}
}

/// Blanks one key word of a sentence.
///
/// Returns `(question, answer)`.
pub(crate) fn blank_key_word<R: Rng + ?Sized>(sentence: &Sentence<'_>, rng: &mut R) -> Option<(String, String)> {
	let key_word = pick_key_word(sentence, rng)?;
	Some((sentence.blanked(key_word), key_word.to_owned()))
}

/// Builds one flashcard per sentence, up to `count`.
pub(crate) fn flashcards<R: Rng + ?Sized>(sentences: &[Sentence<'_>], count: usize, rng: &mut R) -> Vec<GeneratedItem> {
	sentences
		.iter()
		.take(count)
		.filter_map(|sentence| blank_key_word(sentence, rng))
		.map(|(question, answer)| GeneratedItem::Flashcard { question, answer })
		.collect()
}
