use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::model::document::GeneratedItem;
use crate::model::flashcards::{blank_key_word, pick_key_word};
use crate::model::settings::QuizType;
use crate::text::Sentence;

/// Maximum number of wrong options offered in a multiple-choice question.
const MAX_DISTRACTORS: usize = 3;

/// Builds one question per sentence, up to `count`.
pub(crate) fn quiz<R: Rng + ?Sized>(
	sentences: &[Sentence<'_>],
	quiz_type: QuizType,
	count: usize,
	rng: &mut R,
) -> Vec<GeneratedItem> {
	sentences
		.iter()
		.take(count)
		.filter_map(|sentence| match quiz_type {
			QuizType::MultipleChoice => multiple_choice(sentence, rng),
			QuizType::TrueFalse => true_false(sentence, rng),
			QuizType::FillInBlanks => fill_in_blanks(sentence, rng),
		})
		.collect()
}

/// Blanks a key word and offers it among up to three other words of the sentence.
///
/// Sentences with few long words get fewer options.
fn multiple_choice<R: Rng + ?Sized>(sentence: &Sentence<'_>, rng: &mut R) -> Option<GeneratedItem> {
	let answer = pick_key_word(sentence, rng)?;

	let mut distractors: Vec<&str> = Vec::new();
	for word in sentence.key_word_candidates() {
		if word != answer && !distractors.contains(&word) {
			distractors.push(word);
		}
	}
	distractors.shuffle(rng);
	distractors.truncate(MAX_DISTRACTORS);

	let mut options: Vec<String> = distractors.into_iter().map(str::to_owned).collect();
	options.push(answer.to_owned());
	options.shuffle(rng);

	Some(GeneratedItem::QuizQuestion {
		question: sentence.blanked(answer),
		options: Some(options),
		answer: answer.to_owned(),
	})
}

/// Keeps the sentence as is half of the time; otherwise swaps one of its
/// words for another one of its words.
///
/// The swap may pick the same word twice, leaving the sentence unchanged
/// while the answer stays "False".
fn true_false<R: Rng + ?Sized>(sentence: &Sentence<'_>, rng: &mut R) -> Option<GeneratedItem> {
	if rng.random_bool(0.5) {
		return Some(GeneratedItem::QuizQuestion {
			question: sentence.terminated(),
			options: None,
			answer: "True".to_owned(),
		});
	}

	let words = sentence.words();
	let target = *words.choose(rng)?;
	let replacement = *words.choose(rng)?;
	Some(GeneratedItem::QuizQuestion {
		question: sentence.replaced(target, replacement),
		options: None,
		answer: "False".to_owned(),
	})
}

fn fill_in_blanks<R: Rng + ?Sized>(sentence: &Sentence<'_>, rng: &mut R) -> Option<GeneratedItem> {
	let (question, answer) = blank_key_word(sentence, rng)?;
	Some(GeneratedItem::QuizQuestion { question, options: None, answer })
}
