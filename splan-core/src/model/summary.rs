use crate::model::document::GeneratedItem;
use crate::model::settings::SummaryLength;
use crate::text::Sentence;

/// Keeps the first sentences of the text, one bullet point each.
///
/// Strictly positional: no scoring, no deduplication.
pub(crate) fn summarize(sentences: &[Sentence<'_>], length: SummaryLength) -> Vec<GeneratedItem> {
	sentences
		.iter()
		.take(length.sentence_count())
		.map(|sentence| GeneratedItem::SummaryPoint(sentence.terminated()))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::text::split_sentences;

	const TEXT: &str = "First sentence here. Second sentence here. Third sentence here. \
		Fourth sentence here. Fifth sentence here. Sixth sentence here?";

	fn points(items: &[GeneratedItem]) -> Vec<&str> {
		items
			.iter()
			.map(|item| match item {
				GeneratedItem::SummaryPoint(text) => text.as_str(),
				other => panic!("unexpected item {other:?}"),
			})
			.collect()
	}

	#[test]
	fn keeps_the_first_sentences() {
		let sentences = split_sentences(TEXT);
		let items = summarize(&sentences, SummaryLength::Short);
		assert_eq!(
			points(&items),
			vec!["First sentence here.", "Second sentence here.", "Third sentence here."]
		);
	}

	#[test]
	fn caps_at_available_sentences() {
		let sentences = split_sentences(TEXT);
		let items = summarize(&sentences, SummaryLength::Long);
		assert_eq!(items.len(), 6);
		assert_eq!(points(&items)[5], "Sixth sentence here?");
	}
}
