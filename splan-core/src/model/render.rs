use crate::model::document::{GeneratedDocument, GeneratedItem};
use crate::model::settings::Tool;

/// Line shown in place of the items when the text had no usable sentence.
pub const NOTHING_TO_GENERATE: &str =
	"_Nothing to generate: no usable sentences were found in the text._";

/// Renders a document to markdown.
///
/// This is the only rendering of generated material: the desktop client,
/// the HTTP server and file exports all show this exact string.
///
/// Layout:
/// - `# {title}`
/// - summaries: `## Key Points` then one `- ` bullet per point
/// - flashcards: `### Flashcard {n}` blocks with bold `Question`/`Answer` labels
/// - quizzes: `### Question {n}` blocks, lettered options for multiple choice
pub fn render(document: &GeneratedDocument) -> String {
	let mut output = format!("# {}\n\n", document.title());

	if document.is_empty() {
		output.push_str(NOTHING_TO_GENERATE);
		return output;
	}

	let blocks: Vec<String> = document
		.items()
		.iter()
		.enumerate()
		.map(|(index, item)| render_item(index + 1, item))
		.collect();

	match document.tool() {
		Tool::Summarize => {
			output.push_str("## Key Points\n\n");
			output.push_str(&blocks.join("\n"));
		}
		Tool::Flashcards | Tool::Quiz => output.push_str(&blocks.join("\n\n")),
	}

	output
}

fn render_item(number: usize, item: &GeneratedItem) -> String {
	match item {
		GeneratedItem::SummaryPoint(text) => format!("- {text}"),
		GeneratedItem::Flashcard { question, answer } => {
			format!("### Flashcard {number}\n\n**Question:** {question}\n\n**Answer:** {answer}")
		}
		GeneratedItem::QuizQuestion { question, options: Some(options), answer } => {
			let options = options
				.iter()
				.enumerate()
				.map(|(index, option)| format!("{}) {option}", option_letter(index)))
				.collect::<Vec<_>>()
				.join("\n");
			format!("### Question {number}\n\n{question}\n\n{options}\n\n**Correct Answer:** {answer}")
		}
		GeneratedItem::QuizQuestion { question, options: None, answer } => {
			format!("### Question {number}\n\n{question}\n\n**Answer:** {answer}")
		}
	}
}

/// `0` → `a`, `1` → `b`, ...
fn option_letter(index: usize) -> char {
	char::from_u32('a' as u32 + index as u32).unwrap_or('?')
}
