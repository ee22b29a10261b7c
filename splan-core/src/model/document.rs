use crate::model::render;
use crate::model::settings::Tool;

/// One piece of generated study material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedItem {
	/// A summary bullet point.
	SummaryPoint(String),

	/// A blanked sentence and the word that was removed.
	Flashcard { question: String, answer: String },

	/// A quiz question. `options` is only set for multiple-choice questions.
	QuizQuestion {
		question: String,
		options: Option<Vec<String>>,
		answer: String,
	},
}

/// The result of one generation request.
///
/// Built once by [`Generator`](crate::Generator) and never modified. An empty
/// document means the text held no usable sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
	tool: Tool,
	title: String,
	items: Vec<GeneratedItem>,
}

impl GeneratedDocument {
	pub(crate) fn new(tool: Tool, title: String, items: Vec<GeneratedItem>) -> Self {
		Self { tool, title, items }
	}

	pub fn tool(&self) -> Tool {
		self.tool
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	pub fn items(&self) -> &[GeneratedItem] {
		&self.items
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// `true` when there was nothing to generate from.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Renders the document to markdown.
	pub fn render(&self) -> String {
		render::render(self)
	}
}
