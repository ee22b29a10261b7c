use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::model::settings::Tool;

/// Content type of exported documents.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown";

/// Builds the export file name for a tool and a date.
///
/// Example: `Tool::Quiz` on 2024-03-09 → `quiz-2024-03-09.md`
pub fn export_file_name(tool: Tool, date: NaiveDate) -> String {
	format!("{}-{}.md", tool.as_str(), date.format("%Y-%m-%d"))
}

/// Export file name for today (UTC).
pub fn today_file_name(tool: Tool) -> String {
	export_file_name(tool, Utc::now().date_naive())
}

/// Writes rendered study material into `dir`, named after the tool and today's date.
///
/// - Creates `dir` if missing
/// - Overwrites an export of the same tool made the same day
///
/// Returns the path of the written file.
pub fn write_export<P: AsRef<Path>>(dir: P, tool: Tool, content: &str) -> io::Result<PathBuf> {
	let dir = dir.as_ref();
	if !dir.as_os_str().is_empty() {
		fs::create_dir_all(dir)?;
	}

	let path = dir.join(today_file_name(tool));
	fs::write(&path, content)?;
	log::info!("Exported {tool} to {}", path.display());

	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_files_after_tool_and_date() {
		let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
		assert_eq!(export_file_name(Tool::Quiz, date), "quiz-2024-03-09.md");
		assert_eq!(export_file_name(Tool::Summarize, date), "summarize-2024-03-09.md");
	}

	#[test]
	fn writes_content_as_is() {
		let dir = tempfile::tempdir().unwrap();
		let target = dir.path().join("exports");
		let path = write_export(&target, Tool::Flashcards, "# Study Flashcards").unwrap();

		assert_eq!(path.parent(), Some(target.as_path()));
		assert_eq!(path.file_name().unwrap().to_string_lossy(), today_file_name(Tool::Flashcards));
		assert_eq!(fs::read_to_string(&path).unwrap(), "# Study Flashcards");
	}
}
