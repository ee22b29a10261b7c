use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use splan_core::export::write_export;
use splan_core::{Difficulty, Generator, QuizType, SummaryLength, Tool, ToolSettings};

/// Turns study text into a summary, flashcards or a quiz.
#[derive(Parser, Debug)]
#[command(name = "splan", version, about)]
struct Cli {
    /// Tool to use: summarize, flashcards or quiz
    #[arg(short, long)]
    tool: Tool,

    /// Text file to read (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Summary length: short, medium or long
    #[arg(long, default_value = "medium")]
    summary_length: SummaryLength,

    /// Number of flashcards (1-50)
    #[arg(long, default_value_t = 10)]
    num_flashcards: u32,

    /// Quiz type: multiple-choice, true-false or fill-in-blanks
    #[arg(long, default_value = "multiple-choice")]
    quiz_type: QuizType,

    /// Quiz difficulty: easy, medium or hard
    #[arg(long, default_value = "medium")]
    difficulty: Difficulty,

    /// Number of quiz questions (1-20)
    #[arg(long, default_value_t = 5)]
    num_questions: u32,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the result to `{tool}-{date}.md` in this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Result<ToolSettings> {
        let mut settings = ToolSettings::default();
        settings.summary_length = self.summary_length;
        settings.quiz_type = self.quiz_type;
        settings.difficulty = self.difficulty;
        settings.set_num_flashcards(self.num_flashcards)?;
        settings.set_num_questions(self.num_questions)?;
        Ok(settings)
    }

    fn read_text(&self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
                Ok(text)
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let text = cli.read_text()?;

    let mut generator = match cli.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::new(),
    };
    let document = generator.generate(&text, cli.tool, &settings)?;
    if document.is_empty() {
        log::warn!("No usable sentence found in the input");
    }

    let output = document.render();
    println!("{output}");

    if let Some(dir) = &cli.export {
        let path = write_export(dir, cli.tool, &output)
            .with_context(|| format!("Failed to export to {}", dir.display()))?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tool_settings_from_arguments() {
        let cli = Cli::try_parse_from([
            "splan",
            "--tool",
            "quiz",
            "--quiz-type",
            "true-false",
            "--difficulty",
            "hard",
            "--num-questions",
            "12",
        ])
        .unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(cli.tool, Tool::Quiz);
        assert_eq!(settings.quiz_type, QuizType::TrueFalse);
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.num_questions(), 12);
    }

    #[test]
    fn rejects_unknown_tools_and_bad_counts() {
        assert!(Cli::try_parse_from(["splan", "--tool", "essay"]).is_err());

        let cli = Cli::try_parse_from(["splan", "--tool", "flashcards", "--num-flashcards", "80"]).unwrap();
        assert!(cli.settings().is_err());
    }
}
