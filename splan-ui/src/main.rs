use std::fs;
use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use splan_core::export::write_export;
use splan_core::model::settings::{FLASHCARDS_RANGE, QUESTIONS_RANGE};
use splan_core::{Difficulty, Generator, QuizType, SummaryLength, Tool, ToolSettings};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Where generation runs.
#[derive(Debug, PartialEq)]
enum Backend {
    /// In-process, through `splan_core`.
    Local,
    /// Through the HTTP server.
    Remote,
}

#[derive(Serialize)]
struct ProcessRequest<'a> {
    text: &'a str,
    tool: Tool,
    settings: &'a ToolSettings,
}

/// Either envelope returned by `/v1/process-text`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProcessResponse {
    Response { response: String },
    Error { error: String },
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        Ok(Self { client })
    }

    /// Sends a POST request to `/v1/process-text`.
    ///
    /// The server's `{error}` envelope is returned as `Err` text, like transport failures.
    fn process_text(&self, base_url: &str, request: &ProcessRequest) -> Result<String, String> {
        let response = self.client
            .post(format!("{}/v1/process-text", base_url.trim_end_matches('/')))
            .json(request)
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status();
        match response.json::<ProcessResponse>() {
            Ok(ProcessResponse::Response { response }) => Ok(response),
            Ok(ProcessResponse::Error { error }) => Err(format!("{status}: {error}")),
            Err(e) => Err(format!("{status}: {e}")),
        }
    }
}

/// Desktop client state (MUST persist between frames in egui).
///
/// Holds the text, the selected tool and settings, and the last output.
struct StudyUI {
    rest: RESTContext,
    backend: Backend,
    server_url: String,

    text: String,
    file_path: String,

    tool: Tool,
    settings: ToolSettings,
    num_flashcards: u32,
    num_questions: u32,

    output: Option<String>,
    status: Option<String>,
}

impl StudyUI {
    /// Initializes the UI with sane defaults.
    fn new() -> reqwest::Result<Self> {
        let settings = ToolSettings::default();
        Ok(Self {
            rest: RESTContext::new()?,
            backend: Backend::Local,
            server_url: DEFAULT_SERVER_URL.to_owned(),

            text: String::new(),
            file_path: String::new(),

            tool: Tool::Summarize,
            num_flashcards: settings.num_flashcards(),
            num_questions: settings.num_questions(),
            settings,

            output: None,
            status: None,
        })
    }

    /// Copies the slider values into the settings.
    fn sync_settings(&mut self) -> Result<(), String> {
        self.settings.set_num_flashcards(self.num_flashcards).map_err(|e| e.to_string())?;
        self.settings.set_num_questions(self.num_questions).map_err(|e| e.to_string())
    }

    /// Performs the generation, locally or through the server.
    fn generate(&mut self) {
        if let Err(e) = self.sync_settings() {
            self.status = Some(format!("Error: {e}"));
            return;
        }

        let result = match self.backend {
            Backend::Local => Generator::new()
                .generate_text(&self.text, self.tool, &self.settings)
                .map_err(|e| e.to_string()),
            Backend::Remote => {
                let request = ProcessRequest { text: &self.text, tool: self.tool, settings: &self.settings };
                self.rest.process_text(&self.server_url, &request)
            }
        };

        match result {
            Ok(output) => {
                self.output = Some(output);
                self.status = None;
            }
            Err(e) => {
                log::warn!("Generation failed: {e}");
                self.status = Some(format!("Error: {e}"));
            }
        }
    }

    /// Writes the displayed output to `{tool}-{date}.md` in the working directory.
    fn download(&mut self) {
        let Some(output) = &self.output else {
            return;
        };
        self.status = Some(match write_export(".", self.tool, output) {
            Ok(path) => format!("Saved to {}", path.display()),
            Err(e) => format!("Error: {e}"),
        });
    }

    /// Replaces the text with the content of a text file.
    fn load_file(&mut self) {
        match fs::read_to_string(self.file_path.trim()) {
            Ok(text) => {
                self.text = text.trim().to_owned();
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    fn clear(&mut self) {
        self.text.clear();
        self.output = None;
        self.status = None;
    }

    fn tool_settings_ui(&mut self, ui: &mut egui::Ui) {
        match self.tool {
            Tool::Summarize => {
                ui.label("Summary length");
                ui.horizontal(|ui| {
                    for length in SummaryLength::ALL {
                        ui.radio_value(&mut self.settings.summary_length, *length, length.label());
                    }
                });
                ui.end_row();
            }
            Tool::Flashcards => {
                ui.label("Number of flashcards");
                ui.add(egui::Slider::new(&mut self.num_flashcards, FLASHCARDS_RANGE));
                ui.end_row();
            }
            Tool::Quiz => {
                ui.label("Question type");
                ui.vertical(|ui| {
                    for quiz_type in QuizType::ALL {
                        ui.radio_value(&mut self.settings.quiz_type, *quiz_type, quiz_type.label());
                    }
                });
                ui.end_row();

                ui.label("Difficulty");
                ui.horizontal(|ui| {
                    for difficulty in Difficulty::ALL {
                        ui.radio_value(&mut self.settings.difficulty, *difficulty, difficulty.label());
                    }
                });
                ui.end_row();

                ui.label("Number of questions");
                ui.add(egui::Slider::new(&mut self.num_questions, QUESTIONS_RANGE));
                ui.end_row();
            }
        }
    }
}

impl eframe::App for StudyUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::SidePanel::left("tools_panel").show(ctx, |ui| {
            ui.heading("Learning Tools");
            ui.separator();

            for tool in Tool::ALL {
                ui.radio_value(&mut self.tool, *tool, tool.label())
                    .on_hover_text(tool.description());
            }
            ui.separator();

            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    self.tool_settings_ui(ui);

                    ui.label("Backend");
                    ui.vertical(|ui| {
                        ui.radio_value(&mut self.backend, Backend::Local, "Local");
                        ui.radio_value(&mut self.backend, Backend::Remote, "Server");
                    });
                    ui.end_row();

                    if self.backend == Backend::Remote {
                        ui.label("Server URL");
                        ui.text_edit_singleline(&mut self.server_url);
                        ui.end_row();
                    }
                });
            ui.separator();

            if ui.add_sized([200.0, 40.0], egui::Button::new(format!("Generate {}", self.tool.label()))).clicked() {
                self.generate();
            }
            ui.horizontal(|ui| {
                if ui.add_enabled(self.output.is_some(), egui::Button::new("Download")).clicked() {
                    self.download();
                }
                if ui.button("Clear").clicked() {
                    self.clear();
                }
            });

            if let Some(status) = &self.status {
                ui.label(status.as_str());
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Text file");
                ui.text_edit_singleline(&mut self.file_path);
                if ui.button("Load").clicked() {
                    self.load_file();
                }
            });

            ui.add(
                egui::TextEdit::multiline(&mut self.text)
                    .hint_text("Paste your study material here...")
                    .desired_rows(10)
                    .desired_width(f32::INFINITY),
            );
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                match &self.output {
                    Some(output) => {
                        ui.monospace(output.as_str());
                    }
                    None => {
                        ui.label("Click Generate to start");
                    }
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "splan",
        options,
        Box::new(|_| Ok(Box::new(StudyUI::new()?))),
    )
}
