use actix_web::http::header;
use actix_web::http::{Method, StatusCode};
use actix_web::{error, get, web, HttpRequest, HttpResponse, Responder, ResponseError};
use serde::{Deserialize, Serialize};

use splan_core::export::{today_file_name, MARKDOWN_CONTENT_TYPE};
use splan_core::{GenerateError, Generator, Tool, ToolSettings};

/// Body of `/v1/process-text` and `/v1/export`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProcessRequest {
	text: String,
	tool: Tool,
	#[serde(default)]
	settings: ToolSettings,
	/// Fixes the random source, for reproducible output.
	#[serde(default)]
	seed: Option<u64>,
}

impl ProcessRequest {
	fn generate(&self) -> Result<String, GenerateError> {
		match self.seed {
			Some(seed) => Generator::seeded(seed).generate_text(&self.text, self.tool, &self.settings),
			None => Generator::new().generate_text(&self.text, self.tool, &self.settings),
		}
	}
}

#[derive(Debug, Serialize)]
struct ProcessResponse {
	response: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
	error: String,
}

#[derive(Debug, Serialize)]
struct ToolInfo {
	id: Tool,
	name: String,
	description: &'static str,
}

/// Error envelope returned by every endpoint.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ApiError {
	#[error(transparent)]
	Generate(#[from] GenerateError),
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Generate(_) => StatusCode::BAD_REQUEST,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ErrorResponse { error: self.to_string() })
	}
}

/// HTTP POST endpoint `/v1/process-text`
///
/// Generates study material and returns `{"response": "..."}`.
async fn process_text(request: web::Json<ProcessRequest>) -> Result<impl Responder, ApiError> {
	let response = request.generate().inspect_err(|e| log::warn!("Rejected request: {e}"))?;
	Ok(web::Json(ProcessResponse { response }))
}

/// HTTP POST endpoint `/v1/export`
///
/// Same as `/v1/process-text`, but answers with the markdown document as an attachment.
async fn export(request: web::Json<ProcessRequest>) -> Result<impl Responder, ApiError> {
	let content = request.generate().inspect_err(|e| log::warn!("Rejected export: {e}"))?;
	let file_name = today_file_name(request.tool);
	Ok(HttpResponse::Ok()
		.insert_header((header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE))
		.insert_header((header::CONTENT_DISPOSITION, format!("attachment; filename=\"{file_name}\"")))
		.body(content))
}

/// Empty success answer to pre-flight requests.
async fn preflight() -> impl Responder {
	HttpResponse::Ok().finish()
}

/// HTTP GET endpoint `/v1/tools`
///
/// Lists the available tools.
#[get("/v1/tools")]
async fn get_tools() -> impl Responder {
	let tools: Vec<ToolInfo> = Tool::ALL
		.iter()
		.map(|tool| ToolInfo { id: *tool, name: tool.label(), description: tool.description() })
		.collect();
	HttpResponse::Ok().json(tools)
}

/// Turns body extraction failures (bad JSON, unknown tool, ...) into the error envelope.
fn json_error(err: error::JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
	let message = err.to_string();
	log::warn!("Invalid payload: {message}");
	let response = HttpResponse::BadRequest().json(ErrorResponse { error: message });
	error::InternalError::from_response(err, response).into()
}

/// Registers every endpoint.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::JsonConfig::default().error_handler(json_error))
		.service(get_tools)
		.service(
			web::resource("/v1/process-text")
				.route(web::post().to(process_text))
				.route(web::method(Method::OPTIONS).to(preflight)),
		)
		.service(
			web::resource("/v1/export")
				.route(web::post().to(export))
				.route(web::method(Method::OPTIONS).to(preflight)),
		);
}
