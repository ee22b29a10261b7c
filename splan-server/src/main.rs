use actix_cors::Cors;
use actix_web::{middleware, App, HttpServer};
use clap::Parser;

mod routes;

/// Remote invocation endpoint for the study-aid generator.
#[derive(Parser, Debug)]
#[command(name = "splan-server", version, about)]
struct Config {
	/// Address to bind to
	#[arg(long, env = "SPLAN_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Port to listen on
	#[arg(long, env = "SPLAN_PORT", default_value_t = 5000)]
	port: u16,

	/// Number of worker threads (defaults to the number of CPUs)
	#[arg(long, env = "SPLAN_WORKERS")]
	workers: Option<usize>,
}

/// Cross-origin policy: any origin may call the API.
pub(crate) fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allow_any_method()
		.allowed_headers(["authorization", "x-client-info", "apikey", "content-type"])
		.max_age(3600)
}

/// Main entry point for the server.
///
/// Every request builds its own generator; workers share no state.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = Config::parse();
	let workers = config.workers.unwrap_or_else(num_cpus::get).max(1);
	log::info!("Listening on {}:{} with {workers} worker(s)", config.host, config.port);

	HttpServer::new(|| {
		App::new()
			.wrap(cors())
			.wrap(middleware::Logger::default())
			.configure(routes::configure)
	})
		.workers(workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
