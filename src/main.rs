//! CLI entry point for the API Manager schema provider.
//!
//! Downloads frontend or original backend API specifications from an API
//! Manager portal, and sniffs the format of local specification files.

use anyhow::{Context, Result};
use apim_schema_provider::{
    config::ConnectionProfile,
    output::write_spec,
    provider::SchemaProvider,
    services::schema_api::{ProviderOptions, SchemaApi},
    spec::detect_version,
};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "apim_schema_provider")]
#[command(about = "Download API specifications from an API Manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Connection {
    /// API Manager base URL (e.g. https://apim.example.com:8075)
    #[arg(long, env = "APIM_URL")]
    url: String,

    /// API Manager user
    #[arg(short, long, env = "APIM_USERNAME")]
    username: String,

    /// API Manager password
    #[arg(short, long, env = "APIM_PASSWORD", hide_env_values = true)]
    password: String,
}

impl Connection {
    fn profile(&self) -> Result<ConnectionProfile> {
        Ok(ConnectionProfile::new(
            &self.url,
            self.username.as_str(),
            self.password.as_str(),
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Download the API specification for an API-ID
    Fetch {
        /// Frontend API-ID
        #[arg(value_name = "API_ID")]
        api_id: String,

        /// Download the originally imported backend specification
        #[arg(long, default_value_t = false)]
        original: bool,

        /// Request swaggerVersion=2.0, then 3.0, for the frontend specification
        #[arg(long, default_value_t = false)]
        fallback: bool,

        /// File to write the specification to (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        connection: Connection,
    },
    /// Print the backend API-ID behind a frontend API-ID
    ResolveBackend {
        /// Frontend API-ID
        #[arg(value_name = "API_ID")]
        api_id: String,

        #[command(flatten)]
        connection: Connection,
    },
    /// Detect whether a local file is a Swagger 2 or OpenAPI 3 document
    Detect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/apim_schema_provider.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("apim_schema_provider.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("RUST_LOG")
                .from_env_lossy(),
        );

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::DEBUG.into())
                .with_env_var("RUST_LOG_JSON")
                .from_env_lossy(),
        );

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            api_id,
            original,
            fallback,
            output,
            connection,
        } => {
            let mut options = ProviderOptions::default();
            if original {
                options = options.original_backend();
            }
            if fallback {
                options = options.version_fallback();
            }

            let profile = connection.profile()?;
            info!(url = %profile.base_url(), user = profile.username(), ?options, "Connecting to API Manager");
            let provider: Box<dyn SchemaApi + Send + Sync> =
                Box::new(SchemaProvider::new(&profile, options)?);

            let spec = provider
                .get_schema(&api_id)
                .await
                .with_context(|| format!("failed to load API specification for API-ID '{api_id}'"))?;

            write_spec(output.as_deref(), &spec)?;
        }
        Commands::ResolveBackend { api_id, connection } => {
            let profile = connection.profile()?;
            let provider = SchemaProvider::new(&profile, ProviderOptions::default())?;

            let backend_id = provider
                .resolve_backend_id(&api_id)
                .await
                .with_context(|| format!("failed to resolve backend API-ID for '{api_id}'"))?;

            info!(%api_id, %backend_id, "Backend API-ID resolved");
            write_spec(None, &backend_id)?;
        }
        Commands::Detect { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let version = detect_version(&content)
                .with_context(|| format!("{} is not a JSON document", file.display()))?;

            info!(file = %file.display(), %version, "Specification version detected");
        }
    }

    Ok(())
}
