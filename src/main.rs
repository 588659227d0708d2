use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};
use workforce_report::api::{AppState, create_router};
use workforce_report::config::{ConfigLoader, ReportConfig};
use workforce_report::error::EngineError;
use workforce_report::export::JsonExporter;
use workforce_report::telemetry;

/// Process settings read from the environment.
#[derive(Debug, Clone)]
struct ServerSettings {
    host: String,
    port: u16,
    config_dir: PathBuf,
    export_dir: PathBuf,
    log_level: String,
}

impl ServerSettings {
    fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let var = |name: &str, default: &str| {
            std::env::var(name).unwrap_or_else(|_| default.to_string())
        };
        let port = var("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| format!("invalid APP_PORT: {e}"))?;

        Ok(Self {
            host: var("APP_HOST", "0.0.0.0"),
            port,
            config_dir: PathBuf::from(var("APP_CONFIG_DIR", "./config")),
            export_dir: PathBuf::from(var("APP_EXPORT_DIR", "./exports")),
            log_level: var("APP_LOG_LEVEL", telemetry::DEFAULT_LOG_LEVEL),
        })
    }
}

fn load_report_config(settings: &ServerSettings) -> Result<ReportConfig, EngineError> {
    match ConfigLoader::load(&settings.config_dir) {
        Ok(loader) => Ok(loader.into_report()),
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "Report configuration not found, using defaults");
            Ok(ReportConfig::default())
        }
        Err(err) => Err(err),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = ServerSettings::from_env()?;
    telemetry::init(&settings.log_level)?;

    let config = load_report_config(&settings)?;
    tokio::fs::create_dir_all(&settings.export_dir).await?;
    let exporter = Arc::new(JsonExporter::new(settings.export_dir.clone()));

    let router = create_router(AppState::new(config, exporter));
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        %addr,
        export_dir = %settings.export_dir.display(),
        "Workforce report service listening"
    );
    axum::serve(listener, router).await?;
    Ok(())
}
