//! CLI command implementations

use std::io::{self, Write};

use crate::http_server::{openapi_document, HttpServer, HttpServerConfig};
use crate::observability;

use super::args::{Cli, Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => serve(&args),
        Command::Openapi => openapi(&mut io::stdout().lock()),
    }
}

/// Merge defaults, the optional config file and CLI overrides, in that order
pub fn resolve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => HttpServerConfig::from_file(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    Ok(config)
}

/// Start the server and block until shutdown
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    observability::init(&config.log_level)?;

    tracing::debug!(?config, "resolved configuration");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("cannot start runtime: {}", e)))?;

    runtime
        .block_on(HttpServer::with_config(config).start())
        .map_err(|e| CliError::boot_failed(e.to_string()))
}

/// Write the OpenAPI document as pretty JSON
pub fn openapi<W: Write>(out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, &openapi_document())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_resolve_defaults() {
        let config = resolve_config(&ServeArgs::default()).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1", "port": 7000, "log_level": "warn"}}"#).unwrap();

        let args = ServeArgs {
            config: Some(file.path().to_path_buf()),
            port: Some(7100),
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7100);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = ServeArgs {
            config: Some(dir.path().join("nope.json")),
            ..Default::default()
        };

        let err = resolve_config(&args).unwrap_err();
        assert_eq!(err.code(), crate::cli::CliErrorCode::ConfigError);
    }

    #[test]
    fn test_openapi_writes_json() {
        let mut out = Vec::new();
        openapi(&mut out).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(doc["openapi"], "3.0.3");
    }
}
