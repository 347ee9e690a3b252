//! Layered application configuration.
//!
//! Settings are resolved in priority order: CLI flag > environment
//! variable > config file > built-in default. Environment overrides use
//! the `PCA_` prefix with `__` as the section separator, e.g.
//! `PCA_SERVER__PORT=8080`.

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Command-line interface for the server binary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<String>,
}

/// Resolved application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub assets: AssetsConfig,
}

/// Listener settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static asset settings.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub static_dir: String,
}

impl AppConfig {
    /// Load configuration from the process arguments and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration from explicit arguments, for tests and embedding.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("assets.static_dir", "static")?;

        // Config file: explicit path wins, otherwise ./config.yaml if present.
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config.yaml"));
        }

        // Environment variables, e.g. PCA_SERVER__PORT=8080. The prefix
        // separator must be set apart from the section separator, or the
        // prefix pattern becomes `PCA__`.
        builder = builder.add_source(
            Environment::with_prefix("PCA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI overrides take precedence over every other source. Clap also
        // fills these from HOST/PORT/STATIC_DIR env vars, which keeps the
        // unprefixed variables working too.
        if let Some(host) = &cli.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = &cli.static_dir {
            builder = builder.set_override("assets.static_dir", dir.as_str())?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
