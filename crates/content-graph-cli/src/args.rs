use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use content_graph::{MemoryStore, SchemaConfig};
use tracing::Subscriber;
use tracing_subscriber::{registry::LookupSpan, EnvFilter, Layer};

mod log;

pub(crate) use log::LogLevel;

use self::log::LogStyle;

pub(crate) fn parse() -> Args {
    Args::parse()
}

#[derive(Debug, Parser)]
#[command(name = "content-graph", version)]
#[command(arg_required_else_help = true)]
/// Print and query the GraphQL schema of a content store
pub(crate) struct Args {
    /// Path to the TOML schema configuration. Only the built-in types are registered without it.
    #[arg(long, short, env = "CONTENT_GRAPH_CONFIG")]
    pub config: Option<PathBuf>,
    /// Set the logging level, `RUST_LOG` takes precedence when set
    #[arg(long = "log", value_enum, env = "CONTENT_GRAPH_LOG")]
    pub log_level: Option<LogLevel>,
    /// Set the style of log output
    #[arg(long, value_enum, env = "CONTENT_GRAPH_LOG_STYLE", default_value_t)]
    log_style: LogStyle,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the schema in SDL
    Sdl,
    /// Execute a GraphQL query against JSON fixtures and print the response
    Execute(ExecuteArgs),
}

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteArgs {
    /// Path to the JSON fixtures loaded into the in-memory store. The store is empty without it.
    #[arg(long, short)]
    pub fixtures: Option<PathBuf>,
    /// Query variables as a JSON object
    #[arg(long)]
    pub variables: Option<String>,
    /// The GraphQL query
    pub query: String,
}

impl Args {
    pub fn schema_config(&self) -> anyhow::Result<SchemaConfig> {
        match &self.config {
            Some(path) => Ok(SchemaConfig::from_path(path)?),
            None => Ok(SchemaConfig::default()),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn log_filter(&self) -> EnvFilter {
        self.log_level().env_filter()
    }

    pub fn log_format<S>(&self) -> Box<dyn Layer<S> + Send + Sync + 'static>
    where
        S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync,
    {
        self.log_style.layer()
    }
}

impl ExecuteArgs {
    pub fn store(&self) -> anyhow::Result<MemoryStore> {
        match &self.fixtures {
            Some(path) => load_fixtures(path),
            None => Ok(MemoryStore::default()),
        }
    }

    pub fn variables(&self) -> anyhow::Result<async_graphql::Variables> {
        let Some(variables) = &self.variables else {
            return Ok(async_graphql::Variables::default());
        };

        let json: serde_json::Value = serde_json::from_str(variables).context("parsing --variables")?;

        anyhow::ensure!(json.is_object(), "--variables must be a JSON object");

        Ok(async_graphql::Variables::from_json(json))
    }
}

fn load_fixtures(path: &Path) -> anyhow::Result<MemoryStore> {
    MemoryStore::from_path(path).with_context(|| format!("loading fixtures from {}", path.display()))
}
