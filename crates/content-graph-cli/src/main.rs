#![cfg_attr(test, allow(unused_crate_dependencies))]

use args::{Args, Command, ExecuteArgs};
use clap::crate_version;
use content_graph::{ContentSchema, MemoryStore, SchemaConfig};
use tokio::runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;

const THREAD_NAME: &str = "content-graph";

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    init_logging(&args);

    let crate_version = crate_version!();
    tracing::debug!("content-graph {crate_version}");

    let config = args.schema_config()?;

    let runtime = runtime::Builder::new_current_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        match &args.command {
            Command::Sdl => print_sdl(config),
            Command::Execute(execute) => run_query(config, execute).await,
        }
    })
}

fn init_logging(args: &Args) {
    tracing_subscriber::registry()
        .with(args.log_filter())
        .with(args.log_format())
        .init();
}

fn print_sdl(config: SchemaConfig) -> anyhow::Result<()> {
    let schema = ContentSchema::builder(MemoryStore::default()).config(config).build()?;

    println!("{}", schema.sdl());

    Ok(())
}

async fn run_query(config: SchemaConfig, execute: &ExecuteArgs) -> anyhow::Result<()> {
    let schema = ContentSchema::builder(execute.store()?).config(config).build()?;

    let request = async_graphql::Request::new(execute.query.clone()).variables(execute.variables()?);
    let response = schema.execute(request).await;

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        tracing::warn!(errors = response.errors.len(), "query finished with errors");
    }

    Ok(())
}
