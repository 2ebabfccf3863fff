//! thermogen CLI entrypoint.
//! Parses command-line arguments and dispatches to the generation pipeline.
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use thermogen::generation::{GenerateConfig, build_catalog, generate_module};
use thermogen::openapi::load_schema;
use thermogen::output::{check_module, write_module};

#[derive(Parser)]
#[command(name = "thermogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Generate the typed client module from an OpenAPI schema
    Generate {
        /// Path or URL to the OpenAPI schema (YAML or JSON)
        #[arg(long)]
        schema_path: String,
        /// Output file for the generated module
        #[arg(long, default_value = "crates/thermoclient/src/api.rs")]
        out: PathBuf,
        /// Path prefix elided from operation names
        #[arg(long, default_value = "/api/v1")]
        strip_prefix: String,
        /// Client type the generated accessors attach to
        #[arg(long, default_value = "ThermalClient")]
        client_ref: String,
        /// Skip emission of `*_cached` accessor variants
        #[arg(long)]
        no_cache_accessors: bool,
        /// Verify the output file is up to date instead of writing it
        #[arg(long)]
        check: bool,
    },
    /// Parse a schema and print its endpoint catalog without writing anything
    Inspect {
        /// Path or URL to the OpenAPI schema (YAML or JSON)
        #[arg(long)]
        schema_path: String,
        /// Path prefix elided from operation names
        #[arg(long, default_value = "/api/v1")]
        strip_prefix: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            schema_path,
            out,
            strip_prefix,
            client_ref,
            no_cache_accessors,
            check,
        } => {
            let config = GenerateConfig {
                schema_source: schema_path.clone(),
                strip_prefix,
                client_ref,
                cache_accessors: !no_cache_accessors,
            };
            generate(&schema_path, &out, &config, check).await?;
        }
        Commands::Inspect {
            schema_path,
            strip_prefix,
        } => {
            inspect(&schema_path, &strip_prefix).await?;
        }
    }
    Ok(())
}

async fn generate(
    schema_path: &str,
    out: &std::path::Path,
    config: &GenerateConfig,
    check: bool,
) -> anyhow::Result<()> {
    info!(schema = %schema_path, "loading schema");
    let spec = load_schema(schema_path)
        .await
        .context("failed to load schema")?;

    let module = generate_module(&spec, config).context("failed to generate client module")?;

    if check {
        check_module(out, &module).await?;
    } else {
        write_module(out, &module)
            .await
            .context("failed to write client module")?;
    }
    Ok(())
}

async fn inspect(schema_path: &str, strip_prefix: &str) -> anyhow::Result<()> {
    let spec = load_schema(schema_path)
        .await
        .context("failed to load schema")?;

    let config = GenerateConfig {
        schema_source: schema_path.to_string(),
        strip_prefix: strip_prefix.to_string(),
        ..GenerateConfig::default()
    };
    let catalog = build_catalog(&spec, &config).context("failed to build endpoint catalog")?;

    println!("{} v{}", catalog.api_title, catalog.api_version);
    println!(
        "{} operations, {} shapes",
        catalog.endpoints.len(),
        catalog.shapes.len()
    );
    for endpoint in &catalog.endpoints {
        println!(
            "  {:<45} {:>6} {}",
            endpoint.name, endpoint.method, endpoint.path
        );
    }
    Ok(())
}
