//! `typegen` — generate GraphQL object-type definitions from an
//! introspected database schema.
//!
//! Usage:
//!   typegen --schema schema.json [--config typegen.toml] [--output DIR]
//!           [--style standalone|shared-builder] [--models User,Post]
//!
//! Command-line flags override the config file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use typegen_lib::{GeneratorConfig, OutputStyle, Schema, TypeDefinitionGenerator};

#[derive(Parser, Debug)]
#[command(name = "typegen")]
#[command(about = "Generate GraphQL object-type definitions from a schema description")]
struct Args {
    /// Introspected schema (JSON with an `outputTypes` array)
    #[arg(short, long)]
    schema: PathBuf,

    /// Generator config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit style (overrides the config file)
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Only generate these models (comma-separated)
    #[arg(long, value_delimiter = ',')]
    models: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Standalone,
    SharedBuilder,
}

impl From<StyleArg> for OutputStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Standalone => OutputStyle::Standalone,
            StyleArg::SharedBuilder => OutputStyle::SharedBuilder,
        }
    }
}

impl Args {
    fn into_config(self) -> Result<(PathBuf, GeneratorConfig)> {
        let mut config = match &self.config {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                GeneratorConfig::load(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?
            }
            None => GeneratorConfig::default(),
        };

        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(style) = self.style {
            config.style = style.into();
        }
        if let Some(models) = self.models {
            config.models = Some(models.into_iter().collect());
        }

        Ok((self.schema, config))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let (schema_path, config) = Args::parse().into_config()?;

    info!("Reading schema: {}", schema_path.display());
    let input = std::fs::read_to_string(&schema_path)
        .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
    let schema = Schema::from_json(&input)
        .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;

    let generator = TypeDefinitionGenerator::new(config);
    generator.generate(&schema)?;

    Ok(())
}
