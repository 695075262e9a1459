mod generate;
mod preview;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate as generate_completions, Shell};
use sql_datagen::schema::is_yaml_path;
use sql_datagen::TableSchema;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sql-datagen")]
#[command(version)]
#[command(
    about = "Generate CREATE TABLE and INSERT statements with realistic fake data from YAML table definitions",
    long_about = None
)]
pub struct Cli {
    /// Verbose logging (debug level; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CREATE TABLE and full INSERT SQL files from a YAML table definition
    Generate {
        /// YAML table definition (.yaml or .yml)
        file: PathBuf,

        /// Output directory for the generated .sql files
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Worker threads for large row counts (default: one per CPU)
        #[arg(long, conflicts_with = "sequential")]
        threads: Option<usize>,

        /// Never generate rows in parallel
        #[arg(long, conflicts_with = "threads")]
        sequential: bool,

        /// Output a JSON summary instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Show progress while generating
        #[arg(short, long)]
        progress: bool,
    },

    /// Print the CREATE TABLE statement and a 5-row INSERT preview
    Preview {
        /// YAML table definition (.yaml or .yml)
        file: PathBuf,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            file,
            output,
            seed,
            threads,
            sequential,
            json,
            progress,
        } => generate::run(file, output, seed, threads, sequential, json, progress),
        Commands::Preview { file, seed } => preview::run(file, seed),
        Commands::Completions { shell } => {
            generate_completions(
                shell,
                &mut Cli::command(),
                "sql-datagen",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

/// Load a table definition, rejecting anything that is not a YAML file
fn load_schema(file: &Path) -> anyhow::Result<TableSchema> {
    if !is_yaml_path(file) {
        let ext = file
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        anyhow::bail!(
            "Unsupported file format: .{}. Please provide a .yaml or .yml file",
            ext
        );
    }
    let schema = TableSchema::load(file)?;
    tracing::debug!(
        table = %schema.table_name,
        columns = schema.columns.len(),
        rows = schema.rows,
        "loaded table definition"
    );
    Ok(schema)
}
