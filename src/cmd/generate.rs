//! Generate command CLI handler.

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use sql_datagen::{generate_sql, GenerateOptions, Parallelism};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Serialize)]
struct GenerateSummary {
    table: String,
    qualified_name: String,
    columns: usize,
    rows: usize,
    seed: u64,
    mode: String,
    create_file: PathBuf,
    insert_file: Option<PathBuf>,
    warnings: Vec<String>,
    elapsed_ms: u128,
}

pub fn run(
    file: PathBuf,
    output: PathBuf,
    seed: Option<u64>,
    threads: Option<usize>,
    sequential: bool,
    json: bool,
    progress: bool,
) -> anyhow::Result<()> {
    let schema = super::load_schema(&file)?;

    std::fs::create_dir_all(&output)
        .with_context(|| format!("Error creating output directory: {}", output.display()))?;

    let options = GenerateOptions {
        seed,
        parallelism: parallelism(threads, sequential),
    };

    let pb = if progress && !json {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message(format!(
            "Generating {} rows for {}...",
            schema.rows, schema.table_name
        ));
        Some(pb)
    } else {
        None
    };

    let start_time = Instant::now();
    let artifacts = generate_sql(&schema, &options)?;
    let elapsed = start_time.elapsed();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| schema.table_name.clone());

    let create_file = output.join(format!("{}_create.sql", stem));
    write_sql(&create_file, &artifacts.create_table)?;

    let insert_file = if artifacts.insert_full.is_empty() {
        None
    } else {
        let path = output.join(format!("{}_insert.sql", stem));
        write_sql(&path, &artifacts.insert_full)?;
        Some(path)
    };

    if json {
        let summary = GenerateSummary {
            table: schema.table_name.clone(),
            qualified_name: schema.qualified_name(),
            columns: schema.columns.len(),
            rows: schema.rows,
            seed: artifacts.seed,
            mode: artifacts.mode.to_string(),
            create_file,
            insert_file,
            warnings: artifacts.warnings.iter().map(|w| w.to_string()).collect(),
            elapsed_ms: elapsed.as_millis(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Generated SQL for table: {}", schema.qualified_name());
    println!("  CREATE TABLE: {}", create_file.display());
    match insert_file {
        Some(path) => println!(
            "  INSERT ({} rows, {}): {}",
            schema.rows,
            artifacts.mode,
            path.display()
        ),
        None => println!(
            "  INSERT: skipped (add 'rows: N' to the YAML to generate INSERT statements)"
        ),
    }
    println!("  Seed: {}", artifacts.seed);
    println!("  Elapsed: {:.3}s", elapsed.as_secs_f64());

    if !artifacts.warnings.is_empty() {
        eprintln!("\nWarnings ({}):", artifacts.warnings.len());
        for warning in &artifacts.warnings {
            eprintln!("  ⚠ {}", warning);
        }
    }

    Ok(())
}

fn parallelism(threads: Option<usize>, sequential: bool) -> Parallelism {
    match (threads, sequential) {
        (_, true) => Parallelism::Sequential,
        (Some(n), false) => Parallelism::Threads(n),
        (None, false) => Parallelism::Auto,
    }
}

fn write_sql(path: &Path, sql: &str) -> anyhow::Result<()> {
    std::fs::write(path, sql).with_context(|| format!("Error writing {}", path.display()))
}
