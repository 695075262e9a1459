//! Preview command CLI handler.

use sql_datagen::render::PREVIEW_ROWS;
use sql_datagen::{render_create_table, render_insert_preview, GenerateOptions, Generator};
use std::path::PathBuf;

pub fn run(file: PathBuf, seed: Option<u64>) -> anyhow::Result<()> {
    let schema = super::load_schema(&file)?;

    let create_sql = render_create_table(&schema)?;
    let options = GenerateOptions {
        seed,
        ..Default::default()
    };
    let generated = Generator::new(options).generate_prefix(&schema, PREVIEW_ROWS)?;
    let insert_sql = render_insert_preview(&schema, &generated.rows);

    println!("{}", create_sql);
    if !insert_sql.is_empty() {
        println!();
        println!("{}", insert_sql);
    }

    Ok(())
}
