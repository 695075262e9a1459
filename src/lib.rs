//! Schema-driven synthetic data for SQL tables.
//!
//! A [`TableSchema`] (usually loaded from YAML) goes in; a `CREATE TABLE`
//! statement and a bulk `INSERT` statement filled with plausible random
//! values come out.
//!
//! # Example
//!
//! ```rust
//! use sql_datagen::{generate_sql, Column, GenerateOptions, TableSchema};
//!
//! let schema = TableSchema::new("users")
//!     .column(Column::new("id", "BIGINT").primary_key())
//!     .column(Column::new("email", "STRING"))
//!     .rows(3);
//!
//! let sql = generate_sql(&schema, &GenerateOptions::default().seed(42)).unwrap();
//! assert!(sql.create_table.contains("PRIMARY KEY (id)"));
//! assert!(sql.insert_full.contains("(1, "));
//! ```

pub mod generator;
pub mod render;
pub mod schema;
pub mod synth;

pub use generator::{
    GenerateOptions, GeneratedRows, GenerationMode, GenerationWarning, Generator, Parallelism, Row,
};
pub use render::{
    build_qualified_name, render_create_table, render_insert_full, render_insert_preview,
};
pub use schema::{Column, ColumnType, TableSchema, ValidationError};
pub use synth::{synthesize_literal, SqlValue, Synthesizer};

/// Everything produced for one table definition
#[derive(Debug, Clone)]
pub struct SqlArtifacts {
    pub create_table: String,
    /// First rows only, with a "showing N of M" note; empty when `rows == 0`
    pub insert_preview: String,
    /// All rows; empty when `rows == 0`
    pub insert_full: String,
    pub seed: u64,
    pub mode: GenerationMode,
    pub warnings: Vec<GenerationWarning>,
}

/// Render the DDL and generate every INSERT row for `schema`.
///
/// The preview is the first rows of the full INSERT, not a separate draw.
pub fn generate_sql(
    schema: &TableSchema,
    options: &GenerateOptions,
) -> Result<SqlArtifacts, ValidationError> {
    let create_table = render_create_table(schema)?;
    let generated = Generator::new(*options).generate_rows(schema)?;

    Ok(SqlArtifacts {
        create_table,
        insert_preview: render_insert_preview(schema, &generated.rows),
        insert_full: render_insert_full(schema, &generated.rows),
        seed: generated.seed,
        mode: generated.mode,
        warnings: generated.warnings,
    })
}
