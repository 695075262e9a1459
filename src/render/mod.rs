//! SQL text assembly for `CREATE TABLE` and `INSERT` statements.
//!
//! Output targets a single dialect (Databricks/Spark SQL style): unquoted
//! identifiers, `COMMENT '...'` column annotations and a table-level
//! `PRIMARY KEY (...)` constraint.

mod ddl;
mod insert;

pub use ddl::render_create_table;
pub use insert::{render_insert_full, render_insert_preview, PREVIEW_ROWS};

const INDENT: &str = "    ";

/// Join the non-blank parts of `catalog.schema.table` with dots.
///
/// Parts are trimmed; blank ones are left out entirely.
pub fn build_qualified_name(catalog: &str, schema: &str, table: &str) -> String {
    [catalog, schema, table]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Escape text for use inside a single-quoted SQL literal
pub fn escape_string_literal(s: &str) -> String {
    s.replace('\'', "''")
}

/// Push one indented line per item. Every line but the last ends in a comma;
/// the last one does too when `trailing_comma` is set.
fn push_lines<I>(out: &mut Vec<String>, items: I, trailing_comma: bool)
where
    I: ExactSizeIterator<Item = String>,
{
    let count = items.len();
    for (i, item) in items.enumerate() {
        let comma = if i + 1 < count || trailing_comma { "," } else { "" };
        out.push(format!("{}{}{}", INDENT, item, comma));
    }
}
