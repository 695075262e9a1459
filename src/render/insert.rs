//! `INSERT INTO ... VALUES` rendering.

use super::push_lines;
use crate::generator::Row;
use crate::schema::TableSchema;

/// Rows shown by [`render_insert_preview`]
pub const PREVIEW_ROWS: usize = 5;

/// Render at most [`PREVIEW_ROWS`] of `rows`, with a trailing note when the
/// table asks for more rows than are shown.
///
/// Returns an empty string when the schema requests no rows.
pub fn render_insert_preview(schema: &TableSchema, rows: &[Row]) -> String {
    let shown = &rows[..rows.len().min(PREVIEW_ROWS)];
    let note = (schema.rows > PREVIEW_ROWS).then(|| {
        format!(
            "-- Showing first {} rows (total: {} rows)",
            PREVIEW_ROWS, schema.rows
        )
    });
    render_insert(schema, shown, note)
}

/// Render every row in `rows`.
///
/// Returns an empty string when the schema requests no rows.
pub fn render_insert_full(schema: &TableSchema, rows: &[Row]) -> String {
    render_insert(schema, rows, None)
}

fn render_insert(schema: &TableSchema, rows: &[Row], note: Option<String>) -> String {
    if schema.rows == 0 || rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + schema.columns.len() + 5);
    lines.push(format!("INSERT INTO {} (", schema.qualified_name()));
    push_lines(
        &mut lines,
        schema.columns.iter().map(|c| c.name.clone()),
        false,
    );
    lines.push(")".to_string());
    lines.push("VALUES".to_string());

    push_lines(&mut lines, rows.iter().map(tuple), false);

    if let Some(note) = note {
        lines.push(note);
    }
    lines.push(";".to_string());
    lines.join("\n")
}

fn tuple(row: &Row) -> String {
    let values: Vec<String> = row.iter().map(|v| v.to_sql()).collect();
    format!("({})", values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Column;
    use crate::synth::SqlValue;

    fn schema(rows: usize) -> TableSchema {
        TableSchema::new("t")
            .catalog("c")
            .column(Column::new("id", "INT").primary_key())
            .column(Column::new("flag", "BOOLEAN"))
            .rows(rows)
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| vec![SqlValue::Int(i as i64), SqlValue::Bool(i % 2 == 0)])
            .collect()
    }

    #[test]
    fn test_full_layout() {
        let sql = render_insert_full(&schema(2), &rows(2));
        assert_eq!(
            sql,
            "INSERT INTO c.t (\n    id,\n    flag\n)\nVALUES\n    (1, false),\n    (2, true)\n;"
        );
    }

    #[test]
    fn test_preview_without_note() {
        let sql = render_insert_preview(&schema(3), &rows(3));
        assert!(!sql.contains("-- Showing"));
        assert!(sql.ends_with("    (3, false)\n;"));
    }

    #[test]
    fn test_preview_caps_rows() {
        let sql = render_insert_preview(&schema(12), &rows(12));
        assert_eq!(sql.lines().filter(|l| l.starts_with("    (")).count(), 5);
        assert!(sql.ends_with("    (5, false)\n-- Showing first 5 rows (total: 12 rows)\n;"));
    }

    #[test]
    fn test_zero_rows_is_empty() {
        assert_eq!(render_insert_full(&schema(0), &[]), "");
        assert_eq!(render_insert_preview(&schema(0), &[]), "");
    }
}
