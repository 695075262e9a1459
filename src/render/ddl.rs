//! `CREATE TABLE` rendering.

use super::{escape_string_literal, push_lines, INDENT};
use crate::schema::{Column, TableSchema, ValidationError};

/// Render the `CREATE TABLE` statement for a table definition.
///
/// ```text
/// CREATE TABLE main.sales.users (
///     id BIGINT NOT NULL,
///     email STRING COMMENT 'Login address',
///     PRIMARY KEY (id)
/// );
/// ```
pub fn render_create_table(schema: &TableSchema) -> Result<String, ValidationError> {
    schema.validate()?;

    let mut lines = vec![format!("CREATE TABLE {} (", schema.qualified_name())];

    let pk_columns: Vec<&str> = schema
        .primary_key_columns()
        .map(|c| c.name.as_str())
        .collect();

    push_lines(
        &mut lines,
        schema.columns.iter().map(column_definition),
        !pk_columns.is_empty(),
    );

    if !pk_columns.is_empty() {
        lines.push(format!("{}PRIMARY KEY ({})", INDENT, pk_columns.join(", ")));
    }

    lines.push(");".to_string());
    Ok(lines.join("\n"))
}

fn column_definition(col: &Column) -> String {
    let mut def = format!("{} {}", col.name, col.data_type);
    if !col.accepts_null() {
        def.push_str(" NOT NULL");
    }
    if let Some(comment) = col.comment.as_deref().filter(|c| !c.is_empty()) {
        def.push_str(&format!(" COMMENT '{}'", escape_string_literal(comment)));
    }
    def
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_definition() {
        assert_eq!(column_definition(&Column::new("a", "INT")), "a INT");
        assert_eq!(
            column_definition(&Column::new("a", "INT").not_null()),
            "a INT NOT NULL"
        );
        assert_eq!(
            column_definition(&Column::new("id", "BIGINT").primary_key()),
            "id BIGINT NOT NULL"
        );
        assert_eq!(
            column_definition(&Column::new("n", "STRING").comment("user's name")),
            "n STRING COMMENT 'user''s name'"
        );
    }

    #[test]
    fn test_without_primary_key() {
        let schema = TableSchema::new("t")
            .column(Column::new("a", "INT"))
            .column(Column::new("b", "STRING"));
        assert_eq!(
            render_create_table(&schema).unwrap(),
            "CREATE TABLE t (\n    a INT,\n    b STRING\n);"
        );
    }

    #[test]
    fn test_with_trailing_primary_key_column() {
        let schema = TableSchema::new("t")
            .schema("s")
            .column(Column::new("a", "INT"))
            .column(Column::new("id", "BIGINT").primary_key());
        assert_eq!(
            render_create_table(&schema).unwrap(),
            "CREATE TABLE s.t (\n    a INT,\n    id BIGINT NOT NULL,\n    PRIMARY KEY (id)\n);"
        );
    }

    #[test]
    fn test_invalid_schema_rejected() {
        let schema = TableSchema::new("t");
        assert_eq!(
            render_create_table(&schema),
            Err(ValidationError::NoColumns)
        );
    }
}
