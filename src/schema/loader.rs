//! YAML table definition files.
//!
//! ```yaml
//! table_name: users
//! catalog: main
//! schema: default
//! rows: 100
//! columns:
//!   - name: id
//!     type: BIGINT
//!     primary_key: true
//!   - name: email
//!     type: STRING
//!     nullable: false
//!     comment: "Login address"
//! ```

use super::TableSchema;
use anyhow::Context;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::path::Path;

impl TableSchema {
    /// Parse and validate a YAML table definition
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let schema: TableSchema =
            serde_yaml_ng::from_str(yaml).context("Error parsing YAML table definition")?;
        schema.validate()?;
        Ok(schema)
    }

    /// Load a table definition from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("File not found: {}", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Error reading YAML file: {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid table definition in {}", path.display()))
    }
}

/// Check the file extension is `.yaml` or `.yml`
pub fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRowCount {
    Int(i64),
    Float(f64),
    Other(IgnoredAny),
}

/// Row counts below zero, fractional parts and anything that is not a
/// number (null, strings, lists) all fall back to whole non-negative rows
pub(super) fn deserialize_row_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawRowCount::deserialize(deserializer)? {
        RawRowCount::Int(n) => n.max(0) as usize,
        RawRowCount::Float(f) if f.is_finite() && f > 0.0 => f as usize,
        RawRowCount::Float(_) | RawRowCount::Other(_) => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_definition() {
        let yaml = r#"
table_name: users
catalog: main
schema: sales
rows: 12
columns:
  - name: id
    type: BIGINT
    primary_key: true
  - name: email
    type: STRING
    nullable: false
    comment: "User's login"
  - name: nickname
    type: STRING
"#;
        let schema = TableSchema::from_yaml_str(yaml).unwrap();

        assert_eq!(schema.table_name, "users");
        assert_eq!(schema.catalog.as_deref(), Some("main"));
        assert_eq!(schema.schema_name.as_deref(), Some("sales"));
        assert_eq!(schema.rows, 12);
        assert_eq!(schema.columns.len(), 3);
        assert!(schema.columns[0].primary_key);
        assert!(!schema.columns[1].nullable);
        assert_eq!(schema.columns[1].comment.as_deref(), Some("User's login"));
        assert!(schema.columns[2].nullable);
        assert!(!schema.columns[2].primary_key);
    }

    #[test]
    fn test_rows_default_and_negative() {
        let yaml = "table_name: t\ncolumns:\n  - name: a\n    type: INT\n";
        assert_eq!(TableSchema::from_yaml_str(yaml).unwrap().rows, 0);

        let yaml = "table_name: t\nrows: -5\ncolumns:\n  - name: a\n    type: INT\n";
        assert_eq!(TableSchema::from_yaml_str(yaml).unwrap().rows, 0);
    }

    #[test]
    fn test_non_numeric_rows_fall_back_to_zero() {
        for rows in ["\"10\"", "~", "[3]", "ten"] {
            let yaml = format!("table_name: t\nrows: {}\ncolumns:\n  - name: a\n    type: INT\n", rows);
            assert_eq!(TableSchema::from_yaml_str(&yaml).unwrap().rows, 0, "rows: {}", rows);
        }

        let yaml = "table_name: t\nrows: 7.9\ncolumns:\n  - name: a\n    type: INT\n";
        assert_eq!(TableSchema::from_yaml_str(yaml).unwrap().rows, 7);
    }

    #[test]
    fn test_missing_columns_rejected() {
        let err = TableSchema::from_yaml_str("table_name: t\nrows: 3\n").unwrap_err();
        assert!(format!("{:#}", err).contains("columns"));
    }

    #[test]
    fn test_is_yaml_path() {
        assert!(is_yaml_path(Path::new("users.yaml")));
        assert!(is_yaml_path(Path::new("dir/users.YML")));
        assert!(!is_yaml_path(Path::new("users.json")));
        assert!(!is_yaml_path(Path::new("users")));
    }
}
