//! Table definition model.
//!
//! This module provides:
//! - `Column` and `TableSchema`, the in-memory form of one table definition
//! - `ColumnType`, the closed set of type families the generator understands
//! - Validation of the invariants the generator and renderer rely on
//! - YAML loading of table definition files (see [`loader`])

mod loader;

pub use loader::is_yaml_path;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors raised when a table definition violates the generator's invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: table_name")]
    MissingTableName,

    #[error("missing or empty required field: columns")]
    NoColumns,

    #[error("column #{index} is missing a name")]
    MissingColumnName { index: usize },

    #[error("column '{column}' is missing a type")]
    MissingColumnType { column: String },

    #[error("column '{column}' is declared more than once")]
    DuplicateColumn { column: String },
}

/// SQL type family, used to pick a value generator for a column.
///
/// Classification is a case-insensitive substring match over the declared
/// type, so `DECIMAL(10,2)` and `varchar(255)` resolve like their bare names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// BIGINT
    BigInt,
    /// SMALLINT
    SmallInt,
    /// TINYINT
    TinyInt,
    /// INT, INTEGER and anything else mentioning INT
    Int,
    /// STRING, VARCHAR
    String,
    /// BOOLEAN
    Boolean,
    /// TIMESTAMP
    Timestamp,
    /// DATE
    Date,
    /// DECIMAL
    Decimal,
    /// DOUBLE, FLOAT
    Double,
    /// Unrecognized type; generated like a string
    Other,
}

impl ColumnType {
    /// Classify a declared SQL type string.
    ///
    /// The sized integer families are tested before the generic `INT` match so
    /// that `SMALLINT` and `TINYINT` keep their own ranges.
    pub fn from_sql_type(type_str: &str) -> Self {
        let upper = type_str.to_ascii_uppercase();
        let has = |needle: &str| upper.contains(needle);

        if has("BIGINT") {
            ColumnType::BigInt
        } else if has("SMALLINT") {
            ColumnType::SmallInt
        } else if has("TINYINT") {
            ColumnType::TinyInt
        } else if has("INT") {
            ColumnType::Int
        } else if has("STRING") || has("VARCHAR") {
            ColumnType::String
        } else if has("BOOLEAN") {
            ColumnType::Boolean
        } else if has("TIMESTAMP") {
            ColumnType::Timestamp
        } else if has("DATE") {
            ColumnType::Date
        } else if has("DECIMAL") {
            ColumnType::Decimal
        } else if has("DOUBLE") || has("FLOAT") {
            ColumnType::Double
        } else {
            ColumnType::Other
        }
    }

    /// True for the families whose primary keys render as `'ID_###'` text
    pub fn is_string(&self) -> bool {
        matches!(self, ColumnType::String)
    }
}

fn default_true() -> bool {
    true
}

/// Column definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    /// Declared SQL type, rendered verbatim in DDL
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            nullable: true,
            comment: None,
            primary_key: false,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Type family of the declared type
    pub fn column_type(&self) -> ColumnType {
        ColumnType::from_sql_type(&self.data_type)
    }

    /// Whether the column may hold NULL. Primary keys never do.
    pub fn accepts_null(&self) -> bool {
        self.nullable && !self.primary_key
    }
}

/// A single table definition plus the number of rows to synthesize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(
        rename = "schema",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Rows to generate for INSERT; 0 means no INSERT statement
    #[serde(default, deserialize_with = "loader::deserialize_row_count")]
    pub rows: usize,
}

impl TableSchema {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            catalog: None,
            schema_name: None,
            columns: Vec::new(),
            rows: 0,
        }
    }

    pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    pub fn column(mut self, col: Column) -> Self {
        self.columns.push(col);
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// `catalog.schema.table`, omitting blank parts
    pub fn qualified_name(&self) -> String {
        crate::render::build_qualified_name(
            self.catalog.as_deref().unwrap_or(""),
            self.schema_name.as_deref().unwrap_or(""),
            &self.table_name,
        )
    }

    /// Primary-key columns in declaration order
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.primary_key)
    }

    /// Check the invariants generation and rendering rely on
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.table_name.trim().is_empty() {
            return Err(ValidationError::MissingTableName);
        }
        if self.columns.is_empty() {
            return Err(ValidationError::NoColumns);
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for (index, col) in self.columns.iter().enumerate() {
            if col.name.trim().is_empty() {
                return Err(ValidationError::MissingColumnName { index });
            }
            if col.data_type.trim().is_empty() {
                return Err(ValidationError::MissingColumnType {
                    column: col.name.clone(),
                });
            }
            if !seen.insert(col.name.as_str()) {
                return Err(ValidationError::DuplicateColumn {
                    column: col.name.clone(),
                });
            }
        }

        Ok(())
    }
}
