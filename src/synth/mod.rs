//! Value synthesis: one random SQL literal per (column name, type, nullability).
//!
//! Dispatch is on [`ColumnType`]; text columns are further refined by the
//! column-name heuristics in [`contextual`].

pub mod contextual;

pub use contextual::TextKind;

use crate::render::escape_string_literal;
use crate::schema::ColumnType;
use chrono::{Local, NaiveDateTime, TimeDelta};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::Rng;

/// Chance that a nullable column yields NULL
pub const NULL_PROBABILITY: f64 = 0.10;

/// Dates and timestamps fall within this many days before "now"
pub const HISTORY_DAYS: i64 = 730;

const SECONDS_PER_DAY: i64 = 86_400;

/// A generated value, ready to be written as SQL source text
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    /// Fixed-point number: `units / 10^scale`
    Decimal {
        units: i64,
        scale: u32,
    },
    Bool(bool),
    Text(String),
}

impl SqlValue {
    /// Render as a SQL literal
    pub fn to_sql(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::Decimal { units, scale } => format_fixed(*units, *scale),
            SqlValue::Bool(b) => b.to_string(),
            SqlValue::Text(s) => format!("'{}'", escape_string_literal(s)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

fn format_fixed(units: i64, scale: u32) -> String {
    if scale == 0 {
        return units.to_string();
    }
    let divisor = 10_u64.pow(scale);
    let magnitude = units.unsigned_abs();
    let sign = if units < 0 { "-" } else { "" };
    format!(
        "{}{}.{:0width$}",
        sign,
        magnitude / divisor,
        magnitude % divisor,
        width = scale as usize
    )
}

/// Generates column values relative to a fixed reference instant.
///
/// The instant is captured once per generation run so every row of a run
/// draws dates from the same window.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    now: NaiveDateTime,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    /// Synthesizer anchored at the current local time
    pub fn new() -> Self {
        Self::at(Local::now().naive_local())
    }

    /// Synthesizer anchored at a fixed instant
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Generate a value for a non-key column.
    ///
    /// Nullable columns short-circuit to NULL with [`NULL_PROBABILITY`].
    pub fn value(
        &self,
        rng: &mut StdRng,
        column_name: &str,
        column_type: ColumnType,
        nullable: bool,
    ) -> SqlValue {
        if nullable && rng.random::<f64>() < NULL_PROBABILITY {
            return SqlValue::Null;
        }
        self.non_null_value(rng, column_name, column_type)
    }

    fn non_null_value(
        &self,
        rng: &mut StdRng,
        column_name: &str,
        column_type: ColumnType,
    ) -> SqlValue {
        match column_type {
            ColumnType::BigInt => SqlValue::Int(rng.random::<i64>()),
            ColumnType::Int => SqlValue::Int(i64::from(rng.random::<i32>())),
            // Non-negative only
            ColumnType::SmallInt => SqlValue::Int(rng.random_range(0..=32_767)),
            ColumnType::TinyInt => SqlValue::Int(rng.random_range(0..=255)),
            ColumnType::String => {
                SqlValue::Text(TextKind::from_column_name(column_name).generate(rng))
            }
            ColumnType::Boolean => SqlValue::Bool(rng.random::<bool>()),
            ColumnType::Timestamp => {
                let back = rng.random_range(0..=HISTORY_DAYS * SECONDS_PER_DAY);
                let instant = self.now - TimeDelta::seconds(back);
                SqlValue::Text(instant.format("%Y-%m-%d %H:%M:%S").to_string())
            }
            ColumnType::Date => {
                let back = rng.random_range(0..=HISTORY_DAYS);
                let date = self.now.date() - TimeDelta::days(back);
                SqlValue::Text(date.format("%Y-%m-%d").to_string())
            }
            ColumnType::Decimal => SqlValue::Decimal {
                units: rng.random_range(1..=999_999),
                scale: 2,
            },
            ColumnType::Double => SqlValue::Decimal {
                units: rng.random_range(1..=999_999_999),
                scale: 4,
            },
            ColumnType::Other => SqlValue::Text(Word().fake_with_rng(rng)),
        }
    }
}

/// Generate one SQL literal for a column, anchored at the current time
pub fn synthesize_literal(
    rng: &mut StdRng,
    column_name: &str,
    declared_type: &str,
    nullable: bool,
) -> String {
    Synthesizer::new()
        .value(rng, column_name, ColumnType::from_sql_type(declared_type), nullable)
        .to_sql()
}
