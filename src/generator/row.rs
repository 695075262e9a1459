//! Single-row generation and primary-key sequencing.

use crate::schema::{Column, ColumnType};
use crate::synth::{SqlValue, Synthesizer};
use rand::rngs::StdRng;

/// One generated row, in column declaration order
pub type Row = Vec<SqlValue>;

/// Primary-key counters, one slot per column (`None` for non-key columns).
///
/// Sequential generation advances the counters in place. Parallel workers
/// never share them: they compute `start + row_index` from an untouched copy.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCounters {
    next: Vec<Option<i64>>,
}

impl KeyCounters {
    /// Counters seeded at 1
    pub fn new(columns: &[Column]) -> Self {
        Self::starting_at(columns, 1)
    }

    pub fn starting_at(columns: &[Column], start: i64) -> Self {
        Self {
            next: columns
                .iter()
                .map(|c| c.primary_key.then_some(start))
                .collect(),
        }
    }

    /// Key values for the current row, then step every counter by one
    pub fn advance(&mut self) -> Vec<Option<i64>> {
        let current = self.next.clone();
        for slot in self.next.iter_mut().flatten() {
            *slot += 1;
        }
        current
    }

    /// Key values for `row_index` rows past the starting values
    pub fn at_offset(&self, row_index: usize) -> Vec<Option<i64>> {
        let offset = row_index as i64;
        self.next.iter().map(|slot| slot.map(|v| v + offset)).collect()
    }
}

/// Render a primary-key counter value for a column of the given type.
///
/// STRING/VARCHAR keys become `'ID_001'`, `'ID_002'`, ... (wider past 999);
/// everything else is the bare integer.
pub fn format_primary_key(column_type: ColumnType, value: i64) -> SqlValue {
    if column_type.is_string() {
        SqlValue::Text(format!("ID_{:03}", value))
    } else {
        SqlValue::Int(value)
    }
}

#[derive(Debug)]
struct PlannedColumn<'a> {
    name: &'a str,
    column_type: ColumnType,
    nullable: bool,
    primary_key: bool,
}

/// Produces rows for one column list.
///
/// Column types are classified once up front so per-row work is only value
/// synthesis.
#[derive(Debug)]
pub struct RowGenerator<'a> {
    synth: Synthesizer,
    columns: Vec<PlannedColumn<'a>>,
}

impl<'a> RowGenerator<'a> {
    pub fn new(synth: Synthesizer, columns: &'a [Column]) -> Self {
        let columns = columns
            .iter()
            .map(|c| PlannedColumn {
                name: &c.name,
                column_type: c.column_type(),
                nullable: c.accepts_null(),
                primary_key: c.primary_key,
            })
            .collect();
        Self { synth, columns }
    }

    /// Build one row. `pk_values` is aligned with the columns and holds the
    /// already-resolved key value for every primary-key column.
    pub fn generate_row(&self, rng: &mut StdRng, pk_values: &[Option<i64>]) -> Row {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| match pk_values.get(i).copied().flatten() {
                Some(key) if col.primary_key => format_primary_key(col.column_type, key),
                _ => self
                    .synth
                    .value(rng, col.name, col.column_type, col.nullable),
            })
            .collect()
    }
}
