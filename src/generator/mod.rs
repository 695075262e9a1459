//! Bulk row generation.
//!
//! Small row counts are generated on the calling thread. From
//! [`PARALLEL_THRESHOLD`] rows up, the index space is split into contiguous
//! chunks that run on scoped worker threads, each with its own RNG seeded from
//! the run seed and the chunk start. Chunk results are put back in row order
//! before they are returned, so row `i` always carries primary key `1 + i`.
//!
//! If the parallel path fails for any reason the whole row set is regenerated
//! sequentially and a [`GenerationWarning`] is attached to the result.

mod row;
mod warnings;

pub use row::{format_primary_key, KeyCounters, Row, RowGenerator};
pub use warnings::GenerationWarning;

use crate::schema::{TableSchema, ValidationError};
use crate::synth::Synthesizer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::Range;
use std::thread;

/// Row counts at or above this use parallel generation
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Lower bound on rows per parallel chunk
pub const MIN_CHUNK_SIZE: usize = 1000;

/// Worker count used when the platform cannot report its parallelism
const FALLBACK_WORKERS: usize = 4;

/// How many threads bulk generation may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// One worker per available CPU
    #[default]
    Auto,
    /// Always generate on the calling thread
    Sequential,
    /// Fixed worker count (0 or 1 behaves like `Sequential`)
    Threads(usize),
}

impl Parallelism {
    /// Number of workers, or `None` when generation must stay sequential
    fn workers(&self) -> Option<usize> {
        match self {
            Parallelism::Sequential => None,
            Parallelism::Threads(n) if *n <= 1 => None,
            Parallelism::Threads(n) => Some(*n),
            Parallelism::Auto => Some(
                thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(FALLBACK_WORKERS),
            ),
        }
    }
}

/// Options for a generation run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// RNG seed; drawn at random when `None`
    pub seed: Option<u64>,
    pub parallelism: Parallelism,
}

impl GenerateOptions {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }
}

/// Which path produced the rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Sequential,
    Parallel { chunks: usize },
    /// Parallel generation was attempted and failed
    SequentialFallback,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Sequential => write!(f, "sequential"),
            GenerationMode::Parallel { chunks } => write!(f, "parallel ({} chunks)", chunks),
            GenerationMode::SequentialFallback => write!(f, "sequential (fallback)"),
        }
    }
}

/// Rows plus the facts needed to reproduce or audit the run
#[derive(Debug, Clone)]
pub struct GeneratedRows {
    pub rows: Vec<Row>,
    /// Seed actually used
    pub seed: u64,
    pub mode: GenerationMode,
    pub warnings: Vec<GenerationWarning>,
}

#[derive(Debug, thiserror::Error)]
enum ParallelError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("worker for rows starting at {chunk_start} panicked")]
    WorkerPanicked { chunk_start: usize },
}

#[derive(Debug)]
struct ChunkRows {
    start: usize,
    rows: Vec<Row>,
}

/// Generates the INSERT rows for a table definition
#[derive(Debug, Clone, Copy)]
pub struct Generator {
    synth: Synthesizer,
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self::with_synthesizer(Synthesizer::new(), options)
    }

    /// Use a specific synthesizer, e.g. one pinned to a fixed instant
    pub fn with_synthesizer(synth: Synthesizer, options: GenerateOptions) -> Self {
        Self { synth, options }
    }

    /// Generate `schema.rows` rows in row-index order
    pub fn generate_rows(&self, schema: &TableSchema) -> Result<GeneratedRows, ValidationError> {
        self.generate_rows_with(schema, |_| {})
    }

    /// `before_chunk` runs on each parallel worker with its chunk start
    fn generate_rows_with<H>(
        &self,
        schema: &TableSchema,
        before_chunk: H,
    ) -> Result<GeneratedRows, ValidationError>
    where
        H: Fn(usize) + Sync,
    {
        schema.validate()?;
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let total = schema.rows;

        let workers = match self.options.parallelism.workers() {
            Some(n) if total >= PARALLEL_THRESHOLD => n,
            _ => {
                tracing::debug!(table = %schema.table_name, rows = total, "generating sequentially");
                return Ok(GeneratedRows {
                    rows: self.generate_sequential(schema, total, seed),
                    seed,
                    mode: GenerationMode::Sequential,
                    warnings: Vec::new(),
                });
            }
        };

        let chunks = plan_chunks(total, workers);
        tracing::debug!(
            table = %schema.table_name,
            rows = total,
            workers,
            chunks = chunks.len(),
            "generating in parallel"
        );

        match self.generate_parallel(schema, &chunks, seed, &before_chunk) {
            Ok(rows) => Ok(GeneratedRows {
                rows,
                seed,
                mode: GenerationMode::Parallel {
                    chunks: chunks.len(),
                },
                warnings: Vec::new(),
            }),
            Err(e) => {
                tracing::warn!(
                    table = %schema.table_name,
                    error = %e,
                    "parallel generation failed, falling back to sequential"
                );
                Ok(GeneratedRows {
                    rows: self.generate_sequential(schema, total, seed),
                    seed,
                    mode: GenerationMode::SequentialFallback,
                    warnings: vec![GenerationWarning::ParallelFallback {
                        reason: e.to_string(),
                    }],
                })
            }
        }
    }

    /// Generate only the first `limit` rows (or fewer if the schema asks for
    /// fewer), always on the calling thread. Used for previews.
    pub fn generate_prefix(
        &self,
        schema: &TableSchema,
        limit: usize,
    ) -> Result<GeneratedRows, ValidationError> {
        schema.validate()?;
        let seed = self.options.seed.unwrap_or_else(rand::random);
        Ok(GeneratedRows {
            rows: self.generate_sequential(schema, schema.rows.min(limit), seed),
            seed,
            mode: GenerationMode::Sequential,
            warnings: Vec::new(),
        })
    }

    fn generate_sequential(&self, schema: &TableSchema, count: usize, seed: u64) -> Vec<Row> {
        let row_gen = RowGenerator::new(self.synth, &schema.columns);
        let mut counters = KeyCounters::new(&schema.columns);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut rows = Vec::with_capacity(count);
        for _ in 0..count {
            let keys = counters.advance();
            rows.push(row_gen.generate_row(&mut rng, &keys));
        }
        rows
    }

    fn generate_parallel<H>(
        &self,
        schema: &TableSchema,
        chunks: &[Range<usize>],
        seed: u64,
        before_chunk: &H,
    ) -> Result<Vec<Row>, ParallelError>
    where
        H: Fn(usize) + Sync,
    {
        let row_gen = RowGenerator::new(self.synth, &schema.columns);
        let start_keys = KeyCounters::new(&schema.columns);

        let chunk_results = run_chunks(chunks, |range| {
            before_chunk(range.start);
            let mut rng = StdRng::seed_from_u64(chunk_seed(seed, range.start));
            range
                .map(|index| row_gen.generate_row(&mut rng, &start_keys.at_offset(index)))
                .collect()
        })?;

        let mut rows = Vec::with_capacity(schema.rows);
        for chunk in chunk_results {
            rows.extend(chunk.rows);
        }
        Ok(rows)
    }
}

/// Rows per chunk: `max(MIN_CHUNK_SIZE, rows / (2 * workers))`
pub fn chunk_size(rows: usize, workers: usize) -> usize {
    MIN_CHUNK_SIZE.max(rows / 2usize.saturating_mul(workers.max(1)))
}

/// Split `[0, rows)` into contiguous ranges of [`chunk_size`] rows
pub fn plan_chunks(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let size = chunk_size(rows, workers);
    (0..rows)
        .step_by(size)
        .map(|start| start..(start + size).min(rows))
        .collect()
}

/// Per-chunk seed: distinct per chunk, reproducible for a given run seed
fn chunk_seed(seed: u64, chunk_start: usize) -> u64 {
    seed.wrapping_add((chunk_start as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Run `worker` over every chunk on scoped threads and return the results
/// sorted by chunk start. Every spawned worker is joined before returning,
/// even when another one failed.
fn run_chunks<F>(chunks: &[Range<usize>], worker: F) -> Result<Vec<ChunkRows>, ParallelError>
where
    F: Fn(Range<usize>) -> Vec<Row> + Sync,
{
    let worker = &worker;

    let mut results = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(chunks.len());
        let mut spawn_error = None;

        for range in chunks {
            let start = range.start;
            let range = range.clone();
            let spawned = thread::Builder::new()
                .name(format!("datagen-{}", start))
                .spawn_scoped(scope, move || worker(range));
            match spawned {
                Ok(handle) => handles.push((start, handle)),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        let mut results = Vec::with_capacity(handles.len());
        let mut panicked = None;
        for (start, handle) in handles {
            match handle.join() {
                Ok(rows) => results.push(ChunkRows { start, rows }),
                Err(_) => {
                    panicked.get_or_insert(start);
                }
            }
        }

        if let Some(e) = spawn_error {
            return Err(ParallelError::Spawn(e));
        }
        if let Some(chunk_start) = panicked {
            return Err(ParallelError::WorkerPanicked { chunk_start });
        }
        Ok(results)
    })?;

    // completion order is not row order
    results.sort_by_key(|c| c.start);
    Ok(results)
}
