//! Non-fatal conditions raised while generating rows.

/// Something went wrong but generation still produced a complete result
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationWarning {
    /// Parallel generation failed; all rows were regenerated on one thread
    ParallelFallback { reason: String },
}

impl std::fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationWarning::ParallelFallback { reason } => write!(
                f,
                "Parallel generation failed ({}), fell back to sequential generation",
                reason
            ),
        }
    }
}
