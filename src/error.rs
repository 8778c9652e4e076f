use thiserror::Error;

/// Everything that can go wrong while rewriting a plot. All variants are
/// fatal; the CLI reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// No `Plotly.newPlot(...)` call with the expected argument shape was
    /// found in the file.
    #[error("could not find a Plotly.newPlot call in the input")]
    CallNotFound,

    /// The trace array or layout object is not valid JSON.
    #[error("failed to decode plot data: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded data does not match the assumed structure (missing
    /// dropdown, unequal parallel arrays, empty node trace, ...).
    #[error("plot structure mismatch: {0}")]
    StructuralMismatch(String),

    /// The file looks like it was already rewritten; splitting again would
    /// shred a single-node trace into nonsense.
    #[error("plot already contains per-node traces; refusing to split again")]
    AlreadySplit,
}
