//! The full text-to-text rewrite pipeline.
//!
//! Pure with respect to the filesystem: callers hand in the file text and
//! get the rewritten text back, so the whole pipeline is testable without
//! touching disk.

use serde_json::Value;

use crate::config::Options;
use crate::error::RewriteError;
use crate::html::PlotlyCall;
use crate::transform;

/// Outcome of a successful rewrite, with counters for progress output.
#[derive(Debug)]
pub struct Rewritten {
    pub html: String,
    pub traces_before: usize,
    pub node_count: usize,
    pub traces_after: usize,
}

/// Rewrite the embedded plot call: split the combined node trace, rebuild
/// the dropdown, relabel the caption and splice the call back in place.
///
/// The config argument is carried over byte-identical; data and layout are
/// re-encoded compactly.
pub fn rewrite(content: &str, options: &Options) -> Result<Rewritten, RewriteError> {
    let call = PlotlyCall::extract(content)?;

    let mut traces: Vec<Value> = serde_json::from_str(call.data)?;
    let mut layout: Value = serde_json::from_str(call.layout)?;
    let traces_before = traces.len();
    tracing::debug!("decoded {} traces from div '{}'", traces_before, call.div_id);

    if transform::is_already_split(&layout, &traces) {
        return Err(RewriteError::AlreadySplit);
    }

    let summary = transform::split_node_trace(&mut traces, options)?;
    transform::rebuild_dropdown(&mut layout, &summary)?;
    transform::relabel_caption(&mut layout, &options.captions);

    let data_json = serde_json::to_string(&traces)?;
    let layout_json = serde_json::to_string(&layout)?;

    Ok(Rewritten {
        html: call.splice(content, &data_json, &layout_json),
        traces_before,
        node_count: summary.node_count,
        traces_after: traces.len(),
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────────
