//! Locating and re-serializing the embedded `Plotly.newPlot` call.
//!
//! Plotly's HTML export embeds one large JavaScript call:
//! `Plotly.newPlot("<div-id>", <traces>, <layout>, <config>)`. This module
//! finds that call in the surrounding markup, hands out its arguments as
//! text spans, and splices a rewritten call back over the original bytes.

pub mod scan;

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::RewriteError;

/// Matches the call head up to and including the div-id string literal.
static CALL_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Plotly\.newPlot\(\s*"([^"]+)""#).expect("valid regex"));

/// One extracted `Plotly.newPlot` call. All fields borrow from the original
/// file text; `config` is kept as raw text because it is never transformed.
#[derive(Debug)]
pub struct PlotlyCall<'a> {
    pub div_id: &'a str,
    pub data: &'a str,
    pub layout: &'a str,
    pub config: &'a str,
    span: Range<usize>,
}

impl<'a> PlotlyCall<'a> {
    /// Locate the first `Plotly.newPlot` call in `content` and isolate its
    /// div id and three structured arguments.
    ///
    /// Fails with [`RewriteError::CallNotFound`] when the call is absent or
    /// its argument list does not have the expected
    /// `(string, array, object, object)` shape.
    pub fn extract(content: &'a str) -> Result<Self, RewriteError> {
        let head = CALL_HEAD.captures(content).ok_or(RewriteError::CallNotFound)?;
        let whole = head.get(0).ok_or(RewriteError::CallNotFound)?;
        let div_id = head.get(1).ok_or(RewriteError::CallNotFound)?.as_str();

        let start = whole.start();
        let rel_end =
            scan::matching_paren_end(&content[start..]).ok_or(RewriteError::CallNotFound)?;
        let span = start..start + rel_end + 1;

        // Argument region sits between the outer parentheses
        let call = &content[span.clone()];
        let open = call.find('(').ok_or(RewriteError::CallNotFound)?;
        let args = &call[open + 1..call.len() - 1];

        let parts = scan::split_top_level_args(args);
        let &[div_lit, data, layout, config] = parts.as_slice() else {
            tracing::debug!("Plotly.newPlot has {} top-level arguments, expected 4", parts.len());
            return Err(RewriteError::CallNotFound);
        };

        if !div_lit.starts_with('"')
            || !data.starts_with('[')
            || !layout.starts_with('{')
            || !config.starts_with('{')
        {
            return Err(RewriteError::CallNotFound);
        }

        Ok(Self {
            div_id,
            data,
            layout,
            config,
            span,
        })
    }

    /// Rebuild the call with rewritten data and layout text and replace the
    /// original call's exact span in `content`.
    ///
    /// The div id and the config argument are reused verbatim.
    pub fn splice(&self, content: &str, data_json: &str, layout_json: &str) -> String {
        let call = format!(
            "Plotly.newPlot(\"{}\",{},{},{})",
            self.div_id, data_json, layout_json, self.config
        );

        let mut out = String::with_capacity(content.len() - self.span.len() + call.len());
        out.push_str(&content[..self.span.start]);
        out.push_str(&call);
        out.push_str(&content[self.span.end..]);
        out
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
