use anyhow::{Context, Result};
use console::{Emoji, style};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::html::PlotlyCall;
use crate::transform;

static PLOT: Emoji<'_, '_> = Emoji("📈 ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub fn run(path: &Path) -> Result<()> {
    println!();
    println!(
        "{}",
        style(" plotsplit - Plot Inspection ").bold().reverse()
    );
    println!();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let call = PlotlyCall::extract(&content)
        .with_context(|| format!("Failed to locate the plot call in {}", path.display()))?;

    let traces: Vec<Value> = serde_json::from_str(call.data).context("Failed to decode traces")?;
    let layout: Value = serde_json::from_str(call.layout).context("Failed to decode layout")?;

    println!("{}Plot div: {}", PLOT, style(call.div_id).cyan());
    println!(
        "{}Traces:   {}",
        PLOT,
        style(traces.len()).green().bold()
    );
    println!();

    for (i, trace) in traces.iter().enumerate() {
        let mode = trace
            .get("mode")
            .and_then(Value::as_str)
            .unwrap_or("(no mode)");
        let name = trace.get("name").and_then(Value::as_str).unwrap_or("-");
        let points = trace
            .get("x")
            .and_then(Value::as_array)
            .map(|a| a.len())
            .unwrap_or(0);
        println!(
            "  {} {:<14} {:<24} {} points",
            style(format!("#{i:02}")).dim(),
            mode,
            name,
            style(points).green()
        );
    }

    println!();
    let buttons = layout
        .get("updatemenus")
        .and_then(|m| m.get(0))
        .and_then(|m| m.get("buttons"))
        .and_then(Value::as_array)
        .map(|b| b.len())
        .unwrap_or(0);
    println!("{}Dropdown options: {}", PLOT, style(buttons).green().bold());

    if transform::is_already_split(&layout, &traces) {
        println!(
            "{}Plot already contains per-node traces; 'split' will refuse it",
            WARN
        );
    }

    Ok(())
}
