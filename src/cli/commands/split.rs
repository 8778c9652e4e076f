use anyhow::{Context, Result};
use console::{Emoji, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::Options;
use crate::rewrite;

static PLOT: Emoji<'_, '_> = Emoji("📈 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

pub fn run(path: &Path, output: Option<&Path>) -> Result<()> {
    println!();
    println!(
        "{}",
        style(" plotsplit - Split Node Traces ").bold().reverse()
    );
    println!();

    let options = Options::load_or_default()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(&format!("{}{{spinner:.green}} {{msg}}", PLOT))
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Rewriting {}...", path.display()));

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let result = rewrite::rewrite(&content, &options)
        .with_context(|| format!("Failed to rewrite {}", path.display()))?;

    spinner.finish_and_clear();
    println!(
        "{}Found {} traces",
        CHECK,
        style(result.traces_before).green().bold()
    );
    println!(
        "{}Node trace has {} nodes",
        CHECK,
        style(result.node_count).green().bold()
    );
    println!(
        "{}Now have {} traces",
        CHECK,
        style(result.traces_after).green().bold()
    );

    let target = output.unwrap_or(path);
    fs::write(target, &result.html)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!();
    println!(
        "{}Dropdown now controls visibility of {} individual node traces",
        SPARKLE,
        style(result.node_count).green().bold()
    );
    println!(
        "  {} {}",
        style("→").dim(),
        style(target.display()).cyan().underlined()
    );

    Ok(())
}
