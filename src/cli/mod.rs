pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plotsplit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rewrite Plotly network HTML so each node gets its own toggleable trace", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split the combined node trace and rebuild the visibility dropdown
    #[command(long_about = "Split the combined node trace and rebuild the visibility dropdown.\n\n\
        The file must contain a Plotly.newPlot call whose last trace is the\n\
        combined node trace (parallel x/y/text/hovertext/color arrays). The\n\
        call is re-serialized in place; the Plotly config argument is passed\n\
        through untouched.\n\n\
        Running split twice on the same file is detected and refused.")]
    Split {
        /// Path to the generated HTML file
        #[arg(default_value = "network.html")]
        path: PathBuf,

        /// Write the rewritten HTML here instead of overwriting in place
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the trace inventory of a plot without modifying it
    Inspect {
        /// Path to the generated HTML file
        #[arg(default_value = "network.html")]
        path: PathBuf,
    },
}
