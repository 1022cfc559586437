use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// The ht CLI.
#[derive(Debug, Clone, Parser)]
#[command(name = "ht", version, author, about = "Builds and renders HTML trees.")]
pub struct CliArguments {
    /// The command to run.
    #[command(subcommand)]
    pub command: Command,

    /// Print more log output. Repeat for even more.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// What to do.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Renders one of the built-in demo pages.
    Demo(DemoCommand),

    /// Merges two attribute values the way the element builder does.
    Merge(MergeCommand),
}

/// Renders a demo page.
#[derive(Debug, Clone, Args)]
pub struct DemoCommand {
    /// The page to render.
    #[arg(value_enum)]
    pub page: DemoPage,

    /// The output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Html, env = "HT_FORMAT")]
    pub format: OutputFormat,

    /// Where to write the output. Defaults to stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Merges two attribute values.
#[derive(Debug, Clone, Args)]
pub struct MergeCommand {
    /// The attribute's key, e.g. `class`.
    pub key: String,

    /// The value already present on the element.
    pub existing: String,

    /// The value being added.
    pub new: String,
}

/// A built-in demo page.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum DemoPage {
    /// A gallery of small fragments.
    Basic,
    /// A page of daisyUI components.
    Daisyui,
    /// A page embedding the output of another template engine.
    Template,
}

/// Which format to output.
#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered HTML.
    Html,
    /// The node tree as JSON.
    Json,
}
