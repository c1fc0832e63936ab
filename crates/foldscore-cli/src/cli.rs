use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "FoldScore Developers",
    version,
    about = "FoldScore CLI - Heuristic folding stability scoring, biochemical descriptors and synthetic energy paths for protein sequences.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for batch prediction.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single protein sequence and print the prediction record as JSON.
    Predict(PredictArgs),
    /// Analyze every sequence of a file (one per line) and write a JSON array.
    Batch(BatchArgs),
    /// Check whether a sequence passes normalization and validation.
    Validate(ValidateArgs),
}

/// Options shared by every command that runs predictions.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scoring.perturbation-amplitude=0.02
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Seed the random perturbations for reproducible output.
    #[arg(long, value_name = "INT", conflicts_with = "deterministic")]
    pub seed: Option<u64>,

    /// Disable every random perturbation.
    #[arg(long)]
    pub deterministic: bool,

    /// Skip rendering the energy plot.
    #[arg(long)]
    pub no_plot: bool,
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["sequence", "input"]),
))]
pub struct PredictArgs {
    /// The raw protein sequence. Whitespace, digits and punctuation are ignored.
    #[arg(value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Read the sequence from a file instead (plain or FASTA).
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Write the JSON record to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the rendered SVG energy plot to this path.
    #[arg(long, value_name = "PATH", conflicts_with = "no_plot")]
    pub plot_out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one sequence per line. Blank lines and lines starting with '#' are skipped.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the JSON array to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// The raw protein sequence to check.
    #[arg(required = true, value_name = "SEQUENCE")]
    pub sequence: String,
}
