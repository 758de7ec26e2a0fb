use clap::{Args, Parser, Subcommand};
use stout_duration::{Duration, Unit};

const UNIT_HINT: &str = "expected one of: ns, us, ms, secs, mins, hrs, days, weeks";

fn parse_duration(input: &str) -> Result<Duration, String> {
    stout_duration::parse(input)
        .map_err(|err| format!("{err} (expected e.g. 10secs, 250ms, 1.5hrs)"))
}

fn parse_unit(input: &str) -> Result<Unit, String> {
    input
        .parse()
        .map_err(|_| format!("unknown unit '{input}' ({UNIT_HINT})"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    HumanReadable,
    /// One JSON object per line (NDJSON) on stdout.
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "stout",
    author,
    version,
    about = "Parse, compare and render durations; query filesystem capacity",
    long_about = "stout parses compact duration strings such as `10secs`, `250ms` or `1.5hrs` into a nanosecond value and renders them back in the most natural unit.\n\nIt also reports free space and usage of a filesystem and creates symbolic links.",
    after_help = "Examples:\n  stout parse 65secs\n  stout parse 90mins --unit hrs\n  stout compare 1mins 59secs\n  stout fs usage /var --output json"
)]
pub struct Cli {
    /// Log filter for diagnostics written to stderr (e.g. `debug`, `stout_fs=trace`)
    #[arg(long, global = true, env = "STOUT_LOG", default_value = "warn")]
    pub log_level: String,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        env = "STOUT_OUTPUT",
        default_value_t = OutputFormat::HumanReadable
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse durations and print them in canonical form
    Parse(ParseArgs),

    /// Compare two durations
    Compare(CompareArgs),

    /// Filesystem queries
    #[command(subcommand)]
    Fs(FsCommand),
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Durations to parse (e.g. 10secs, 250ms, 1.5hrs)
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Print the magnitude in this unit instead of the auto-selected one
    #[arg(long, value_parser = parse_unit)]
    pub unit: Option<Unit>,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    #[arg(value_parser = parse_duration)]
    pub left: Duration,

    #[arg(value_parser = parse_duration)]
    pub right: Duration,
}

#[derive(Debug, Subcommand)]
pub enum FsCommand {
    /// Bytes available on the filesystem containing PATH
    Available {
        #[arg(default_value = stout_fs::DEFAULT_PATH)]
        path: String,
    },

    /// Fraction of the filesystem containing PATH that is in use
    Usage {
        #[arg(default_value = stout_fs::DEFAULT_PATH)]
        path: String,
    },

    /// Create LINK as a symbolic link to ORIGINAL
    Symlink { original: String, link: String },
}
