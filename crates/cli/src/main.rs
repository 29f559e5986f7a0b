mod cmd;
mod logging;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use prdraft_core::section::Placement;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "prdraft", version, about = "Section-addressable PR description templates")]
struct Cli {
    /// Config file path (default: ~/.config/prdraft/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Write the seed template to a new file
    Init(InitArgs),

    /// Print a named section from a template file
    Section(SectionArgs),

    /// Append a line to a named section, creating it when absent
    Append(AppendArgs),

    /// Merge insight lines into the Summary section
    Merge(MergeArgs),

    /// Report unresolved placeholder tokens
    Scan(ScanArgs),

    /// Strip placeholder lines and drop sections left heading-only
    Trim(TrimArgs),

    /// Per-section word and character counts
    Stats(StatsArgs),

    /// Print share-ready text, trimming placeholders first
    Share(ShareArgs),

    /// Overwrite a template file with the seed template
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
struct InitArgs {
    /// File to create
    file: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

#[derive(Debug, Args)]
struct SectionArgs {
    file: PathBuf,

    /// Heading to look up, e.g. "**Summary**" (matching ignores case and bold markers)
    #[arg(long)]
    heading: String,

    /// Print only the section body
    #[arg(long)]
    body: bool,
}

#[derive(Debug, Args)]
struct AppendArgs {
    file: PathBuf,

    #[arg(long)]
    heading: String,

    /// Line to append; {{date}}, {{time}} and {{datetime}} expand
    #[arg(long)]
    line: String,

    /// Where a missing section is created
    #[arg(long, value_enum, default_value_t = PlacementArg::End)]
    placement: PlacementArg,
}

#[derive(Debug, Args)]
struct MergeArgs {
    file: PathBuf,

    /// Insight lines to merge (read from stdin when omitted)
    #[arg(long)]
    insights: Option<String>,
}

#[derive(Debug, Args)]
struct ScanArgs {
    file: PathBuf,

    #[arg(long)]
    json: bool,

    /// Exit non-zero when unresolved placeholders exist
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct TrimArgs {
    file: PathBuf,

    /// Print the trimmed document instead of rewriting the file
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Args)]
struct StatsArgs {
    file: PathBuf,

    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ShareArgs {
    file: PathBuf,

    /// Share a single section instead of the whole document
    #[arg(long)]
    heading: Option<String>,
}

#[derive(Debug, Args)]
struct ResetArgs {
    file: PathBuf,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

#[derive(Debug, Args)]
struct CompletionsArgs {
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum PlacementArg {
    Start,
    End,
}

impl From<PlacementArg> for Placement {
    fn from(value: PlacementArg) -> Self {
        match value {
            PlacementArg::Start => Placement::Start,
            PlacementArg::End => Placement::End,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config),
        Commands::Init(args) => cmd::init::run(config, &args.file, args.force),
        Commands::Section(args) => {
            cmd::section::run(config, &args.file, &args.heading, args.body);
        }
        Commands::Append(args) => {
            cmd::append::run(config, &args.file, &args.heading, &args.line, args.placement.into());
        }
        Commands::Merge(args) => {
            cmd::merge::run(config, &args.file, args.insights.as_deref());
        }
        Commands::Scan(args) => cmd::scan::run(config, &args.file, args.json, args.strict),
        Commands::Trim(args) => cmd::trim::run(config, &args.file, args.stdout),
        Commands::Stats(args) => cmd::stats::run(config, &args.file, args.json),
        Commands::Share(args) => {
            cmd::share::run(config, &args.file, args.heading.as_deref());
        }
        Commands::Reset(args) => cmd::reset::run(config, &args.file, args.yes),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run(args.shell, &mut command);
        }
    }

    Ok(())
}
