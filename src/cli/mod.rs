use crate::{Result, env, logger};
use clap::Parser;

mod args;
mod candidates;
mod inputs;
mod makefile;
mod setup;

#[derive(clap::Parser)]
#[clap(name = "plasmac-setup", version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
struct Cli {
    /// Enables verbose output
    #[clap(short, long, global = true, action = clap::ArgAction::Count, overrides_with_all = ["quiet", "silent"])]
    verbose: u8,
    /// Suppresses output
    #[clap(short, long, global = true, overrides_with_all = ["verbose", "silent"])]
    quiet: bool,
    /// Suppresses all output
    #[clap(long, global = true, overrides_with_all = ["quiet", "verbose"])]
    silent: bool,
    /// Enable tracing spans
    #[clap(long, global = true)]
    trace: bool,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Candidates(Box<candidates::Candidates>),
    Inputs(Box<inputs::Inputs>),
    Makefile(Box<makefile::Makefile>),
    Setup(Box<setup::Setup>),
}

pub fn run() -> Result<()> {
    let args = Cli::parse();

    // the tracing subscriber forwards log records itself, so it replaces the logger
    let trace_enabled = args.trace || *env::PLASMAC_TRACE;
    if trace_enabled {
        crate::trace::init_tracing()?;
    } else {
        logger::init(log_level(&args));
    }

    match args.command {
        Commands::Candidates(cmd) => cmd.run(),
        Commands::Inputs(cmd) => cmd.run(),
        Commands::Makefile(cmd) => cmd.run(),
        Commands::Setup(cmd) => cmd.run(),
    }
}

fn log_level(args: &Cli) -> Option<log::LevelFilter> {
    if args.silent {
        Some(log::LevelFilter::Error)
    } else if args.quiet {
        Some(log::LevelFilter::Warn)
    } else if args.verbose > 1 {
        Some(log::LevelFilter::Trace)
    } else if args.verbose == 1 {
        Some(log::LevelFilter::Debug)
    } else {
        None
    }
}
