mod config;
pub use config::Config;

mod describe;
pub use describe::DescribeCommand;

mod generate;
pub use generate::GenerateCommand;

mod parse;
pub use parse::ParseCommand;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Generates labeled SQL statements from a database's schema and data.
#[derive(Parser, Debug)]
#[command(name = "querygen")]
#[command(about = "Generate labeled SQL statements from a database schema")]
#[command(version)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate statements, labels and a schema snapshot
    Generate(GenerateCommand),

    /// Read the table list out of a schema description file
    Parse(ParseCommand),

    /// Print a database's schema description
    Describe(DescribeCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Generate(cmd) => cmd.run(),
            Command::Parse(cmd) => cmd.run(),
            Command::Describe(cmd) => cmd.run(),
        }
    }
}

/// Installs the global `tracing` subscriber. Logs go to stderr.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Unable to set up logging: {e}");
    }
}
