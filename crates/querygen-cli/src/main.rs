use clap::Parser;
use querygen_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    querygen_cli::init_tracing(cli.verbose);
    cli.run()
}
