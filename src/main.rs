use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod index;
mod output;
mod parsing;
mod stitching;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("contig_stitch=debug,info")
    } else {
        EnvFilter::new("contig_stitch=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Stitch(args) => {
            cli::stitch::run(args, cli.verbose)?;
        }
        cli::Commands::Index(args) => {
            cli::index::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
