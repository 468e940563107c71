use anyhow::{Context, Result};
use clap::Parser;

use roster::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use roster::cli::{Cli, Commands};
use roster::config::RosterConfig;
use roster::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file);

    let config = RosterConfig::load(cli.config.as_deref())
        .context("Failed to load roster configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { port } => handle_serve(ctx, port),
        Commands::Query {
            document,
            variables,
        } => handle_query(ctx, document, variables),
        Commands::Mutate {
            document,
            variables,
        } => handle_mutate(ctx, document, variables),
        Commands::Schema => handle_schema(ctx),
    }
}
