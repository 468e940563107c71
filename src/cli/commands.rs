use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "A minimal GraphQL user directory service")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to .roster.yml in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Append structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a GraphQL query document against a freshly seeded store
    #[command(visible_alias = "q")]
    Query {
        /// Query document, e.g. '{ getUsers { id name } }'
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a mutation selection (auto-wrapped in 'mutation { }')
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation selection, e.g. 'createUser(name: "A", age: 1, isMarried: false) { id }'
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,
}
