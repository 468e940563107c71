use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(ctx.config.server.port);
    let bind = ctx.config.server.bind.clone();
    let schema = build_schema(ctx.store);

    println!(
        "{} at: http://{}:{}/",
        "Server Running".green(),
        bind,
        port
    );
    println!("GraphiQL landing page on GET, GraphQL endpoint on POST");

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &bind, port).await })?;
    Ok(())
}
