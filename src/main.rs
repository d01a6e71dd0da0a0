use anyhow::Context;
use clap::Parser;
use datapack_docs::{
    Config, DocsServer, SiteState,
    catalog::{self, walk_all},
    cli::{Cli, Commands},
    error::Result,
    sandbox::{CompileRequest, Compiler, render_outcome},
    tools::{LocateRequest, SearchRequest, handle_locate, handle_search},
};
use rmcp::{ServiceExt, transport::stdio};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => Level::DEBUG,
        (Commands::Serve, false) => Level::INFO,
        _ => Level::WARN,
    };
    datapack_docs::tracing::init(default_level);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Search { query, limit } => {
            let request = SearchRequest {
                query,
                limit: Some(limit),
            };
            print!("{}", handle_search(catalog::catalog(), &request));
        }
        Commands::Outline => {
            for (depth, entry) in walk_all(catalog::catalog()) {
                println!("{}{} (#{})", "  ".repeat(depth), entry.name(), entry.anchor());
            }
        }
        Commands::Locate { location } => {
            let request = LocateRequest { location };
            print!(
                "{}",
                handle_locate(catalog::catalog(), &config.navigation, &request).await
            );
        }
        Commands::Compile {
            main,
            namespace,
            header,
        } => {
            let main_source = tokio::fs::read_to_string(&main)
                .await
                .with_context(|| format!("Failed to read {}", main.display()))?;
            let header_source = match &header {
                Some(path) => tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => String::new(),
            };

            let state = SiteState::new(config);
            let request = CompileRequest::new(namespace, main_source, header_source);
            let outcome = state.compiler().compile(&request).await;
            print!("{}", render_outcome(&outcome));
            if outcome.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Serve => {
            tracing::info!("Starting datapack-docs MCP server");

            let server = DocsServer::new(Arc::new(SiteState::new(config)));
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
