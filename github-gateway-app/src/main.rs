mod args;
mod server;

use crate::args::Args;
use anyhow::Result;
use colored::Colorize;
use github_gateway_lib::{create_schema, ConcurrencyGate, GitHubClient, RepositoryService};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse_with_env_file(None, std::env::args_os()).unwrap_or_else(|e| e.exit());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let github = GitHubClient::new(args.api_url.as_str(), &args.github_token)?;
    let gate = ConcurrencyGate::new(args.concurrency);
    let schema = create_schema(RepositoryService::new(Arc::new(github), gate));

    let listener = TcpListener::bind(SocketAddr::new(args.bind, args.port)).await?;
    println!(
        "{} {} (detail concurrency {})",
        "GraphQL endpoint".green(),
        format!("http://{}/", listener.local_addr()?).yellow(),
        args.concurrency
    );

    server::serve(listener, schema).await
}
