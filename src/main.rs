mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use colored::*;
use github_networking::{GitHubApi, GitHubApiError, GitHubClient, Repository, User};
use serde_json::json;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut builder = GitHubClient::builder();
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url.as_str());
    }
    let client = builder.build().context("Failed to create GitHub client")?;
    debug!(base_url = %client.base_url(), "client ready");

    match run(&client, &cli).await? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Outer error is local plumbing (output encoding), inner is the API outcome
/// shown to the user.
async fn run(
    client: &impl GitHubApi,
    cli: &Cli,
) -> anyhow::Result<Result<(), GitHubApiError>> {
    match &cli.command {
        Command::User { username } => {
            let user = match client.fetch_user(username).await {
                Ok(user) => user,
                Err(e) => return Ok(Err(e)),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&user)?);
            } else {
                print_user(&user);
            }
        }
        Command::Repos { username } => {
            let repositories = match client.fetch_repositories(username).await {
                Ok(repositories) => repositories,
                Err(e) => return Ok(Err(e)),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&repositories)?);
            } else {
                print_repositories(username, &repositories);
            }
        }
        Command::Profile { username } => {
            let result = futures::future::try_join(
                client.fetch_user(username),
                client.fetch_repositories(username),
            )
            .await;
            let (user, repositories) = match result {
                Ok(both) => both,
                Err(e) => return Ok(Err(e)),
            };
            if cli.json {
                let profile = json!({ "user": user, "repositories": repositories });
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                print_user(&user);
                println!();
                print_repositories(user.login(), &repositories);
            }
        }
    }
    Ok(Ok(()))
}

fn print_user(user: &User) {
    println!("{}", user.login().bold().green());
    println!("{}", "=".repeat(50).dimmed());
    println!("Name:   {}", user.name().unwrap_or("-"));
    println!("Avatar: {}", user.avatar_url().unwrap_or("-"));
}

fn print_repositories(owner: &str, repositories: &[Repository]) {
    println!(
        "{} ({} repositories)",
        owner.bold().green(),
        repositories.len()
    );
    println!("{}", "=".repeat(50).dimmed());
    if repositories.is_empty() {
        println!("{}", "No public repositories".dimmed());
    }
    for repository in repositories {
        let language = repository
            .language()
            .map(|l| l.cyan().to_string())
            .unwrap_or_else(|| "unknown".dimmed().to_string());
        println!("  {:<40} {}", repository.name(), language);
    }
}
