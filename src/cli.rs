use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "github-networking")]
#[command(about = "Look up GitHub users and their public repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Base URL of the users API
    #[arg(long, env = "GITHUB_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a user's profile
    User { username: String },

    /// List a user's public repositories
    Repos { username: String },

    /// Show a user's profile together with their repositories
    Profile { username: String },
}
