//! ghostwriter - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghostwriter::config::{
    ClientConfig, Config, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_PROMPT_CUTOFF,
};
use ghostwriter::diff::{collect_diff, open_repository};
use ghostwriter::{Ghostwriter, OpenAiClient};

/// Write a commit title for your uncommitted changes.
#[derive(Parser, Debug)]
#[command(name = "ghostwriter")]
#[command(about = "Write a commit title for your uncommitted changes")]
#[command(version)]
struct Cli {
    /// Repository to read changes from
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Completion model
    #[arg(long, env = "GHOSTWRITER_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum characters of diff per summary request
    #[arg(long, default_value_t = DEFAULT_PROMPT_CUTOFF, allow_negative_numbers = true)]
    prompt_cutoff: i64,

    /// Maximum tokens per completion
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Root URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Organization id sent with each request
    #[arg(long, env = "OPENAI_ORG_ID")]
    organization: Option<String>,

    /// Log prompts and request progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let repo = open_repository(&cli.repo)
        .context("Not a git repository. Run ghostwriter from within a git repository.")?;
    let diff = collect_diff(&repo).context("Failed to read working tree changes")?;

    let config = Config {
        model: cli.model,
        prompt_cutoff: cli.prompt_cutoff,
        max_tokens: cli.max_tokens,
    };
    let client_config = ClientConfig {
        organization: cli.organization,
        base_url: cli.base_url,
        ..ClientConfig::new(cli.api_key)
    };

    let client = OpenAiClient::new(&client_config, &config)
        .context("Failed to set up the completion client")?;
    let writer = Ghostwriter::new(client, config);

    let message = writer
        .generate_commit_message(&diff)
        .await
        .context("Failed to generate commit message")?;

    println!("{}", message);
    Ok(())
}

/// Send diagnostics to stderr so stdout carries only the message.
fn init_tracing(verbose: bool) {
    let default_directives = if verbose { "warn,ghostwriter=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
