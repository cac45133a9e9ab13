use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;
mod fetcher;
mod models;
mod render;
mod utils;

use crate::cli::Args;
use crate::fetcher::{FetchRequest, Fetcher};
use crate::render::render_table;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let fetcher = Fetcher::new(&args.api_url)?;

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Fetching posts from r/{}...", args.subreddit));

    let req = FetchRequest {
        subreddit: args.subreddit.clone(),
        year: args.year,
        limit: args.limit as usize,
        score_threshold: args.min_score,
        fields: None,
    };
    let result = fetcher.fetch_top(&req).await;
    pb.finish_and_clear();
    let posts = result?;

    if posts.is_empty() {
        println!("{}", "No posts found matching the criteria.".red());
        return Ok(());
    }

    println!(
        "\n{}\n",
        format!(
            "Top {} posts from r/{} in {}:",
            posts.len(),
            args.subreddit,
            args.year
        )
        .green()
    );
    println!("{}", render_table(&posts)?);

    Ok(())
}
