use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Fetch a subreddit's top posts for a given year from the Pullpush archive"
)]
pub struct Args {
    /// Name of the subreddit
    pub subreddit: String,

    /// Year to fetch posts from
    pub year: i32,

    /// Number of posts to fetch
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: u64,

    /// Minimum score threshold
    #[arg(long)]
    pub min_score: Option<i64>,

    /// Alternative Pullpush API URL
    #[arg(long, default_value = "https://api.pullpush.io/reddit")]
    pub api_url: String,
}
