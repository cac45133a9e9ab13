//! Paginated fetch loop against the Pullpush submission search endpoint.
//!
//! Each page is requested sorted by score descending, but the cursor that
//! advances pagination is time based: `before` is pulled down to the
//! `created_utc` of the last post in the page just fetched. The combined
//! list is therefore score-ordered within each page, not globally across
//! pages. That is how the upstream API paginates and callers see it as-is.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::models::{Post, SearchResponse, DEFAULT_FIELDS};
use crate::utils::year_bounds;

/// Per-call network timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upstream caps `size` at 100 per call.
const MAX_PAGE_SIZE: usize = 100;

/// Pause between page calls, to stay clear of the archive's throttling.
const DEFAULT_PACING: Duration = Duration::from_secs(1);

/// What to fetch. `fields` narrows the conceptual field list; the archive
/// returns full objects either way, so it never changes the wire request.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub subreddit: String,
    pub year: i32,
    pub limit: usize,
    pub score_threshold: Option<i64>,
    pub fields: Option<Vec<String>>,
}

/// Live query state for one page call. `before` shrinks every iteration,
/// walking the window down toward `after`.
#[derive(Debug)]
struct PageParams {
    subreddit: String,
    size: usize,
    after: i64,
    before: i64,
    score: Option<String>,
}

impl PageParams {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![
            ("subreddit", self.subreddit.clone()),
            ("size", self.size.to_string()),
            ("after", self.after.to_string()),
            ("before", self.before.to_string()),
            ("sort", "desc".to_string()),
            ("sort_type", "score".to_string()),
        ];
        if let Some(score) = &self.score {
            q.push(("score", score.clone()));
        }
        q
    }
}

/// Owns the HTTP client for one fetch session; dropping the fetcher releases
/// the client on every exit path.
pub struct Fetcher {
    client: Client,
    base_url: String,
    pacing: Duration,
}

impl Fetcher {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            pacing: DEFAULT_PACING,
        })
    }

    /// Overrides the pause between page calls.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Fetches up to `limit` top posts of a subreddit for one calendar year.
    ///
    /// Pages until the limit is reached or the archive runs dry (an empty or
    /// undersized page). Any transport failure or non-2xx status aborts the
    /// whole call; posts accumulated before the failure are discarded.
    pub async fn fetch_top(&self, req: &FetchRequest) -> Result<Vec<Post>, FetchError> {
        let (after, before) = year_bounds(req.year)?;
        let mut params = PageParams {
            subreddit: req.subreddit.clone(),
            size: req.limit.min(MAX_PAGE_SIZE),
            after,
            before,
            score: req.score_threshold.map(|t| format!(">{t}")),
        };

        // Field selection stays client side, see the struct docs.
        let fields: Vec<&str> = match &req.fields {
            Some(f) => f.iter().map(String::as_str).collect(),
            None => DEFAULT_FIELDS.to_vec(),
        };
        debug!(?fields, subreddit = %req.subreddit, year = req.year, "starting fetch");

        let endpoint = format!("{}/search/submission", self.base_url);
        let mut posts: Vec<Post> = Vec::new();

        while posts.len() < req.limit {
            info!("fetching posts {} to {}", posts.len(), posts.len() + params.size);

            let resp = self
                .client
                .get(&endpoint)
                .query(&params.query())
                .send()
                .await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status,
                    url: endpoint,
                });
            }

            let page: SearchResponse = resp.json().await?;
            if page.data.is_empty() {
                break;
            }

            let fetched = page.data.len();
            // The last post of the page becomes the cursor for the next one.
            params.before = page
                .data
                .last()
                .and_then(Post::created_utc)
                .ok_or(FetchError::MissingCursor)?;
            posts.extend(page.data);

            if posts.len() < req.limit {
                tokio::time::sleep(self.pacing).await;
            }
            if fetched < params.size {
                break; // nothing older left in the window
            }
        }

        posts.truncate(req.limit);
        Ok(posts)
    }
}
