use tabled::settings::object::Columns;
use tabled::settings::{Modify, Style, Width};
use tabled::{Table, Tabled};

use crate::error::RenderError;
use crate::models::Post;

/// Permalinks come back relative; they are composed against the main site.
const REDDIT_BASE: &str = "https://reddit.com";

/// Width of the title column before wrapping kicks in.
const TITLE_WIDTH: usize = 60;

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "#")]
    idx: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Score")]
    score: i64,
    #[tabled(rename = "Post Link")]
    post_link: String,
    #[tabled(rename = "URL")]
    url: String,
}

fn str_field<'a>(post: &'a Post, field: &'static str) -> Result<&'a str, RenderError> {
    post.get(field)
        .and_then(|v| v.as_str())
        .ok_or(RenderError::MissingField(field))
}

fn row(idx: usize, post: &Post) -> Result<PostRow, RenderError> {
    let score = post
        .get("score")
        .and_then(|v| v.as_i64())
        .ok_or(RenderError::MissingField("score"))?;
    Ok(PostRow {
        idx,
        title: str_field(post, "title")?.to_string(),
        score,
        post_link: format!("{REDDIT_BASE}{}", str_field(post, "permalink")?),
        url: str_field(post, "url")?.to_string(),
    })
}

/// Builds the console table, numbering posts from 1 in the order given.
pub fn render_table(posts: &[Post]) -> Result<String, RenderError> {
    let rows = posts
        .iter()
        .enumerate()
        .map(|(i, post)| row(i + 1, post))
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.with(Modify::new(Columns::single(1)).with(Width::wrap(TITLE_WIDTH)));
    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(v: serde_json::Value) -> Post {
        serde_json::from_value(v).unwrap()
    }

    fn full_post(title: &str) -> Post {
        post(json!({
            "title": title,
            "score": 1234,
            "permalink": "/r/test/comments/abc/some_post/",
            "url": "https://example.com/article",
            "created_utc": 1_620_000_000,
        }))
    }

    #[test]
    fn renders_all_columns() {
        let out = render_table(&[full_post("hello world")]).unwrap();
        assert!(out.contains("hello world"));
        assert!(out.contains("1234"));
        assert!(out.contains("https://reddit.com/r/test/comments/abc/some_post/"));
        assert!(out.contains("https://example.com/article"));
    }

    #[test]
    fn rows_are_numbered_from_one() {
        let out = render_table(&[full_post("a"), full_post("b")]).unwrap();
        let first = out.find(" 1 ").unwrap();
        let second = out.find(" 2 ").unwrap();
        assert!(first < second);
    }

    #[test]
    fn missing_title_is_a_render_error() {
        let p = post(json!({
            "score": 10,
            "permalink": "/r/test/comments/x/y/",
            "url": "https://example.com",
        }));
        assert_eq!(
            render_table(&[p]).unwrap_err(),
            RenderError::MissingField("title")
        );
    }

    #[test]
    fn missing_score_is_a_render_error() {
        let p = post(json!({
            "title": "t",
            "permalink": "/r/test/comments/x/y/",
            "url": "https://example.com",
        }));
        assert_eq!(
            render_table(&[p]).unwrap_err(),
            RenderError::MissingField("score")
        );
    }
}
