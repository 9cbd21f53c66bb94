//! Comment data embedded by the server
//!
//! The server renders the post page with a
//! `<script id="comments-data" type="application/json">` block holding the
//! comments and the CSRF token the deletion forms need.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Id of the script element carrying the page data
pub const PAGE_DATA_ELEMENT_ID: &str = "comments-data";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommentView {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub created: DateTime<Utc>,
    /// Action of the comment's deletion form
    pub delete_url: String,
    /// Whether the current user may delete this comment
    #[serde(default)]
    pub can_delete: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentView>,
}

pub fn parse_page_data(json: &str) -> Result<PageData> {
    let mut data: PageData = serde_json::from_str(json).context("Invalid comments page data")?;
    // Newest first
    data.comments.sort_by(|a, b| b.created.cmp(&a.created));
    Ok(data)
}

/// Read and parse the page data block from the current document
pub fn read_page_data() -> Result<PageData> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("No document"))?;
    let element = document
        .get_element_by_id(PAGE_DATA_ELEMENT_ID)
        .ok_or_else(|| anyhow!("Missing #{} element", PAGE_DATA_ELEMENT_ID))?;
    let json = element.text_content().unwrap_or_default();
    parse_page_data(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "csrf_token": "abc123",
        "comments": [
            {
                "id": 1,
                "author": "leo",
                "text": "Первый",
                "created": "2023-04-08T18:59:00Z",
                "delete_url": "/comments/1/delete/",
                "can_delete": true
            },
            {
                "id": 2,
                "author": "anna",
                "text": "Второй",
                "created": "2023-04-09T10:00:00Z",
                "delete_url": "/comments/2/delete/"
            }
        ]
    }"#;

    #[test]
    fn test_parse_sorts_newest_first() {
        let data = parse_page_data(SAMPLE).unwrap();
        assert_eq!(data.csrf_token.as_deref(), Some("abc123"));
        let ids: Vec<u64> = data.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_can_delete_defaults_to_false() {
        let data = parse_page_data(SAMPLE).unwrap();
        let anna = data.comments.iter().find(|c| c.id == 2).unwrap();
        assert!(!anna.can_delete);
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(parse_page_data("{}").unwrap(), PageData::default());
    }

    #[test]
    fn test_invalid_json_has_context() {
        let err = parse_page_data("<html>").unwrap_err();
        assert!(err.to_string().contains("Invalid comments page data"));
    }
}
