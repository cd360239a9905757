//! Random kitten retrieval from Reddit's search API.
//!
//! Searches the Awww subreddit for kitten posts, drops self posts (text-only
//! entries with no external thumbnail), and picks one uniformly at random.

use rand::seq::SliceRandom;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// Subreddit searched for kittens.
const SUBREDDIT: &str = "Awww";

/// Search query sent to the subreddit.
const SEARCH_QUERY: &str = "kitten";

/// Maximum number of search results requested per fetch.
const SEARCH_LIMIT: &str = "100";

/// Thumbnail value Reddit uses for self posts.
const SELF_THUMBNAIL: &str = "self";

/// User agent string sent with Reddit API requests.
const USER_AGENT: &str = "kittens/0.1 (random kitten fetcher)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("reddit request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("reddit returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("no kitten available: every result was a self post or the search came back empty")]
    NoKittens,
}

/// A kitten post, as served by the search API. Fetched fresh per request,
/// never persisted.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Kitten {
    pub title: String,
    pub thumbnail: String,
    pub url: String,
    pub author: String,
}

/// Reddit listing envelope: `{"data": {"children": [{"data": {...}}]}}`.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Kitten,
}

/// Client for the Reddit search API.
#[derive(Debug, Clone)]
pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    /// Build a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.reddit_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch a random kitten from the Awww subreddit.
    ///
    /// Self posts are filtered out before selection.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NoKittens`] when the search yields no qualifying
    /// post, and an HTTP error when Reddit is unreachable or answers with a
    /// non-success status.
    pub async fn fetch_random_kitten(&self) -> Result<Kitten, FetchError> {
        let url = format!("{}/r/{SUBREDDIT}/search.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", SEARCH_QUERY),
                ("restrict_sr", "on"),
                ("sort", "new"),
                ("limit", SEARCH_LIMIT),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let listing: Listing = response.json().await?;
        let kittens = filter_kittens(listing);

        kittens
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(FetchError::NoKittens)
    }
}

/// Unwrap the listing envelope and drop self posts.
fn filter_kittens(listing: Listing) -> Vec<Kitten> {
    listing
        .data
        .children
        .into_iter()
        .map(|child| child.data)
        .filter(|kitten| kitten.thumbnail != SELF_THUMBNAIL)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kitten(title: &str, thumbnail: &str) -> ListingChild {
        ListingChild {
            data: Kitten {
                title: title.to_string(),
                thumbnail: thumbnail.to_string(),
                url: "https://example.com/post".to_string(),
                author: "cat_fancier".to_string(),
            },
        }
    }

    #[test]
    fn test_filter_drops_self_posts() {
        let listing = Listing {
            data: ListingData {
                children: vec![
                    kitten("A kitten", "https://thumbs.example.com/a.jpg"),
                    kitten("Story about my cat", "self"),
                    kitten("Another kitten", "https://thumbs.example.com/b.jpg"),
                ],
            },
        };

        let kittens = filter_kittens(listing);
        assert_eq!(kittens.len(), 2);
        assert!(kittens.iter().all(|k| k.thumbnail != "self"));
    }

    #[test]
    fn test_filter_handles_all_self_posts() {
        let listing = Listing {
            data: ListingData {
                children: vec![kitten("Text only", "self"), kitten("More text", "self")],
            },
        };

        assert!(filter_kittens(listing).is_empty());
    }

    #[test]
    fn test_listing_parses_reddit_shape() {
        let json = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {
                        "kind": "t3",
                        "data": {
                            "title": "Tiny kitten",
                            "thumbnail": "https://b.thumbs.redditmedia.com/abc.jpg",
                            "url": "https://i.redd.it/abc.jpg",
                            "author": "someone"
                        }
                    }
                ]
            }
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.data.children.len(), 1);
        assert_eq!(listing.data.children[0].data.title, "Tiny kitten");
    }
}
