//! Gallery data loading
//!
//! The item list comes from an inline JSON block embedded in the page when
//! one is present and valid, otherwise from a single fetch of the manifest.
//! What happens when the inline block is malformed is decided by
//! [`InlineFailurePolicy`].

use crate::config::InlineFailurePolicy;
use crate::display_types::GalleryItem;
use crate::error::LoadError;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

/// Where the manifest comes from when inline data is unusable
#[async_trait(?Send)]
pub trait ItemSource {
    /// Fetch the raw manifest text. Non-success statuses are errors.
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError>;
}

/// What to do with the inline block, decided before any I/O
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDecision {
    Inline(Vec<GalleryItem>),
    Fetch,
    Fail(LoadError),
}

/// Parse a manifest. The top level must be an array; elements that are not
/// objects are skipped.
pub fn parse_items(text: &str) -> Result<Vec<GalleryItem>, LoadError> {
    let value: Value = serde_json::from_str(text).map_err(LoadError::parse)?;
    let Value::Array(entries) = value else {
        return Err(LoadError::Parse(
            "expected a JSON array of gallery items".to_string(),
        ));
    };

    let mut items = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        match GalleryItem::from_value(entry) {
            Some(item) => {
                if item.src.trim().is_empty() {
                    warn!("Gallery item {} has no src", position);
                }
                items.push(item);
            }
            None => warn!("Skipping gallery entry {}: not an object", position),
        }
    }
    Ok(items)
}

/// Decide between inline data and the fetch fallback.
pub fn decide_source(inline: Option<&str>, policy: InlineFailurePolicy) -> SourceDecision {
    let Some(text) = inline.filter(|t| !t.trim().is_empty()) else {
        return SourceDecision::Fetch;
    };

    match parse_items(text) {
        Ok(items) => SourceDecision::Inline(items),
        Err(e) => {
            let error = LoadError::MalformedInline(e.to_string());
            match policy {
                InlineFailurePolicy::FallThrough => {
                    warn!("{}; falling back to fetch", error);
                    SourceDecision::Fetch
                }
                InlineFailurePolicy::Fail => SourceDecision::Fail(error),
            }
        }
    }
}

/// Produce the item list: inline data first, otherwise one fetch of `url`.
///
/// No retries. An empty list is a success.
pub async fn load_items<S: ItemSource + ?Sized>(
    inline: Option<&str>,
    policy: InlineFailurePolicy,
    source: &S,
    url: &str,
) -> Result<Vec<GalleryItem>, LoadError> {
    match decide_source(inline, policy) {
        SourceDecision::Inline(items) => {
            info!("Loaded {} gallery items from inline data", items.len());
            Ok(items)
        }
        SourceDecision::Fail(e) => Err(e),
        SourceDecision::Fetch => {
            let text = source.fetch_text(url).await?;
            let items = parse_items(&text)?;
            info!("Loaded {} gallery items from {}", items.len(), url);
            Ok(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_skips_non_objects() {
        let items = parse_items(r#"[{"src": "a.jpg"}, 3, "b.jpg", {"src": "c.jpg"}]"#).unwrap();
        let srcs: Vec<&str> = items.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn test_parse_items_keeps_item_without_src() {
        let items = parse_items(r#"[{"alt": "no source"}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].src, "");
    }

    #[test]
    fn test_parse_items_requires_array() {
        assert!(matches!(
            parse_items(r#"{"items": []}"#),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(parse_items("[{"), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_decide_blank_inline_fetches() {
        assert_eq!(
            decide_source(Some("  \n "), InlineFailurePolicy::Fail),
            SourceDecision::Fetch
        );
        assert_eq!(
            decide_source(None, InlineFailurePolicy::Fail),
            SourceDecision::Fetch
        );
    }

    #[test]
    fn test_decide_empty_inline_array_wins() {
        assert_eq!(
            decide_source(Some("[]"), InlineFailurePolicy::FallThrough),
            SourceDecision::Inline(vec![])
        );
    }

    #[test]
    fn test_decide_malformed_inline_follows_policy() {
        assert_eq!(
            decide_source(Some("[{"), InlineFailurePolicy::FallThrough),
            SourceDecision::Fetch
        );
        assert!(matches!(
            decide_source(Some("[{"), InlineFailurePolicy::Fail),
            SourceDecision::Fail(LoadError::MalformedInline(_))
        ));
    }
}
