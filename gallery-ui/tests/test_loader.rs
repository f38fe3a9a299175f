mod support;

use async_trait::async_trait;
use gallery_ui::loader::{load_items, ItemSource};
use gallery_ui::testing::FakeView;
use gallery_ui::view::Notice;
use gallery_ui::{Gallery, GalleryConfig, GalleryStatus, InlineFailurePolicy, LoadError};
use std::cell::RefCell;
use support::tracing_init;

/// Serves one canned response and remembers every URL it was asked for
struct CannedSource {
    response: Result<String, LoadError>,
    requests: RefCell<Vec<String>>,
}

impl CannedSource {
    fn ok(body: &str) -> Self {
        Self {
            response: Ok(body.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn err(error: LoadError) -> Self {
        Self {
            response: Err(error),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl ItemSource for CannedSource {
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        self.requests.borrow_mut().push(url.to_string());
        self.response.clone()
    }
}

const URL: &str = "photos/gallery.json";

#[tokio::test]
async fn test_inline_data_takes_precedence() {
    tracing_init();
    let source = CannedSource::ok(r#"[{"src": "fetched.jpg"}]"#);
    let items = load_items(
        Some(r#"[{"src": "inline.jpg"}]"#),
        InlineFailurePolicy::FallThrough,
        &source,
        URL,
    )
    .await
    .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].src, "inline.jpg");
    assert_eq!(source.request_count(), 0);
}

#[tokio::test]
async fn test_missing_inline_fetches_once() {
    tracing_init();
    let source = CannedSource::ok(r#"[{"src": "a.jpg"}, {"src": "b.jpg"}]"#);
    let items = load_items(None, InlineFailurePolicy::FallThrough, &source, URL)
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(*source.requests.borrow(), vec![URL.to_string()]);
}

#[tokio::test]
async fn test_malformed_inline_falls_through_to_fetch() {
    tracing_init();
    let source = CannedSource::ok(r#"[{"src": "fetched.jpg"}]"#);
    let items = load_items(
        Some("[{\"src\": "),
        InlineFailurePolicy::FallThrough,
        &source,
        URL,
    )
    .await
    .unwrap();

    assert_eq!(items[0].src, "fetched.jpg");
    assert_eq!(source.request_count(), 1);
}

#[tokio::test]
async fn test_malformed_inline_fails_under_strict_policy() {
    tracing_init();
    let source = CannedSource::ok("[]");
    let result = load_items(Some("{oops"), InlineFailurePolicy::Fail, &source, URL).await;

    assert!(matches!(result, Err(LoadError::MalformedInline(_))));
    assert_eq!(source.request_count(), 0);
}

#[tokio::test]
async fn test_empty_inline_array_is_not_an_error() {
    tracing_init();
    let source = CannedSource::ok(r#"[{"src": "fetched.jpg"}]"#);
    let items = load_items(Some("[]"), InlineFailurePolicy::FallThrough, &source, URL)
        .await
        .unwrap();

    assert!(items.is_empty());
    assert_eq!(source.request_count(), 0);

    let mut gallery = Gallery::new(GalleryConfig::default(), FakeView::new());
    assert_eq!(gallery.apply_load(Ok(items)), GalleryStatus::Empty);
    assert!(matches!(gallery.view().notice, Some(Notice::Empty(_))));
    assert!(gallery.view().thumbnails.is_empty());
}

#[tokio::test]
async fn test_fetch_404_surfaces_error_message() {
    tracing_init();
    let source = CannedSource::err(LoadError::Status(404));
    let result = load_items(None, InlineFailurePolicy::FallThrough, &source, URL).await;
    assert_eq!(result, Err(LoadError::Status(404)));
    assert_eq!(source.request_count(), 1);

    let mut gallery = Gallery::new(GalleryConfig::default(), FakeView::new());
    assert_eq!(gallery.apply_load(result), GalleryStatus::Failed);
    let notice = gallery.view().notice.clone().unwrap();
    assert_eq!(
        notice.text(),
        "写真データの読み込みに失敗しました。ページを再読み込みしてください。"
    );
    assert_eq!(notice.role(), "alert");
    assert!(gallery.view().controls.is_empty());
}

#[tokio::test]
async fn test_unparseable_fetched_body_is_an_error() {
    tracing_init();
    let source = CannedSource::ok("<html>not json</html>");
    let result = load_items(None, InlineFailurePolicy::FallThrough, &source, URL).await;
    assert!(matches!(result, Err(LoadError::Parse(_))));
}

#[tokio::test]
async fn test_network_error_is_not_retried() {
    tracing_init();
    let source = CannedSource::err(LoadError::network("connection refused"));
    let result = load_items(Some("   "), InlineFailurePolicy::Fail, &source, URL).await;
    assert_eq!(
        result,
        Err(LoadError::Network("connection refused".to_string()))
    );
    assert_eq!(source.request_count(), 1);
}
