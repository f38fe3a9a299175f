use async_trait::async_trait;
use gallery_ui::loader::ItemSource;
use gallery_ui::LoadError;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use web_sys::Document;

/// Fetches the gallery manifest over HTTP, bypassing caches
pub struct HttpSource {
    client: reqwest::Client,
    base: Option<String>,
}

impl HttpSource {
    /// Relative URLs are resolved against the document's base URI.
    pub fn new(document: &Document) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: document.base_uri().ok().flatten(),
        }
    }

    fn resolve(&self, url: &str) -> String {
        let Some(base) = self.base.as_deref() else {
            return url.to_string();
        };
        match web_sys::Url::new_with_base(url, base) {
            Ok(resolved) => resolved.href(),
            Err(_) => url.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ItemSource for HttpSource {
    async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        let url = self.resolve(url);
        let resp = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(LoadError::network)?;

        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }

        resp.text().await.map_err(LoadError::network)
    }
}
