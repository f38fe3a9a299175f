//! Gallery configuration
//!
//! Every field has a default, so a page without a configuration block (or
//! with a partial one) still gets a working gallery.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// What to do when the inline data block is present but not valid JSON
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineFailurePolicy {
    /// Log it and fetch the JSON file instead
    #[default]
    FallThrough,
    /// Show the load error without fetching
    Fail,
}

/// User-visible strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub empty_message: String,
    pub load_error_message: String,
    pub default_caption: String,
    /// Appended to the caption to form a thumbnail's accessible label
    pub enlarge_suffix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            empty_message: "表示できる写真がありません。".to_string(),
            load_error_message: "写真データの読み込みに失敗しました。ページを再読み込みしてください。"
                .to_string(),
            default_caption: "写真".to_string(),
            enlarge_suffix: "を拡大表示".to_string(),
        }
    }
}

impl Labels {
    pub fn enlarge_label(&self, caption: &str) -> String {
        format!("{caption}{}", self.enlarge_suffix)
    }
}

/// Element ids the browser front-end looks up
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub container: String,
    pub template: String,
    pub modal: String,
    pub image: String,
    pub caption: String,
    pub close: String,
    pub prev: String,
    pub next: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            container: "gallery".to_string(),
            template: "gallery-item-template".to_string(),
            modal: "lightbox".to_string(),
            image: "lightbox-image".to_string(),
            caption: "lightbox-caption".to_string(),
            close: "lightbox-close".to_string(),
            prev: "lightbox-prev".to_string(),
            next: "lightbox-next".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Relative URL of the JSON manifest used when no inline data is usable
    pub data_url: String,
    /// Id of the `<script type="application/json">` block holding inline data
    pub inline_data_id: String,
    pub inline_failure: InlineFailurePolicy,
    /// Keep server-rendered thumbnails when they match the loaded items
    pub hydrate_existing_markup: bool,
    /// Log filter directives, e.g. `warn` or `gallery_ui=debug,info`
    pub log_level: String,
    pub ids: ElementIds,
    pub labels: Labels,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_url: "photos/gallery.json".to_string(),
            inline_data_id: "gallery-data".to_string(),
            inline_failure: InlineFailurePolicy::default(),
            hydrate_existing_markup: true,
            log_level: "info".to_string(),
            ids: ElementIds::default(),
            labels: Labels::default(),
        }
    }
}

impl GalleryConfig {
    /// Parse a configuration block. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        if config.data_url.trim().is_empty() {
            return Err(ConfigError::Invalid("data_url must not be empty".to_string()));
        }
        if config.labels.default_caption.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "labels.default_caption must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}
