//! Display types for gallery items

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// Intrinsic pixel size of an image
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Both sides must be known and positive.
    pub fn from_parts(width: Option<u32>, height: Option<u32>) -> Option<Self> {
        match (width, height) {
            (Some(width), Some(height)) if width > 0 && height > 0 => {
                Some(Self { width, height })
            }
            _ => None,
        }
    }

    /// CSS `aspect-ratio` value, e.g. `1200 / 800`
    pub fn aspect_ratio(&self) -> String {
        format!("{} / {}", self.width, self.height)
    }
}

/// One photo in the gallery, as stored in `gallery.json`
///
/// Written with serde; read through [`GalleryItem::from_value`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl GalleryItem {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    /// Build an item from an arbitrary JSON value.
    ///
    /// Returns `None` for anything that is not an object. Fields with the
    /// wrong type are dropped instead of failing the whole item.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let text = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        let size = |key: &str| object.get(key).and_then(positive_u32);

        Some(Self {
            src: text("src").unwrap_or_default(),
            thumb: text("thumb"),
            alt: text("alt"),
            caption: text("caption"),
            w: size("w"),
            h: size("h"),
            thumb_width: size("thumbWidth"),
            thumb_height: size("thumbHeight"),
        })
    }

    /// Source used for the grid thumbnail
    pub fn thumbnail_src(&self) -> &str {
        non_blank(self.thumb.as_deref()).unwrap_or(&self.src)
    }

    /// Full image size, when both sides are known
    pub fn full_size(&self) -> Option<Dimensions> {
        Dimensions::from_parts(self.w, self.h)
    }

    /// Size reserved for the thumbnail: its own size first, then the full size.
    pub fn thumbnail_size(&self) -> Option<Dimensions> {
        Dimensions::from_parts(self.thumb_width, self.thumb_height).or_else(|| self.full_size())
    }

    /// Display caption: `caption`, then `alt`, then the file name, then `fallback`.
    pub fn resolved_caption<'a>(&'a self, fallback: &'a str) -> Cow<'a, str> {
        if let Some(caption) = non_blank(self.caption.as_deref()) {
            return Cow::Borrowed(caption);
        }
        if let Some(alt) = non_blank(self.alt.as_deref()) {
            return Cow::Borrowed(alt);
        }
        match caption_from_src(&self.src) {
            Some(name) => Cow::Owned(name),
            None => Cow::Borrowed(fallback),
        }
    }

    /// Alt text for an image of this item. Never empty as long as `fallback` isn't.
    pub fn resolved_alt<'a>(&'a self, fallback: &'a str) -> Cow<'a, str> {
        match non_blank(self.alt.as_deref()) {
            Some(alt) => Cow::Borrowed(alt),
            None => self.resolved_caption(fallback),
        }
    }
}

/// Turn `photos/summer_camp_2024.jpg?v=2` into `summer camp 2024`.
pub fn caption_from_src(src: &str) -> Option<String> {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit(['/', '\\']).next().unwrap_or_default();
    let stem = match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    };
    let caption = stem.replace('_', " ");
    let caption = caption.trim();
    if caption.is_empty() {
        None
    } else {
        Some(caption.to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn positive_u32(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok().filter(|n| *n > 0);
    }
    // `1200.0` shows up when the manifest went through a float-only tool
    let f = value.as_f64()?;
    if f.is_finite() && f >= 1.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        Some(f as u32)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_caption_prefers_explicit_caption() {
        let mut item = GalleryItem::new("photos/a.jpg");
        item.caption = Some("Festival".into());
        item.alt = Some("ignored".into());
        assert_eq!(item.resolved_caption("写真"), "Festival");
    }

    #[test]
    fn test_caption_falls_back_to_alt() {
        let mut item = GalleryItem::new("photos/a.jpg");
        item.alt = Some("Morning practice".into());
        item.caption = Some("   ".into());
        assert_eq!(item.resolved_caption("写真"), "Morning practice");
    }

    #[test]
    fn test_caption_from_filename() {
        let item = GalleryItem::new("photos/summer_camp_2024.jpg");
        assert_eq!(item.resolved_caption("写真"), "summer camp 2024");
    }

    #[test]
    fn test_caption_default_when_src_missing() {
        let item = GalleryItem::default();
        assert_eq!(item.resolved_caption("写真"), "写真");
    }

    #[test]
    fn test_caption_from_src_edge_cases() {
        assert_eq!(caption_from_src("a/b/c_d.tar.gz"), Some("c d.tar".into()));
        assert_eq!(caption_from_src("photo.jpg?v=3#x"), Some("photo".into()));
        assert_eq!(caption_from_src(".hidden"), Some(".hidden".into()));
        assert_eq!(caption_from_src("photos/"), None);
        assert_eq!(caption_from_src("___.png"), None);
        assert_eq!(caption_from_src("no_extension"), Some("no extension".into()));
    }

    #[test]
    fn test_alt_never_empty() {
        let mut item = GalleryItem::new("");
        item.alt = Some(String::new());
        assert_eq!(item.resolved_alt("写真"), "写真");
    }

    #[test]
    fn test_thumbnail_src_falls_back_to_src() {
        let mut item = GalleryItem::new("photos/a.jpg");
        assert_eq!(item.thumbnail_src(), "photos/a.jpg");
        item.thumb = Some("photos/thumbs/a.jpg".into());
        assert_eq!(item.thumbnail_src(), "photos/thumbs/a.jpg");
    }

    #[test]
    fn test_thumbnail_size_prefers_thumb_pair() {
        let mut item = GalleryItem::new("a.jpg");
        item.w = Some(4000);
        item.h = Some(3000);
        item.thumb_width = Some(1200);
        assert_eq!(
            item.thumbnail_size(),
            Some(Dimensions {
                width: 4000,
                height: 3000
            })
        );
        item.thumb_height = Some(900);
        assert_eq!(
            item.thumbnail_size(),
            Some(Dimensions {
                width: 1200,
                height: 900
            })
        );
    }

    #[test]
    fn test_from_value_drops_bad_fields() {
        let value = json!({
            "src": "photos/a.jpg",
            "alt": 42,
            "w": -5,
            "h": "800",
            "thumbWidth": 600.0,
            "thumbHeight": 400
        });
        let item = GalleryItem::from_value(&value).unwrap();
        assert_eq!(item.src, "photos/a.jpg");
        assert_eq!(item.alt, None);
        assert_eq!(item.w, None);
        assert_eq!(item.h, None);
        assert_eq!(item.thumb_width, Some(600));
        assert_eq!(item.thumb_height, Some(400));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(GalleryItem::from_value(&json!("photos/a.jpg")).is_none());
        assert!(GalleryItem::from_value(&json!(null)).is_none());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let mut item = GalleryItem::new("photos/a.jpg");
        item.thumb_width = Some(10);
        item.thumb_height = Some(20);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"src": "photos/a.jpg", "thumbWidth": 10, "thumbHeight": 20})
        );
    }
}
