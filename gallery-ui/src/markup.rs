//! Static HTML for the gallery grid and the inline data block.
//!
//! Produces the same structure the browser front-end builds from its
//! template, so pre-rendered pages can be hydrated instead of redrawn.

use crate::config::Labels;
use crate::display_types::GalleryItem;
use crate::render::thumbnails;
use crate::view::{Notice, Thumbnail};
use std::fmt::Write;

/// Index metadata attribute carried by every thumbnail button
pub const INDEX_ATTR: &str = "data-gallery-index";
/// Set on a thumbnail button once a click handler is attached
pub const BOUND_ATTR: &str = "data-gallery-bound";

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_thumbnail(thumb: &Thumbnail) -> String {
    let mut img_attrs = format!(
        r#"class="gallery-item__image" src="{}" alt="{}" loading="lazy" decoding="async""#,
        escape_html(&thumb.src),
        escape_html(&thumb.alt)
    );
    if let Some(size) = thumb.size {
        let _ = write!(img_attrs, r#" width="{}" height="{}""#, size.width, size.height);
    }

    format!(
        concat!(
            r#"<figure class="gallery-item" role="listitem">"#,
            r#"<button class="gallery-item__button" type="button" {}="{}" aria-label="{}">"#,
            r#"<img {} />"#,
            r#"<figcaption class="gallery-item__caption">{}</figcaption>"#,
            r#"</button></figure>"#
        ),
        INDEX_ATTR,
        thumb.index,
        escape_html(&thumb.label),
        img_attrs,
        escape_html(&thumb.caption)
    )
}

pub fn render_notice(notice: &Notice) -> String {
    format!(
        r#"<p class="{}" role="{}">{}</p>"#,
        notice.class_name(),
        notice.role(),
        escape_html(notice.text())
    )
}

/// Grid contents for `items`, one line per thumbnail, or the empty notice.
pub fn render_gallery_markup(items: &[GalleryItem], labels: &Labels) -> String {
    if items.is_empty() {
        return render_notice(&Notice::Empty(labels.empty_message.clone()));
    }
    thumbnails(items, labels)
        .iter()
        .map(render_thumbnail)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `<script type="application/json">` block read back as inline data.
pub fn render_data_block(id: &str, items: &[GalleryItem]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(items)?;
    // `</script>` inside the payload would end the element early
    let json = json.replace("</", "<\\/");
    Ok(format!(
        "<script id=\"{}\" type=\"application/json\">\n{}\n</script>",
        escape_html(id),
        json
    ))
}
