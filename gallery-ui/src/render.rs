//! Gallery grid rendering and thumbnail binding

use crate::config::Labels;
use crate::display_types::GalleryItem;
use crate::view::{GalleryView, Thumbnail};
use tracing::{debug, warn};

impl Thumbnail {
    /// Resolve everything a thumbnail needs from an item.
    pub fn from_item(index: usize, item: &GalleryItem, labels: &Labels) -> Self {
        let fallback = labels.default_caption.as_str();
        let caption = item.resolved_caption(fallback).into_owned();
        Self {
            index,
            src: item.thumbnail_src().to_string(),
            alt: item.resolved_alt(fallback).into_owned(),
            label: labels.enlarge_label(&caption),
            caption,
            size: item.thumbnail_size(),
        }
    }
}

pub fn thumbnails(items: &[GalleryItem], labels: &Labels) -> Vec<Thumbnail> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Thumbnail::from_item(index, item, labels))
        .collect()
}

/// Read a control's index metadata.
pub(crate) fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|raw| raw.trim().parse::<usize>().ok())
}

/// Wire every unbound thumbnail control in the container.
///
/// Indices come from each control's own metadata, never from its position,
/// so running this again after part of the grid was re-rendered is safe.
/// Controls that are already bound are left alone. Returns how many were
/// newly bound.
pub fn bind_thumbnails<V: GalleryView>(view: &mut V, item_count: usize) -> usize {
    let mut bound = 0;
    for slot in view.thumbnail_slots() {
        if slot.bound {
            continue;
        }
        let Some(index) = parse_index(slot.index_attr.as_deref()) else {
            warn!(
                "Thumbnail control {} has no usable index ({:?})",
                slot.slot, slot.index_attr
            );
            continue;
        };
        if index >= item_count {
            // Still bound: opening an unknown index is a logged no-op, and
            // the next load may bring the item in.
            debug!("Thumbnail index {} is beyond {} items", index, item_count);
        }
        view.bind_thumbnail(slot.slot, index);
        bound += 1;
    }
    if bound > 0 {
        debug!("Bound {} thumbnail controls", bound);
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::Dimensions;
    use crate::testing::FakeView;

    #[test]
    fn test_thumbnail_from_full_item() {
        let item = GalleryItem {
            src: "photos/kata_practice.jpg".into(),
            thumb: Some("photos/thumbs/kata_practice.jpg".into()),
            alt: Some("Kata practice".into()),
            caption: Some("型の稽古".into()),
            w: Some(4000),
            h: Some(3000),
            thumb_width: Some(1200),
            thumb_height: Some(900),
        };
        let thumb = Thumbnail::from_item(2, &item, &Labels::default());
        assert_eq!(thumb.index, 2);
        assert_eq!(thumb.src, "photos/thumbs/kata_practice.jpg");
        assert_eq!(thumb.alt, "Kata practice");
        assert_eq!(thumb.caption, "型の稽古");
        assert_eq!(thumb.label, "型の稽古を拡大表示");
        assert_eq!(
            thumb.size,
            Some(Dimensions {
                width: 1200,
                height: 900
            })
        );
    }

    #[test]
    fn test_thumbnail_from_bare_item() {
        let thumb = Thumbnail::from_item(0, &GalleryItem::new("photos/dojo_front.png"), &Labels::default());
        assert_eq!(thumb.src, "photos/dojo_front.png");
        assert_eq!(thumb.caption, "dojo front");
        assert_eq!(thumb.alt, "dojo front");
        assert_eq!(thumb.size, None);
    }

    #[test]
    fn test_thumbnails_keep_order() {
        let items = vec![GalleryItem::new("a.jpg"), GalleryItem::new("b.jpg")];
        let thumbs = thumbnails(&items, &Labels::default());
        assert_eq!(thumbs.iter().map(|t| t.index).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_controls_without_index_are_skipped() {
        let mut view = FakeView::with_markup(&[Some("0"), None, Some("two"), Some("1")]);
        assert_eq!(bind_thumbnails(&mut view, 2), 2);
        let handlers: Vec<Vec<usize>> = view.controls.iter().map(|c| c.handlers.clone()).collect();
        assert_eq!(handlers, vec![vec![0], vec![], vec![], vec![1]]);
    }
}
