use gallery_ui::GalleryItem;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Items `photo_0.jpg` .. `photo_{n-1}.jpg`, each with full dimensions
#[allow(dead_code)]
pub fn sample_items(n: usize) -> Vec<GalleryItem> {
    (0..n)
        .map(|i| {
            let mut item = GalleryItem::new(format!("photos/photo_{i}.jpg"));
            item.w = Some(1600);
            item.h = Some(1200);
            item
        })
        .collect()
}
