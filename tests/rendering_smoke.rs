use iconforge::rendering::center_origin;
use iconforge::{IconConfig, IconGenerator};

#[test]
fn smoke_render_default_sizes() {
    let g = IconGenerator::new(IconConfig::default());
    for size in [192, 512] {
        let icon = g.render(size).expect("render failed");
        assert_eq!(icon.canvas.size(), size);
        assert_eq!(icon.layout.origin, center_origin(size, &icon.layout.bbox));
    }
}

#[test]
fn smoke_layout_is_centered() {
    let g = IconGenerator::new(IconConfig::default());
    for size in [192u32, 512] {
        let layout = g.layout(size);
        let (w, h) = (layout.bbox.width(), layout.bbox.height());
        assert!(w >= 0 && h >= 0);
        assert!((2 * layout.origin.0 + w - size as i32).abs() <= 1);
        assert!((2 * layout.origin.1 + h - size as i32).abs() <= 1);
    }
}

/// Any installed TrueType/OpenType file, preferring a sans-serif text face.
#[cfg(feature = "system-fonts")]
fn installed_font_file() -> Option<std::path::PathBuf> {
    let db = iconforge::fonts::system_database();
    let mut candidates: Vec<(bool, std::path::PathBuf)> = db
        .faces()
        .filter(|face| face.index == 0)
        .filter_map(|face| {
            let path = match &face.source {
                fontdb::Source::File(path) => path.clone(),
                fontdb::Source::SharedFile(path, _) => path.clone(),
                _ => return None,
            };
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" {
                return None;
            }
            let sans = face.families.iter().any(|(name, _)| {
                name.contains("Sans") && !name.contains("Mono") && !name.contains("Symbol")
            });
            Some((sans, path))
        })
        .collect();
    // sans faces first, then a stable order
    candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    candidates.into_iter().next().map(|(_, path)| path)
}

#[cfg(feature = "system-fonts")]
#[test]
fn smoke_render_with_installed_font() {
    use iconforge::{FontPreference, FontSource};

    let Some(path) = installed_font_file() else {
        println!("Font database is empty; skipping.");
        return;
    };

    let g = IconGenerator::new(IconConfig {
        font: FontPreference::Path(path.clone()),
        ..Default::default()
    });
    for size in [192u32, 512] {
        let px = g.font_px(size) as i32;
        let icon = g.render(size).expect("render failed");
        assert_eq!(icon.font, FontSource::Loaded, "{} not loaded", path.display());

        let bbox = icon.layout.bbox;
        // a capital letter starts below the ascender line and is narrower than an em
        assert!(bbox.top > 0, "bbox {:?} for {}", bbox, path.display());
        assert!(bbox.width() > 0 && bbox.width() < px, "bbox {:?}", bbox);
        assert!(bbox.height() > 0 && bbox.height() <= px, "bbox {:?}", bbox);
        assert_eq!(icon.layout.origin, center_origin(size, &bbox));

        // anti-aliased edges leave pixels that are neither fill nor glyph color
        let img = icon.canvas.as_image();
        assert!(img.pixels().any(|p| *p == iconforge::FOREGROUND));
        assert!(img
            .pixels()
            .any(|p| *p != iconforge::FOREGROUND && *p != iconforge::BACKGROUND));
    }
}
