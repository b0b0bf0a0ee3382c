use std::fs;
use std::path::PathBuf;

use iconforge::{FontPreference, IconConfig, IconGenerator};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// Generator pinned to the built-in font so the pixels do not depend on
/// which fonts the machine has installed.
fn builtin_generator() -> IconGenerator {
    IconGenerator::new(IconConfig {
        font: FontPreference::Path(PathBuf::from("tests/goldens/no-such-font.ttf")),
        ..Default::default()
    })
}

/// SHA-256 of the raw RGB pixels, independent of PNG compression settings
fn pixel_digest(size: u32) -> String {
    let icon = builtin_generator().render(size).expect("render failed");
    hex::encode(Sha256::digest(icon.canvas.as_image().as_raw()))
}

fn png_digest(size: u32) -> String {
    let png = builtin_generator()
        .render(size)
        .expect("render failed")
        .canvas
        .encode_png()
        .expect("encode failed");
    hex::encode(Sha256::digest(&png))
}

#[test]
fn rendering_is_deterministic() {
    for size in [192, 512] {
        assert_eq!(png_digest(size), png_digest(size), "size {} differs between runs", size);
    }
}

#[test]
fn default_font_rendering_is_deterministic() {
    // Whatever font resolves here, it resolves the same way twice
    let g = IconGenerator::new(IconConfig::default());
    let a = g.render(192).unwrap().canvas.encode_png().unwrap();
    let b = g.render(192).unwrap().canvas.encode_png().unwrap();
    assert_eq!(a, b);
}

#[test]
fn golden_icons_match_fixture() {
    for size in [192, 512] {
        let name = format!("builtin-{}.sha256", size);
        let expected_path = golden_path(&name);
        let actual = pixel_digest(size);

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, &actual).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        assert_eq!(actual, exp.trim(), "icon {} drifted from golden", size);
    }
}
