use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use image::RgbaImage;
use pixdiff::PixelDiffer;
use tracing::{debug, warn};

use crate::config::ResolvedDiffConfig;
use crate::report::{Report, terminal};

fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded image");
    Ok(img)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

/// `pixdiff compare`: diff two image files.
/// Returns exit code: 0 = same, 1 = different.
pub fn compare(
    left: &Path,
    right: &Path,
    output: Option<&Path>,
    json: bool,
    config: &ResolvedDiffConfig,
) -> Result<i32> {
    let differ = config.differ();
    let left_img = load_image(left)?;
    let right_img = load_image(right)?;

    let start = Instant::now();
    let result = differ.diff(&left_img, &right_img)?;
    let elapsed = start.elapsed();
    debug!(
        engine = differ.name(),
        diff_pixels = result.diff_pixels,
        elapsed_ms = elapsed.as_millis() as u64,
        "comparison finished"
    );

    let written = match (output, &result.diff_image) {
        (Some(path), Some(diff_img)) => {
            ensure_parent(path)?;
            diff_img
                .save(path)
                .with_context(|| format!("Failed to write diff image {}", path.display()))?;
            Some(path)
        }
        (Some(path), None) => {
            warn!(path = %path.display(), "images differ in size, no diff image written");
            None
        }
        (None, _) => None,
    };

    let report = Report::new(left, right, differ.name(), &result, written, elapsed);
    if json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        terminal::print_verdict(&report);
    }

    Ok(if result.different { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use image::Rgba;
    use pixdiff::Pixel;

    use super::*;
    use crate::config::Engine;

    fn config(engine: Engine) -> ResolvedDiffConfig {
        ResolvedDiffConfig {
            engine,
            threshold: 0.1,
            ignore_color: None,
            diff_color: Pixel::RED,
        }
    }

    fn save_solid(dir: &Path, name: &str, w: u32, h: u32, color: Rgba<u8>) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(w, h, color).save(&path).unwrap();
        path
    }

    #[test]
    fn identical_images_exit_zero_and_render_gray() {
        let tmp = tempfile::tempdir().unwrap();
        let a = save_solid(tmp.path(), "a.png", 8, 8, Rgba([0, 0, 0, 255]));
        let b = save_solid(tmp.path(), "b.png", 8, 8, Rgba([0, 0, 0, 255]));
        let out = tmp.path().join("out/diff.png");

        let code = compare(&a, &b, Some(&out), false, &config(Engine::Exact)).unwrap();
        assert_eq!(code, 0);

        let diff = image::open(&out).unwrap().to_rgba8();
        assert_eq!(diff.dimensions(), (8, 8));
        assert_eq!(*diff.get_pixel(3, 3), Rgba([229, 229, 229, 255]));
    }

    #[test]
    fn changed_region_is_highlighted() {
        let tmp = tempfile::tempdir().unwrap();
        let a = save_solid(tmp.path(), "a.png", 10, 10, Rgba([200, 200, 200, 255]));
        let mut changed = RgbaImage::from_pixel(10, 10, Rgba([200, 200, 200, 255]));
        for (x, y) in [(1, 1), (5, 7), (9, 9)] {
            changed.put_pixel(x, y, Rgba([0, 0, 255, 255]));
        }
        let b = tmp.path().join("b.png");
        changed.save(&b).unwrap();
        let out = tmp.path().join("diff.png");

        for engine in [Engine::Exact, Engine::Perceptual] {
            let code = compare(&a, &b, Some(&out), true, &config(engine)).unwrap();
            assert_eq!(code, 1);
            let diff = image::open(&out).unwrap().to_rgba8();
            assert_eq!(*diff.get_pixel(5, 7), Rgba([255, 0, 0, 255]));
            assert_ne!(*diff.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        }
    }

    #[test]
    fn ignore_color_region_does_not_fail() {
        let tmp = tempfile::tempdir().unwrap();
        let banner = Rgba([255, 216, 0, 255]);
        let mut left = RgbaImage::from_pixel(6, 6, Rgba([30, 30, 30, 255]));
        let mut right = left.clone();
        for x in 0..6 {
            left.put_pixel(x, 0, banner);
            right.put_pixel(x, 0, Rgba([x as u8 * 40, 0, 0, 255]));
        }
        let (a, b) = (tmp.path().join("a.png"), tmp.path().join("b.png"));
        left.save(&a).unwrap();
        right.save(&b).unwrap();

        let mut cfg = config(Engine::Exact);
        assert_eq!(compare(&a, &b, None, false, &cfg).unwrap(), 1);
        cfg.ignore_color = Some(Pixel::rgb(255, 216, 0));
        assert_eq!(compare(&a, &b, None, false, &cfg).unwrap(), 0);
    }

    #[test]
    fn dimension_mismatch_fails_without_diff_image() {
        let tmp = tempfile::tempdir().unwrap();
        let a = save_solid(tmp.path(), "a.png", 4, 4, Rgba([1, 2, 3, 255]));
        let b = save_solid(tmp.path(), "b.png", 4, 5, Rgba([1, 2, 3, 255]));
        let out = tmp.path().join("diff.png");

        let code = compare(&a, &b, Some(&out), false, &config(Engine::Perceptual)).unwrap();
        assert_eq!(code, 1);
        assert!(!out.exists());
    }

    #[test]
    fn undecodable_input_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let a = save_solid(tmp.path(), "a.png", 2, 2, Rgba([0, 0, 0, 255]));
        let bogus = tmp.path().join("bogus.png");
        std::fs::write(&bogus, b"not a png").unwrap();

        let err = compare(&a, &bogus, None, false, &config(Engine::Exact)).unwrap_err();
        assert!(format!("{err:#}").contains("bogus.png"));
        let missing = tmp.path().join("missing.png");
        assert!(compare(&a, &missing, None, false, &config(Engine::Exact)).is_err());
    }
}
