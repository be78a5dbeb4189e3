use anyhow::{Context, Result, bail};
use image::ImageFormat;
use std::path::Path;

mod font;
mod icons;
mod render;

use icons::{ICON_SET, OUTPUT_DIR};

fn main() -> Result<()> {
    generate_all(Path::new(OUTPUT_DIR))
}

/// Generates every icon in the table into `output_dir`. The asset catalog
/// owns its directory layout, so a missing directory aborts the run before
/// any file is written.
fn generate_all(output_dir: &Path) -> Result<()> {
    if !output_dir.is_dir() {
        bail!("directory {} does not exist", output_dir.display());
    }

    println!("Generating placeholder app icons...");
    println!("Output directory: {}\n", output_dir.display());

    let font = font::resolve();
    for spec in &ICON_SET {
        let img = render::render_icon(spec.width, spec.height, &font);
        let path = output_dir.join(spec.file_name);
        img.save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("✓ Created: {} ({}x{})", spec.file_name, spec.width, spec.height);
    }

    println!("\n✓ All placeholder icons generated successfully!");
    println!(
        "⚠️  Note: These are temporary placeholder images. Replace with actual app icons before release."
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;
    use std::fs;

    #[test]
    fn generates_all_icons_at_declared_sizes() {
        let dir = tempfile::tempdir().unwrap();
        generate_all(dir.path()).unwrap();
        for spec in &ICON_SET {
            let img = image::open(dir.path().join(spec.file_name)).unwrap();
            assert_eq!(
                img.dimensions(),
                (spec.width, spec.height),
                "{}",
                spec.file_name
            );
        }
    }

    #[test]
    fn missing_output_dir_writes_nothing() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("AppIcon.appiconset");
        let err = generate_all(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
        assert!(fs::read_dir(parent.path()).unwrap().next().is_none());
    }

    #[test]
    fn reruns_are_byte_identical() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        generate_all(first.path()).unwrap();
        generate_all(second.path()).unwrap();
        for spec in &ICON_SET {
            let a = fs::read(first.path().join(spec.file_name)).unwrap();
            let b = fs::read(second.path().join(spec.file_name)).unwrap();
            assert_eq!(a, b, "{}", spec.file_name);
        }
    }
}
