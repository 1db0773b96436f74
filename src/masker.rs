use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    ImageReader, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::{classifier::ShadowPolicy, error::Result};

/// Rewrites every opaque shadow pixel of `image` to fully transparent
/// black, in row-major order.
///
/// Already transparent pixels (alpha 0) are skipped: they are neither
/// reclassified nor counted, which also makes the whole pass idempotent.
/// Returns the number of pixels whose alpha went from nonzero to zero.
pub fn mask_pixels(image: &mut RgbaImage, policy: ShadowPolicy) -> u64 {
    let mut changed: u64 = 0;

    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a > 0 && policy.is_shadow(r, g, b) {
            pixel.0 = [0, 0, 0, 0];
            changed += 1;
        }
    }

    changed
}

/// Strips the shadow color from the image at `path` and overwrites the
/// file with the result. Returns the changed pixel count.
///
/// The image is decoded to RGBA8 first, so sources without an alpha
/// channel are treated as fully opaque. The new PNG is written to a
/// temporary sibling file and renamed over the original, so an
/// interrupted run never leaves a half-written file behind.
pub fn mask_file(path: &Path, policy: ShadowPolicy) -> Result<u64> {
    let mut image = ImageReader::open(path)?.decode()?.to_rgba8();
    let changed = mask_pixels(&mut image, policy);

    let tmp_path = path.with_extension("png.tmp");
    let mut writer = BufWriter::new(fs::File::create(&tmp_path)?);
    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Default, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    writer.flush()?;
    fs::rename(&tmp_path, path)?;

    Ok(changed)
}
