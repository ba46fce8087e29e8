pub mod histogram;
pub mod perceptual;

use std::io::BufReader;
use std::path::Path;

use fast_image_resize::{self as fir, images::Image as FirImage};

use crate::error::{Error, Result};

/// Side length of the square grayscale grid the perceptual hash works on.
pub const HASH_GRID: usize = 32;

/// Decode `path` and produce the 32x32 grayscale grid for hashing.
///
/// Pipeline: `image` decode, SIMD resize of the RGB image to 32x32, BT.601
/// grayscale over the 1024 resized pixels, then the EXIF orientation applied
/// as a permutation of the square grid. Orienting after the resize is
/// equivalent to orienting first: the resize is separable and the target is
/// square.
pub(crate) fn load_hash_grid(path: &Path) -> Result<Vec<u8>> {
    let rgb = image::open(path)?.to_rgb8();
    let (w, h) = rgb.dimensions();

    let fingerprint_err = |message: String| Error::Fingerprint {
        path: path.to_path_buf(),
        message,
    };

    let src = FirImage::from_vec_u8(w, h, rgb.into_raw(), fir::PixelType::U8x3)
        .map_err(|e| fingerprint_err(e.to_string()))?;
    let mut dst = FirImage::new(HASH_GRID as u32, HASH_GRID as u32, fir::PixelType::U8x3);
    fir::Resizer::new()
        .resize(&src, &mut dst, None)
        .map_err(|e| fingerprint_err(e.to_string()))?;

    let rgb_buf = dst.buffer();
    let mut gray = vec![0u8; HASH_GRID * HASH_GRID];
    for (i, px) in gray.iter_mut().enumerate() {
        let r = rgb_buf[i * 3] as f32;
        let g = rgb_buf[i * 3 + 1] as f32;
        let b = rgb_buf[i * 3 + 2] as f32;
        *px = (0.299 * r + 0.587 * g + 0.114 * b) as u8;
    }

    let orientation = exif_orientation(path).unwrap_or(1);
    Ok(orient_square(&gray, HASH_GRID, orientation))
}

/// EXIF orientation tag (1-8), if the file carries one.
fn exif_orientation(path: &Path) -> Option<u8> {
    let file = std::fs::File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    field.value.get_uint(0).map(|v| v as u8)
}

/// Apply an EXIF orientation (1-8) to a square n×n grayscale buffer.
///
/// Every orientation is a pixel permutation; a square grid keeps its
/// dimensions under all eight, so the output is again n×n.
fn orient_square(buf: &[u8], n: usize, orientation: u8) -> Vec<u8> {
    if !(2..=8).contains(&orientation) {
        return buf.to_vec();
    }

    let mut out = vec![0u8; n * n];
    for y in 0..n {
        for x in 0..n {
            // (sx, sy) = source pixel that lands at destination (x, y)
            let (sx, sy) = match orientation {
                2 => (n - 1 - x, y),         // mirror horizontal
                3 => (n - 1 - x, n - 1 - y), // rotate 180
                4 => (x, n - 1 - y),         // mirror vertical
                5 => (y, x),                 // transpose
                6 => (y, n - 1 - x),         // rotate 90 CW
                7 => (n - 1 - y, n - 1 - x), // transverse
                8 => (n - 1 - y, x),         // rotate 90 CCW
                _ => (x, y),
            };
            out[y * n + x] = buf[sy * n + sx];
        }
    }
    out
}
