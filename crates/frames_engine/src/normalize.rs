use image::imageops::{self, FilterType};
use image::{GenericImageView, Rgb, RgbImage};
use thiserror::Error;

#[derive(Debug, Clone, Copy)]
pub struct NormalizeSettings {
    /// Edge length of the square output canvas.
    pub canvas_size: u32,
    /// Images narrower or shorter than this are rejected.
    pub min_dimension: u32,
    pub jpeg_quality: u8,
    /// Build per-image Huffman tables instead of the standard ones.
    pub optimize_huffman: bool,
    pub filter: FilterType,
    pub background: [u8; 3],
}

impl Default for NormalizeSettings {
    fn default() -> Self {
        Self {
            canvas_size: 800,
            min_dimension: 200,
            jpeg_quality: 95,
            optimize_huffman: true,
            filter: FilterType::Lanczos3,
            background: [255, 255, 255],
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("image too small: {width}x{height} (minimum {min}px per side)")]
    Undersized { width: u32, height: u32, min: u32 },
    #[error("could not encode jpeg: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pub jpeg: Vec<u8>,
    pub source_size: (u32, u32),
    pub scaled_size: (u32, u32),
    /// Top-left corner of the scaled image on the canvas.
    pub offset: (u32, u32),
}

/// Size after shrinking to fit a `max_edge` square; smaller images are left alone.
pub fn fit_within(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    let clamped = max_edge.max(1);
    if width.max(height) <= clamped {
        return (width, height);
    }
    if width >= height {
        let scaled_height =
            ((u64::from(height) * u64::from(clamped)) + (u64::from(width) / 2)) / u64::from(width);
        (clamped, scaled_height.max(1) as u32)
    } else {
        let scaled_width =
            ((u64::from(width) * u64::from(clamped)) + (u64::from(height) / 2)) / u64::from(height);
        (scaled_width.max(1) as u32, clamped)
    }
}

pub fn centered_offset(canvas_size: u32, width: u32, height: u32) -> (u32, u32) {
    (
        canvas_size.saturating_sub(width) / 2,
        canvas_size.saturating_sub(height) / 2,
    )
}

/// Decode, shrink to fit, center on a square background and re-encode as JPEG.
pub fn normalize_image(
    bytes: &[u8],
    settings: &NormalizeSettings,
) -> Result<NormalizedImage, NormalizeError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|err| NormalizeError::Decode(err.to_string()))?;
    let source_size = decoded.dimensions();
    let rgb = decoded.into_rgb8();

    let (width, height) = source_size;
    if width < settings.min_dimension || height < settings.min_dimension {
        return Err(NormalizeError::Undersized {
            width,
            height,
            min: settings.min_dimension,
        });
    }

    let scaled_size = fit_within(width, height, settings.canvas_size);
    let scaled = if scaled_size == source_size {
        rgb
    } else {
        imageops::resize(&rgb, scaled_size.0, scaled_size.1, settings.filter)
    };

    let mut canvas = RgbImage::from_pixel(
        settings.canvas_size,
        settings.canvas_size,
        Rgb(settings.background),
    );
    let offset = centered_offset(settings.canvas_size, scaled_size.0, scaled_size.1);
    imageops::replace(&mut canvas, &scaled, i64::from(offset.0), i64::from(offset.1));

    let jpeg = encode_jpeg(&canvas, settings.jpeg_quality, settings.optimize_huffman)?;

    Ok(NormalizedImage {
        jpeg,
        source_size,
        scaled_size,
        offset,
    })
}

fn encode_jpeg(
    canvas: &RgbImage,
    quality: u8,
    optimize_huffman: bool,
) -> Result<Vec<u8>, NormalizeError> {
    let (width, height) = canvas.dimensions();
    let too_large =
        || NormalizeError::Encode(format!("canvas {width}x{height} exceeds jpeg limits"));
    let width = u16::try_from(width).map_err(|_| too_large())?;
    let height = u16::try_from(height).map_err(|_| too_large())?;

    let mut jpeg = Vec::new();
    let mut encoder = jpeg_encoder::Encoder::new(&mut jpeg, quality);
    encoder.set_optimized_huffman_tables(optimize_huffman);
    encoder
        .encode(canvas.as_raw(), width, height, jpeg_encoder::ColorType::Rgb)
        .map_err(|err| NormalizeError::Encode(err.to_string()))?;
    Ok(jpeg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        image
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("png encoding should succeed");
        cursor.into_inner()
    }

    fn solid_png(width: u32, height: u32) -> Vec<u8> {
        png_bytes(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            Rgb([200, 20, 20]),
        )))
    }

    #[test]
    fn fit_within_preserves_aspect_ratio_and_never_upscales() {
        assert_eq!(fit_within(1200, 900, 800), (800, 600));
        assert_eq!(fit_within(900, 1200, 800), (600, 800));
        assert_eq!(fit_within(2000, 2000, 800), (800, 800));
        assert_eq!(fit_within(640, 480, 800), (640, 480));
        assert_eq!(fit_within(800, 300, 800), (800, 300));
    }

    #[test]
    fn offsets_floor_on_both_axes() {
        assert_eq!(centered_offset(800, 800, 600), (0, 100));
        assert_eq!(centered_offset(800, 333, 801), (233, 0));
        assert_eq!(centered_offset(800, 799, 797), (0, 1));
    }

    #[test]
    fn landscape_image_is_letterboxed_on_white() {
        let out = normalize_image(&solid_png(1200, 900), &NormalizeSettings::default()).unwrap();
        assert_eq!(out.source_size, (1200, 900));
        assert_eq!(out.scaled_size, (800, 600));
        assert_eq!(out.offset, (0, 100));

        let decoded = image::load_from_memory(&out.jpeg).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (800, 800));
        // Padding bands stay (near) white after JPEG round trip; the body is red.
        let top = decoded.get_pixel(400, 40);
        let middle = decoded.get_pixel(400, 400);
        let bottom = decoded.get_pixel(400, 760);
        assert!(top.0.iter().all(|c| *c > 240), "top band {top:?}");
        assert!(bottom.0.iter().all(|c| *c > 240), "bottom band {bottom:?}");
        assert!(middle.0[0] > 150 && middle.0[1] < 80, "body {middle:?}");
    }

    #[test]
    fn small_image_is_centered_without_scaling() {
        let out = normalize_image(&solid_png(300, 250), &NormalizeSettings::default()).unwrap();
        assert_eq!(out.scaled_size, (300, 250));
        assert_eq!(out.offset, (250, 275));
    }

    #[test]
    fn alpha_images_are_flattened_to_rgb() {
        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(
            400,
            400,
            Rgba([10, 200, 10, 128]),
        ));
        let out = normalize_image(&png_bytes(rgba), &NormalizeSettings::default()).unwrap();
        let decoded = image::load_from_memory(&out.jpeg).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn undersized_images_are_rejected() {
        let err = normalize_image(&solid_png(199, 600), &NormalizeSettings::default()).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::Undersized {
                width: 199,
                height: 600,
                min: 200
            }
        );
    }

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        png_bytes(DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })))
    }

    #[test]
    fn optimized_tables_never_grow_the_output() {
        let source = gradient_png(1200, 900);
        let optimized = normalize_image(&source, &NormalizeSettings::default()).unwrap();
        let standard = normalize_image(
            &source,
            &NormalizeSettings {
                optimize_huffman: false,
                ..NormalizeSettings::default()
            },
        )
        .unwrap();

        let decoded = image::load_from_memory(&optimized.jpeg).unwrap();
        assert_eq!(decoded.dimensions(), (800, 800));
        assert!(
            optimized.jpeg.len() <= standard.jpeg.len(),
            "optimized {} > standard {}",
            optimized.jpeg.len(),
            standard.jpeg.len()
        );
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err =
            normalize_image(b"definitely-not-an-image", &NormalizeSettings::default()).unwrap_err();
        assert!(matches!(err, NormalizeError::Decode(_)));
    }
}
