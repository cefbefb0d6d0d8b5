//! Canvas drawing and PNG output

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::{IconGeometry, BACKGROUND_COLOR, FOREGROUND_COLOR};
use crate::error::IconError;

/// Render the icon for a square canvas of `size` pixels
pub fn render_icon(size: u32) -> Result<RgbaImage, IconError> {
    let geometry = IconGeometry::for_size(size);
    tracing::debug!(?geometry, "Rendering icon");

    // Starts fully transparent
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize(size))?;
    let center = geometry.center();

    fill_circle(&mut pixmap, center, geometry.background_radius(), BACKGROUND_COLOR);
    fill_circle(&mut pixmap, center, geometry.dot_radius(), FOREGROUND_COLOR);
    stroke_circle(
        &mut pixmap,
        center,
        geometry.ring_path_radius(),
        geometry.ring_band(),
        FOREGROUND_COLOR,
    );

    Ok(to_rgba_image(&pixmap))
}

/// Render the icon and save it as PNG, replacing any existing file
pub fn write_icon(size: u32, path: &Path) -> Result<(), IconError> {
    let image = render_icon(size)?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn solid_paint(color: (u8, u8, u8, u8)) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, color.3);
    paint.anti_alias = true;
    paint
}

fn fill_circle(pixmap: &mut Pixmap, center: f32, radius: f32, color: (u8, u8, u8, u8)) {
    if radius <= 0.0 {
        return;
    }
    let Some(path) = PathBuilder::from_circle(center, center, radius) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &solid_paint(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

fn stroke_circle(
    pixmap: &mut Pixmap,
    center: f32,
    radius: f32,
    width: f32,
    color: (u8, u8, u8, u8),
) {
    // A zero width would make tiny-skia draw a hairline
    if radius <= 0.0 || width <= 0.0 {
        return;
    }
    let Some(path) = PathBuilder::from_circle(center, center, radius) else {
        return;
    };
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        &path,
        &solid_paint(color),
        &stroke,
        Transform::identity(),
        None,
    );
}

/// Convert premultiplied pixmap data to straight-alpha RGBA8
fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::DensityBucket;

    fn rgba(color: (u8, u8, u8, u8)) -> Rgba<u8> {
        Rgba([color.0, color.1, color.2, color.3])
    }

    #[test]
    fn test_render_dimensions() {
        for bucket in DensityBucket::ALL {
            let image = render_icon(bucket.size()).unwrap();
            assert_eq!(image.dimensions(), (bucket.size(), bucket.size()));
        }
    }

    #[test]
    fn test_corners_transparent() {
        let image = render_icon(48).unwrap();
        for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
            assert_eq!(image.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
    }

    #[test]
    fn test_background_inside_circle_edge() {
        for bucket in DensityBucket::ALL {
            let size = bucket.size();
            let g = IconGeometry::for_size(size);
            let pixel = image_pixel(size, size / 2, g.margin + 2);
            assert_eq!(pixel, rgba(BACKGROUND_COLOR), "size {size}");
        }
    }

    #[test]
    fn test_center_dot_is_white() {
        let image = render_icon(48).unwrap();
        assert_eq!(*image.get_pixel(24, 24), rgba(FOREGROUND_COLOR));
    }

    #[test]
    fn test_ring_and_gap() {
        // 144: dot radius 9, ring band 17..24
        let image = render_icon(144).unwrap();
        assert_eq!(*image.get_pixel(72, 51), rgba(FOREGROUND_COLOR));
        assert_eq!(*image.get_pixel(72, 59), rgba(BACKGROUND_COLOR));
        // Just outside the ring, still on the disc
        assert_eq!(*image.get_pixel(72, 44), rgba(BACKGROUND_COLOR));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_icon(96).unwrap();
        let b = render_icon(96).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(render_icon(0), Err(IconError::InvalidSize(0))));
    }

    #[test]
    fn test_tiny_sizes_render() {
        for size in 1..10 {
            let image = render_icon(size).unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_write_icon_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_icon(72, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8(), render_icon(72).unwrap());
    }

    #[test]
    fn test_write_icon_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");
        let err = write_icon(48, &path).unwrap_err();
        assert!(matches!(err, IconError::Write { .. }));
    }

    fn image_pixel(size: u32, x: u32, y: u32) -> Rgba<u8> {
        *render_icon(size).unwrap().get_pixel(x, y)
    }
}
