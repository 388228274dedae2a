//! Raster preview of computed flight paths.
//!
//! Projects paths equirectangularly and strokes them with tiny-skia:
//! the polyline in red, endpoints as dots, the direction marker as a
//! rotated arrowhead, and the fitted bounds as a thin outline. For
//! eyeballing curve shape without a map renderer.

use std::path::Path;

use crate::bounds::{self, Bounds};
use crate::{FlightPath, GeoPoint};

/// Canvas geometry for [`render_preview`].
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Padding around the fitted content, in pixels.
    pub padding: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            padding: 40,
        }
    }
}

/// Equirectangular lat/lon → pixel mapping, fitted to the content box.
struct Projector {
    /// North-west corner of the fitted bounds.
    origin: GeoPoint,
    /// Pixels per degree, shared by both axes.
    scale: f64,
    ox: f64,
    oy: f64,
}

impl Projector {
    fn new(bounds: &Bounds, options: &PreviewOptions) -> Self {
        let content_w = options.width.saturating_sub(2 * options.padding).max(1) as f64;
        let content_h = options.height.saturating_sub(2 * options.padding).max(1) as f64;
        // Zero-extent bounds (a degenerate path) still need a finite scale.
        let lon_span = (bounds.north_east.lon - bounds.south_west.lon).max(1e-6);
        let lat_span = (bounds.north_east.lat - bounds.south_west.lat).max(1e-6);
        let scale = (content_w / lon_span).min(content_h / lat_span);

        Self {
            origin: GeoPoint {
                lat: bounds.north_east.lat,
                lon: bounds.south_west.lon,
            },
            scale,
            ox: options.padding as f64 + (content_w - lon_span * scale) / 2.0,
            oy: options.padding as f64 + (content_h - lat_span * scale) / 2.0,
        }
    }

    fn project(&self, p: GeoPoint) -> (f32, f32) {
        let x = self.ox + (p.lon - self.origin.lon) * self.scale;
        let y = self.oy + (self.origin.lat - p.lat) * self.scale;
        (x as f32, y as f32)
    }
}

/// Convert a point sequence to a stroked tiny-skia polyline.
fn polyline(points: &[GeoPoint], proj: &Projector) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    let (x, y) = proj.project(*points.first()?);
    pb.move_to(x, y);
    for &p in &points[1..] {
        let (x, y) = proj.project(p);
        pb.line_to(x, y);
    }
    pb.finish()
}

/// Arrowhead centered on `(x, y)`, drawn pointing north and rotated to
/// `heading`. Screen rotation is clockwise with y down, which matches
/// compass headings directly.
fn marker_path(x: f32, y: f32, heading: f64, size: f32) -> Option<tiny_skia::Path> {
    let mut pb = tiny_skia::PathBuilder::new();
    pb.move_to(x, y - size);
    pb.line_to(x - size * 0.6, y + size * 0.8);
    pb.line_to(x, y + size * 0.4);
    pb.line_to(x + size * 0.6, y + size * 0.8);
    pb.close();
    pb.finish()?
        .transform(tiny_skia::Transform::from_rotate_at(heading as f32, x, y))
}

/// Encode a pixmap to PNG bytes.
fn encode_png(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(pixmap.data()).unwrap();
    drop(writer);
    buf
}

/// Render all paths, their markers, and the shared fitted bounds into a
/// PNG at `output`.
pub fn render_preview(
    paths: &[FlightPath],
    output: &Path,
    options: &PreviewOptions,
) -> Result<(), std::io::Error> {
    let point_sets: Vec<Vec<GeoPoint>> = paths.iter().map(|p| p.points.clone()).collect();
    let bounds = bounds::fit_paths(&point_sets)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let proj = Projector::new(&bounds, options);

    let mut pixmap = tiny_skia::Pixmap::new(options.width.max(1), options.height.max(1)).unwrap();
    pixmap.fill(tiny_skia::Color::WHITE);

    // ── Bounds outline ───────────────────────────────────────
    let mut gray = tiny_skia::Paint::default();
    gray.set_color(tiny_skia::Color::from_rgba8(180, 180, 180, 255));
    let (left, top) = proj.project(GeoPoint {
        lat: bounds.north_east.lat,
        lon: bounds.south_west.lon,
    });
    let (right, bottom) = proj.project(GeoPoint {
        lat: bounds.south_west.lat,
        lon: bounds.north_east.lon,
    });
    if let Some(rect) = tiny_skia::Rect::from_ltrb(left, top, right, bottom) {
        let outline = tiny_skia::PathBuilder::from_rect(rect);
        pixmap.stroke_path(
            &outline,
            &gray,
            &tiny_skia::Stroke::default(),
            tiny_skia::Transform::identity(),
            None,
        );
    }

    // ── Paths, endpoints, markers ────────────────────────────
    let mut red = tiny_skia::Paint::default();
    red.set_color(tiny_skia::Color::from_rgba8(220, 40, 40, 255));
    red.anti_alias = true;
    let mut dark = tiny_skia::Paint::default();
    dark.set_color(tiny_skia::Color::from_rgba8(40, 40, 40, 255));
    dark.anti_alias = true;
    let stroke = tiny_skia::Stroke {
        width: 2.0,
        ..tiny_skia::Stroke::default()
    };

    for flight in paths {
        if let Some(line) = polyline(&flight.points, &proj) {
            pixmap.stroke_path(&line, &red, &stroke, tiny_skia::Transform::identity(), None);
        }

        for p in [flight.points.first(), flight.points.last()]
            .into_iter()
            .flatten()
        {
            let (x, y) = proj.project(*p);
            let mut pb = tiny_skia::PathBuilder::new();
            pb.push_circle(x, y, 4.0);
            if let Some(dot) = pb.finish() {
                pixmap.fill_path(
                    &dot,
                    &dark,
                    tiny_skia::FillRule::Winding,
                    tiny_skia::Transform::identity(),
                    None,
                );
            }
        }

        let (mx, my) = proj.project(flight.marker.position);
        if let Some(arrow) = marker_path(mx, my, flight.marker.heading, 8.0) {
            pixmap.fill_path(
                &arrow,
                &dark,
                tiny_skia::FillRule::Winding,
                tiny_skia::Transform::identity(),
                None,
            );
        }
    }

    std::fs::write(output, encode_png(&pixmap))
}
