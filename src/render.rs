use std::path::Path;

use svg::{
    node::element::{path::Data, Circle, Line, Path as SvgPath, Rectangle},
    Document, Node,
};

use crate::{
    classify::Classification,
    error::{Error, Result},
    triangulation::TriangleIndices,
    vector::Vec2,
};

/// 2d drawing primitives the sketch is rendered with
pub trait Surface {
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str);

    fn stroke_line(&mut self, p: Vec2, q: Vec2, width: f64, color: &str);

    /// polyline through `points`, closed back to the first one
    fn stroke_closed_path(&mut self, points: &[Vec2], width: f64, color: &str);
}

/// Colors and sizes used by [`render`]
#[derive(Debug, Clone)]
pub struct Palette {
    pub background: String,
    pub marker: String,
    pub marker_radius: f64,
    pub outline: String,
    pub outline_width: f64,
    pub inside: String,
    pub outside: String,
    pub mesh_width: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#1e1e1e".into(),
            marker: "#ffb900".into(),
            marker_radius: 4.,
            outline: "white".into(),
            outline_width: 4.,
            inside: "#f0e".into(),
            outside: "#444".into(),
            mesh_width: 2.,
        }
    }
}

/// SVG document with canvas style coordinates: origin at left-top, y down
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    doc: Document,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32, background: &str) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::SurfaceUnavailable { width, height });
        }

        let doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background),
            );

        Ok(Self { width, height, doc })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn to_svg_string(&self) -> String {
        self.doc.to_string()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        svg::save(path, &self.doc)?;
        Ok(())
    }
}

impl Surface for SvgSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str) {
        self.doc.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", radius)
                .set("fill", color),
        );
    }

    fn stroke_line(&mut self, p: Vec2, q: Vec2, width: f64, color: &str) {
        self.doc.append(
            Line::new()
                .set("x1", p.x)
                .set("y1", p.y)
                .set("x2", q.x)
                .set("y2", q.y)
                .set("stroke", color)
                .set("stroke-width", width),
        );
    }

    fn stroke_closed_path(&mut self, points: &[Vec2], width: f64, color: &str) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };

        let data = rest
            .iter()
            .fold(Data::new().move_to((first.x, first.y)), |data, p| {
                data.line_to((p.x, p.y))
            })
            .close();

        self.doc.append(
            SvgPath::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", color)
                .set("stroke-width", width)
                .set("stroke-linejoin", "round"),
        );
    }
}

/// a marker circle at every outline point
pub fn draw_markers<S: Surface + ?Sized>(surface: &mut S, points: &[Vec2], palette: &Palette) {
    for p in points {
        surface.fill_circle(*p, palette.marker_radius, &palette.marker);
    }
}

pub fn draw_outline<S: Surface + ?Sized>(surface: &mut S, points: &[Vec2], palette: &Palette) {
    surface.stroke_closed_path(points, palette.outline_width, &palette.outline);
}

/// stroke the three edges of every triangle
pub fn draw_triangles<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Vec2],
    triangles: &[TriangleIndices],
    width: f64,
    color: &str,
) {
    for [a, b, c] in triangles {
        let (p0, p1, p2) = (points[*a], points[*b], points[*c]);
        surface.stroke_line(p0, p1, width, color);
        surface.stroke_line(p1, p2, width, color);
        surface.stroke_line(p2, p0, width, color);
    }
}

/// outside triangles are drawn first so the inside mesh stays on top
pub fn draw_classification<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Vec2],
    classification: &Classification,
    palette: &Palette,
) {
    draw_triangles(
        surface,
        points,
        &classification.outside,
        palette.mesh_width,
        &palette.outside,
    );
    draw_triangles(
        surface,
        points,
        &classification.inside,
        palette.mesh_width,
        &palette.inside,
    );
}

/// Draw a whole sketch: markers, outline, outside mesh, inside mesh
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Vec2],
    classification: &Classification,
    palette: &Palette,
) {
    draw_markers(surface, points, palette);
    draw_outline(surface, points, palette);
    draw_classification(surface, points, classification, palette);
}
