use std::path::Path;

use askama::Template;

use crate::{
    classify::Classification,
    error::Result,
    render::{draw_outline, draw_triangles, Palette, Surface, SvgSurface},
    sketch::Observer,
    triangulation::TriangleIndices,
    vector::Vec2,
};

/// One step of the staged drawing
#[derive(Debug, Clone)]
pub struct Frame {
    pub svg: String,
    pub message: String,
}

#[derive(Template)]
#[template(path = "frames.html")]
struct FramesTemplate<'a> {
    frames: &'a [Frame],
    background: &'a str,
    frame_delay_ms: u64,
}

/// Observer drawing the sketch step by step, one frame per pipeline event,
/// so the result can be replayed in a browser.
pub struct FrameRecorder {
    surface: SvgSurface,
    palette: Palette,
    frame_limit: usize,
    frame_delay_ms: u64,
    frames: Vec<Frame>,
}

impl FrameRecorder {
    pub fn new(canvas_size: u32, palette: Palette) -> Result<Self> {
        Ok(Self {
            surface: SvgSurface::new(canvas_size, canvas_size, &palette.background)?,
            palette,
            frame_limit: 1000,
            frame_delay_ms: 50,
            frames: vec![],
        })
    }

    /// Frames past the limit replace the last kept one, so the finished
    /// picture is always the final frame.
    pub fn frame_limit(mut self, frame_limit: usize) -> Self {
        self.frame_limit = frame_limit.max(1);
        self
    }

    /// playback speed of the html viewer
    pub fn frame_delay_ms(mut self, frame_delay_ms: u64) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn render_html(&self) -> Result<String> {
        let html = FramesTemplate {
            frames: &self.frames,
            background: &self.palette.background,
            frame_delay_ms: self.frame_delay_ms,
        }
        .render()?;
        Ok(html)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.render_html()?)?;
        Ok(())
    }

    fn snapshot(&mut self, message: String) {
        let frame = Frame {
            svg: self.surface.to_svg_string(),
            message,
        };
        if self.frames.len() >= self.frame_limit {
            if let Some(last) = self.frames.last_mut() {
                *last = frame;
            }
            return;
        }
        self.frames.push(frame);
    }
}

impl Observer for FrameRecorder {
    fn point_generated(&mut self, index: usize, point: Vec2, _points: &[Vec2]) {
        self.surface
            .fill_circle(point, self.palette.marker_radius, &self.palette.marker);
        self.snapshot(format!("point {index}: ({:.2}, {:.2})", point.x, point.y));
    }

    fn outline_closed(&mut self, points: &[Vec2]) {
        draw_outline(&mut self.surface, points, &self.palette);
        self.snapshot(format!("outline closed, {} points", points.len()));
    }

    fn triangulated(&mut self, _points: &[Vec2], triangles: &[TriangleIndices]) {
        self.snapshot(format!("triangulated, {} triangles", triangles.len()));
    }

    fn classified(&mut self, points: &[Vec2], classification: &Classification) {
        draw_triangles(
            &mut self.surface,
            points,
            &classification.outside,
            self.palette.mesh_width,
            &self.palette.outside,
        );
        self.snapshot(format!("outside: {}", classification.outside.len()));

        draw_triangles(
            &mut self.surface,
            points,
            &classification.inside,
            self.palette.mesh_width,
            &self.palette.inside,
        );
        self.snapshot(format!("inside: {}", classification.inside.len()));
    }
}
