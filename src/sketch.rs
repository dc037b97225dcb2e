use crate::{
    classify::{classify, Classification},
    error::Result,
    generator::{generate_outline, OutlineParams},
    perturb::{Perturbation, RandomPerturbation},
    render::{render, Palette, SvgSurface},
    triangulation::{Delaunator, TriangleIndices, Triangulator},
    vector::Vec2,
};

/// Observer for the pipeline stages, hooks are called in pipeline order:
/// every generated point, the closed outline, the triangulation, the split.
pub trait Observer {
    fn point_generated(&mut self, _index: usize, _point: Vec2, _points: &[Vec2]) {}

    fn outline_closed(&mut self, _points: &[Vec2]) {}

    fn triangulated(&mut self, _points: &[Vec2], _triangles: &[TriangleIndices]) {}

    fn classified(&mut self, _points: &[Vec2], _classification: &Classification) {}
}

/// Default dummy observer, blank impl, so all calls should be optimized out by the compiler.
impl Observer for () {}

/// Builder for [`Sketch`], defaults to the 600x600 three level hexagon sketch
/// with fresh random perturbation.
pub struct SketchBuilder {
    canvas_size: u32,
    params: OutlineParams,
    outline: Option<Vec<Vec2>>,
    perturbation: Box<dyn Perturbation>,
    triangulator: Box<dyn Triangulator>,
    palette: Palette,
}

impl Default for SketchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchBuilder {
    pub fn new() -> Self {
        Self {
            canvas_size: 600,
            params: OutlineParams::default(),
            outline: None,
            perturbation: Box::new(RandomPerturbation::from_entropy()),
            triangulator: Box::new(Delaunator),
            palette: Palette::default(),
        }
    }

    /// Canvas edge length, the outline stays centered on the canvas
    pub fn canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self.params.center = Vec2::new(canvas_size as f64 / 2., canvas_size as f64 / 2.);
        self
    }

    pub fn center(mut self, center: Vec2) -> Self {
        self.params.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.params.radius = radius;
        self
    }

    pub fn divisions(mut self, divisions: usize) -> Self {
        self.params.divisions = divisions;
        self
    }

    pub fn start_angle(mut self, start_angle: f64) -> Self {
        self.params.start_angle = start_angle;
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.params.depth = depth;
        self
    }

    pub fn params(mut self, params: OutlineParams) -> Self {
        self.params = params;
        self
    }

    /// Use a ready made outline, generation params are ignored then
    pub fn outline(mut self, points: Vec<Vec2>) -> Self {
        self.outline = Some(points);
        self
    }

    pub fn perturbation(mut self, perturbation: impl Perturbation + 'static) -> Self {
        self.perturbation = Box::new(perturbation);
        self
    }

    pub fn triangulator(mut self, triangulator: impl Triangulator + 'static) -> Self {
        self.triangulator = Box::new(triangulator);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn build(self) -> Sketch {
        Sketch {
            canvas_size: self.canvas_size,
            params: self.params,
            outline: self.outline,
            perturbation: self.perturbation,
            triangulator: self.triangulator,
            palette: self.palette,
        }
    }
}

/// Everything one pass of the pipeline produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchOutput {
    /// closed outline in emission order
    pub points: Vec<Vec2>,
    pub triangles: Vec<TriangleIndices>,
    pub classification: Classification,
}

/// One generate, triangulate, classify pass
pub struct Sketch {
    canvas_size: u32,
    params: OutlineParams,
    outline: Option<Vec<Vec2>>,
    perturbation: Box<dyn Perturbation>,
    triangulator: Box<dyn Triangulator>,
    palette: Palette,
}

impl Sketch {
    pub fn builder() -> SketchBuilder {
        SketchBuilder::new()
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    pub fn params(&self) -> &OutlineParams {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn run(&mut self) -> Result<SketchOutput> {
        self.run_with_observer(&mut ())
    }

    /// Run the pipeline, every stage completes before the next starts.
    /// Nothing is reported to the observer when the outline is rejected.
    pub fn run_with_observer(&mut self, observer: &mut impl Observer) -> Result<SketchOutput> {
        let points = match &self.outline {
            Some(points) => points.clone(),
            None => generate_outline(&self.params, &mut self.perturbation)?,
        };

        for (index, point) in points.iter().enumerate() {
            observer.point_generated(index, *point, &points[..=index]);
        }
        observer.outline_closed(&points);

        let triangles = self.triangulator.triangulate(&points);
        observer.triangulated(&points, &triangles);

        let classification = classify(&points, &triangles);
        observer.classified(&points, &classification);

        log::info!(
            "sketch done, points: {} triangles: {} inside: {} outside: {}",
            points.len(),
            triangles.len(),
            classification.inside.len(),
            classification.outside.len()
        );

        Ok(SketchOutput {
            points,
            triangles,
            classification,
        })
    }

    /// Draw a finished run onto a fresh canvas sized surface
    pub fn draw(&self, output: &SketchOutput) -> Result<SvgSurface> {
        let mut surface =
            SvgSurface::new(self.canvas_size, self.canvas_size, &self.palette.background)?;
        render(
            &mut surface,
            &output.points,
            &output.classification,
            &self.palette,
        );
        Ok(surface)
    }
}
