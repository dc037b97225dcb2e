use crate::vector::Vec2;

/// Indices of a triangle's three points in the point sequence
pub type TriangleIndices = [usize; 3];

/// Delaunay triangulation of a point set.
///
/// Implementations return triangles as index triples into `points`, covering
/// the convex hull. The classifier reads each triple as directed edges, so the
/// winding must match [`Delaunator`]'s.
pub trait Triangulator {
    fn triangulate(&self, points: &[Vec2]) -> Vec<TriangleIndices>;
}

impl<T: Triangulator + ?Sized> Triangulator for Box<T> {
    fn triangulate(&self, points: &[Vec2]) -> Vec<TriangleIndices> {
        (**self).triangulate(points)
    }
}

/// The [`delaunator`] crate.
///
/// Triangles come out clockwise with y up (counter clockwise on a y down
/// canvas). Fewer than three points, or all of them collinear, give no
/// triangles; near duplicate points are left out.
#[derive(Debug, Default, Clone, Copy)]
pub struct Delaunator;

impl Triangulator for Delaunator {
    fn triangulate(&self, points: &[Vec2]) -> Vec<TriangleIndices> {
        let coords = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect::<Vec<_>>();

        let triangles = delaunator::triangulate(&coords)
            .triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect::<Vec<_>>();

        log::debug!(
            "triangulated {} points into {} triangles",
            points.len(),
            triangles.len()
        );
        triangles
    }
}

/// Flat index form, three entries per triangle
pub fn flatten(triangles: &[TriangleIndices]) -> Vec<usize> {
    triangles.iter().flatten().copied().collect()
}
