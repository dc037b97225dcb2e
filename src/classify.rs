//! Split a triangulation of the outline's points into the triangles that lie
//! inside the outline and the ones bridging its concavities.
//!
//! The test is local: at every corner of a triangle the outgoing edge has to
//! point into the wedge between the corner's two outline neighbors. This relies
//! on the outline being wound the way the generator emits it (counter clockwise
//! with y up).

use std::f64::consts::TAU;

use crate::{triangulation::TriangleIndices, vector::Vec2};

/// Angle to rotate `from` onto `to`, in `[0, 2 * PI)`.
///
/// Rotation is counter clockwise with y up (clockwise on a y down canvas).
pub fn diff_angle(from: Vec2, to: Vec2) -> f64 {
    let from = from.normalize();
    let to = to.normalize();
    let sin = from.cross(to);
    // rounding can push unit vectors' dot slightly past 1
    let cos = from.dot(to).clamp(-1., 1.);
    if sin >= 0. {
        cos.acos()
    } else {
        TAU - cos.acos()
    }
}

/// Whether the directed edge `from -> to` runs along the outline or into its
/// interior, judged at the `from` corner.
///
/// # Panics
/// when `points` is empty or an index is out of range
pub fn is_outline_or_inside(points: &[Vec2], from: usize, to: usize) -> bool {
    let len = points.len();
    let p = points[(from + len - 1) % len];
    let f = points[from];
    let n = points[(from + 1) % len];
    let t = points[to];

    let vfp = p - f;
    let vfn = n - f;
    let vft = t - f;

    let angle_pt = diff_angle(vfp, vft);
    let angle_pn = diff_angle(vfp, vfn);
    // edge back to the predecessor measures 0 and would never pass the comparison
    angle_pt >= angle_pn || vfp == vft
}

/// Triangles partitioned by [`classify`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub inside: Vec<TriangleIndices>,
    pub outside: Vec<TriangleIndices>,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.inside.len() + self.outside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty() && self.outside.is_empty()
    }
}

/// Whether all three directed edges `a -> b`, `b -> c`, `c -> a` pass
/// [`is_outline_or_inside`]
pub fn is_inside(points: &[Vec2], [a, b, c]: TriangleIndices) -> bool {
    is_outline_or_inside(points, a, b)
        && is_outline_or_inside(points, b, c)
        && is_outline_or_inside(points, c, a)
}

/// Partition `triangles`, each one lands in exactly one of the two sets and
/// input order is kept within each set.
pub fn classify(points: &[Vec2], triangles: &[TriangleIndices]) -> Classification {
    let mut classification = Classification::default();
    for &triangle in triangles {
        if is_inside(points, triangle) {
            classification.inside.push(triangle);
        } else {
            classification.outside.push(triangle);
        }
    }

    log::debug!(
        "classified {} triangles, inside: {} outside: {}",
        triangles.len(),
        classification.inside.len(),
        classification.outside.len()
    );
    classification
}
