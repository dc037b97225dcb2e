use std::f64::consts::{PI, TAU};

use crate::{
    error::{Error, Result},
    perturb::Perturbation,
    vector::Vec2,
};

/// Parameters of the recursive outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineParams {
    pub center: Vec2,
    pub radius: f64,
    /// number of angular sectors, must be even
    pub divisions: usize,
    pub start_angle: f64,
    /// recursion levels, 0 gives an empty outline
    pub depth: u32,
}

impl Default for OutlineParams {
    fn default() -> Self {
        Self {
            center: Vec2::new(300., 300.),
            radius: 80.,
            divisions: 6,
            start_angle: 0.,
            depth: 3,
        }
    }
}

/// Number of points [`generate_outline`] emits for the given split and depth.
///
/// Every sector pair contributes two points plus a full child outline, one
/// level shallower. Saturates at `usize::MAX`.
pub fn expected_point_count(divisions: usize, depth: u32) -> usize {
    (0..depth).fold(0usize, |child, _| {
        (divisions / 2).saturating_mul(child).saturating_add(divisions)
    })
}

/// Walk the binary subdivision of the circle and collect the boundary points.
///
/// The returned sequence is a closed polygon in emission order, the last point
/// connects back to the first. Fails before producing anything when
/// `divisions` is odd or zero.
pub fn generate_outline<P: Perturbation + ?Sized>(
    params: &OutlineParams,
    perturbation: &mut P,
) -> Result<Vec<Vec2>> {
    if params.divisions == 0 || params.divisions % 2 != 0 {
        return Err(Error::InvalidDivisions(params.divisions));
    }

    let mut points = Vec::new();
    walk(
        params.center,
        params.radius,
        params.divisions,
        params.start_angle,
        params.depth,
        perturbation,
        &mut points,
    );

    log::debug!(
        "generated {} outline points, divisions: {} depth: {}",
        points.len(),
        params.divisions,
        params.depth
    );
    Ok(points)
}

fn walk<P: Perturbation + ?Sized>(
    center: Vec2,
    radius: f64,
    divisions: usize,
    start_angle: f64,
    depth: u32,
    perturbation: &mut P,
    points: &mut Vec<Vec2>,
) {
    if depth == 0 {
        return;
    }

    let d_angle = TAU / divisions as f64;
    for i in 0..divisions / 2 {
        let angle = i as f64 * d_angle * 2. + start_angle;

        points.push(perturbed(center, radius, angle - d_angle / 2., divisions, perturbation));

        // child sits just outside this sector, its first sector turned back to the parent
        let child_center = center + Vec2::from_angle(angle) * radius * 2.;
        walk(
            child_center,
            radius / 2.,
            divisions,
            angle - PI + d_angle,
            depth - 1,
            perturbation,
            points,
        );

        points.push(perturbed(center, radius, angle + d_angle / 2., divisions, perturbation));
    }
}

fn perturbed<P: Perturbation + ?Sized>(
    center: Vec2,
    radius: f64,
    angle: f64,
    divisions: usize,
    perturbation: &mut P,
) -> Vec2 {
    let dx = perturbation.sample(divisions);
    let dy = perturbation.sample(divisions);
    Vec2::new(angle.cos() + dx, angle.sin() + dy) * radius + center
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};

    use approx::assert_relative_eq;

    use super::*;
    use crate::perturb::{FixedPerturbation, NoPerturbation, RandomPerturbation};

    fn params(divisions: usize, depth: u32) -> OutlineParams {
        OutlineParams {
            divisions,
            depth,
            ..Default::default()
        }
    }

    #[test]
    fn test_point_count() {
        assert_eq!(expected_point_count(6, 0), 0);
        assert_eq!(expected_point_count(6, 1), 6);
        assert_eq!(expected_point_count(6, 2), 24);
        assert_eq!(expected_point_count(6, 3), 78);
        assert_eq!(expected_point_count(2, 3), 6);
        // grows past usize long before the walk could finish
        assert_eq!(expected_point_count(6, 64), usize::MAX);
        assert_eq!(expected_point_count(usize::MAX / 4, 3), usize::MAX);

        for divisions in [2, 4, 6, 8, 10] {
            for depth in 0..4 {
                let points =
                    generate_outline(&params(divisions, depth), &mut RandomPerturbation::seeded(1))
                        .unwrap();
                assert_eq!(points.len(), expected_point_count(divisions, depth));
            }
        }

        let points = generate_outline(&params(6, 1), &mut NoPerturbation).unwrap();
        assert_eq!(points.len(), 6);
        let points = generate_outline(&params(6, 2), &mut NoPerturbation).unwrap();
        assert_eq!(points.len(), 24);
    }

    #[test]
    fn test_odd_divisions_rejected() {
        let mut perturbation = FixedPerturbation::new(vec![0.1]);
        for divisions in [0, 1, 5, 7] {
            let err = generate_outline(&params(divisions, 3), &mut perturbation).unwrap_err();
            assert!(matches!(err, Error::InvalidDivisions(d) if d == divisions));
        }
        // validated before depth is looked at
        assert!(generate_outline(&params(5, 0), &mut perturbation).is_err());
    }

    #[test]
    fn test_zero_depth_is_empty() {
        let points = generate_outline(&params(6, 0), &mut NoPerturbation).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_hexagon() {
        let params = OutlineParams {
            center: Vec2::new(300., 300.),
            radius: 80.,
            divisions: 6,
            start_angle: 0.,
            depth: 1,
        };
        let points = generate_outline(&params, &mut NoPerturbation).unwrap();

        let angles = [
            -FRAC_PI_6,
            FRAC_PI_6,
            FRAC_PI_2,
            5. * FRAC_PI_6,
            7. * FRAC_PI_6,
            3. * FRAC_PI_2,
        ];
        assert_eq!(points.len(), angles.len());
        for (point, angle) in points.iter().zip(angles) {
            let offset = *point - params.center;
            assert_relative_eq!(offset.length(), 80., epsilon = 1e-9);
            assert_relative_eq!(offset.x, 80. * angle.cos(), epsilon = 1e-9);
            assert_relative_eq!(offset.y, 80. * angle.sin(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_child_order() {
        let points = generate_outline(&params(6, 2), &mut NoPerturbation).unwrap();
        let center = Vec2::new(300., 300.);

        // first sector pair: parent point, 6 child points, parent point
        assert_relative_eq!((points[0] - center).length(), 80., epsilon = 1e-9);
        assert_relative_eq!((points[7] - center).length(), 80., epsilon = 1e-9);

        let child_center = center + Vec2::new(160., 0.);
        for point in &points[1..7] {
            assert_relative_eq!((*point - child_center).length(), 40., epsilon = 1e-9);
        }
    }

    #[test]
    fn test_perturbation_order() {
        // x offsets 0.1, y offsets 0, applied in unit circle space
        let mut perturbation = FixedPerturbation::new(vec![0.1, 0.]);
        let points = generate_outline(&params(6, 1), &mut perturbation).unwrap();
        let angle = -FRAC_PI_6;
        assert_relative_eq!(points[0].x, 300. + (angle.cos() + 0.1) * 80., epsilon = 1e-9);
        assert_relative_eq!(points[0].y, 300. + angle.sin() * 80., epsilon = 1e-9);
    }

    #[test]
    fn test_seeded_outline_reproducible() {
        let a = generate_outline(&params(6, 3), &mut RandomPerturbation::seeded(9)).unwrap();
        let b = generate_outline(&params(6, 3), &mut RandomPerturbation::seeded(9)).unwrap();
        assert_eq!(a, b);
    }
}
