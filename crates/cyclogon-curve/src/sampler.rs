use crate::curve::{cx, cy};
use crate::domain::SampleDomain;
use crate::params::CyclogonParams;

/// `(x, y, z)` vertex position.
pub type Point3 = [f32; 3];

/// `(r, g, b)` vertex color.
pub type Rgb = [f32; 3];

/// Per-axis factors applied to `(cx, cy)` to fit the curve's aspect ratio
/// into the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayScale {
    pub x: f64,
    pub y: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self { x: 3.0, y: 0.2 }
    }
}

/// Sampled curve: positions and their colors, index-aligned.
///
/// Both sequences are only ever built together, so they always have the same
/// length; point `i` is drawn with color `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSamples {
    points: Vec<Point3>,
    colors: Vec<Rgb>,
}

impl CurveSamples {
    /// Builds samples from positions, painting every point with `color`.
    pub fn uniform(points: Vec<Point3>, color: Rgb) -> Self {
        let colors = vec![color; points.len()];
        Self { points, colors }
    }

    #[inline]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Size in bytes of one of the two sequences as laid out in a vertex buffer.
    pub fn byte_len(&self) -> usize {
        std::mem::size_of::<Point3>() * self.points.len()
    }
}

/// Samples the curve over `domain`, scaled by `scale`, in ascending-x order.
///
/// Pure: identical inputs always yield identical sequences.
pub fn sample(
    params: &CyclogonParams,
    domain: SampleDomain,
    scale: DisplayScale,
    color: Rgb,
) -> CurveSamples {
    let points = domain
        .xs()
        .map(|x| {
            [
                (cx(params, x) * scale.x) as f32,
                (cy(params, x) * scale.y) as f32,
                0.0,
            ]
        })
        .collect();

    CurveSamples::uniform(points, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = [1.0, 0.0, 0.0];

    fn viewer_samples() -> CurveSamples {
        let domain = SampleDomain::new(-20.0, 20.0, 0.1).unwrap();
        sample(&CyclogonParams::default(), domain, DisplayScale::default(), RED)
    }

    #[test]
    fn viewer_instance_has_400_points() {
        let s = viewer_samples();
        assert_eq!(s.len(), 400);
        assert_eq!(s.colors().len(), 400);
        assert_eq!(s.byte_len(), 400 * 12);
    }

    #[test]
    fn lengths_match_for_any_domain() {
        for (xmin, xmax, step) in [(0.0, 1.0, 0.5), (0.0, 1.0, 0.3), (-3.0, 7.0, 0.07), (0.0, 1.0, 2.0)] {
            let d = SampleDomain::new(xmin, xmax, step).unwrap();
            let s = sample(&CyclogonParams::default(), d, DisplayScale::default(), RED);
            assert_eq!(s.points().len(), s.colors().len());
            assert_eq!(s.len(), d.len());
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        assert_eq!(viewer_samples(), viewer_samples());
    }

    #[test]
    fn points_lie_in_plane_and_are_red() {
        let s = viewer_samples();
        assert!(s.points().iter().all(|p| p[2] == 0.0));
        assert!(s.colors().iter().all(|c| *c == RED));
    }

    #[test]
    fn scale_is_applied_per_axis() {
        let p = CyclogonParams::default();
        let d = SampleDomain::new(0.0, 1.0, 0.5).unwrap();
        let s = sample(&p, d, DisplayScale::default(), RED);

        let [x, y, _] = s.points()[1];
        assert_eq!(x, (cx(&p, 0.5) * 3.0) as f32);
        assert_eq!(y, (cy(&p, 0.5) * 0.2) as f32);
    }

    #[test]
    fn oversized_step_yields_nothing() {
        let d = SampleDomain::new(0.0, 1.0, 5.0).unwrap();
        let s = sample(&CyclogonParams::default(), d, DisplayScale::default(), RED);
        assert!(s.is_empty());
        assert!(s.colors().is_empty());
    }
}
