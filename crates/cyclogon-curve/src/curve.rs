//! Closed-form cyclogon coordinates.
//!
//! The input `x` is split into the index of the edge currently rolling
//! ([`edge_index`]) and the angle already rolled on that edge
//! ([`local_phase`]). The contact geometry of the edge is evaluated at a fixed
//! phase ([`contact`]), rotated by the local phase, and shifted right by the
//! length of every edge that has already rolled over ([`segment_offset`]).
//!
//! All math is `f64`. Nothing here guards the cosine in the denominator of
//! [`contact`]: near its zeros the output grows without bound and may become
//! non-finite, and callers are expected to tolerate that.

use std::f64::consts::PI;

use crate::params::{Component, CyclogonParams};

/// Index of the polygon edge in contact at `x` (`floor(x·b / 2π)`).
#[inline]
pub fn edge_index(p: &CyclogonParams, x: f64) -> f64 {
    (x * p.sides as f64 / (2.0 * PI)).floor()
}

/// Sawtooth wrap of `x`: minus one edge period per rolled edge.
#[inline]
pub fn phase_wrap(p: &CyclogonParams, x: f64) -> f64 {
    -p.edge_period() * edge_index(p, x)
}

/// Horizontal displacement contributed by edges that have fully rolled.
#[inline]
pub fn segment_offset(p: &CyclogonParams, x: f64) -> f64 {
    2.0 * p.half_side * edge_index(p, x)
}

/// Position of `x` inside the current edge's rolling interval, in `[0, 2π/b)`.
#[inline]
pub fn local_phase(p: &CyclogonParams, x: f64) -> f64 {
    x - p.edge_period() * edge_index(p, x)
}

/// Contact-point geometry of one polygon edge resting on the line.
///
/// `R·cos(π/b) / cos(θ)` is the distance from the centre to the edge along
/// direction `θ`, where `θ` is `t` measured from the middle of the edge that
/// `t − a` falls in.
pub fn contact(p: &CyclogonParams, t: f64, component: Component) -> f64 {
    let b = p.sides as f64;
    let apothem = p.radius * (PI / b).cos();

    let u = t - p.phase_a;
    let edge = (b * u / (2.0 * PI) - b * (u / (2.0 * PI)).floor()).floor();
    let ratio = apothem / (u - (2.0 * PI * edge + PI) / b).cos();

    match component {
        Component::Horizontal => ratio * t.cos(),
        Component::Vertical => ratio * t.sin() + p.half_side,
    }
}

/// Returns `(f − A, g, φ)` shared by [`cx`] and [`cy`].
#[inline]
fn rolled_frame(p: &CyclogonParams, x: f64) -> (f64, f64, f64) {
    let t = p.phase_d + phase_wrap(p, x);
    let f = contact(p, t, Component::Horizontal) - p.half_side;
    let g = contact(p, t, Component::Vertical);
    (f, g, local_phase(p, x))
}

/// Horizontal coordinate of the traced vertex.
pub fn cx(p: &CyclogonParams, x: f64) -> f64 {
    let (f, g, phi) = rolled_frame(p, x);
    let (sin, cos) = phi.sin_cos();
    f * cos + g * sin + p.half_side + segment_offset(p, x)
}

/// Vertical coordinate of the traced vertex.
pub fn cy(p: &CyclogonParams, x: f64) -> f64 {
    let (f, g, phi) = rolled_frame(p, x);
    let (sin, cos) = phi.sin_cos();
    g * cos - f * sin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq() -> CyclogonParams {
        CyclogonParams::default()
    }

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── auxiliary functions ───────────────────────────────────────────────

    #[test]
    fn edge_index_steps_every_quarter_turn() {
        let p = sq();
        assert_eq!(edge_index(&p, 0.0), 0.0);
        assert_eq!(edge_index(&p, 1.5), 0.0);
        assert_eq!(edge_index(&p, 1.6), 1.0);
        assert_eq!(edge_index(&p, -0.1), -1.0);
        assert_eq!(edge_index(&p, 20.0), 12.0);
    }

    #[test]
    fn segment_offset_is_multiple_of_side_length() {
        let p = sq();
        assert_eq!(segment_offset(&p, 0.5), 0.0);
        assert!(close(segment_offset(&p, 2.0), 2.0 * p.half_side, 1e-15));
        assert!(close(segment_offset(&p, -0.5), -2.0 * p.half_side, 1e-15));
    }

    #[test]
    fn phase_wrap_and_local_phase_recompose_input() {
        let p = sq();
        for x in [-7.3, -1.0, 0.0, 0.4, 2.2, 13.9] {
            assert!(close(local_phase(&p, x), x + phase_wrap(&p, x), 1e-12));
        }
    }

    #[test]
    fn local_phase_stays_inside_one_edge() {
        let p = sq();
        let period = p.edge_period();
        for i in -200..200 {
            let phi = local_phase(&p, i as f64 * 0.1);
            assert!((0.0..period).contains(&phi), "phi = {phi}");
        }
    }

    #[test]
    fn contact_selector_picks_cos_or_sin_branch() {
        let p = sq();
        let t = p.phase_d;
        let h = contact(&p, t, Component::Horizontal);
        let v = contact(&p, t, Component::Vertical);
        // Both branches share the same ratio.
        assert!(close(h / t.cos(), (v - p.half_side) / t.sin(), 1e-12));
    }

    // ── cx / cy ───────────────────────────────────────────────────────────

    #[test]
    fn evaluation_is_bit_identical() {
        let p = sq();
        for i in -50..50 {
            let x = i as f64 * 0.37;
            assert_eq!(cx(&p, x).to_bits(), cx(&p, x).to_bits());
            assert_eq!(cy(&p, x).to_bits(), cy(&p, x).to_bits());
        }
    }

    #[test]
    fn starts_on_the_line() {
        let p = sq();
        assert!(close(cy(&p, 0.0), 0.0, 1e-9));
        assert!(close(cx(&p, 0.0), -0.702_863_9, 1e-6));
    }

    #[test]
    fn reaches_circumradius_height_at_pi() {
        let p = sq();
        assert!(close(cy(&p, PI), std::f64::consts::SQRT_2, 1e-9));
        assert!(close(cx(&p, PI), 3.531_291_0, 1e-6));
    }

    #[test]
    fn continuous_across_edge_boundary() {
        let p = sq();
        let edge = p.edge_period();
        let eps = 1e-9;
        assert!(close(cx(&p, edge - eps), cx(&p, edge), 1e-6));
        assert!(close(cy(&p, edge - eps), cy(&p, edge), 1e-6));
    }

    #[test]
    fn finite_over_viewer_domain() {
        let p = sq();
        for i in 0..400 {
            let x = -20.0 + i as f64 * 0.1;
            assert!(cx(&p, x).is_finite(), "cx({x})");
            assert!(cy(&p, x).is_finite(), "cy({x})");
        }
    }
}
