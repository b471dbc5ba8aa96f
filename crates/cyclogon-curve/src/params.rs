use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Constants of the rolling-polygon construction.
///
/// `Default` is the square instance drawn by the viewer. The values are fixed
/// for the program's lifetime; nothing mutates a `CyclogonParams` once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CyclogonParams {
    /// Polygon side count `b`.
    pub sides: u32,
    /// Circumradius `R`.
    pub radius: f64,
    /// Phase offset `a` of the contact-angle wrap.
    pub phase_a: f64,
    /// Phase offset `d` added to the wrapped input before evaluating contact.
    pub phase_d: f64,
    /// Half side length `A` (equals `cos(π/4)` for the square).
    pub half_side: f64,
}

impl CyclogonParams {
    /// Period `2π/b` of the edge selector.
    #[inline]
    pub fn edge_period(&self) -> f64 {
        2.0 * PI / self.sides as f64
    }
}

impl Default for CyclogonParams {
    fn default() -> Self {
        Self {
            sides: 4,
            radius: 1.0,
            phase_a: 3.926_990_816_99,
            phase_d: 3.93,
            half_side: FRAC_1_SQRT_2,
        }
    }
}

/// Which coordinate of the contact geometry to evaluate.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Component {
    /// `ratio · cos(t)`
    Horizontal,
    /// `ratio · sin(t) + A`
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_half_side_is_cos_quarter_pi() {
        let p = CyclogonParams::default();
        assert!((p.half_side - (PI / 4.0).cos()).abs() < 1e-15);
    }

    #[test]
    fn square_edge_period_is_half_pi() {
        let p = CyclogonParams::default();
        assert!((p.edge_period() - PI / 2.0).abs() < 1e-15);
    }
}
