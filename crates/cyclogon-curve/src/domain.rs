use crate::error::DomainError;

/// Closed interval `[xmin, xmax]` walked at a fixed step.
///
/// The sample count is `floor((xmax − xmin) / step)`: a remainder shorter than
/// one step is never sampled, so `xmax` itself is usually not reached. A
/// quotient falling short of an integer by less than a relative
/// [`COUNT_TOLERANCE`] counts as that integer, so `[0, 0.3]` at `0.1` gives
/// three samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SampleDomain {
    xmin: f64,
    step: f64,
    len: usize,
}

/// Relative slack on `(xmax − xmin) / step` before flooring.
pub const COUNT_TOLERANCE: f64 = 1e-12;

/// Upper bound on the sample count; one draw call addresses at most
/// `u32::MAX` vertices.
pub const MAX_SAMPLES: f64 = u32::MAX as f64;

impl SampleDomain {
    pub fn new(xmin: f64, xmax: f64, step: f64) -> Result<Self, DomainError> {
        if !(xmin.is_finite() && xmax.is_finite() && step.is_finite()) {
            return Err(DomainError::NonFinite);
        }
        if step <= 0.0 {
            return Err(DomainError::NonPositiveStep { step });
        }
        if xmin >= xmax {
            return Err(DomainError::EmptyInterval { xmin, xmax });
        }

        let count = sample_count(xmin, xmax, step);
        if !count.is_finite() || count > MAX_SAMPLES {
            return Err(DomainError::TooManySamples { count });
        }
        Ok(Self { xmin, step, len: count as usize })
    }

    /// Number of samples. Zero when `step` exceeds the interval length.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample abscissae in ascending order, `xmin + i·step`.
    ///
    /// Each value is computed from its index rather than accumulated, so
    /// rounding error does not build up along the interval.
    pub fn xs(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(move |i| self.xmin + i as f64 * self.step)
    }
}

/// Floored step count; infinite when the quotient overflows.
fn sample_count(xmin: f64, xmax: f64, step: f64) -> f64 {
    let q = (xmax - xmin) / step;
    let nearest = q.round();
    if nearest > q && nearest - q <= q * COUNT_TOLERANCE {
        nearest
    } else {
        q.floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(xmin: f64, xmax: f64, step: f64) -> Vec<f64> {
        SampleDomain::new(xmin, xmax, step).unwrap().xs().collect()
    }

    fn assert_xs(got: &[f64], want: &[f64]) {
        assert_eq!(got.len(), want.len(), "got {got:?}, want {want:?}");
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-12, "got {got:?}, want {want:?}");
        }
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(
            SampleDomain::new(0.0, 1.0, 0.0),
            Err(DomainError::NonPositiveStep { step: 0.0 })
        );
        assert!(SampleDomain::new(0.0, 1.0, -0.5).is_err());
    }

    #[test]
    fn rejects_empty_or_reversed_interval() {
        assert!(matches!(
            SampleDomain::new(1.0, 1.0, 0.1),
            Err(DomainError::EmptyInterval { .. })
        ));
        assert!(SampleDomain::new(2.0, -2.0, 0.1).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(SampleDomain::new(f64::NAN, 1.0, 0.1), Err(DomainError::NonFinite));
        assert_eq!(SampleDomain::new(0.0, f64::INFINITY, 0.1), Err(DomainError::NonFinite));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let e = SampleDomain::new(0.0, 1.0, -1.0).unwrap_err();
        assert_eq!(e.to_string(), "sample step must be positive, got -1");
    }

    // ── counting ──────────────────────────────────────────────────────────

    #[test]
    fn viewer_domain_has_400_samples() {
        assert_eq!(SampleDomain::new(-20.0, 20.0, 0.1).unwrap().len(), 400);
    }

    #[test]
    fn even_division() {
        assert_xs(&xs(0.0, 1.0, 0.5), &[0.0, 0.5]);
    }

    #[test]
    fn remainder_is_truncated() {
        assert_xs(&xs(0.0, 1.0, 0.3), &[0.0, 0.3, 0.6]);
    }

    #[test]
    fn remainder_free_division_keeps_all_samples() {
        for (xmax, n) in [(0.3, 3), (0.6, 6), (0.7, 7)] {
            let d = SampleDomain::new(0.0, xmax, 0.1).unwrap();
            assert_eq!(d.len(), n, "[0, {xmax}] at 0.1");
        }
        assert_xs(&xs(0.0, 0.3, 0.1), &[0.0, 0.1, 0.2]);
    }

    #[test]
    fn tolerance_does_not_round_up_a_real_remainder() {
        assert_eq!(SampleDomain::new(0.0, 0.299_999, 0.1).unwrap().len(), 2);
    }

    #[test]
    fn rejects_overflowing_range() {
        assert!(matches!(
            SampleDomain::new(-1e308, 1e308, 1.0),
            Err(DomainError::TooManySamples { count }) if count.is_infinite()
        ));
    }

    #[test]
    fn rejects_counts_beyond_one_draw_call() {
        let err = SampleDomain::new(0.0, 1e12, 1e-3).unwrap_err();
        assert!(matches!(err, DomainError::TooManySamples { .. }), "{err}");
        assert!(SampleDomain::new(0.0, MAX_SAMPLES, 1.0).is_ok());
    }

    #[test]
    fn step_equal_to_range_gives_one_sample() {
        assert_xs(&xs(0.0, 1.0, 1.0), &[0.0]);
    }

    #[test]
    fn step_larger_than_range_gives_none() {
        let d = SampleDomain::new(0.0, 1.0, 1.5).unwrap();
        assert!(d.is_empty());
        assert_eq!(d.xs().count(), 0);
    }

    #[test]
    fn xs_are_ascending() {
        let v = xs(-20.0, 20.0, 0.1);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(v[0], -20.0);
    }
}
