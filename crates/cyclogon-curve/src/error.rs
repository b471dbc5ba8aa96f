use std::fmt;

/// Rejected sample domain.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A bound or the step is NaN or infinite.
    NonFinite,
    /// `step <= 0`.
    NonPositiveStep { step: f64 },
    /// `xmin >= xmax`.
    EmptyInterval { xmin: f64, xmax: f64 },
    /// `(xmax - xmin) / step` overflows or exceeds what one draw can address.
    TooManySamples { count: f64 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NonFinite => write!(f, "sample domain must be finite"),
            DomainError::NonPositiveStep { step } => {
                write!(f, "sample step must be positive, got {step}")
            }
            DomainError::EmptyInterval { xmin, xmax } => {
                write!(f, "sample interval [{xmin}, {xmax}] is empty")
            }
            DomainError::TooManySamples { count } => {
                write!(f, "sample domain yields {count} samples, at most {} allowed", u32::MAX)
            }
        }
    }
}

impl std::error::Error for DomainError {}
