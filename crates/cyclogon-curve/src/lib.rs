//! Evaluation and sampling of a **cyclogon** curve: the path traced by a
//! vertex of a regular polygon rolling without slipping along a line.
//!
//! This crate is intentionally dependency-free so the math can be tested and
//! reused without pulling in any windowing or GPU code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`params`] | `CyclogonParams`, `Component` |
//! | [`curve`] | `cx`, `cy` and the auxiliary step/phase functions |
//! | [`domain`] | `SampleDomain` |
//! | [`error`] | `DomainError` |
//! | [`sampler`] | `sample`, `CurveSamples`, `DisplayScale` |
//!
//! # Quick start
//!
//! ```rust
//! use cyclogon_curve::{sample, CyclogonParams, DisplayScale, SampleDomain};
//!
//! let domain = SampleDomain::new(-20.0, 20.0, 0.1).unwrap();
//! let samples = sample(&CyclogonParams::default(), domain, DisplayScale::default(), [1.0, 0.0, 0.0]);
//! assert_eq!(samples.len(), 400);
//! ```

pub mod curve;
pub mod domain;
pub mod error;
pub mod params;
pub mod sampler;

pub use curve::{cx, cy};
pub use domain::SampleDomain;
pub use error::DomainError;
pub use params::{Component, CyclogonParams};
pub use sampler::{sample, CurveSamples, DisplayScale, Point3, Rgb};
