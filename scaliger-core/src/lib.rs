//! Numeric building blocks for low-precision positional astronomy.
//!
//! `scaliger-core` holds the pieces that do not depend on a calendar:
//! angle/number helpers, nutation and the obliquity of the ecliptic. All
//! functions are pure and take a plain `f64` Julian Day; angles are returned in
//! degrees.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`math`] | truncation, fractional part, range reduction, polynomials |
//! | [`nutation`] | Δψ and Δε (13 + 9 term series, ~1″) |
//! | [`obliquity`] | mean and true obliquity of the ecliptic |
//! | [`constants`] | epochs, unit conversions |
//!
//! # Example
//!
//! ```
//! use scaliger_core::{nutation, mean_obliquity, true_obliquity};
//!
//! let jd = 2446895.5; // 1987 Apr 10.0
//! let n = nutation(jd);
//! let eps = true_obliquity(jd, n.delta_eps);
//! assert!((eps - mean_obliquity(jd) - n.delta_eps).abs() < 1e-12);
//! ```

pub mod constants;
pub mod math;
pub mod nutation;
pub mod obliquity;

pub use nutation::{nutation, NutationResult};
pub use obliquity::{mean_obliquity, true_obliquity};

pub mod test_helpers;
