use crate::math::frac360;

/// Low-precision solar and lunar arguments, in degrees.
///
/// Each argument is a quadratic in `t` (Julian centuries since 1900 January 0.5)
/// plus a [`frac360`] term carrying the mean motion in revolutions per century.
/// Values are not reduced to `[0, 360)`; they are only ever passed to sine and
/// cosine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalArgs {
    /// Sun's mean longitude.
    pub sun_longitude: f64,
    /// Sun's mean anomaly.
    pub sun_anomaly: f64,
    /// Moon's mean longitude.
    pub moon_longitude: f64,
    /// Moon's mean anomaly.
    pub moon_anomaly: f64,
    /// Longitude of the Moon's ascending node.
    pub moon_node: f64,
}

impl FundamentalArgs {
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        Self {
            sun_longitude: 2.796967e2 + 3.030e-4 * t2 + frac360(1.000021358e2 * t),
            sun_anomaly: 3.584758e2 - 1.500e-4 * t2 + frac360(9.999736056e1 * t),
            moon_longitude: 2.704342e2 - 1.133e-3 * t2 + frac360(1.336855231e3 * t),
            moon_anomaly: 2.961046e2 + 9.192e-3 * t2 + frac360(1.325552359e3 * t),
            // The node regresses, so its mean motion term is subtracted.
            moon_node: 2.591833e2 + 2.078e-3 * t2 - frac360(5.372616667 * t),
        }
    }
}
