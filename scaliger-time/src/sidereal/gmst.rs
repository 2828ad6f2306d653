use super::options::SiderealOptions;
use crate::julian::{civil_to_julian, extract_utc, julian_midnight, julian_to_civil, CivilDate};
use scaliger_core::constants::{
    ARCSEC_PER_DEGREE, DAYS_PER_JULIAN_CENTURY, DEGREES_PER_HOUR, J1900_JD, SECONDS_PER_HOUR,
    SOLAR_TO_SIDEREAL,
};
use scaliger_core::math::{deg_to_rad, reduce_hours};

/// Mean Greenwich sidereal time at `jd`, in hours.
///
/// Not reduced: the result may exceed 24 by up to one day's worth of the
/// solar-to-sidereal rate.
pub fn mean_gmst(jd: f64) -> f64 {
    let year = julian_to_civil(jd).year;
    let dj = julian_midnight(jd) - J1900_JD;
    let t = dj / DAYS_PER_JULIAN_CENTURY - 1.0;
    let t2 = t * t;
    let t3 = t * t2;
    let r1 = 6.697374558 + 2400.0 * (t - (year as f64 - 2000.0) / 100.0);
    let r0 = 5.13366e-2 * t + 2.586222e-5 * t2 - 1.722e-9 * t3;
    let t0 = reduce_hours(r0 + r1);
    extract_utc(jd) * SOLAR_TO_SIDEREAL + t0
}

/// Equation of the equinoxes in hours: `Δψ cos ε / 15`.
///
/// `obliquity` and `nutation_longitude` are in degrees.
pub fn equation_of_equinoxes(obliquity: f64, nutation_longitude: f64) -> f64 {
    let dpsi_arcsec = nutation_longitude * ARCSEC_PER_DEGREE;
    let delta_seconds = dpsi_arcsec * deg_to_rad(obliquity).cos() / DEGREES_PER_HOUR;
    delta_seconds / SECONDS_PER_HOUR
}

/// Sidereal time at `jd` in hours, `[0, 24)`.
///
/// Greenwich or local, mean or apparent, depending on `options`.
pub fn julian_to_sidereal(jd: f64, options: &SiderealOptions) -> f64 {
    let mut hours = mean_gmst(jd);
    if let (Some(obliquity), Some(dpsi)) = (options.obliquity, options.nutation_longitude) {
        hours += equation_of_equinoxes(obliquity, dpsi);
    }
    if let Some(longitude) = options.longitude {
        hours += longitude / DEGREES_PER_HOUR;
    }
    reduce_hours(hours)
}

pub fn civil_to_sidereal(date: CivilDate, options: &SiderealOptions) -> f64 {
    julian_to_sidereal(civil_to_julian(date), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaliger_core::assert_almost_eq;
    use scaliger_core::{mean_obliquity, nutation};

    // 2010 Feb 7, 23h30m UT
    const JD_2010_02_07: f64 = 2455235.47917;

    #[test]
    fn test_civil_to_sidereal_reference() {
        let date = CivilDate::new(2010, 2, 7.97917);
        assert_almost_eq!(
            civil_to_sidereal(date, &SiderealOptions::new()),
            8.698091,
            1e-3
        );
    }

    #[test]
    fn test_mean_gmst_unreduced() {
        let h = mean_gmst(JD_2010_02_07);
        assert_almost_eq!(h, 32.698193078, 1e-6);
        assert_almost_eq!(reduce_hours(h), 8.698193078, 1e-6);
    }

    #[test]
    fn test_no_options_is_mean_greenwich() {
        let jd = JD_2010_02_07;
        assert_eq!(
            julian_to_sidereal(jd, &SiderealOptions::new()),
            reduce_hours(mean_gmst(jd))
        );
    }

    #[test]
    fn test_longitude_shift() {
        let jd = JD_2010_02_07;
        let gst = julian_to_sidereal(jd, &SiderealOptions::new());

        let west = julian_to_sidereal(jd, &SiderealOptions::new().with_longitude(-75.0));
        assert_almost_eq!(west, reduce_hours(gst - 5.0), 1e-9);
        assert_almost_eq!(west, 3.698193078, 1e-6);

        let east = julian_to_sidereal(jd, &SiderealOptions::new().with_longitude(37.5));
        assert_almost_eq!(east, reduce_hours(gst + 2.5), 1e-9);
    }

    #[test]
    fn test_equation_of_equinoxes() {
        // 1″ of Δψ at ε = 0 is 1/15 s of time.
        assert_almost_eq!(
            equation_of_equinoxes(0.0, 1.0 / 3600.0),
            1.0 / 15.0 / 3600.0,
            1e-15
        );
        assert_eq!(equation_of_equinoxes(23.44, 0.0), 0.0);
    }

    #[test]
    fn test_apparent_shift() {
        let jd = JD_2010_02_07;
        let n = nutation(jd);
        let eps = mean_obliquity(jd) + n.delta_eps;

        let mean = julian_to_sidereal(jd, &SiderealOptions::new());
        let apparent = julian_to_sidereal(jd, &SiderealOptions::new().with_nutation(eps, n.delta_psi));
        assert_almost_eq!(apparent - mean, equation_of_equinoxes(eps, n.delta_psi), 1e-9);
        assert_almost_eq!(apparent, 8.698489316, 1e-6);
    }

    #[test]
    fn test_local_and_apparent_compose() {
        let jd = JD_2010_02_07;
        let greenwich_mean = julian_to_sidereal(jd, &SiderealOptions::new());
        let options = SiderealOptions::new().apparent_at(jd).with_longitude(-155.4783);
        let eqeq = equation_of_equinoxes(
            options.obliquity.unwrap_or_default(),
            options.nutation_longitude.unwrap_or_default(),
        );
        let local_apparent = julian_to_sidereal(jd, &options);
        assert_almost_eq!(
            local_apparent,
            reduce_hours(greenwich_mean + eqeq - 155.4783 / 15.0),
            1e-9
        );
    }

    #[test]
    fn test_far_epochs_stay_in_range() {
        let options = SiderealOptions::new().with_longitude(-75.0);
        for jd in [-1.0e12, 1.0e12] {
            for h in [
                julian_to_sidereal(jd, &SiderealOptions::new()),
                julian_to_sidereal(jd, &options),
            ] {
                assert!(h.is_finite() && (0.0..24.0).contains(&h), "JD {}: {}", jd, h);
            }
        }
        assert_almost_eq!(
            julian_to_sidereal(-1.0e12, &SiderealOptions::new()),
            9.2047299,
            1e-3
        );
    }

    #[test]
    fn test_result_in_range() {
        let mut jd = 2415020.0;
        while jd < 2488070.0 {
            for lng in [-179.9, 0.0, 179.9] {
                let h = julian_to_sidereal(jd, &SiderealOptions::new().with_longitude(lng));
                assert!((0.0..24.0).contains(&h), "JD {} lng {}: {}", jd, lng, h);
            }
            jd += 123.456;
        }
    }

    #[test]
    fn test_sidereal_day_advance() {
        // One mean solar day later, mean sidereal time advances ~3m56.56s.
        let jd = 2451545.0;
        let h0 = julian_to_sidereal(jd, &SiderealOptions::new());
        let h1 = julian_to_sidereal(jd + 1.0, &SiderealOptions::new());
        assert_almost_eq!(reduce_hours(h1 - h0), 0.0657098, 1e-5);
    }
}
