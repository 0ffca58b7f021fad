use std::f64::consts::TAU;

use crate::time::JulianDay;

use super::normalize;

/// Reference perigee epoch (Julian Day) and anomalistic month in days.
pub const ANOMALISTIC_EPOCH_JD: f64 = 2_451_562.2;
pub const ANOMALISTIC_MONTH_DAYS: f64 = 27.55454988;

/// Reference ascending-node epoch (Julian Day) and draconic month in days.
pub const DRACONIC_EPOCH_JD: f64 = 2_451_565.2;
pub const DRACONIC_MONTH_DAYS: f64 = 27.212220817;

/// Reference longitude epoch (Julian Day) and sidereal month in days.
pub const SIDEREAL_EPOCH_JD: f64 = 2_451_555.8;
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321582241;

/// Mean geocentric distance in Earth radii.
const MEAN_DISTANCE: f64 = 60.4;
/// Amplitude of the latitude oscillation in degrees.
const MAX_LATITUDE: f64 = 5.1;

/// Unrounded distance and ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalGeometry {
    /// Earth radii.
    pub distance: f64,
    /// Degrees.
    pub latitude: f64,
    /// Degrees, `[0, 360)` before rounding.
    pub longitude: f64,
}

/// Distance, latitude and longitude for a Julian Day and synodic phase fraction.
pub fn orbital_geometry(jd: JulianDay, phase_fraction: f64) -> OrbitalGeometry {
    let ip = phase_fraction * TAU;
    let dp = anomaly_angle(jd);

    OrbitalGeometry {
        distance: distance(ip, dp),
        latitude: ecliptic_latitude(jd),
        longitude: ecliptic_longitude(jd, ip, dp),
    }
}

/// Mean anomaly in radians from the anomalistic month.
fn anomaly_angle(jd: JulianDay) -> f64 {
    TAU * normalize(jd.days_since(ANOMALISTIC_EPOCH_JD) / ANOMALISTIC_MONTH_DAYS)
}

fn distance(ip: f64, dp: f64) -> f64 {
    MEAN_DISTANCE - 3.3 * dp.cos() - 0.6 * (2.0 * ip - dp).cos() - 0.5 * (2.0 * ip).cos()
}

fn ecliptic_latitude(jd: JulianDay) -> f64 {
    let np = TAU * normalize(jd.days_since(DRACONIC_EPOCH_JD) / DRACONIC_MONTH_DAYS);
    MAX_LATITUDE * np.sin()
}

/// Sidereal longitude plus the evection/variation terms.
///
/// The periodic terms stay within ±8.3°, so a single correction of one full
/// turn in either direction is enough to land in `[0, 360)`. Values near the
/// start of the sidereal cycle can go negative, so the correction applies on
/// both sides, not only above 360.
fn ecliptic_longitude(jd: JulianDay, ip: f64, dp: f64) -> f64 {
    let rp = normalize(jd.days_since(SIDEREAL_EPOCH_JD) / SIDEREAL_MONTH_DAYS);
    let mut longitude =
        360.0 * rp + 6.3 * dp.sin() + 1.3 * (2.0 * ip - dp).sin() + 0.7 * (2.0 * ip).sin();

    if longitude >= 360.0 {
        longitude -= 360.0;
    } else if longitude < 0.0 {
        longitude += 360.0;
    }
    longitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::phase::phase_fraction;

    fn geometry(jd: f64) -> OrbitalGeometry {
        let jd = JulianDay::from(jd);
        orbital_geometry(jd, phase_fraction(jd))
    }

    #[test]
    fn test_distance_bounds() {
        // 60.4 ± (3.3 + 0.6 + 0.5)
        for offset in 0..400 {
            let g = geometry(2_458_000.0 + offset as f64);
            assert!(g.distance >= 56.0 && g.distance <= 64.8, "{:?}", g);
        }
    }

    #[test]
    fn test_latitude_bounds() {
        for offset in 0..400 {
            let g = geometry(2_458_000.0 + offset as f64);
            assert!(g.latitude.abs() <= MAX_LATITUDE, "{:?}", g);
        }
    }

    #[test]
    fn test_longitude_always_in_range() {
        for offset in 0..20_000 {
            let g = geometry(2_440_000.0 + offset as f64);
            assert!((0.0..360.0).contains(&g.longitude), "{:?}", g);
        }
    }

    #[test]
    fn test_latitude_zero_at_node_epoch() {
        let g = geometry(DRACONIC_EPOCH_JD);
        assert!(g.latitude.abs() < 1e-9);
    }

    #[test]
    fn test_known_geometry_2020_02_25() {
        let g = geometry(2_458_905.0);
        assert!((g.distance - 63.7037).abs() < 1e-3);
        assert!((g.latitude - -5.0342).abs() < 1e-3);
        assert!((g.longitude - 356.1599).abs() < 1e-3);
    }
}
