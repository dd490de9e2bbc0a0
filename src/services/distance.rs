//! Distance from a coordinate to a fixed reference point.
//!
//! Uses the equirectangular approximation rather than haversine. Inputs and
//! the reference are in decimal degrees, the result is in kilometers.

use std::f64::consts::PI;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Tokyo Station longitude.
pub const TOKYO_STATION_LONGITUDE: f64 = 139.7673068;

/// Tokyo Station latitude.
pub const TOKYO_STATION_LATITUDE: f64 = 35.6809591;

/// A point distances are measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub longitude: f64,
    pub latitude: f64,
    pub radius_km: f64,
}

impl ReferencePoint {
    pub const TOKYO_STATION: ReferencePoint = ReferencePoint {
        longitude: TOKYO_STATION_LONGITUDE,
        latitude: TOKYO_STATION_LATITUDE,
        radius_km: EARTH_RADIUS_KM,
    };

    /// Unrounded distance in kilometers from `(x, y)` to this point.
    pub fn raw_distance(&self, x: f64, y: f64) -> f64 {
        let dy = y - self.latitude;
        let dx = (x - self.longitude) * (PI * dy / 360.0).cos();
        (PI * self.radius_km / 180.0) * (dx * dx + dy * dy).sqrt()
    }

    /// Distance in kilometers rounded to one decimal place.
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        round_to_tenth(self.raw_distance(x, y))
    }
}

impl Default for ReferencePoint {
    fn default() -> Self {
        Self::TOKYO_STATION
    }
}

/// Distance in kilometers from longitude `x`, latitude `y` to Tokyo Station.
pub fn distance_to_reference(x: f64, y: f64) -> f64 {
    ReferencePoint::TOKYO_STATION.distance(x, y)
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const X_REF: f64 = TOKYO_STATION_LONGITUDE;
    const Y_REF: f64 = TOKYO_STATION_LATITUDE;

    fn has_one_decimal(value: f64) -> bool {
        let scaled = value * 10.0;
        (scaled - scaled.round()).abs() < 1e-9
    }

    #[test]
    fn test_reference_point_is_zero() {
        assert_eq!(distance_to_reference(X_REF, Y_REF), 0.0);
    }

    #[test]
    fn test_reference_latitude_is_not_longitude() {
        assert_ne!(TOKYO_STATION_LATITUDE, TOKYO_STATION_LONGITUDE);
        assert!((35.0..36.0).contains(&ReferencePoint::TOKYO_STATION.latitude));
    }

    #[test]
    fn test_symmetric_in_longitude_delta() {
        for d in [0.001, 0.05, 0.5, 1.0, 3.7] {
            assert_eq!(
                distance_to_reference(X_REF + d, Y_REF),
                distance_to_reference(X_REF - d, Y_REF)
            );
        }
    }

    #[test]
    fn test_symmetric_in_latitude_delta() {
        for d in [0.001, 0.05, 0.5, 1.0, 3.7] {
            let p = ReferencePoint::TOKYO_STATION;
            assert!((p.raw_distance(X_REF, Y_REF + d) - p.raw_distance(X_REF, Y_REF - d)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // pi * 6371 / 180
        assert_eq!(distance_to_reference(X_REF, Y_REF + 1.0), 111.2);
        assert_eq!(distance_to_reference(X_REF + 1.0, Y_REF), 111.2);
    }

    #[test]
    fn test_nagatacho() {
        let raw = ReferencePoint::TOKYO_STATION.raw_distance(139.7454, 35.6938);
        assert!((raw - 2.8236).abs() < 1e-3, "raw distance was {raw}");
        assert_eq!(distance_to_reference(139.7454, 35.6938), 2.8);
    }

    #[test]
    fn test_far_points() {
        // Osaka Station
        assert_eq!(distance_to_reference(135.5023, 34.6937), 486.8);
        // Sapporo
        assert_eq!(distance_to_reference(141.3544, 43.0621), 839.4);
    }

    #[test]
    fn test_always_one_decimal_and_non_negative() {
        let points = [
            (139.7454, 35.6938),
            (135.5023, 34.6937),
            (141.3544, 43.0621),
            (127.6809, 26.2124),
            (139.70001, 35.60009),
        ];
        for (x, y) in points {
            let d = distance_to_reference(x, y);
            assert!(d >= 0.0);
            assert!(has_one_decimal(d), "{d} has more than one decimal");
        }
    }

    #[test]
    fn test_round_to_tenth_half_away_from_zero() {
        assert_eq!(round_to_tenth(2.25), 2.3);
        assert_eq!(round_to_tenth(2.75), 2.8);
        assert_eq!(round_to_tenth(-2.25), -2.3);
        assert_eq!(round_to_tenth(2.84), 2.8);
        assert_eq!(round_to_tenth(0.04), 0.0);
        assert_eq!(round_to_tenth(0.05), 0.1);
    }
}
