use url::form_urlencoded;

use crate::model::LatLng;
use crate::EARTH_RADIUS_M;

/// Great-circle distance in meters. Clamped and finite for any input pair.
#[must_use]
pub fn haversine_distance(p1: LatLng, p2: LatLng) -> f64 {
    const EPSILON: f64 = 1e-10;

    if (p1.lat - p2.lat).abs() < EPSILON && (p1.lng - p2.lng).abs() < EPSILON {
        return 0.0;
    }

    let lat1_rad = p1.lat.to_radians();
    let lat2_rad = p2.lat.to_radians();
    let delta_lat = (p2.lat - p1.lat).to_radians();
    let delta_lng = (p2.lng - p1.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);

    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    let result = EARTH_RADIUS_M * c;
    if result.is_finite() {
        result
    } else {
        f64::MAX
    }
}

#[must_use]
pub fn format_distance(meters: f64) -> String {
    if !meters.is_finite() || meters < 0.0 {
        return "Unknown".to_string();
    }

    if meters < 1000.0 {
        format!("{meters:.0} m")
    } else if meters < 10_000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{:.0} km", meters / 1000.0)
    }
}

/// Google Maps directions link. Origin is included only when the device
/// position is known; without it the maps app falls back to its own fix.
#[must_use]
pub fn directions_url(destination: LatLng, origin: Option<LatLng>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("api", "1");
    query.append_pair(
        "destination",
        &format!("{},{}", destination.lat, destination.lng),
    );
    if let Some(origin) = origin {
        query.append_pair("origin", &format!("{},{}", origin.lat, origin.lng));
    }
    query.append_pair("travelmode", "driving");

    format!("https://www.google.com/maps/dir/?{}", query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GANGTOK: LatLng = LatLng::new(27.3314, 88.6138);
    const RUMTEK: LatLng = LatLng::new(27.2886, 88.5615);

    #[test]
    fn haversine_zero_for_identical_points() {
        assert_eq!(haversine_distance(GANGTOK, GANGTOK), 0.0);
    }

    #[test]
    fn haversine_gangtok_to_rumtek_is_about_7km() {
        let d = haversine_distance(GANGTOK, RUMTEK);
        assert!((6_000.0..9_000.0).contains(&d), "got {d}");
    }

    #[test]
    fn format_distance_buckets() {
        assert_eq!(format_distance(850.0), "850 m");
        assert_eq!(format_distance(3_240.0), "3.2 km");
        assert_eq!(format_distance(42_000.0), "42 km");
        assert_eq!(format_distance(f64::NAN), "Unknown");
        assert_eq!(format_distance(-5.0), "Unknown");
    }

    #[test]
    fn directions_url_with_origin() {
        let url = directions_url(RUMTEK, Some(GANGTOK));
        assert!(url.starts_with("https://www.google.com/maps/dir/?"));
        assert!(url.contains("destination=27.2886%2C88.5615"));
        assert!(url.contains("origin=27.3314%2C88.6138"));
        assert!(url.contains("travelmode=driving"));
    }

    #[test]
    fn directions_url_without_origin_omits_origin() {
        let url = directions_url(RUMTEK, None);
        assert!(!url.contains("origin="));
        assert!(url.contains("destination="));
    }

    proptest! {
        #[test]
        fn haversine_is_non_negative_and_finite(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
        ) {
            let d = haversine_distance(LatLng::new(lat1, lng1), LatLng::new(lat2, lng2));
            prop_assert!(d >= 0.0);
            prop_assert!(d.is_finite());
        }

        #[test]
        fn haversine_is_symmetric(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
        ) {
            let a = LatLng::new(lat1, lng1);
            let b = LatLng::new(lat2, lng2);
            let d1 = haversine_distance(a, b);
            let d2 = haversine_distance(b, a);
            prop_assert!((d1 - d2).abs() < 1e-6);
        }

        #[test]
        fn format_distance_never_panics(meters in proptest::num::f64::ANY) {
            let s = format_distance(meters);
            prop_assert!(!s.is_empty());
        }
    }
}
