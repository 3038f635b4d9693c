// Copyright (c) 2024-2025 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

// extern crate we're testing, same as any other code would do.
extern crate great_circle_nav;

use angle_sc::is_within_tolerance;
use great_circle_nav::*;

/// The positions that the tests project out from, away from the poles.
const ORIGINS: [(f64, f64); 6] = [
    (0.0, 0.0),
    (42.0, 29.0),
    (39.0, -77.0),
    (-33.9, 151.2),
    (64.0, -22.0),
    (-70.0, 179.5),
];

#[test]
fn test_projection_round_trip() {
    for (lat, lon) in ORIGINS {
        for i in 0..24 {
            let course = 15.0 * f64::from(i);
            for distance in [1.0, 60.0, 600.0, 3_000.0] {
                let (lat2, lon2) = project_out(lat, lon, course, distance).unwrap();
                assert!(lat2.is_finite() && lon2.is_finite());
                assert!((-180.0..180.0).contains(&lon2));

                let result = distance_in_nm(lat, lon, lat2, lon2);
                assert!(is_within_tolerance(distance, result, 1e-3 * distance));

                let result = course_in_degrees(lat, lon, lat2, lon2);
                assert!(is_within_tolerance(
                    0.0,
                    angle_difference(course, result),
                    0.1
                ));
            }
        }
    }
}

#[test]
fn test_course_and_distance_round_trip() {
    for (lat1, lon1) in ORIGINS {
        for (lat2, lon2) in ORIGINS {
            let distance = distance_in_nm(lat1, lon1, lat2, lon2);
            if distance < 1.0 {
                continue;
            }
            let course = course_in_degrees(lat1, lon1, lat2, lon2);
            let (lat, lon) = project_out(lat1, lon1, course, distance).unwrap();
            assert!(is_within_tolerance(lat2, lat, 1e-6));
            assert!(is_within_tolerance(0.0, angle_difference(lon2, lon), 1e-6));
        }
    }
}

#[test]
fn test_distance_symmetry() {
    for (lat1, lon1) in ORIGINS {
        for (lat2, lon2) in ORIGINS {
            let ab = distance_in_nm(lat1, lon1, lat2, lon2);
            let ba = distance_in_nm(lat2, lon2, lat1, lon1);
            assert!(0.0 <= ab);
            assert!(is_within_tolerance(ab, ba, 1e-9 * ab.max(1.0)));
        }
    }
}

#[test]
fn test_track_distances_from_projection() {
    // Positions abeam points along a track are found at the expected
    // along track and cross track distances.
    let (start_lat, start_lon) = (42.0, 29.0);
    let (end_lat, end_lon) = (39.0, -77.0);
    let course = course_in_degrees(start_lat, start_lon, end_lat, end_lon);
    let length = distance_in_nm(start_lat, start_lon, end_lat, end_lon);

    for i in 1..10 {
        let along = length * f64::from(i) / 10.0;
        let (abeam_lat, abeam_lon) = project_out(start_lat, start_lon, course, along).unwrap();
        let track = course_in_degrees(abeam_lat, abeam_lon, end_lat, end_lon);

        for across in [-100.0, -10.0, 10.0, 100.0] {
            let (pos_lat, pos_lon) =
                project_out(abeam_lat, abeam_lon, track + 90.0, across).unwrap();
            let (atd, xtd) =
                calculate_atd_and_xtd(start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon)
                    .unwrap();

            // The projection and track functions use different radii,
            // so compare them to a fraction of a percent.
            assert!(is_within_tolerance(across, xtd, 2e-3 * libm::fabs(across)));
            assert!(is_within_tolerance(along, atd, 2e-3 * along));
        }
    }
}

#[test]
fn test_exact_cross_track_never_invalid() {
    for (start_lat, start_lon) in ORIGINS {
        for i in 0..36 {
            let course = 10.0 * f64::from(i);
            let (end_lat, end_lon) = project_out(start_lat, start_lon, course, 500.0).unwrap();
            for j in 0..36 {
                let bearing = course + 5.0 * f64::from(j);
                for distance in [0.5, 5.0, 50.0] {
                    let (pos_lat, pos_lon) =
                        project_out(start_lat, start_lon, bearing, distance).unwrap();
                    let xtd = cross_track_distance_nm(
                        start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon,
                    );
                    let result = along_track_distance_nm(
                        start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon, xtd,
                    );
                    assert!(result.is_ok(), "{result:?}");
                    assert!(result.unwrap().is_finite());
                }
            }
        }
    }
}

#[test]
fn test_lat_long_track_distances() {
    let istanbul = new_lat_long(Degrees(42.0), Degrees(29.0)).unwrap();
    let washington = new_lat_long(Degrees(39.0), Degrees(-77.0)).unwrap();
    let reyjavik = new_lat_long(Degrees(64.0), Degrees(-22.0)).unwrap();

    let xtd = reyjavik.cross_track_distance_to(&istanbul, &washington);
    let atd = reyjavik
        .along_track_distance_to(&istanbul, &washington, xtd)
        .unwrap();
    let (expected_atd, expected_xtd) =
        calculate_atd_and_xtd(42.0, 29.0, 39.0, -77.0, 64.0, -22.0).unwrap();
    assert_eq!(expected_xtd, xtd.0);
    assert_eq!(expected_atd, atd.0);

    // Reyjavik is to the right of the great circle from Istanbul to Washington
    assert!(0.0 < xtd.0);
    assert!(0.0 < atd.0 && atd.0 < istanbul.distance_to(&washington).0);
}
