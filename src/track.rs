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

//! The track module contains functions for calculating the cross track and
//! along track distances of a position relative to the great circle through
//! the start and end of a route segment.
//!
//! The position abeam, i.e. the foot of the perpendicular from the position
//! to the great circle, is *not* constrained to lie between the start and
//! end of the segment.

use crate::angle::{
    acos_real, asin_real, distance_in_radians, normalise_difference, radians_to_nm, to_radians,
};
use crate::error::TrackGeometry;
use crate::sphere::TOLERANCE;
use crate::{course_in_degrees, distance_in_nm, Error};

/// Calculate the cross track distance of a position from the great circle
/// defined by a start and end position.
/// * `start_lat`, `start_lon` - the start of the segment in degrees.
/// * `end_lat`, `end_lon` - the end of the segment in degrees.
/// * `pos_lat`, `pos_lon` - the position in degrees.
///
/// returns the cross track distance in nautical miles: negative if the
/// position is to the left of the great circle, positive if it is to the right.
/// # Examples
/// ```
/// use great_circle_nav::cross_track_distance_nm;
/// use angle_sc::is_within_tolerance;
///
/// let xtd = cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 0.5);
/// assert!(is_within_tolerance(-60.006_866_736_406_62, xtd, 1e-9));
/// ```
#[must_use]
pub fn cross_track_distance_nm(
    start_lat: f64,
    start_lon: f64,
    end_lat: f64,
    end_lon: f64,
    pos_lat: f64,
    pos_lon: f64,
) -> f64 {
    let distance = distance_in_radians(distance_in_nm(start_lat, start_lon, pos_lat, pos_lon));
    let angle = to_radians(course_in_degrees(start_lat, start_lon, pos_lat, pos_lon))
        - to_radians(course_in_degrees(start_lat, start_lon, end_lat, end_lon));

    radians_to_nm(asin_real(libm::sin(distance) * libm::sin(angle)))
}

/// Calculate the along track distance of a position from the start of a
/// great circle segment, given its cross track distance.
/// * `start_lat`, `start_lon` - the start of the segment in degrees.
/// * `end_lat`, `end_lon` - the end of the segment in degrees.
/// * `pos_lat`, `pos_lon` - the position in degrees.
/// * `cross_track_nm` - the cross track distance of the position, see
///   [`cross_track_distance_nm`].
///
/// returns the along track distance in nautical miles: negative if the
/// position is abeam a point before the start of the segment.
/// # Errors
///
/// `Error::InvalidGeometry` if `cross_track_nm` is not consistent with the
/// start, end and position.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::similar_names)]
pub fn along_track_distance_nm(
    start_lat: f64,
    start_lon: f64,
    end_lat: f64,
    end_lon: f64,
    pos_lat: f64,
    pos_lon: f64,
    cross_track_nm: f64,
) -> Result<f64, Error> {
    let relative_angle = normalise_difference(
        course_in_degrees(start_lat, start_lon, end_lat, end_lon)
            - course_in_degrees(start_lat, start_lon, pos_lat, pos_lon),
    );
    let sign = if libm::fabs(relative_angle) > 90.0 {
        -1.0
    } else {
        1.0
    };

    let pos_distance = distance_in_nm(start_lat, start_lon, pos_lat, pos_lon);
    let cos_ptd = libm::cos(distance_in_radians(pos_distance));
    let cos_xtd = libm::cos(distance_in_radians(cross_track_nm));

    // numeric error can take the ratio just outside the range [-1, 1]
    let ratio = cos_ptd / cos_xtd;
    if ratio.is_nan() || !(-1.0 - TOLERANCE..=1.0 + TOLERANCE).contains(&ratio) {
        let geometry = TrackGeometry {
            start_lat,
            start_lon,
            end_lat,
            end_lon,
            pos_lat,
            pos_lon,
            cross_track_nm,
        };
        log::warn!(
            "along_track_distance_nm: cannot compute acos({ratio}), inputs were: {geometry}"
        );
        return Err(Error::InvalidGeometry { ratio, geometry });
    }
    if 1.0 < libm::fabs(ratio) {
        log::trace!("along_track_distance_nm: clamping acos ratio {ratio}");
    }

    Ok(sign * radians_to_nm(acos_real(ratio)))
}

/// Calculate the along track and cross track distances of a position
/// relative to a great circle segment.
/// * `start_lat`, `start_lon` - the start of the segment in degrees.
/// * `end_lat`, `end_lon` - the end of the segment in degrees.
/// * `pos_lat`, `pos_lon` - the position in degrees.
///
/// returns the along track and cross track distances in nautical miles.
/// # Errors
///
/// `Error::InvalidGeometry` if the along track distance cannot be calculated.
///
/// # Examples
/// ```
/// use great_circle_nav::calculate_atd_and_xtd;
/// use angle_sc::is_within_tolerance;
///
/// let (atd, xtd) = calculate_atd_and_xtd(0.0, 0.0, 0.0, 10.0, 1.0, 0.5).unwrap();
/// assert!(is_within_tolerance(30.003_434_152_859_15, atd, 1e-9));
/// assert!(is_within_tolerance(-60.006_866_736_406_62, xtd, 1e-9));
/// ```
pub fn calculate_atd_and_xtd(
    start_lat: f64,
    start_lon: f64,
    end_lat: f64,
    end_lon: f64,
    pos_lat: f64,
    pos_lon: f64,
) -> Result<(f64, f64), Error> {
    let xtd = cross_track_distance_nm(start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon);
    let atd = along_track_distance_nm(
        start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon, xtd,
    )?;
    Ok((atd, xtd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::modulo;
    use crate::project_out;
    use angle_sc::is_within_tolerance;

    #[test]
    fn test_cross_track_distance_left() {
        let result = cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 0.5);
        assert!(is_within_tolerance(-60.006_866_736_406_62, result, 1e-4));
    }

    #[test]
    fn test_cross_track_distance_right() {
        let result = cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, -1.0, 0.5);
        assert!(is_within_tolerance(60.006_866_736_406_62, result, 1e-4));
    }

    #[test]
    fn test_cross_track_distance_on_track() {
        assert_eq!(0.0, cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 0.0, 0.0));
        assert!(is_within_tolerance(
            0.0,
            cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 0.0, 5.0),
            1e-9
        ));
        // beyond the end of the segment
        assert!(is_within_tolerance(
            0.0,
            cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 0.0, 20.0),
            1e-9
        ));
    }

    #[test]
    fn test_cross_track_distance_outside_segment() {
        // the foot of the perpendicular lies beyond the end of the segment
        let xtd = cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 20.0);
        assert!(xtd < -59.0);
        let atd = along_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 20.0, xtd).unwrap();
        assert!(atd > 600.0);
    }

    #[test]
    fn test_along_track_distance_positive() {
        let xtd = cross_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 0.5);
        let result = along_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 0.5, xtd).unwrap();
        assert!(is_within_tolerance(30.003_434_152_859_15, result, 1e-4));
    }

    #[test]
    fn test_along_track_distance_negative() {
        let (atd, xtd) = calculate_atd_and_xtd(0.0, 0.0, 0.0, 10.0, 1.0, -0.5).unwrap();
        assert!(is_within_tolerance(-30.003_434_152_859_15, atd, 1e-4));
        assert!(is_within_tolerance(-60.006_866_736_406_62, xtd, 1e-4));
    }

    #[test]
    fn test_along_track_distance_invalid_geometry() {
        let result = along_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 0.5, -120.0);
        match result {
            Err(Error::InvalidGeometry { ratio, geometry }) => {
                assert!(1.0 + TOLERANCE < ratio);
                assert_eq!(-120.0, geometry.cross_track_nm);
                assert_eq!(0.5, geometry.pos_lon);
                assert_eq!(10.0, geometry.end_lon);
            }
            _ => panic!("expected InvalidGeometry, got {result:?}"),
        }

        let result = along_track_distance_nm(0.0, 0.0, 0.0, 10.0, 1.0, 0.5, f64::NAN);
        assert!(matches!(result, Err(Error::InvalidGeometry { .. })));
    }

    #[test]
    fn test_along_track_distance_ratio_clamp() {
        // The ratio of this geometry has been seen to be 1.0000000000000002
        let (start_lat, start_lon) = (46.254_065_587_222_385, 69.437_764_198_163_05);
        let (end_lat, end_lon) = (44.982_698_532_931_266, 68.864_980_814_167_9);
        let (pos_lat, pos_lon) = (46.079_523_009_866_86, 70.214_527_435_463_88);
        let xtd = cross_track_distance_nm(start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon);
        assert!(is_within_tolerance(-33.937_516_038_844_336, xtd, 1e-6));

        let atd = along_track_distance_nm(
            start_lat, start_lon, end_lat, end_lon, pos_lat, pos_lon, xtd,
        )
        .unwrap();
        assert!(is_within_tolerance(0.0, atd, 1e-3));
    }

    #[test]
    fn test_along_track_distance_perpendicular() {
        // Positions perpendicular to the start of a segment: the ratio is close to 1
        for i in 0..360 {
            let course = f64::from(i);
            let (end_lat, end_lon) = project_out(20.0, 30.0, course, 300.0).unwrap();
            for offset in [-90.0, 90.0] {
                for distance in [0.1, 1.0, 10.0, 45.0] {
                    let (pos_lat, pos_lon) =
                        project_out(20.0, 30.0, modulo(course + offset, 360.0), distance)
                            .unwrap();
                    let (atd, xtd) =
                        calculate_atd_and_xtd(20.0, 30.0, end_lat, end_lon, pos_lat, pos_lon)
                            .unwrap();
                    assert!(libm::fabs(atd) < 1e-3);
                    assert!(is_within_tolerance(
                        1.0,
                        libm::fabs(xtd) / distance,
                        1e-3
                    ));
                }
            }
        }
    }
}
