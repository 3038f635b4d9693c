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

//! The projection module contains the "direct" great circle calculation:
//! the position reached by travelling along a course for a distance.

use crate::angle::{acos_real, asin_real, modulo, to_degrees, to_radians};
use crate::sphere::{EARTH_RADIUS_NM, POLE_PROXIMITY_NM};
use crate::Error;

/// The geometry of a projected position, which determines how its
/// longitude is calculated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongitudeCase {
    /// The projected position is so close to a pole that its longitude is
    /// undefined: the start longitude is kept.
    Pole,
    /// The longitude difference is less than 45°: it is calculated from its
    /// sine, which is accurate for small differences.
    NearField,
    /// The longitude difference is 45° or more: it is calculated from its
    /// cosine and signed by the hemisphere that the course points into.
    FarField,
}

impl LongitudeCase {
    /// Classify a projection.
    /// * `lat_proj` - the projected latitude in radians.
    /// * `delta_lon` - the magnitude of the longitude difference in radians.
    #[must_use]
    pub fn classify(lat_proj: f64, delta_lon: f64) -> Self {
        if EARTH_RADIUS_NM * libm::fabs(libm::cos(lat_proj)) < POLE_PROXIMITY_NM {
            Self::Pole
        } else if libm::fabs(delta_lon) < core::f64::consts::FRAC_PI_4 {
            Self::NearField
        } else {
            Self::FarField
        }
    }
}

/// Calculate the position reached by travelling from a start position along
/// a great circle.
/// * `lat`, `lon` - the start position in degrees.
/// * `course` - the initial course in degrees.  
///   A negative course departs on its reciprocal: `-90°` travels East.
/// * `distance_nm` - the distance to travel in nautical miles.  
///   A negative distance travels the reciprocal of `course`.
///
/// returns the latitude and longitude of the projected position in degrees,
/// the longitude in the range `[-180°, 180°)`.
/// # Errors
///
/// `Error::InvalidInput` if `course` or `distance_nm` is `NaN` or infinite.
///
/// # Examples
/// ```
/// use great_circle_nav::*;
/// use angle_sc::is_within_tolerance;
///
/// let course = course_in_degrees(0.0, 0.0, 10.0, 10.0);
/// let distance = distance_in_nm(0.0, 0.0, 10.0, 10.0);
/// let (lat, lon) = project_out(0.0, 0.0, course, distance).unwrap();
/// assert!(is_within_tolerance(10.0, lat, 1e-9));
/// assert!(is_within_tolerance(10.0, lon, 1e-9));
/// ```
pub fn project_out(
    lat: f64,
    lon: f64,
    course: f64,
    distance_nm: f64,
) -> Result<(f64, f64), Error> {
    if !course.is_finite() {
        log::warn!("project_out: course is {course}");
        return Err(Error::InvalidInput {
            parameter: "course",
        });
    }
    if !distance_nm.is_finite() {
        log::warn!("project_out: distance is {distance_nm}");
        return Err(Error::InvalidInput {
            parameter: "distance",
        });
    }

    let lat_rad = to_radians(lat);
    let lon_rad = to_radians(lon);

    // a negative bearing departs on its reciprocal
    let course = if course < 0.0 {
        modulo(course + 180.0, 360.0)
    } else {
        modulo(course, 360.0)
    };
    let course = if distance_nm < 0.0 {
        modulo(course + 180.0, 360.0)
    } else {
        course
    };
    let course = to_radians(course);
    let dist = libm::fabs(distance_nm) / EARTH_RADIUS_NM;

    let (sin_lat, cos_lat) = (libm::sin(lat_rad), libm::cos(lat_rad));
    let (sin_dist, cos_dist) = (libm::sin(dist), libm::cos(dist));

    let lat_proj = asin_real(cos_dist * sin_lat + sin_dist * cos_lat * libm::cos(course));
    let cos_lat_proj = libm::cos(lat_proj);
    let delta_lon =
        acos_real((cos_dist - libm::sin(lat_proj) * sin_lat) / (cos_lat_proj * cos_lat));

    let lon_proj = match LongitudeCase::classify(lat_proj, delta_lon) {
        LongitudeCase::Pole => {
            log::debug!("project_out: ({lat}, {lon}) projected onto a pole");
            lon_rad
        }
        LongitudeCase::NearField => {
            lon_rad + asin_real(sin_dist * libm::sin(course) / cos_lat_proj)
        }
        LongitudeCase::FarField => {
            let sign = if course < core::f64::consts::PI {
                1.0
            } else {
                -1.0
            };
            lon_rad + sign * delta_lon
        }
    };

    Ok((
        to_degrees(lat_proj),
        modulo(to_degrees(lon_proj) + 180.0, 360.0) - 180.0,
    ))
}
