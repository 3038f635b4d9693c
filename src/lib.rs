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

//! great-circle-nav
//!
//! A library for performing great circle navigation calculations on a
//! spherical model of the Earth.
//!
//! The shortest path between two points on the surface of a sphere is a
//! [great circle arc](https://en.wikipedia.org/wiki/Great_circle).
//! Modelling the Earth as a sphere rather than an ellipsoid introduces an
//! error that is small enough for many navigation, flight planning and
//! simulation applications and is far less computationally intensive.
//!
//! The library calculates:
//!
//! - the great circle distance between two positions, using the
//!   [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula);
//! - the initial course from one position to another;
//! - the position reached by travelling along a course for a distance;
//! - and the cross track and along track distances of a position relative
//!   to a great circle segment.
//!
//! See: [Calculate distance, bearing and more between Latitude/Longitude points](http://www.movable-type.co.uk/scripts/latlong.html).
//!
//! ## Design
//!
//! The core functions take and return plain `f64` values: latitudes,
//! longitudes and courses in degrees, distances in nautical miles.
//! One nautical mile is a minute of arc of a great circle.
//!
//! The inverse trigonometric functions are clamped to their valid domains,
//! so floating point error cannot produce a `NaN`.
//! Invalid inputs and inconsistent geometry are reported as [`Error`]s.
//!
//! The [`lat_long`] module provides the [`GreatCircle`] trait which performs
//! the same calculations on `LatLong`s using the unit types of the
//! following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`,
//!   `NauticalMiles` and `Feet` and perform conversions between them.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::suboptimal_flops)]

extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod angle;
pub mod error;
pub mod lat_long;
pub mod projection;
pub mod sphere;
pub mod track;

pub use angle_sc::Degrees;
pub use error::{Error, TrackGeometry};
pub use icao_units::non_si::{Feet, NauticalMiles};
pub use icao_units::si::Metres;
pub use lat_long::{angle_between, new_lat_long, GreatCircle, EAST, NORTH, SOUTH, WEST};
pub use projection::{project_out, LongitudeCase};
pub use track::{along_track_distance_nm, calculate_atd_and_xtd, cross_track_distance_nm};
pub use unit_sphere::LatLong;

use angle::{ahaversine, haversine, modulo, normalise_difference, to_degrees, to_radians};
use sphere::EARTH_RADIUS_NM;

/// Calculate the great circle distance between a pair of positions.
/// * `lat1`, `lon1` - the start position in degrees.
/// * `lat2`, `lon2` - the finish position in degrees.
///
/// returns the great circle distance in nautical miles.
///
/// # Examples
/// ```
/// use great_circle_nav::distance_in_nm;
/// use angle_sc::is_within_tolerance;
///
/// // http://www.movable-type.co.uk/scripts/latlong.html
/// let distance_km = 1569.0;
/// let result = distance_in_nm(0.0, 0.0, 10.0, 10.0);
/// assert!(is_within_tolerance(distance_km / 1.852, result, 1.0));
/// ```
#[must_use]
pub fn distance_in_nm(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (to_radians(lat1), to_radians(lon1));
    let (lat2, lon2) = (to_radians(lat2), to_radians(lon2));

    let lat_haversine = haversine(lat2 - lat1);
    let lon_haversine = libm::cos(lat1) * libm::cos(lat2) * haversine(lon2 - lon1);
    EARTH_RADIUS_NM * ahaversine(lat_haversine + lon_haversine)
}

/// Calculate the initial great circle course from one position to another.
/// * `lat1`, `lon1` - the start position in degrees.
/// * `lat2`, `lon2` - the finish position in degrees.
///
/// returns the course in degrees clockwise from true North, in the range
/// `(0°, 360°]`: due North is 360°.
///
/// # Examples
/// ```
/// use great_circle_nav::course_in_degrees;
/// use angle_sc::is_within_tolerance;
///
/// assert!(is_within_tolerance(360.0, course_in_degrees(0.0, 0.0, 10.0, 0.0), 1e-9));
/// assert!(is_within_tolerance(90.0, course_in_degrees(0.0, 0.0, 0.0, 10.0), 1e-9));
/// ```
#[must_use]
pub fn course_in_degrees(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const TWO_PI: f64 = 2.0 * core::f64::consts::PI;

    let (lat1, lon1) = (to_radians(lat1), to_radians(lon1));
    let (lat2, lon2) = (to_radians(lat2), to_radians(lon2));

    // y is the negative of the conventional formula, hence 2pi minus the angle
    let y = libm::sin(lon1 - lon2) * libm::cos(lat2);
    let x = libm::cos(lat1) * libm::sin(lat2)
        - libm::sin(lat1) * libm::cos(lat2) * libm::cos(lon2 - lon1);

    to_degrees(TWO_PI - modulo(libm::atan2(y, x), TWO_PI))
}

/// Calculate the signed difference between two angles.
/// * `angle` - the angle in degrees.
/// * `reference` - the reference angle in degrees.
///
/// returns `angle - reference` in the range `(-180°, 180°]`.
///
/// # Examples
/// ```
/// use great_circle_nav::angle_difference;
///
/// assert_eq!(10.0, angle_difference(5.0, 355.0));
/// assert_eq!(-10.0, angle_difference(355.0, 5.0));
/// ```
#[must_use]
pub fn angle_difference(angle: f64, reference: f64) -> f64 {
    normalise_difference(angle - reference)
}
