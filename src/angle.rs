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

//! The angle module contains the scalar helper functions that the great
//! circle calculations are built upon.
//!
//! Angles are plain `f64` values in degrees or radians, distances are plain
//! `f64` values in nautical miles.  
//! Every inverse trigonometric function used by the library is clamped to
//! its valid domain here, so that floating point overshoot such as
//! `1.000_000_000_000_000_2` cannot produce a `NaN`.

/// Multiply an angle in degrees by this to obtain the angle in radians.
pub const DEGREES_TO_RADIANS: f64 = 0.017_453_292_519_943_295;

/// Multiply an angle in radians by this to obtain the angle in degrees.
pub const RADIANS_TO_DEGREES: f64 = 57.295_779_513_082_32;

/// The number of nautical miles in a radian of great circle arc.
const NM_PER_RADIAN: f64 = (180.0 * 60.0) / core::f64::consts::PI;

/// Convert an angle in degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    DEGREES_TO_RADIANS * degrees
}

/// Convert an angle in radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    RADIANS_TO_DEGREES * radians
}

/// A modulo with a non-negative result.
/// * `x` - the dividend.
/// * `y` - the divisor, must be positive.
///
/// returns `x` modulo `y` in the range `[0, y)`.
/// # Examples
/// ```
/// use great_circle_nav::angle::modulo;
///
/// assert_eq!(270.0, modulo(-90.0, 360.0));
/// assert_eq!(10.0, modulo(370.0, 360.0));
/// ```
#[must_use]
pub fn modulo(x: f64, y: f64) -> f64 {
    let z = libm::remainder(x, y);
    if z < 0.0 {
        z + y
    } else {
        z
    }
}

/// Normalise an angular difference to the range `(-180°, 180°]`.
/// * `delta` - the angular difference in degrees.
///
/// returns the signed difference, positive clockwise.
#[must_use]
pub fn normalise_difference(delta: f64) -> f64 {
    let dz = libm::remainder(delta, 360.0);
    if dz <= -180.0 {
        dz + 360.0
    } else {
        dz
    }
}

/// The inverse sine of `x` clamped to the range `[-1, 1]`.
#[must_use]
pub fn asin_real(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

/// The inverse cosine of `x` clamped to the range `[-1, 1]`.
#[must_use]
pub fn acos_real(x: f64) -> f64 {
    libm::acos(x.clamp(-1.0, 1.0))
}

/// The haversine of an angle in radians: `(1 - cos x) / 2`.
#[must_use]
pub fn haversine(x: f64) -> f64 {
    (1.0 - libm::cos(x)) / 2.0
}

/// The inverse haversine, the angle in radians whose haversine is `x`.
#[must_use]
pub fn ahaversine(x: f64) -> f64 {
    2.0 * asin_real(libm::sqrt(x.max(0.0)))
}

/// Convert a distance in nautical miles to great circle radians.
#[must_use]
pub fn distance_in_radians(nautical_miles: f64) -> f64 {
    nautical_miles / NM_PER_RADIAN
}

/// Convert great circle radians to a distance in nautical miles.
#[must_use]
pub fn radians_to_nm(radians: f64) -> f64 {
    NM_PER_RADIAN * radians
}
