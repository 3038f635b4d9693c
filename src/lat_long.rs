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

//! The `lat_long` module performs the great circle calculations on
//! `LatLong`s, with unit-tagged `Degrees` and `NauticalMiles`.
//!
//! # Examples
//! ```
//! use great_circle_nav::*;
//! use angle_sc::is_within_tolerance;
//!
//! let start = new_lat_long(Degrees(0.0), Degrees(0.0)).unwrap();
//! let end = new_lat_long(Degrees(0.0), Degrees(10.0)).unwrap();
//! let position = new_lat_long(Degrees(1.0), Degrees(0.5)).unwrap();
//!
//! let xtd = position.cross_track_distance_to(&start, &end);
//! assert!(is_within_tolerance(-60.006_866_736_406_62, xtd.0, 1e-9));
//!
//! let atd = position.along_track_distance_to(&start, &end, xtd).unwrap();
//! assert!(is_within_tolerance(30.003_434_152_859_15, atd.0, 1e-9));
//! ```

use crate::{
    along_track_distance_nm, angle_difference, course_in_degrees, cross_track_distance_nm,
    distance_in_nm, project_out, Degrees, Error, Feet, LatLong, Metres, NauticalMiles,
};

/// The course due North.
pub const NORTH: Degrees = Degrees(0.0);
/// The course due East.
pub const EAST: Degrees = Degrees(90.0);
/// The course due South.
pub const SOUTH: Degrees = Degrees(180.0);
/// The course due West.
pub const WEST: Degrees = Degrees(270.0);

/// Construct a `LatLong`, checking that the latitude is within (-90°, 90°)
/// and the longitude is within (-180°, 180°).
/// * `lat` - the latitude.
/// * `lon` - the longitude.
///
/// # Errors
///
/// `Error::LatitudeOutOfRange` or `Error::LongitudeOutOfRange`, the latitude
/// is checked first.
pub fn new_lat_long(lat: Degrees, lon: Degrees) -> Result<LatLong, Error> {
    if !(-90.0 < lat.0 && lat.0 < 90.0) {
        return Err(Error::LatitudeOutOfRange(lat.0));
    }
    if !(-180.0 < lon.0 && lon.0 < 180.0) {
        return Err(Error::LongitudeOutOfRange(lon.0));
    }
    Ok(LatLong::new(lat, lon))
}

/// The signed angle between two courses.
///
/// returns `one - two` in the range `(-180°, 180°]`.
#[must_use]
pub fn angle_between(one: Degrees, two: Degrees) -> Degrees {
    Degrees(angle_difference(one.0, two.0))
}

/// Great circle calculations between positions.
pub trait GreatCircle {
    /// The great circle distance to `other`.
    #[must_use]
    fn distance_to(&self, other: &Self) -> NauticalMiles;

    /// The great circle distance to `other` in `Metres`.
    #[must_use]
    fn distance_in_metres_to(&self, other: &Self) -> Metres {
        Metres::from(self.distance_to(other))
    }

    /// The great circle distance to `other` in `Feet`.
    #[must_use]
    fn distance_in_feet_to(&self, other: &Self) -> Feet {
        Feet::from(self.distance_in_metres_to(other))
    }

    /// The initial great circle course to `other`.
    #[must_use]
    fn course_to(&self, other: &Self) -> Degrees;

    /// Whether `other` is within (<=) `distance` of this position.
    #[must_use]
    fn is_within(&self, distance: NauticalMiles, other: &Self) -> bool {
        self.distance_to(other).0 <= distance.0
    }

    /// The position reached by travelling `distance` along `course`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `course` or `distance` is `NaN` or infinite.
    fn project_out(&self, course: Degrees, distance: NauticalMiles) -> Result<Self, Error>
    where
        Self: Sized;

    /// The cross track distance of this position from the great circle
    /// through `start` and `end`, negative to the left.
    #[must_use]
    fn cross_track_distance_to(&self, start: &Self, end: &Self) -> NauticalMiles;

    /// The along track distance of this position from `start` along the
    /// great circle through `start` and `end`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidGeometry` if `cross_track` is inconsistent with the
    /// positions.
    fn along_track_distance_to(
        &self,
        start: &Self,
        end: &Self,
        cross_track: NauticalMiles,
    ) -> Result<NauticalMiles, Error>;
}

impl GreatCircle for LatLong {
    fn distance_to(&self, other: &Self) -> NauticalMiles {
        NauticalMiles(distance_in_nm(
            self.lat().0,
            self.lon().0,
            other.lat().0,
            other.lon().0,
        ))
    }

    fn course_to(&self, other: &Self) -> Degrees {
        Degrees(course_in_degrees(
            self.lat().0,
            self.lon().0,
            other.lat().0,
            other.lon().0,
        ))
    }

    fn project_out(&self, course: Degrees, distance: NauticalMiles) -> Result<Self, Error> {
        let (lat, lon) = project_out(self.lat().0, self.lon().0, course.0, distance.0)?;
        Ok(Self::new(Degrees(lat), Degrees(lon)))
    }

    fn cross_track_distance_to(&self, start: &Self, end: &Self) -> NauticalMiles {
        NauticalMiles(cross_track_distance_nm(
            start.lat().0,
            start.lon().0,
            end.lat().0,
            end.lon().0,
            self.lat().0,
            self.lon().0,
        ))
    }

    fn along_track_distance_to(
        &self,
        start: &Self,
        end: &Self,
        cross_track: NauticalMiles,
    ) -> Result<NauticalMiles, Error> {
        along_track_distance_nm(
            start.lat().0,
            start.lon().0,
            end.lat().0,
            end.lon().0,
            self.lat().0,
            self.lon().0,
            cross_track.0,
        )
        .map(NauticalMiles)
    }
}
