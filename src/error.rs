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

//! The error module contains the errors reported by the library.

use thiserror::Error;

/// The start, end and position of an along track query together with the
/// cross track distance supplied for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    /// The latitude of the start of the segment in degrees.
    pub start_lat: f64,
    /// The longitude of the start of the segment in degrees.
    pub start_lon: f64,
    /// The latitude of the end of the segment in degrees.
    pub end_lat: f64,
    /// The longitude of the end of the segment in degrees.
    pub end_lon: f64,
    /// The latitude of the position in degrees.
    pub pos_lat: f64,
    /// The longitude of the position in degrees.
    pub pos_lon: f64,
    /// The cross track distance in nautical miles.
    pub cross_track_nm: f64,
}

impl core::fmt::Display for TrackGeometry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Start({}, {}), End({}, {}), Position({}, {}), CTD({})",
            self.start_lat,
            self.start_lon,
            self.end_lat,
            self.end_lon,
            self.pos_lat,
            self.pos_lon,
            self.cross_track_nm
        )
    }
}

/// The errors reported by the great circle calculations.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// A course or distance argument was `NaN` or infinite.
    #[error("{parameter} must be a finite number")]
    InvalidInput { parameter: &'static str },

    /// The cross track distance is inconsistent with the start, end and
    /// position of an along track query.
    #[error("cannot compute acos({ratio}), inputs were: {geometry}")]
    InvalidGeometry {
        ratio: f64,
        geometry: TrackGeometry,
    },

    #[error("latitude is out of range (-90, 90): {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude is out of range (-180, 180): {0}")]
    LongitudeOutOfRange(f64),
}
