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

//! The sphere module contains the parameters of the spherical Earth model.
//!
//! One nautical mile is one minute of arc of a great circle, so angular
//! distances convert to nautical miles independently of `EARTH_RADIUS_NM`.

use crate::Metres;

/// The mean radius of the spherical Earth in nautical miles.
pub const EARTH_RADIUS_NM: f64 = 3_438.140_215_790_22;

/// The number of metres in an international nautical mile.
pub const METRES_PER_NM: f64 = 1_852.0;

/// The number of metres in an international foot.
pub const METRES_PER_FOOT: f64 = 0.3048;

/// The mean radius of the spherical Earth in metres.
pub const EARTH_RADIUS: Metres = Metres(EARTH_RADIUS_NM * METRES_PER_NM);

/// The distance from a pole, in nautical miles, within which a projected
/// longitude is undefined.
pub const POLE_PROXIMITY_NM: f64 = 0.01;

/// The numeric tolerance of the along track `acos` ratio.  
/// Ratios within this tolerance outside of the range `[-1, 1]` are clamped.
pub const TOLERANCE: f64 = 1e-10;
