//! Stop records and geographic coordinates.

use std::f64::consts::PI;
use std::fmt;

/// Mean Earth radius in meters, the unit of every distance in the catalogue.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in meters.
    ///
    /// Uses the spherical law of cosines. Identical points are exactly 0
    /// apart; the cosine is clamped so rounding noise near 0 or π never
    /// produces NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_map::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.0, 37.0);
    /// assert_eq!(a.distance_to(&a), 0.0);
    ///
    /// // One degree of latitude is roughly 111 km.
    /// let b = Coordinates::new(56.0, 37.0);
    /// let d = a.distance_to(&b);
    /// assert!((d - 111_195.0).abs() < 1.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let dr = PI / 180.0;
        let cos_angle = (self.lat * dr).sin() * (other.lat * dr).sin()
            + (self.lat * dr).cos()
                * (other.lat * dr).cos()
                * ((self.lng - other.lng).abs() * dr).cos();
        cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

/// Stable key of a stop inside its catalogue's arena.
///
/// Keys are handed out in insertion order and are never reused, so a key
/// taken while building a bus stays valid for the catalogue's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub(crate) usize);

/// A named bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    name: String,
    coordinates: Coordinates,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
