use std::fmt;

use thiserror::Error;

pub type Degrees = f64;

const LAT_DEG_MAX: Degrees = 90.0;
const LNG_DEG_MAX: Degrees = 180.0;

/// A validated geographical position in decimal degrees.
///
/// Both coordinates are always finite and within the bounds of the
/// WGS 84 system. A position at exactly (0, 0) is rejected, because it
/// is what unset or unparsed coordinates typically end up as.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: Degrees,
    lng: Degrees,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidPosition {
    #[error("Latitude {0} is not a valid coordinate")]
    Latitude(Degrees),
    #[error("Longitude {0} is not a valid coordinate")]
    Longitude(Degrees),
    #[error("Null island is not a plausible position")]
    NullIsland,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: Degrees, lng: Degrees) -> Result<Self, InvalidPosition> {
        if !lat.is_finite() || lat.abs() > LAT_DEG_MAX {
            return Err(InvalidPosition::Latitude(lat));
        }
        if !lng.is_finite() || lng.abs() > LNG_DEG_MAX {
            return Err(InvalidPosition::Longitude(lng));
        }
        if lat == 0.0 && lng == 0.0 {
            return Err(InvalidPosition::NullIsland);
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> Degrees {
        self.lat
    }

    pub const fn lng(self) -> Degrees {
        self.lng
    }

    pub const fn to_lat_lng_deg(self) -> (Degrees, Degrees) {
        (self.lat, self.lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Axis-aligned rectangle on the map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapBbox {
    sw: (Degrees, Degrees),
    ne: (Degrees, Degrees),
}

impl MapBbox {
    /// Create a box from its south-west corner and its extent in degrees.
    pub const fn from_origin_and_span(
        lat_min: Degrees,
        lng_min: Degrees,
        lat_span: Degrees,
        lng_span: Degrees,
    ) -> Self {
        Self {
            sw: (lat_min, lng_min),
            ne: (lat_min + lat_span, lng_min + lng_span),
        }
    }

    pub const fn south_west(&self) -> (Degrees, Degrees) {
        self.sw
    }

    pub const fn north_east(&self) -> (Degrees, Degrees) {
        self.ne
    }

    pub fn lat_span(&self) -> Degrees {
        self.ne.0 - self.sw.0
    }

    pub fn lng_span(&self) -> Degrees {
        self.ne.1 - self.sw.1
    }

    pub fn contains_point(&self, pos: MapPoint) -> bool {
        (self.sw.0..=self.ne.0).contains(&pos.lat) && (self.sw.1..=self.ne.1).contains(&pos.lng)
    }

    /// Point at the given relative offsets from the south-west corner.
    ///
    /// Offsets are clamped to `[0, 1]`, so the result is always inside
    /// the box. The corners are expected to be valid positions.
    pub fn interpolate(&self, lat_fraction: f64, lng_fraction: f64) -> MapPoint {
        let fraction = |x: f64| if x.is_finite() { x.clamp(0.0, 1.0) } else { 0.0 };
        MapPoint {
            lat: self.sw.0 + fraction(lat_fraction) * self.lat_span(),
            lng: self.sw.1 + fraction(lng_fraction) * self.lng_span(),
        }
    }
}
